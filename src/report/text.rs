use super::ideal_weight_line;
use crate::types::assessment::Assessment;

pub fn to_text(assessment: &Assessment, precision: usize) -> String {
    format!(
        "Seu IMC ajustado é: {:.precision$}\nClassificação: {}\n{}",
        assessment.adjusted_bmi,
        assessment.category.label(),
        ideal_weight_line(assessment.ideal_weight_kg, precision)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::evaluate;
    use crate::types::measurement::{Measurement, Sex};

    #[test]
    fn text_report_for_default_form_values() {
        let measurement = Measurement::new(70.0, 1.70).expect("valid measurement");
        let rendered = to_text(&evaluate(&measurement, Sex::Male), 2);
        assert_eq!(
            rendered,
            "Seu IMC ajustado é: 25.43\nClassificação: Sobrepeso\nSeu peso ideal é: 66.02 kg"
        );
    }

    #[test]
    fn text_report_without_ideal_weight() {
        let measurement = Measurement::new(70.0, 1.70).expect("valid measurement");
        let rendered = to_text(&evaluate(&measurement, Sex::Unrecognized), 2);
        assert!(rendered.contains("Seu IMC ajustado é: 24.22"));
        assert!(rendered.ends_with("Sexo inválido. Não foi possível calcular o peso ideal."));
    }
}
