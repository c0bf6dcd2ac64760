use super::ideal_weight_line;
use crate::types::assessment::Assessment;

pub fn to_markdown(assessment: &Assessment, precision: usize) -> String {
    let mut output = String::new();
    output.push_str("# Calculadora de Índice de Massa Corporal (IMC)\n\n");
    output.push_str("## Dados\n\n");
    output.push_str(&format!(
        "- peso: {} kg\n- altura: {} m\n- sexo: {}\n\n",
        assessment.weight_kg, assessment.height_m, assessment.sex
    ));

    output.push_str("## Resultado\n\n");
    output.push_str(&format!(
        "- IMC: {:.precision$}\n- IMC ajustado: **{:.precision$}**\n- Classificação: **{}** ({})\n",
        assessment.bmi,
        assessment.adjusted_bmi,
        assessment.category.label(),
        assessment.category.english()
    ));
    output.push_str(&format!(
        "- {}\n",
        ideal_weight_line(assessment.ideal_weight_kg, precision)
    ));

    output
}
