pub mod adjust;
pub mod bmi;
pub mod classify;
pub mod ideal;

use crate::types::assessment::Assessment;
use crate::types::measurement::{Measurement, Sex};

pub use adjust::adjust_bmi_for_sex;
pub use bmi::compute_bmi;
pub use classify::{classify_bmi, BmiCategory};
pub use ideal::compute_ideal_weight;

/// Runs the full chain for one validated measurement: BMI, sex adjustment,
/// classification of the adjusted value, and the independent ideal weight.
pub fn evaluate(measurement: &Measurement, sex: Sex) -> Assessment {
    let bmi = compute_bmi(measurement.weight_kg, measurement.height_m);
    let adjusted_bmi = adjust_bmi_for_sex(bmi, sex);
    let category = classify_bmi(adjusted_bmi);
    let ideal_weight_kg = compute_ideal_weight(measurement.height_m, sex);

    tracing::debug!(bmi, adjusted_bmi, %sex, "computed body mass index");
    if !sex.is_recognized() {
        tracing::warn!("unrecognized sex; bmi left unadjusted and ideal weight unavailable");
    }

    Assessment {
        weight_kg: measurement.weight_kg,
        height_m: measurement.height_m,
        sex,
        bmi,
        adjusted_bmi,
        category,
        ideal_weight_kg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_default_male_scenario() {
        let measurement = Measurement::new(70.0, 1.70).expect("valid measurement");
        let assessment = evaluate(&measurement, Sex::from_text("Masculino"));

        assert!((assessment.adjusted_bmi - 25.4325).abs() < 1e-3);
        assert_eq!(assessment.category, BmiCategory::Overweight);
        let ideal = assessment.ideal_weight_kg.expect("ideal weight for male");
        assert!((ideal - 66.016).abs() < 1e-6);
    }

    #[test]
    fn evaluate_female_scenario() {
        let measurement = Measurement::new(70.0, 1.70).expect("valid measurement");
        let assessment = evaluate(&measurement, Sex::Female);

        assert!((assessment.adjusted_bmi - 23.0104).abs() < 1e-3);
        assert_eq!(assessment.category, BmiCategory::Normal);
        assert!(assessment.ideal_weight_kg.is_some());
    }

    #[test]
    fn evaluate_unrecognized_sex_keeps_raw_bmi() {
        let measurement = Measurement::new(70.0, 1.70).expect("valid measurement");
        let assessment = evaluate(&measurement, Sex::from_text("outro"));

        assert_eq!(assessment.adjusted_bmi, assessment.bmi);
        assert_eq!(assessment.category, BmiCategory::Normal);
        assert_eq!(assessment.ideal_weight_kg, None);
    }
}
