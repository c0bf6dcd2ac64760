use crate::types::assessment::Assessment;

pub fn to_json(assessment: &Assessment) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::evaluate;
    use crate::types::measurement::{Measurement, Sex};

    #[test]
    fn json_report_contains_category_label() {
        let measurement = Measurement::new(70.0, 1.70).expect("valid measurement");
        let rendered = to_json(&evaluate(&measurement, Sex::Female)).expect("json should serialize");
        assert!(rendered.contains("\"category\": \"Peso normal\""));
        assert!(rendered.contains("\"sex\": \"female\""));
    }

    #[test]
    fn json_report_uses_null_for_missing_ideal_weight() {
        let measurement = Measurement::new(70.0, 1.70).expect("valid measurement");
        let rendered =
            to_json(&evaluate(&measurement, Sex::Unrecognized)).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert!(value["ideal_weight_kg"].is_null());
        assert_eq!(value["sex"], "unrecognized");
    }
}
