use crate::types::measurement::Sex;

const FEMALE_FACTOR: f64 = 0.95;
const MALE_FACTOR: f64 = 1.05;

pub fn sex_factor(sex: Sex) -> f64 {
    match sex {
        Sex::Female => FEMALE_FACTOR,
        Sex::Male => MALE_FACTOR,
        Sex::Unrecognized => 1.0,
    }
}

/// Scales a BMI by the fixed sex multiplier. Unrecognized sex leaves it unchanged.
pub fn adjust_bmi_for_sex(bmi: f64, sex: Sex) -> f64 {
    bmi * sex_factor(sex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn female_lowers_bmi_by_five_percent() {
        for bmi in [0.0, 18.5, 24.22, 41.7] {
            assert_eq!(adjust_bmi_for_sex(bmi, Sex::from_text("Feminino")), bmi * 0.95);
            assert_eq!(adjust_bmi_for_sex(bmi, Sex::from_text("feminino")), bmi * 0.95);
        }
    }

    #[test]
    fn male_raises_bmi_by_five_percent() {
        for bmi in [0.0, 18.5, 24.22, 41.7] {
            assert_eq!(adjust_bmi_for_sex(bmi, Sex::from_text("Masculino")), bmi * 1.05);
        }
    }

    #[test]
    fn padded_token_is_not_adjusted() {
        assert_eq!(adjust_bmi_for_sex(20.0, Sex::from_text(" feminino")), 20.0);
        assert_eq!(adjust_bmi_for_sex(20.0, Sex::from_text("masculino ")), 20.0);
    }

    #[test]
    fn unrecognized_sex_is_identity() {
        for bmi in [0.0, 18.5, 24.22, 41.7] {
            assert_eq!(adjust_bmi_for_sex(bmi, Sex::from_text("other")), bmi);
        }
    }
}
