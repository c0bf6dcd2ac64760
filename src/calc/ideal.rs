use crate::types::measurement::Sex;

const REFERENCE_HEIGHT_CM: f64 = 152.4;
const SLOPE_KG_PER_CM: f64 = 0.91;
const MALE_BASE_KG: f64 = 50.0;
const FEMALE_BASE_KG: f64 = 45.5;

/// Devine-style ideal weight in kilograms for a height in meters.
///
/// Returns `None` for an unrecognized sex; absence is distinct from `Some(0.0)`.
pub fn compute_ideal_weight(height_m: f64, sex: Sex) -> Option<f64> {
    let base = match sex {
        Sex::Male => MALE_BASE_KG,
        Sex::Female => FEMALE_BASE_KG,
        Sex::Unrecognized => return None,
    };
    Some(base + SLOPE_KG_PER_CM * ((height_m * 100.0) - REFERENCE_HEIGHT_CM))
}
