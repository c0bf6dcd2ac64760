/// Raw body mass index: weight (kg) divided by height (m) squared.
///
/// Callers validate both inputs as strictly positive before getting here.
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / height_m.powi(2)
}
