use crate::calc::BmiCategory;
use crate::types::measurement::Sex;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub weight_kg: f64,
    pub height_m: f64,
    pub sex: Sex,
    pub bmi: f64,
    pub adjusted_bmi: f64,
    pub category: BmiCategory,
    pub ideal_weight_kg: Option<f64>,
}

impl Assessment {
    pub fn ideal_weight_available(&self) -> bool {
        self.ideal_weight_kg.is_some()
    }
}
