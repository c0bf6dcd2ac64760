use crate::error::{ImcError, Result};
use serde::Serialize;
use std::fmt;

const MALE_TOKEN: &str = "masculino";
const FEMALE_TOKEN: &str = "feminino";

/// Sex category used by the adjustment and ideal weight formulas.
///
/// Raw text is mapped once at the edge; anything other than the two
/// recognized tokens becomes `Unrecognized` and never raises an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Unrecognized,
}

impl Sex {
    pub fn from_text(text: &str) -> Self {
        let normalized = text.to_lowercase();
        match normalized.as_str() {
            MALE_TOKEN => Sex::Male,
            FEMALE_TOKEN => Sex::Female,
            _ => Sex::Unrecognized,
        }
    }

    pub fn is_recognized(self) -> bool {
        !matches!(self, Sex::Unrecognized)
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sex::Male => "Masculino",
            Sex::Female => "Feminino",
            Sex::Unrecognized => "não reconhecido",
        };
        f.write_str(label)
    }
}

/// Weight in kilograms and height in meters, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub weight_kg: f64,
    pub height_m: f64,
}

impl Measurement {
    pub fn new(weight_kg: f64, height_m: f64) -> Result<Self> {
        if !is_positive(weight_kg) || !is_positive(height_m) {
            return Err(ImcError::InvalidMeasurement(format!(
                "peso={weight_kg}, altura={height_m}"
            )));
        }
        Ok(Self {
            weight_kg,
            height_m,
        })
    }
}

/// Height-only check for computations that do not need a weight.
pub fn validate_height(height_m: f64) -> Result<f64> {
    if !is_positive(height_m) {
        return Err(ImcError::InvalidMeasurement(format!("altura={height_m}")));
    }
    Ok(height_m)
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
