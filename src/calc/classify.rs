use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObesityClass1,
    ObesityClass2,
    ObesityClass3,
}

/// Upper bounds checked in order; the first one the value falls below wins.
/// These are the published literal cut-offs, not the rounded textbook ones.
const THRESHOLDS: [(f64, BmiCategory); 5] = [
    (18.5, BmiCategory::Underweight),
    (24.9, BmiCategory::Normal),
    (29.9, BmiCategory::Overweight),
    (34.9, BmiCategory::ObesityClass1),
    (39.9, BmiCategory::ObesityClass2),
];

impl BmiCategory {
    pub fn all() -> [BmiCategory; 6] {
        [
            BmiCategory::Underweight,
            BmiCategory::Normal,
            BmiCategory::Overweight,
            BmiCategory::ObesityClass1,
            BmiCategory::ObesityClass2,
            BmiCategory::ObesityClass3,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Abaixo do peso",
            BmiCategory::Normal => "Peso normal",
            BmiCategory::Overweight => "Sobrepeso",
            BmiCategory::ObesityClass1 => "Obesidade grau 1",
            BmiCategory::ObesityClass2 => "Obesidade grau 2",
            BmiCategory::ObesityClass3 => "Obesidade grau 3",
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObesityClass1 => "Obesity class 1",
            BmiCategory::ObesityClass2 => "Obesity class 2",
            BmiCategory::ObesityClass3 => "Obesity class 3",
        }
    }

    /// Half-open range as published: lower bound inclusive, upper exclusive.
    pub fn published_range(self) -> (Option<f64>, Option<f64>) {
        match self {
            BmiCategory::Underweight => (None, Some(18.5)),
            BmiCategory::Normal => (Some(18.5), Some(24.9)),
            BmiCategory::Overweight => (Some(25.0), Some(29.9)),
            BmiCategory::ObesityClass1 => (Some(30.0), Some(34.9)),
            BmiCategory::ObesityClass2 => (Some(35.0), Some(39.9)),
            BmiCategory::ObesityClass3 => (Some(39.9), None),
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for BmiCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

pub fn classify_bmi(bmi: f64) -> BmiCategory {
    THRESHOLDS
        .iter()
        .find(|(upper, _)| bmi < *upper)
        .map(|(_, category)| *category)
        .unwrap_or(BmiCategory::ObesityClass3)
}
