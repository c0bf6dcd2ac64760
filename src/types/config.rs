use crate::error::ImcError;
use serde::Deserialize;

pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
pub const DEFAULT_HEIGHT_M: f64 = 1.70;
pub const DEFAULT_SEX: &str = "Masculino";
pub const DEFAULT_PRECISION: usize = 2;
const MAX_PRECISION: usize = 6;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImcConfig {
    pub defaults: Option<DefaultsConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    pub weight_kg: Option<f64>,
    pub height_m: Option<f64>,
    pub sex: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatSetting {
    Text,
    Json,
    Md,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<FormatSetting>,
    pub precision: Option<usize>,
}

impl ImcConfig {
    pub fn weight_kg(&self) -> f64 {
        self.defaults
            .as_ref()
            .and_then(|defaults| defaults.weight_kg)
            .unwrap_or(DEFAULT_WEIGHT_KG)
    }

    pub fn height_m(&self) -> f64 {
        self.defaults
            .as_ref()
            .and_then(|defaults| defaults.height_m)
            .unwrap_or(DEFAULT_HEIGHT_M)
    }

    pub fn sex(&self) -> &str {
        self.defaults
            .as_ref()
            .and_then(|defaults| defaults.sex.as_deref())
            .unwrap_or(DEFAULT_SEX)
    }

    pub fn format(&self) -> FormatSetting {
        self.output
            .as_ref()
            .and_then(|output| output.format)
            .unwrap_or(FormatSetting::Text)
    }

    pub fn precision(&self) -> usize {
        self.output
            .as_ref()
            .and_then(|output| output.precision)
            .unwrap_or(DEFAULT_PRECISION)
    }

    pub fn validate(&self) -> Result<(), ImcError> {
        if let Some(defaults) = &self.defaults {
            if let Some(weight_kg) = defaults.weight_kg {
                if !(weight_kg.is_finite() && weight_kg > 0.0) {
                    return Err(ImcError::ConfigParse(format!(
                        "defaults.weight_kg must be greater than 0 (found {weight_kg})"
                    )));
                }
            }
            if let Some(height_m) = defaults.height_m {
                if !(height_m.is_finite() && height_m > 0.0) {
                    return Err(ImcError::ConfigParse(format!(
                        "defaults.height_m must be greater than 0 (found {height_m})"
                    )));
                }
            }
        }

        if self.precision() > MAX_PRECISION {
            return Err(ImcError::ConfigParse(format!(
                "output.precision must be at most {MAX_PRECISION} (found {})",
                self.precision()
            )));
        }

        Ok(())
    }
}
