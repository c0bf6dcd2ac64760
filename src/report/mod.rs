pub mod json;
pub mod md;
pub mod text;

use crate::error::ImcError;
use crate::types::assessment::Assessment;

pub const IDEAL_WEIGHT_UNAVAILABLE: &str =
    "Sexo inválido. Não foi possível calcular o peso ideal.";

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

pub fn render(
    assessment: &Assessment,
    format: OutputFormat,
    precision: usize,
) -> Result<String, ImcError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(assessment, precision)),
        OutputFormat::Json => json::to_json(assessment).map_err(ImcError::Json),
        OutputFormat::Md => Ok(md::to_markdown(assessment, precision)),
    }
}

pub fn ideal_weight_line(ideal_weight_kg: Option<f64>, precision: usize) -> String {
    match ideal_weight_kg {
        Some(ideal) => format!("Seu peso ideal é: {ideal:.precision$} kg"),
        None => IDEAL_WEIGHT_UNAVAILABLE.to_string(),
    }
}
