use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImcError {
    #[error("Erro: O peso e a altura devem ser valores positivos. ({0})")]
    InvalidMeasurement(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ImcError>;
