use thiserror::Error;

use crate::analytes::SubScore;

#[derive(Debug, Error)]
pub enum HormonyxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialisation error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid weight {weight} for '{key}' in {sub_score}: weights must be finite and non-negative")]
    InvalidWeight {
        sub_score: SubScore,
        key: String,
        weight: f64,
    },

    #[error("Invalid reference range for '{analyte}': low={low}, high={high}")]
    InvalidRange {
        analyte: String,
        low: f64,
        high: f64,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, HormonyxError>;
