use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedbackError {
    #[error("Reward weights must sum to 1.0, got {sum}")]
    InvalidWeights { sum: f64 },

    #[error("Invalid reward thresholds: low={low}, high={high}")]
    InvalidThresholds { low: f64, high: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FeedbackError>;
