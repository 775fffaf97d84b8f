use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Ways a prediction call can fail before a response is available
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Failed to encode prediction request: {0}")]
    Encode(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Invalid prediction response: {0}")]
    Decode(String),
}

impl PredictionError {
    pub fn kind(&self) -> &'static str {
        match self {
            PredictionError::Encode(_) => "encode",
            PredictionError::Transport(_) => "transport",
            PredictionError::Status { .. } => "status",
            PredictionError::Decode(_) => "decode",
        }
    }
}
