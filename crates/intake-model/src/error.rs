use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported input shape: {0}")]
    InputShape(String),
}

pub type Result<T> = std::result::Result<T, IntakeError>;
