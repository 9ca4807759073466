use thiserror::Error;

#[derive(Error, Debug)]
pub enum FluidScaleError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Invalid Color: '{0}' is not a #rrggbb hex color")]
    InvalidColor(String),
}

pub type FsResult<T> = Result<T, FluidScaleError>;
