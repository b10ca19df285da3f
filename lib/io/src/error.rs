use thiserror::Error;

pub type Result<T> = std::result::Result<T, IoError>;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing column '{column}' in contact table")]
    MissingColumn { column: String },

    #[error("Invalid weights: {0}")]
    Schema(#[from] dedupx_similarity::SchemaError),

    #[error(transparent)]
    Core(#[from] dedupx_core::Error),
}
