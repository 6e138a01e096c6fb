use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ExportError {
    #[error("GeoNames request failed: {0}")]
    Http(String),

    #[error("GeoNames returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("filesystem error: {0}")]
    Filesystem(String),

    #[error("corrupt archive: {0}")]
    Archive(String),

    #[error("archive member not found: {0}")]
    MissingMember(String),

    #[error("failed to encode output: {0}")]
    Encode(String),
}
