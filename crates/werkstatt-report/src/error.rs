//! Error types for report export.

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while exporting.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The CSV writer failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The underlying writer failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The exported bytes were not valid UTF-8.
    #[error("utf-8 error: {0}")]
    Utf8(String),
}
