//! Error types for werkstatt-ledger storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The snapshot exists but could not be read.
    #[error("snapshot read failed: {0}")]
    Read(String),

    /// The snapshot content could not be decoded.
    #[error("snapshot decode failed: {0}")]
    Decode(String),

    /// The ledger could not be encoded into a snapshot.
    #[error("snapshot encode failed: {0}")]
    Encode(String),

    /// The snapshot could not be written or removed.
    #[error("snapshot write failed: {0}")]
    Write(String),
}
