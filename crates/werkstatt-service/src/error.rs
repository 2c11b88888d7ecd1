//! Error types for the dashboard service.

use werkstatt_core::ValidationError;
use werkstatt_report::{ExportError, Granularity};
use werkstatt_store::StoreError;

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors surfaced by the dashboard service.
///
/// Read failures never appear here: a missing or corrupt snapshot degrades
/// to an empty ledger at load time. Everything below is surfaced with
/// enough context to retry or correct the input.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A submission failed validation; the ledger is unchanged.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The snapshot could not be persisted. The in-memory ledger is left
    /// exactly as it was before the operation, never half-applied.
    #[error("storage failed: {0}")]
    Storage(#[from] StoreError),

    /// CSV export failed.
    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    /// Deletion was requested against a grouped view.
    ///
    /// Weekly and monthly rows do not map 1:1 to raw records, so deleting
    /// "through" them would remove the wrong entries. The request is
    /// refused before any state changes.
    #[error("cannot delete from the {granularity} view; deletion requires the daily view")]
    DeletionScope {
        /// The granularity the deletion was attempted under.
        granularity: Granularity,
    },
}
