//! Error types for werkstatt-core.

/// Errors that reject a malformed entry submission.
///
/// Validation happens at the core boundary; the ledger is left unchanged
/// when a submission is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A monetary field was negative.
    #[error("negative amount for {field}: {cents} cents")]
    NegativeAmount {
        /// Which field carried the negative amount.
        field: &'static str,
        /// The rejected value in cents.
        cents: i64,
    },

    /// The employee name is not on the roster.
    #[error("unknown employee: {name}")]
    UnknownEmployee {
        /// The name that failed to parse.
        name: String,
    },
}
