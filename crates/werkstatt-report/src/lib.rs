//! Aggregated views over the revenue ledger.
//!
//! This crate turns a [`werkstatt_core::Ledger`] into the numbers a
//! dashboard displays:
//!
//! - **Time buckets**: [`Granularity`] maps a date to its daily, weekly
//!   (ISO week Monday) or monthly (month-end) bucket key.
//! - **Aggregate rows**: [`aggregate`] and [`aggregate_by_employee`] sum
//!   entries per bucket, sparse over the inputs.
//! - **Overview totals**: [`Totals`] with the zero-guarded derived metrics
//!   (profit margin, average profit per order).
//! - **Export**: CSV with the ledger's fixed German column set.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod aggregate;
pub mod error;
pub mod export;
pub mod granularity;
pub mod summary;

pub use aggregate::{aggregate, aggregate_by_employee, totals_by_employee, AggregateRow};
pub use error::{ExportError, Result};
pub use export::{entries_to_csv, rows_to_csv, write_entries, write_rows};
pub use granularity::Granularity;
pub use summary::Totals;
