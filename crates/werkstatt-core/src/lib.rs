//! Core types for werkstatt-ledger.
//!
//! This crate provides the foundational types for the revenue ledger:
//!
//! - **Identifiers**: [`EntryId`]
//! - **Staff**: [`Employee`]
//! - **Entries**: [`Entry`], [`NewEntry`]
//! - **Collection**: [`Ledger`]
//!
//! # Money
//!
//! **All monetary amounts are integer cents (`i64`).**
//!
//! - A 50 € cash payment is stored as `5000`
//! - Two-decimal rendering happens only at the export boundary
//! - Stored as `i64` (integer cents) to avoid floating point precision issues
//!
//! Revenue and profit are always computed from the payment channels and the
//! material cost; they are never stored, so they cannot drift.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod employee;
pub mod entry;
pub mod error;
pub mod ids;
pub mod ledger;

pub use employee::Employee;
pub use entry::{Entry, NewEntry};
pub use error::ValidationError;
pub use ids::{EntryId, IdError};
pub use ledger::Ledger;
