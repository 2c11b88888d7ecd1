//! Snapshot persistence for werkstatt-ledger.
//!
//! This crate owns the on-disk representation of the ledger: a single
//! versioned CBOR snapshot holding every entry. Saving always replaces the
//! whole snapshot; there is no incremental file growth.
//!
//! # Failure policy
//!
//! Read failures are soft: a missing snapshot is a normal first run, and a
//! corrupt one degrades to an empty ledger via
//! [`SnapshotStore::load_or_default`] instead of crashing startup. Write
//! failures are hard and always surfaced to the caller.
//!
//! # Example
//!
//! ```no_run
//! use werkstatt_store::{FileStore, SnapshotStore};
//! use werkstatt_core::Ledger;
//!
//! let store = FileStore::new("/var/lib/werkstatt/ledger.cbor");
//! let mut ledger = store.load_or_default();
//! // ... mutate the ledger ...
//! store.save(&ledger).unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod schema;
pub mod snapshot;

pub use error::{Result, StoreError};
pub use snapshot::FileStore;

use werkstatt_core::Ledger;

/// The storage trait defining snapshot persistence.
///
/// This trait abstracts the storage layer, allowing for different
/// implementations (e.g. file-backed, in-memory for testing). The store is
/// the sole owner of the on-disk representation; no other component writes
/// to the storage location.
pub trait SnapshotStore {
    /// Load the persisted ledger.
    ///
    /// A missing snapshot is a normal first run and yields an empty ledger.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] if the snapshot exists but cannot be
    /// read, or [`StoreError::Decode`] if its content cannot be decoded.
    fn load(&self) -> Result<Ledger>;

    /// Persist the full ledger, atomically replacing any prior snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Encode`] or [`StoreError::Write`] if the
    /// snapshot cannot be produced or the medium is unwritable. The prior
    /// snapshot stays intact in that case.
    fn save(&self, ledger: &Ledger) -> Result<()>;

    /// Delete the snapshot entirely, leaving no residual file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] if the snapshot exists but cannot be
    /// removed. An already-absent snapshot is not an error.
    fn reset(&self) -> Result<()>;

    /// Load the persisted ledger, degrading to an empty one on failure.
    ///
    /// This is the startup path: read failures are recovered locally with a
    /// warning rather than propagated.
    fn load_or_default(&self) -> Ledger {
        match self.load() {
            Ok(ledger) => ledger,
            Err(error) => {
                tracing::warn!(%error, "snapshot unreadable, starting with an empty ledger");
                Ledger::new()
            }
        }
    }
}
