//! The dashboard service for werkstatt-ledger.
//!
//! This crate ties the store, the ledger and the reports together behind
//! one synchronous facade. A UI (entry form, tables, charts) calls into
//! [`DashboardService`] and never touches the ledger or the snapshot
//! directly.
//!
//! # Consistency
//!
//! Every state-changing operation is a serialized load-mutate-save under a
//! single lock: the mutation is applied to a scratch copy, persisted, and
//! only then swapped into memory. After any successful return, the
//! in-memory ledger and the on-disk snapshot agree; after a failed save,
//! the in-memory ledger is unchanged.
//!
//! # Example
//!
//! ```no_run
//! use werkstatt_core::{Employee, NewEntry};
//! use werkstatt_report::Granularity;
//! use werkstatt_service::{DashboardService, ReportQuery};
//!
//! let service = DashboardService::open("/var/lib/werkstatt/ledger.cbor");
//! service
//!     .submit(NewEntry {
//!         date: "2024-03-01".parse().unwrap(),
//!         employee: Employee::Momo,
//!         order_count: 2,
//!         cash_cents: 5000,
//!         card_cents: 3000,
//!         transfer_cents: 0,
//!         material_cents: 2000,
//!     })
//!     .unwrap();
//!
//! let rows = service.report(ReportQuery::new(Granularity::Weekly));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod query;

pub use error::{Result, ServiceError};
pub use query::ReportQuery;

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use werkstatt_core::{Employee, Entry, EntryId, Ledger, NewEntry};
use werkstatt_report::{
    aggregate_by_employee, entries_to_csv, rows_to_csv, totals_by_employee, AggregateRow,
    Granularity, Totals,
};
use werkstatt_store::{FileStore, SnapshotStore};

/// The dashboard service.
///
/// Owns the file store and the in-memory ledger behind one mutex. The
/// core is single-threaded and synchronous; the mutex exists to serialize
/// overlapping callers if an embedder shares the service, so no update is
/// lost to a concurrent load-mutate-save.
pub struct DashboardService {
    store: FileStore,
    ledger: Mutex<Ledger>,
}

impl DashboardService {
    /// Open the service against a snapshot location.
    ///
    /// A missing snapshot is a normal first run; an unreadable one is
    /// logged and replaced by an empty ledger. Startup never fails on
    /// corrupt storage.
    #[must_use]
    pub fn open(path: impl AsRef<Path>) -> Self {
        let store = FileStore::new(path.as_ref());
        let ledger = store.load_or_default();
        tracing::info!(
            entries = ledger.len(),
            path = %store.path().display(),
            "ledger loaded"
        );
        Self {
            store,
            ledger: Mutex::new(ledger),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Ledger> {
        // The ledger is only ever replaced wholesale under the lock, so a
        // poisoned guard still holds a consistent value.
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate and append one submission, persisting the result.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::Validation`] if a monetary field is negative; the
    ///   ledger is unchanged.
    /// - [`ServiceError::Storage`] if the snapshot cannot be written; the
    ///   in-memory ledger is unchanged.
    pub fn submit(&self, submission: NewEntry) -> Result<EntryId> {
        let entry = Entry::from_submission(submission)?;
        let id = entry.id;

        let mut guard = self.lock();
        let mut next = guard.clone();
        next.append(entry);
        self.store.save(&next)?;
        *guard = next;

        tracing::info!(%id, "entry appended");
        Ok(id)
    }

    /// Delete the selected raw entries, persisting the result.
    ///
    /// Returns how many entries were removed; ids not present in the
    /// ledger are ignored.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::DeletionScope`] if `view` is not
    ///   [`Granularity::Daily`]: only the daily view maps rows 1:1 to raw
    ///   entries. Nothing is touched.
    /// - [`ServiceError::Storage`] if the snapshot cannot be written; the
    ///   in-memory ledger is unchanged.
    pub fn delete(&self, view: Granularity, ids: &[EntryId]) -> Result<usize> {
        if view != Granularity::Daily {
            return Err(ServiceError::DeletionScope { granularity: view });
        }

        let selection: HashSet<EntryId> = ids.iter().copied().collect();

        let mut guard = self.lock();
        let mut next = guard.clone();
        let removed = next.remove_by_ids(&selection);
        self.store.save(&next)?;
        *guard = next;

        tracing::info!(removed, "entries deleted");
        Ok(removed)
    }

    /// Drop every entry and delete the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Storage`] if the snapshot cannot be
    /// removed; the in-memory ledger is unchanged in that case.
    pub fn reset(&self) -> Result<()> {
        let mut guard = self.lock();
        self.store.reset()?;
        *guard = Ledger::new();

        tracing::info!("ledger reset");
        Ok(())
    }

    /// The raw entries, sorted by date.
    #[must_use]
    pub fn entries(&self) -> Vec<Entry> {
        self.lock().sorted_by_date()
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the ledger holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Aggregate rows for a view selection, grouped per (bucket, employee).
    #[must_use]
    pub fn report(&self, query: ReportQuery) -> Vec<AggregateRow> {
        let subset = query.filtered(&self.lock());
        aggregate_by_employee(&subset, query.granularity)
    }

    /// Overview totals for a view selection.
    #[must_use]
    pub fn summary(&self, query: ReportQuery) -> Totals {
        Totals::of(&query.filtered(&self.lock()))
    }

    /// Per-employee overall totals for a view selection.
    #[must_use]
    pub fn employee_totals(&self, query: ReportQuery) -> Vec<(Employee, Totals)> {
        totals_by_employee(&query.filtered(&self.lock()))
    }

    /// Export the selected view as CSV.
    ///
    /// The daily view exports the filtered raw entries; weekly and monthly
    /// export the grouped rows, matching what the view displays.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Export`] if CSV serialization fails.
    pub fn export_csv(&self, query: ReportQuery) -> Result<String> {
        let subset = query.filtered(&self.lock());
        let csv = match query.granularity {
            Granularity::Daily => entries_to_csv(&subset.sorted_by_date())?,
            Granularity::Weekly | Granularity::Monthly => {
                rows_to_csv(&aggregate_by_employee(&subset, query.granularity))?
            }
        };
        Ok(csv)
    }
}
