//! Shared test harness for the service integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;
use werkstatt_core::{Employee, NewEntry};
use werkstatt_service::DashboardService;

/// A dashboard service backed by a snapshot in a temporary directory.
pub struct TestHarness {
    pub service: DashboardService,
    dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let service = DashboardService::open(dir.path().join("ledger.cbor"));
        Self { service, dir }
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.dir.path().join("ledger.cbor")
    }

    /// Reopen the service on the same snapshot, simulating a restart.
    pub fn reopen(&mut self) {
        self.service = DashboardService::open(self.snapshot_path());
    }
}

/// Build a submission with every field spelled out.
pub fn submission(
    date: &str,
    employee: Employee,
    order_count: u32,
    cash_cents: i64,
    card_cents: i64,
    transfer_cents: i64,
    material_cents: i64,
) -> NewEntry {
    NewEntry {
        date: date.parse().unwrap(),
        employee,
        order_count,
        cash_cents,
        card_cents,
        transfer_cents,
        material_cents,
    }
}

/// The worked example used throughout the suite: Momo, 2024-03-01,
/// 2 orders, 50 € cash, 30 € card, 20 € material.
pub fn momo_example() -> NewEntry {
    submission("2024-03-01", Employee::Momo, 2, 5000, 3000, 0, 2000)
}
