//! The aggregation engine.
//!
//! Groups ledger entries by time bucket and/or employee and sums the input
//! fields. Rows are sparse: a (bucket, employee) pair with no entries
//! produces no row, and an empty ledger produces no rows at all.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use werkstatt_core::{Employee, Entry, Ledger};

use crate::summary::Totals;
use crate::Granularity;

/// One summed result row for a time bucket, optionally crossed with an
/// employee.
///
/// Only the five input fields are summed; revenue and profit are derived
/// via [`AggregateRow::revenue_cents`] and [`AggregateRow::profit_cents`],
/// so they always agree with the sums they are computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateRow {
    /// The bucket key: the date itself, the ISO week's Monday, or the
    /// month's last day, depending on granularity.
    pub bucket: NaiveDate,

    /// The employee dimension, present when grouping per employee.
    pub employee: Option<Employee>,

    /// Jobs completed.
    pub orders: u64,

    /// Summed cash payments in cents.
    pub cash_cents: i64,

    /// Summed card payments in cents.
    pub card_cents: i64,

    /// Summed bank transfer payments in cents.
    pub transfer_cents: i64,

    /// Summed material cost in cents.
    pub material_cents: i64,
}

impl AggregateRow {
    fn new(bucket: NaiveDate, employee: Option<Employee>) -> Self {
        Self {
            bucket,
            employee,
            orders: 0,
            cash_cents: 0,
            card_cents: 0,
            transfer_cents: 0,
            material_cents: 0,
        }
    }

    fn add(&mut self, entry: &Entry) {
        self.orders += u64::from(entry.order_count);
        self.cash_cents += entry.cash_cents;
        self.card_cents += entry.card_cents;
        self.transfer_cents += entry.transfer_cents;
        self.material_cents += entry.material_cents;
    }

    /// Summed revenue: cash + card + transfer.
    #[must_use]
    pub fn revenue_cents(&self) -> i64 {
        self.cash_cents + self.card_cents + self.transfer_cents
    }

    /// Summed profit: revenue minus material cost. May be negative.
    #[must_use]
    pub fn profit_cents(&self) -> i64 {
        self.revenue_cents() - self.material_cents
    }
}

fn group(ledger: &Ledger, granularity: Granularity, per_employee: bool) -> Vec<AggregateRow> {
    let mut rows: BTreeMap<(NaiveDate, Option<Employee>), AggregateRow> = BTreeMap::new();

    for entry in ledger {
        let bucket = granularity.bucket_date(entry.date);
        let employee = per_employee.then_some(entry.employee);
        rows.entry((bucket, employee))
            .or_insert_with(|| AggregateRow::new(bucket, employee))
            .add(entry);
    }

    rows.into_values().collect()
}

/// Sum the ledger into one row per non-empty time bucket.
///
/// Rows are ordered by bucket. An empty ledger yields an empty vector.
#[must_use]
pub fn aggregate(ledger: &Ledger, granularity: Granularity) -> Vec<AggregateRow> {
    group(ledger, granularity, false)
}

/// Sum the ledger into one row per non-empty (bucket, employee) pair.
///
/// Rows are ordered by bucket, then employee. Pairs without entries produce
/// no row.
#[must_use]
pub fn aggregate_by_employee(ledger: &Ledger, granularity: Granularity) -> Vec<AggregateRow> {
    group(ledger, granularity, true)
}

/// Overall totals per employee, for the per-employee breakdown charts.
///
/// Employees without entries are omitted; the result is ordered by roster
/// position.
#[must_use]
pub fn totals_by_employee(ledger: &Ledger) -> Vec<(Employee, Totals)> {
    let mut totals: BTreeMap<Employee, Totals> = BTreeMap::new();

    for entry in ledger {
        totals.entry(entry.employee).or_default().add(entry);
    }

    totals.into_iter().collect()
}
