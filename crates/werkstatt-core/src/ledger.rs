//! The ledger collection and its filter operations.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Employee, Entry, EntryId};

/// The full collection of recorded entries.
///
/// Insertion order carries no meaning; consumers re-sort or re-group by
/// date and employee. Mutation is limited to appending one entry and
/// removing a subset by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger from existing entries.
    #[must_use]
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Append one entry.
    pub fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove every entry whose id is in `ids`, returning the removed count.
    pub fn remove_by_ids(&mut self, ids: &HashSet<EntryId>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !ids.contains(&entry.id));
        before - self.entries.len()
    }

    /// Entries whose date falls in `[from, to]`, inclusive on both bounds.
    #[must_use]
    pub fn filter_date_range(&self, from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| entry.date >= from && entry.date <= to)
                .cloned()
                .collect(),
        }
    }

    /// Entries attributed to `employee`.
    ///
    /// Composes with [`Ledger::filter_date_range`]; the two filters only
    /// ever intersect, so application order does not change the result.
    #[must_use]
    pub fn filter_employee(&self, employee: Employee) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| entry.employee == employee)
                .cloned()
                .collect(),
        }
    }

    /// The entries sorted by date, ties broken by id (submission order).
    #[must_use]
    pub fn sorted_by_date(&self) -> Vec<Entry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|entry| (entry.date, entry.id));
        sorted
    }

    /// Earliest and latest entry date, or `None` for an empty ledger.
    #[must_use]
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.entries.iter().map(|entry| entry.date).min()?;
        let last = self.entries.iter().map(|entry| entry.date).max()?;
        Some((first, last))
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NewEntry;

    fn entry(date: &str, employee: Employee, cash_cents: i64) -> Entry {
        Entry::from_submission(NewEntry {
            date: date.parse().unwrap(),
            employee,
            order_count: 1,
            cash_cents,
            card_cents: 0,
            transfer_cents: 0,
            material_cents: 0,
        })
        .unwrap()
    }

    fn sample() -> Ledger {
        Ledger::from_entries(vec![
            entry("2024-03-01", Employee::Momo, 1000),
            entry("2024-03-02", Employee::Lom, 2000),
            entry("2024-03-05", Employee::Momo, 3000),
            entry("2024-04-01", Employee::Musti, 4000),
        ])
    }

    #[test]
    fn date_range_is_inclusive() {
        let ledger = sample();
        let filtered = ledger.filter_date_range(
            "2024-03-02".parse().unwrap(),
            "2024-03-05".parse().unwrap(),
        );
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn filters_commute() {
        let ledger = sample();
        let from: NaiveDate = "2024-03-01".parse().unwrap();
        let to: NaiveDate = "2024-03-31".parse().unwrap();

        let date_then_employee = ledger
            .filter_date_range(from, to)
            .filter_employee(Employee::Momo);
        let employee_then_date = ledger
            .filter_employee(Employee::Momo)
            .filter_date_range(from, to);

        assert_eq!(date_then_employee, employee_then_date);
        assert_eq!(date_then_employee.len(), 2);
    }

    #[test]
    fn remove_by_ids_removes_exactly_the_selection() {
        let mut ledger = sample();
        let victim = ledger.entries()[1].id;
        let removed = ledger.remove_by_ids(&HashSet::from([victim]));
        assert_eq!(removed, 1);
        assert_eq!(ledger.len(), 3);
        assert!(ledger.iter().all(|e| e.id != victim));

        // Unknown ids remove nothing.
        let removed = ledger.remove_by_ids(&HashSet::from([EntryId::generate()]));
        assert_eq!(removed, 0);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn date_span_covers_all_entries() {
        let ledger = sample();
        let (first, last) = ledger.date_span().unwrap();
        assert_eq!(first, "2024-03-01".parse::<NaiveDate>().unwrap());
        assert_eq!(last, "2024-04-01".parse::<NaiveDate>().unwrap());

        assert_eq!(Ledger::new().date_span(), None);
    }

    #[test]
    fn sorted_by_date_orders_ties_by_submission() {
        let a = entry("2024-03-01", Employee::Momo, 1000);
        let b = entry("2024-03-01", Employee::Lom, 2000);
        let ledger = Ledger::from_entries(vec![b.clone(), a.clone()]);
        let sorted = ledger.sorted_by_date();
        // Same date: the earlier-generated id comes first.
        assert_eq!(sorted[0].id, a.id.min(b.id));
    }
}
