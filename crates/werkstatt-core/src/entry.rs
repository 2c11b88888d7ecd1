//! Ledger entry types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::{Employee, EntryId};

/// One recorded transaction: a day's numbers for one employee.
///
/// Entries are immutable once appended to the ledger; the only mutation is
/// whole-record removal. Revenue and profit are derived via
/// [`Entry::revenue_cents`] and [`Entry::profit_cents`] and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique entry id (ULID, assigned at construction).
    pub id: EntryId,

    /// Calendar date of the transaction. No time-of-day component.
    pub date: NaiveDate,

    /// The employee the entry is attributed to.
    pub employee: Employee,

    /// Number of jobs completed.
    pub order_count: u32,

    /// Cash payments in cents.
    pub cash_cents: i64,

    /// Card payments in cents.
    pub card_cents: i64,

    /// Bank transfer payments in cents.
    pub transfer_cents: i64,

    /// Material cost in cents.
    pub material_cents: i64,
}

impl Entry {
    /// Validate a submission and assign it a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativeAmount`] if any monetary field is
    /// negative. The submission is rejected as a whole; no entry is created.
    pub fn from_submission(new: NewEntry) -> Result<Self, ValidationError> {
        new.validate()?;
        Ok(Self {
            id: EntryId::generate(),
            date: new.date,
            employee: new.employee,
            order_count: new.order_count,
            cash_cents: new.cash_cents,
            card_cents: new.card_cents,
            transfer_cents: new.transfer_cents,
            material_cents: new.material_cents,
        })
    }

    /// Total revenue: cash + card + transfer.
    #[must_use]
    pub fn revenue_cents(&self) -> i64 {
        self.cash_cents + self.card_cents + self.transfer_cents
    }

    /// Profit: revenue minus material cost. May be negative.
    #[must_use]
    pub fn profit_cents(&self) -> i64 {
        self.revenue_cents() - self.material_cents
    }
}

/// One validated entry submission, as supplied by the input form.
///
/// The form collects these fields; [`Entry::from_submission`] enforces the
/// non-negativity invariants at the core boundary rather than trusting any
/// UI-level constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    /// Calendar date of the transaction.
    pub date: NaiveDate,

    /// The employee the entry is attributed to.
    pub employee: Employee,

    /// Number of jobs completed.
    pub order_count: u32,

    /// Cash payments in cents.
    pub cash_cents: i64,

    /// Card payments in cents.
    pub card_cents: i64,

    /// Bank transfer payments in cents.
    pub transfer_cents: i64,

    /// Material cost in cents.
    pub material_cents: i64,
}

impl NewEntry {
    fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("cash", self.cash_cents),
            ("card", self.card_cents),
            ("transfer", self.transfer_cents),
            ("material", self.material_cents),
        ];
        for (field, cents) in fields {
            if cents < 0 {
                return Err(ValidationError::NegativeAmount { field, cents });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> NewEntry {
        NewEntry {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            employee: Employee::Momo,
            order_count: 2,
            cash_cents: 5000,
            card_cents: 3000,
            transfer_cents: 0,
            material_cents: 2000,
        }
    }

    #[test]
    fn derived_metrics() {
        let entry = Entry::from_submission(submission()).unwrap();
        assert_eq!(entry.revenue_cents(), 8000);
        assert_eq!(entry.profit_cents(), 6000);
    }

    #[test]
    fn profit_may_be_negative() {
        let entry = Entry::from_submission(NewEntry {
            cash_cents: 1000,
            card_cents: 0,
            transfer_cents: 0,
            material_cents: 2500,
            ..submission()
        })
        .unwrap();
        assert_eq!(entry.profit_cents(), -1500);
    }

    #[test]
    fn negative_amount_is_rejected() {
        let result = Entry::from_submission(NewEntry {
            card_cents: -1,
            ..submission()
        });
        assert_eq!(
            result.unwrap_err(),
            ValidationError::NegativeAmount {
                field: "card",
                cents: -1
            }
        );
    }

    #[test]
    fn entry_serde_roundtrip() {
        let entry = Entry::from_submission(submission()).unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, parsed);
    }
}
