//! Time-bucket granularities.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The bucket size used when grouping entries over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// One bucket per calendar date.
    Daily,
    /// One bucket per ISO week, keyed by its Monday.
    Weekly,
    /// One bucket per calendar month, keyed by its last day.
    Monthly,
}

impl Granularity {
    /// Get the granularity name as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Map a date to its bucket key.
    ///
    /// - `Daily`: the date itself.
    /// - `Weekly`: the Monday beginning the ISO week containing the date.
    /// - `Monthly`: the **last** calendar day of the containing month.
    ///
    /// Months anchor to their end while weeks anchor to their start. The
    /// asymmetry matches the system this ledger replaces and is kept
    /// bit-for-bit for compatibility with previously exported data.
    #[must_use]
    pub fn bucket_date(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Daily => date,
            Self::Weekly => date.week(Weekday::Mon).first_day(),
            Self::Monthly => {
                let first_of_next = if date.month() == 12 {
                    NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
                };
                // The first of a month is always constructible; the fallback
                // is unreachable for any in-range year.
                first_of_next.and_then(|d| d.pred_opt()).unwrap_or(date)
            }
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
