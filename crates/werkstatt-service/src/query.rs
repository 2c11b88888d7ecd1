//! Report queries: the date-range, granularity and employee selection.

use chrono::NaiveDate;

use werkstatt_core::{Employee, Ledger};
use werkstatt_report::Granularity;

/// A view selection: granularity plus optional date and employee filters.
///
/// Date bounds are inclusive on both ends and compare by calendar date
/// only. The employee and date filters intersect, so their order of
/// application cannot change the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportQuery {
    /// The time-bucket size for aggregation.
    pub granularity: Granularity,

    /// Inclusive date bounds, or `None` for the whole ledger.
    pub range: Option<(NaiveDate, NaiveDate)>,

    /// Restrict to one employee, or `None` for everyone.
    pub employee: Option<Employee>,
}

impl ReportQuery {
    /// A query over the whole ledger at the given granularity.
    #[must_use]
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            range: None,
            employee: None,
        }
    }

    /// Restrict to an inclusive date range.
    #[must_use]
    pub fn with_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.range = Some((from, to));
        self
    }

    /// Restrict to one employee.
    #[must_use]
    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employee = Some(employee);
        self
    }

    /// Apply the filters (not the grouping) to a ledger.
    #[must_use]
    pub fn filtered(&self, ledger: &Ledger) -> Ledger {
        let mut subset = match self.range {
            Some((from, to)) => ledger.filter_date_range(from, to),
            None => ledger.clone(),
        };
        if let Some(employee) = self.employee {
            subset = subset.filter_employee(employee);
        }
        subset
    }
}
