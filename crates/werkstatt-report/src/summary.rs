//! Overview totals and derived metrics.

use werkstatt_core::{Entry, Ledger};

/// Summed figures over an arbitrary set of entries.
///
/// This backs the dashboard's overview panel: overall sums plus the two
/// derived metrics. Only input fields are accumulated; revenue and profit
/// are always recomputed from them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
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

impl Totals {
    /// Totals over a whole ledger (or a filtered subset of one).
    #[must_use]
    pub fn of(ledger: &Ledger) -> Self {
        let mut totals = Self::default();
        for entry in ledger {
            totals.add(entry);
        }
        totals
    }

    /// Fold one entry into the totals.
    pub fn add(&mut self, entry: &Entry) {
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

    /// Profit margin in percent, or `None` when there is no revenue.
    ///
    /// The metric is undefined at zero revenue; returning `None` lets the
    /// consumer omit it instead of rendering a misleading value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn profit_margin_pct(&self) -> Option<f64> {
        let revenue = self.revenue_cents();
        (revenue != 0).then(|| 100.0 * self.profit_cents() as f64 / revenue as f64)
    }

    /// Average profit per order in cents, or `None` without orders.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_profit_per_order_cents(&self) -> Option<f64> {
        (self.orders != 0).then(|| self.profit_cents() as f64 / self.orders as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use werkstatt_core::{Employee, NewEntry};

    fn ledger() -> Ledger {
        let entry = Entry::from_submission(NewEntry {
            date: "2024-03-01".parse().unwrap(),
            employee: Employee::Momo,
            order_count: 2,
            cash_cents: 5000,
            card_cents: 3000,
            transfer_cents: 0,
            material_cents: 2000,
        })
        .unwrap();
        Ledger::from_entries(vec![entry])
    }

    #[test]
    fn totals_over_sample() {
        let totals = Totals::of(&ledger());
        assert_eq!(totals.orders, 2);
        assert_eq!(totals.revenue_cents(), 8000);
        assert_eq!(totals.profit_cents(), 6000);
    }

    #[test]
    fn derived_metrics_over_sample() {
        let totals = Totals::of(&ledger());
        assert!((totals.profit_margin_pct().unwrap() - 75.0).abs() < f64::EPSILON);
        assert!((totals.avg_profit_per_order_cents().unwrap() - 3000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn metrics_are_omitted_at_zero() {
        let totals = Totals::of(&Ledger::new());
        assert_eq!(totals.profit_margin_pct(), None);
        assert_eq!(totals.avg_profit_per_order_cents(), None);

        // Orders without revenue: margin still omitted, average defined.
        let entry = Entry::from_submission(NewEntry {
            date: "2024-03-01".parse().unwrap(),
            employee: Employee::Jan,
            order_count: 3,
            cash_cents: 0,
            card_cents: 0,
            transfer_cents: 0,
            material_cents: 900,
        })
        .unwrap();
        let totals = Totals::of(&Ledger::from_entries(vec![entry]));
        assert_eq!(totals.profit_margin_pct(), None);
        assert!((totals.avg_profit_per_order_cents().unwrap() + 300.0).abs() < f64::EPSILON);
    }
}
