//! Aggregated views through the service facade.

mod common;

use common::{submission, TestHarness};
use werkstatt_core::Employee;
use werkstatt_report::{AggregateRow, Granularity};
use werkstatt_service::ReportQuery;

/// Entries spread over three ISO weeks, two months and three employees.
fn populated() -> TestHarness {
    let harness = TestHarness::new();
    for new in [
        submission("2024-03-11", Employee::Momo, 2, 5000, 0, 0, 1000),
        submission("2024-03-15", Employee::Momo, 1, 0, 3000, 0, 500),
        submission("2024-03-15", Employee::Lom, 3, 2000, 2000, 2000, 0),
        submission("2024-03-20", Employee::Musti, 1, 0, 0, 7000, 6000),
        submission("2024-04-02", Employee::Lom, 2, 4000, 0, 0, 100),
    ] {
        harness.service.submit(new).unwrap();
    }
    harness
}

#[test]
fn revenue_totals_agree_across_granularities() {
    let harness = populated();
    let from = "2024-03-01".parse().unwrap();
    let to = "2024-04-30".parse().unwrap();

    let raw: i64 = harness
        .service
        .entries()
        .iter()
        .map(werkstatt_core::Entry::revenue_cents)
        .sum();

    for granularity in [
        Granularity::Daily,
        Granularity::Weekly,
        Granularity::Monthly,
    ] {
        let query = ReportQuery::new(granularity).with_range(from, to);
        let rows = harness.service.report(query);
        let total: i64 = rows.iter().map(AggregateRow::revenue_cents).sum();
        assert_eq!(total, raw, "{granularity} view loses or double-counts");
    }
}

#[test]
fn employee_filter_restricts_rows() {
    let harness = populated();
    let query = ReportQuery::new(Granularity::Weekly).with_employee(Employee::Lom);

    let rows = harness.service.report(query);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.employee == Some(Employee::Lom)));

    let totals = harness.service.summary(query);
    assert_eq!(totals.revenue_cents(), 10000);
}

#[test]
fn summary_metrics_are_omitted_without_revenue() {
    let harness = TestHarness::new();
    let totals = harness.service.summary(ReportQuery::new(Granularity::Daily));
    assert_eq!(totals.profit_margin_pct(), None);
    assert_eq!(totals.avg_profit_per_order_cents(), None);
}

#[test]
fn employee_totals_list_only_active_staff() {
    let harness = populated();
    let totals = harness
        .service
        .employee_totals(ReportQuery::new(Granularity::Daily));

    let names: Vec<Employee> = totals.iter().map(|(e, _)| *e).collect();
    assert_eq!(names, vec![Employee::Momo, Employee::Lom, Employee::Musti]);
}

#[test]
fn grouped_export_matches_the_view() {
    let harness = populated();
    let query = ReportQuery::new(Granularity::Monthly);

    let csv = harness.service.export_csv(query).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    // Header plus one line per (month-end, employee) pair.
    assert_eq!(
        lines[0],
        "Datum,Mitarbeiter,Auftraege,Bar,EC_Karte,Ueberweisung,Materialkosten,Umsatz,Gewinn"
    );
    assert_eq!(lines.len(), 1 + 4);
    assert!(lines.iter().skip(1).all(|l| l.starts_with("2024-03-31") || l.starts_with("2024-04-30")));
}

#[test]
fn daily_export_lists_raw_entries_in_date_order() {
    let harness = populated();
    let csv = harness
        .service
        .export_csv(ReportQuery::new(Granularity::Daily))
        .unwrap();

    let dates: Vec<&str> = csv
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    let mut sorted = dates.clone();
    sorted.sort_unstable();
    assert_eq!(dates, sorted);
    assert_eq!(dates.len(), 5);
}
