//! CSV export.
//!
//! The column set and order are fixed and match what the shop has always
//! exported: `Datum, Mitarbeiter, Auftraege, Bar, EC_Karte, Ueberweisung,
//! Materialkosten, Umsatz, Gewinn`. Money is rendered with two decimals;
//! the output is UTF-8 throughout.

use std::io::Write;

use csv::WriterBuilder;
use serde::Serialize;

use werkstatt_core::Entry;

use crate::aggregate::AggregateRow;
use crate::error::{ExportError, Result};

/// The fixed export header, in column order.
const HEADERS: [&str; 9] = [
    "Datum",
    "Mitarbeiter",
    "Auftraege",
    "Bar",
    "EC_Karte",
    "Ueberweisung",
    "Materialkosten",
    "Umsatz",
    "Gewinn",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Datum")]
    datum: String,
    #[serde(rename = "Mitarbeiter")]
    mitarbeiter: &'a str,
    #[serde(rename = "Auftraege")]
    auftraege: u64,
    #[serde(rename = "Bar")]
    bar: String,
    #[serde(rename = "EC_Karte")]
    ec_karte: String,
    #[serde(rename = "Ueberweisung")]
    ueberweisung: String,
    #[serde(rename = "Materialkosten")]
    materialkosten: String,
    #[serde(rename = "Umsatz")]
    umsatz: String,
    #[serde(rename = "Gewinn")]
    gewinn: String,
}

/// Render integer cents with two decimals and a correct sign.
fn money(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Write raw entries as CSV, header row included.
///
/// # Errors
///
/// Returns [`ExportError`] if the underlying writer fails.
pub fn write_entries<W: Write>(writer: W, entries: &[Entry]) -> Result<()> {
    let mut w = WriterBuilder::new().from_writer(writer);

    // The serializer only emits the header alongside a first record.
    if entries.is_empty() {
        w.write_record(HEADERS)?;
    }

    for entry in entries {
        w.serialize(CsvRow {
            datum: entry.date.format(DATE_FORMAT).to_string(),
            mitarbeiter: entry.employee.as_str(),
            auftraege: u64::from(entry.order_count),
            bar: money(entry.cash_cents),
            ec_karte: money(entry.card_cents),
            ueberweisung: money(entry.transfer_cents),
            materialkosten: money(entry.material_cents),
            umsatz: money(entry.revenue_cents()),
            gewinn: money(entry.profit_cents()),
        })?;
    }

    w.flush()?;
    Ok(())
}

/// Write aggregate rows as CSV with the same columns as a raw export.
///
/// The bucket key takes the date column; rows grouped without the employee
/// dimension leave the employee column empty.
///
/// # Errors
///
/// Returns [`ExportError`] if the underlying writer fails.
pub fn write_rows<W: Write>(writer: W, rows: &[AggregateRow]) -> Result<()> {
    let mut w = WriterBuilder::new().from_writer(writer);

    if rows.is_empty() {
        w.write_record(HEADERS)?;
    }

    for row in rows {
        w.serialize(CsvRow {
            datum: row.bucket.format(DATE_FORMAT).to_string(),
            mitarbeiter: row.employee.map_or("", |e| e.as_str()),
            auftraege: row.orders,
            bar: money(row.cash_cents),
            ec_karte: money(row.card_cents),
            ueberweisung: money(row.transfer_cents),
            materialkosten: money(row.material_cents),
            umsatz: money(row.revenue_cents()),
            gewinn: money(row.profit_cents()),
        })?;
    }

    w.flush()?;
    Ok(())
}

/// Export raw entries to a CSV string.
///
/// # Errors
///
/// Returns [`ExportError`] if serialization fails.
pub fn entries_to_csv(entries: &[Entry]) -> Result<String> {
    let mut buf = Vec::new();
    write_entries(&mut buf, entries)?;
    String::from_utf8(buf).map_err(|e| ExportError::Utf8(e.to_string()))
}

/// Export aggregate rows to a CSV string.
///
/// # Errors
///
/// Returns [`ExportError`] if serialization fails.
pub fn rows_to_csv(rows: &[AggregateRow]) -> Result<String> {
    let mut buf = Vec::new();
    write_rows(&mut buf, rows)?;
    String::from_utf8(buf).map_err(|e| ExportError::Utf8(e.to_string()))
}
