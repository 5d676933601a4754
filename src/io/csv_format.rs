//! CSV format handling for ledger rows and the monthly report
//!
//! This module centralizes all CSV format concerns, providing:
//! - Cell parsing (amounts, dates) with zero-value fallbacks
//! - Fixed-amount tagging of descriptions
//! - Conversion from raw ledger rows to [`Transaction`]
//! - Report serialization
//!
//! All functions are pure (no file access) for easy testing.
//!
//! # Malformed cells
//!
//! A ledger cell that cannot be parsed never rejects its row. Amounts fall
//! back to zero and dates to [`zero_date`]. Each fallback is reported at
//! `debug` level only, so a default run stays quiet about them.

use crate::config::{Columns, FixedAmount};
use crate::types::{zero_date, ReportError, Summary, Transaction};
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;

/// Date format of ledger date cells (`M/D/YYYY`)
pub const LEDGER_DATE_FORMAT: &str = "%m/%d/%Y";

/// Date format of the stop date and report month cells
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a debit or credit cell
///
/// Accepts plain decimal text and scientific notation. Empty or malformed
/// cells yield zero.
pub fn parse_amount(cell: &str) -> Decimal {
    let cell = cell.trim();
    if cell.is_empty() {
        return Decimal::ZERO;
    }

    match Decimal::from_str(cell).or_else(|_| Decimal::from_scientific(cell)) {
        Ok(amount) => amount,
        Err(e) => {
            tracing::debug!(cell, error = %e, "unparsable amount, using 0");
            Decimal::ZERO
        }
    }
}

/// Parse a ledger date cell in `M/D/YYYY` form
///
/// Malformed cells yield [`zero_date`].
pub fn parse_ledger_date(cell: &str) -> NaiveDate {
    match NaiveDate::parse_from_str(cell.trim(), LEDGER_DATE_FORMAT) {
        Ok(date) => date,
        Err(e) => {
            tracing::debug!(cell, error = %e, "unparsable date, using 0001-01-01");
            zero_date()
        }
    }
}

/// Parse the configured stop date (`YYYY-MM-DD`)
///
/// # Errors
///
/// Returns [`ReportError::InvalidStopDate`] when the value does not parse.
pub fn parse_stop_date(value: &str) -> Result<NaiveDate, ReportError> {
    NaiveDate::parse_from_str(value.trim(), REPORT_DATE_FORMAT)
        .map_err(|_| ReportError::invalid_stop_date(value))
}

/// Find the fixed-amount tag for a transaction, if any
///
/// A rule matches when `credit` or `debit` is nonzero and leaves no remainder
/// when divided by the rule's amount. Rules are checked in declaration order
/// and the last match wins. A zero divisor never matches.
pub fn fixed_amount_tag<'a>(
    rules: &'a [FixedAmount],
    debit: Decimal,
    credit: Decimal,
) -> Option<&'a str> {
    let divisible = |value: Decimal, divisor: Decimal| {
        !value.is_zero() && value.checked_rem(divisor).is_some_and(|r| r.is_zero())
    };

    rules
        .iter()
        .rev()
        .find(|rule| divisible(credit, rule.amount) || divisible(debit, rule.amount))
        .map(|rule| rule.name.as_str())
}

/// Text that label patterns are matched against
///
/// The `description` cell, or, when `regexColumns` is set, those cells joined
/// with `_` in configured order with trailing underscores removed.
pub fn match_text<'r, F>(field: F, columns: &Columns) -> String
where
    F: Fn(usize) -> Option<&'r str>,
{
    if columns.regex_columns.is_empty() {
        return field(columns.description).unwrap_or_default().to_string();
    }

    columns
        .regex_columns
        .iter()
        .map(|&index| field(index).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("_")
        .trim_end_matches('_')
        .to_string()
}

/// Convert one ledger row into a [`Transaction`]
///
/// `field` returns the cell at a column index, or `None` when the row is
/// shorter than that. Missing cells read as empty.
pub fn convert_ledger_row<'r, F>(field: F, columns: &Columns) -> Transaction
where
    F: Fn(usize) -> Option<&'r str>,
{
    let cell = |index: usize| field(index).unwrap_or_default();

    let debit = parse_amount(cell(columns.debit));
    let credit = parse_amount(cell(columns.credit));
    let date = parse_ledger_date(cell(columns.date));

    let mut description = match_text(&field, columns);
    if let Some(tag) = fixed_amount_tag(&columns.fixed_amounts, debit, credit) {
        description.push('_');
        description.push_str(tag);
    }

    Transaction::new(debit, credit, date, description)
}

/// Months covered by the report, most recent first
///
/// Starts at the month containing `as_of` and steps back one month at a time
/// while the month is strictly after `stop`.
pub fn report_months(as_of: NaiveDate, stop: NaiveDate) -> Vec<NaiveDate> {
    let mut months = Vec::new();
    let mut month = crate::types::first_of_month(as_of);

    while month > stop {
        months.push(month);
        match month.checked_sub_months(Months::new(1)) {
            Some(previous) => month = previous,
            None => break,
        }
    }

    months
}

/// Render an amount with exactly two decimal places
///
/// Zero is always rendered as `0.00`, never `-0.00`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    if rounded.is_zero() {
        return "0.00".to_string();
    }
    format!("{:.2}", rounded)
}

/// Write the pivoted report
///
/// One header row (an empty cell, then each summary's label) followed by one
/// row per entry of `months`, each holding the month and every summary's
/// amount for it.
///
/// # Errors
///
/// Returns [`ReportError::OutputWrite`] if writing or flushing fails.
pub fn write_report_csv(
    summaries: &[Summary],
    months: &[NaiveDate],
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    let header = std::iter::once("").chain(summaries.iter().map(|s| s.label.as_str()));
    writer
        .write_record(header)
        .map_err(|e| ReportError::output_write(format!("header: {}", e)))?;

    for &month in months {
        let row = std::iter::once(month.format(REPORT_DATE_FORMAT).to_string())
            .chain(summaries.iter().map(|s| format_amount(s.amount_for(month))));
        writer
            .write_record(row)
            .map_err(|e| ReportError::output_write(format!("row {}: {}", month, e)))?;
    }

    writer.flush().map_err(ReportError::output_write)?;

    Ok(())
}
