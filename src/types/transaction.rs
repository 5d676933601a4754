//! Transaction-related types for the monthly balance report
//!
//! A [`Transaction`] is one ledger row after parsing: a signed amount, the
//! month it falls in, and the description text that label rules match against.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

/// Date used when a ledger date cell cannot be parsed (year 1, January 1st)
pub fn zero_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Truncate a date to the first day of its month
///
/// This is the aggregation key for every summary. Dates carry no time or
/// zone, so a normalized month is equivalent to day 1 at 00:00:00 UTC.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// A single parsed ledger row
///
/// Created once per input line and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Signed amount: `credit - debit`
    pub amount: Decimal,

    /// Month of the transaction, always normalized to day 1
    pub month: NaiveDate,

    /// Description text, including any fixed-amount tag suffix
    pub description: String,
}

impl Transaction {
    /// Build a transaction from its raw ledger values
    ///
    /// The amount is computed as `credit - debit` and the date is normalized
    /// to the first of its month. A difference outside the `Decimal` range
    /// degrades to zero, like any other unusable amount cell.
    pub fn new(debit: Decimal, credit: Decimal, date: NaiveDate, description: String) -> Self {
        let amount = credit.checked_sub(debit).unwrap_or_else(|| {
            debug!(%debit, %credit, description = %description, "amount out of range, using 0");
            Decimal::ZERO
        });

        Transaction {
            amount,
            month: first_of_month(date),
            description,
        }
    }
}
