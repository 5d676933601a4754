//! Per-label monthly totals

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::debug;

/// Label receiving transactions that match no configured rule
pub const UNCAPTURED_LABEL: &str = "Uncaptured";

/// Label receiving every transaction
pub const TOTAL_LABEL: &str = "Total";

/// Amounts for one label, summed per normalized month
///
/// Months without transactions are absent from `amounts`; readers should use
/// [`Summary::amount_for`], which treats them as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub label: String,
    pub amounts: BTreeMap<NaiveDate, Decimal>,
}

impl Summary {
    pub fn new(label: impl Into<String>) -> Self {
        Summary {
            label: label.into(),
            amounts: BTreeMap::new(),
        }
    }

    /// Add `amount` to the bucket for `month`
    ///
    /// A sum outside the `Decimal` range saturates at `Decimal::MAX` or
    /// `Decimal::MIN`.
    pub fn add(&mut self, month: NaiveDate, amount: Decimal) {
        let bucket = self.amounts.entry(month).or_insert(Decimal::ZERO);
        *bucket = bucket.checked_add(amount).unwrap_or_else(|| {
            debug!(label = %self.label, %month, "monthly sum out of range, saturating");
            if amount.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            }
        });
    }

    /// Amount recorded for `month`, zero when absent
    pub fn amount_for(&self, month: NaiveDate) -> Decimal {
        self.amounts.get(&month).copied().unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates_per_month() {
        let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let april = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();

        let mut summary = Summary::new("Groceries");
        summary.add(march, Decimal::new(-1250, 2));
        summary.add(march, Decimal::new(-750, 2));
        summary.add(april, Decimal::new(-100, 2));

        assert_eq!(summary.amount_for(march), Decimal::new(-2000, 2));
        assert_eq!(summary.amount_for(april), Decimal::new(-100, 2));
        assert_eq!(summary.amounts.len(), 2);
    }

    #[test]
    fn test_add_saturates_instead_of_overflowing() {
        let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let mut summary = Summary::new("Total");
        summary.add(march, Decimal::MAX);
        summary.add(march, Decimal::MAX);
        assert_eq!(summary.amount_for(march), Decimal::MAX);

        summary.add(march, Decimal::new(-100, 2));
        assert!(summary.amount_for(march) < Decimal::MAX);

        let mut negative = Summary::new("Total");
        negative.add(march, Decimal::MIN);
        negative.add(march, Decimal::new(-1, 0));
        assert_eq!(negative.amount_for(march), Decimal::MIN);
    }

    #[test]
    fn test_missing_month_reads_as_zero() {
        let summary = Summary::new("Rent");
        let may = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(summary.amount_for(may), Decimal::ZERO);
        assert!(summary.amounts.is_empty());
    }
}
