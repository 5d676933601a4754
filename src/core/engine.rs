//! Summary engine
//!
//! Routes each transaction into buckets and sums amounts per month.
//!
//! The engine enforces:
//! - Exactly one of {configured label, `Uncaptured`} receives each transaction
//! - `Total` receives every transaction
//! - Output order is configured labels, then `Uncaptured`, then `Total`

use crate::core::classifier::LabelSet;
use crate::types::{Summary, Transaction, TOTAL_LABEL, UNCAPTURED_LABEL};

/// Aggregates transactions into per-label monthly summaries
pub struct SummaryEngine {
    labels: LabelSet,
    /// One summary per configured label, same order as `labels`
    matched: Vec<Summary>,
    uncaptured: Summary,
    total: Summary,
    processed: usize,
    uncaptured_count: usize,
}

impl SummaryEngine {
    /// Create an engine with one empty bucket per label
    pub fn new(labels: LabelSet) -> Self {
        let matched = labels.names().map(Summary::new).collect();

        SummaryEngine {
            labels,
            matched,
            uncaptured: Summary::new(UNCAPTURED_LABEL),
            total: Summary::new(TOTAL_LABEL),
            processed: 0,
            uncaptured_count: 0,
        }
    }

    /// Add one transaction to its label bucket (or `Uncaptured`) and to `Total`
    pub fn process(&mut self, transaction: &Transaction) {
        let bucket = match self.labels.classify(&transaction.description) {
            Some(index) => &mut self.matched[index],
            None => {
                self.uncaptured_count += 1;
                &mut self.uncaptured
            }
        };
        bucket.add(transaction.month, transaction.amount);
        self.total.add(transaction.month, transaction.amount);
        self.processed += 1;
    }

    /// Number of transactions seen so far
    pub fn processed(&self) -> usize {
        self.processed
    }

    /// Number of transactions that matched no configured label
    pub fn uncaptured(&self) -> usize {
        self.uncaptured_count
    }

    /// Finish aggregation
    ///
    /// Returns configured labels in declaration order, followed by
    /// `Uncaptured` and `Total`.
    pub fn into_summaries(self) -> Vec<Summary> {
        let mut summaries = self.matched;
        summaries.push(self.uncaptured);
        summaries.push(self.total);
        summaries
    }
}

/// Classify and aggregate a full transaction sequence
pub fn summarize(transactions: &[Transaction], labels: LabelSet) -> Vec<Summary> {
    let mut engine = SummaryEngine::new(labels);
    for transaction in transactions {
        engine.process(transaction);
    }

    tracing::info!(
        transactions = engine.processed(),
        uncaptured = engine.uncaptured(),
        "summarized transactions"
    );

    engine.into_summaries()
}
