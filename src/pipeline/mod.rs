//! Report pipeline
//!
//! The whole program is one linear pass:
//!
//! 1. load the configuration
//! 2. load transactions from the ledger
//! 3. classify and aggregate them into summaries
//! 4. export the pivoted report
//!
//! Each stage takes the previous stage's output as a plain value and returns
//! a `Result`; the first error ends the run. File handles live only inside the
//! stage that opened them.

use crate::config::Config;
use crate::core::{summarize, LabelSet};
use crate::io::csv_format::parse_stop_date;
use crate::io::{report_months, write_report_csv, LedgerReader};
use crate::types::{ReportError, Summary, Transaction};
use chrono::NaiveDate;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Values threaded through one report run
#[derive(Debug, Clone)]
pub struct ReportPipeline {
    config: Config,
    /// Any date in the most recent month to report
    as_of: NaiveDate,
}

impl ReportPipeline {
    /// Load the configuration file and prepare a run
    pub fn from_config_file(path: &Path, as_of: NaiveDate) -> Result<Self, ReportError> {
        Ok(Self::new(Config::load(path)?, as_of))
    }

    pub fn new(config: Config, as_of: NaiveDate) -> Self {
        ReportPipeline { config, as_of }
    }

    /// Read every ledger row, in file order
    ///
    /// # Errors
    ///
    /// Fails if the ledger cannot be opened or a read fails mid-file.
    pub fn load_transactions(&self) -> Result<Vec<Transaction>, ReportError> {
        let path = self.config.input.full_path();
        let reader = LedgerReader::new(&path, &self.config.columns)?;
        let transactions = reader.collect::<Result<Vec<_>, _>>()?;

        tracing::info!(path = %path.display(), rows = transactions.len(), "loaded ledger");

        Ok(transactions)
    }

    /// Classify and aggregate transactions by configured label
    pub fn summarize(&self, transactions: &[Transaction]) -> Vec<Summary> {
        let labels = LabelSet::new(&self.config.labels);
        summarize(transactions, labels)
    }

    /// Write the report to the configured output file
    ///
    /// The stop date is validated before the output file is created.
    ///
    /// # Errors
    ///
    /// - [`ReportError::InvalidStopDate`] if `stopDate` is not `YYYY-MM-DD`
    /// - [`ReportError::OutputCreate`] if the output file cannot be created
    /// - [`ReportError::OutputWrite`] if writing fails
    pub fn export(&self, summaries: &[Summary]) -> Result<(), ReportError> {
        let stop = parse_stop_date(&self.config.stop_date)?;
        let months = report_months(self.as_of, stop);

        let path = self.config.output.full_path();
        let file = File::create(&path)
            .map_err(|e| ReportError::output_create(&path.display().to_string(), e))?;
        let mut output = BufWriter::new(file);

        write_report_csv(summaries, &months, &mut output)?;

        tracing::info!(
            path = %path.display(),
            months = months.len(),
            labels = summaries.len(),
            "wrote report"
        );

        Ok(())
    }

    /// Run every stage in order
    pub fn run(&self) -> Result<(), ReportError> {
        let transactions = self.load_transactions()?;
        let summaries = self.summarize(&transactions);
        self.export(&summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Columns, FileLocation, LabelRule};
    use std::fs;
    use tempfile::TempDir;

    fn location(dir: &TempDir, name: &str) -> FileLocation {
        FileLocation {
            path: format!("{}/", dir.path().display()),
            name: name.to_string(),
        }
    }

    fn config(dir: &TempDir, stop_date: &str) -> Config {
        Config {
            input: location(dir, "ledger.csv"),
            output: location(dir, "report.csv"),
            columns: Columns {
                description: 0,
                debit: 1,
                credit: 2,
                date: 3,
                regex_columns: vec![],
                fixed_amounts: vec![],
            },
            labels: vec![LabelRule::new("Income", "Paycheck")],
            stop_date: stop_date.to_string(),
        }
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 18).unwrap()
    }

    #[test]
    fn test_run_writes_report() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(
            dir.path().join("ledger.csv"),
            "Coffee Shop,5.00,0,3/15/2024\nPaycheck,0,1000.00,3/2/2024\n",
        )
        .unwrap();

        let pipeline = ReportPipeline::new(config(&dir, "2024-02-01"), as_of());
        pipeline.run().unwrap();

        let report = fs::read_to_string(dir.path().join("report.csv")).unwrap();
        assert_eq!(
            report,
            ",Income,Uncaptured,Total\n\
             2024-04-01,0.00,0.00,0.00\n\
             2024-03-01,1000.00,-5.00,995.00\n"
        );
    }

    #[test]
    fn test_missing_input_fails_before_output_is_created() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let pipeline = ReportPipeline::new(config(&dir, "2024-02-01"), as_of());

        let result = pipeline.run();
        assert!(matches!(result, Err(ReportError::InputOpen { .. })));
        assert!(!dir.path().join("report.csv").exists());
    }

    #[test]
    fn test_invalid_stop_date_fails_before_output_is_created() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("ledger.csv"), "Paycheck,0,10,3/2/2024\n").unwrap();

        let pipeline = ReportPipeline::new(config(&dir, "March 2024"), as_of());

        let result = pipeline.run();
        assert_eq!(result, Err(ReportError::invalid_stop_date("March 2024")));
        assert!(!dir.path().join("report.csv").exists());
    }

    #[test]
    fn test_uncreatable_output_is_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut config = config(&dir, "2024-02-01");
        config.output.path = format!("{}/missing-dir/", dir.path().display());

        let pipeline = ReportPipeline::new(config, as_of());
        let result = pipeline.export(&[]);
        assert!(matches!(result, Err(ReportError::OutputCreate { .. })));
    }

    #[test]
    fn test_from_config_file_missing() {
        let result =
            ReportPipeline::from_config_file(Path::new("no/such/config.json"), as_of());
        assert!(matches!(result, Err(ReportError::ConfigRead { .. })));
    }
}
