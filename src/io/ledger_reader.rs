//! Ledger reader with iterator interface
//!
//! Streams [`Transaction`]s out of a bank ledger file. The file has no header
//! row and no quoting: every line is split on commas and the configured
//! column indices pick out debit, credit, date and description.
//!
//! ```no_run
//! use monthly_balance::config::Columns;
//! use monthly_balance::io::LedgerReader;
//! use std::path::Path;
//!
//! let columns = Columns::default();
//! let reader = LedgerReader::new(Path::new("ledger.csv"), &columns).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(tx) => println!("{} {} {}", tx.month, tx.amount, tx.description),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Failing to open the file is returned from `new()`
//! - An I/O failure mid-stream is yielded as an `Err` item
//! - Malformed cells never produce errors (see [`crate::io::csv_format`])
//! - Lines with no content are skipped

use crate::config::Columns;
use crate::io::csv_format::convert_ledger_row;
use crate::types::{ReportError, Transaction};
use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Streaming ledger reader
///
/// Reads one line at a time; memory use does not grow with file size.
#[derive(Debug)]
pub struct LedgerReader<'c, R = File> {
    reader: csv::Reader<R>,
    columns: &'c Columns,
    record: ByteRecord,
}

impl<'c> LedgerReader<'c, File> {
    /// Open the ledger file at `path`
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InputOpen`] if the file cannot be opened.
    pub fn new(path: &Path, columns: &'c Columns) -> Result<Self, ReportError> {
        let file =
            File::open(path).map_err(|e| ReportError::input_open(&path.display().to_string(), e))?;

        tracing::debug!(path = %path.display(), "opened ledger");

        Ok(Self::from_reader(file, columns))
    }
}

impl<'c, R: Read> LedgerReader<'c, R> {
    /// Wrap any byte source holding ledger text
    ///
    /// The CSV reader is configured to:
    /// - Treat every line as data (no header row)
    /// - Split on commas only (quotes are ordinary characters)
    /// - Trim whitespace from all fields
    /// - Allow rows of differing length
    pub fn from_reader(source: R, columns: &'c Columns) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .quoting(false)
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(source);

        Self {
            reader,
            columns,
            record: ByteRecord::new(),
        }
    }
}

impl<R: Read> Iterator for LedgerReader<'_, R> {
    type Item = Result<Transaction, ReportError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.reader.read_byte_record(&mut self.record) {
                Ok(false) => return None,
                Ok(true) => {}
                Err(e) => return Some(Err(e.into())),
            }

            if self.record.iter().all(|field| field.is_empty()) {
                continue;
            }

            // Bank exports are not always UTF-8; keep whatever decodes.
            let record = StringRecord::from_byte_record_lossy(self.record.clone());
            return Some(Ok(convert_ledger_row(|i| record.get(i), self.columns)));
        }
    }
}
