//! I/O module
//!
//! Handles ledger parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - Cell parsing, row conversion, report serialization
//! - `ledger_reader` - Streaming ledger reader with iterator interface

pub mod csv_format;
pub mod ledger_reader;

pub use csv_format::{convert_ledger_row, report_months, write_report_csv};
pub use ledger_reader::LedgerReader;
