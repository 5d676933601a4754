//! Error types for the monthly balance report
//!
//! Only run-level failures are represented here. Problems inside a single
//! ledger row (malformed amount, malformed date, missing column) never become
//! errors: they degrade to zero values in [`crate::io::csv_format`].
//!
//! # Error Categories
//!
//! - **Configuration Errors**: config file unreadable or not valid JSON
//! - **Input Errors**: ledger file cannot be opened or read
//! - **Output Errors**: report file cannot be created or written
//! - **Report Window Errors**: stop date cannot be parsed

use thiserror::Error;

/// Main error type for the report pipeline
///
/// Every variant is fatal: the pipeline stops at the first one and the
/// binary reports it once.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {message}")]
    ConfigRead { path: String, message: String },

    /// Configuration file is not valid JSON for the expected shape
    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParse { path: String, message: String },

    /// Ledger file could not be opened
    #[error("Failed to open input file '{path}': {message}")]
    InputOpen { path: String, message: String },

    /// I/O failure while streaming the ledger file
    #[error("Failed to read input{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InputRead {
        /// Line number where the failure occurred (if available)
        line: Option<u64>,
        message: String,
    },

    /// Report file could not be created
    #[error("Failed to create output file '{path}': {message}")]
    OutputCreate { path: String, message: String },

    /// I/O failure while writing the report
    #[error("Failed to write output: {message}")]
    OutputWrite { message: String },

    /// Configured stop date is not `YYYY-MM-DD`
    #[error("Invalid stop date '{value}': expected YYYY-MM-DD")]
    InvalidStopDate { value: String },
}

impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        ReportError::OutputWrite {
            message: error.to_string(),
        }
    }
}

// csv::Error only surfaces while reading the ledger; the writer maps its own
// errors explicitly.
impl From<csv::Error> for ReportError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ReportError::InputRead {
            line,
            message: error.to_string(),
        }
    }
}

impl ReportError {
    pub fn config_read(path: &str, error: impl std::fmt::Display) -> Self {
        ReportError::ConfigRead {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    pub fn config_parse(path: &str, error: impl std::fmt::Display) -> Self {
        ReportError::ConfigParse {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    pub fn input_open(path: &str, error: impl std::fmt::Display) -> Self {
        ReportError::InputOpen {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    pub fn output_create(path: &str, error: impl std::fmt::Display) -> Self {
        ReportError::OutputCreate {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    pub fn output_write(error: impl std::fmt::Display) -> Self {
        ReportError::OutputWrite {
            message: error.to_string(),
        }
    }

    pub fn invalid_stop_date(value: &str) -> Self {
        ReportError::InvalidStopDate {
            value: value.to_string(),
        }
    }
}
