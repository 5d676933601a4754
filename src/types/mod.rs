//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Parsed ledger rows and month normalization
//! - `summary`: Per-label monthly totals and the implicit label names
//! - `error`: Error type for the report pipeline

pub mod error;
pub mod summary;
pub mod transaction;

pub use error::ReportError;
pub use summary::{Summary, TOTAL_LABEL, UNCAPTURED_LABEL};
pub use transaction::{first_of_month, zero_date, Transaction};
