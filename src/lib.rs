//! Monthly Balance Library
//! # Overview
//!
//! This library turns a bank-style transaction ledger into a pivoted monthly
//! report: one row per month, one column per user-defined category.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, Summary, ReportError)
//! - [`cli`] - CLI arguments parsing
//! - [`config`] - JSON configuration (files, columns, fixed amounts, labels)
//! - [`core`] - Business logic components:
//!   - [`core::classifier`] - Ordered, first-match-wins label patterns
//!   - [`core::engine`] - Per-label monthly aggregation
//! - [`io`] - Ledger reading and report writing
//! - [`pipeline`] - The linear run tying the stages together
//! - [`logging`] - Diagnostics bootstrap
//!
//! # Classification
//!
//! Every transaction is added to exactly two buckets:
//!
//! - **Matched label**: the first configured label whose pattern matches the
//!   description, or **Uncaptured** when none does
//! - **Total**: always
//!
//! Transactions without a useful description can still be labelled through
//! fixed amounts: a debit or credit that is a whole multiple of a configured
//! amount gets `_<name>` appended to its description, which a label pattern
//! can then target.
//!
//! # Report Window
//!
//! Rows run from the current month backwards, one per month, while the month
//! is strictly after the configured stop date.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod types;

pub use config::{Config, LabelRule};
pub use self::core::{LabelSet, SummaryEngine};
pub use pipeline::ReportPipeline;
pub use types::{ReportError, Summary, Transaction};
