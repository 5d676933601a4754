//! Core business logic module
//!
//! This module contains the classification and aggregation components:
//! - `classifier` - Ordered, first-match-wins label patterns
//! - `engine` - Per-label monthly aggregation

pub mod classifier;
pub mod engine;

pub use classifier::LabelSet;
pub use engine::{summarize, SummaryEngine};
