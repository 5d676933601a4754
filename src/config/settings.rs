//! Report configuration
//!
//! Mirrors the JSON configuration file:
//!
//! ```json
//! {
//!   "input": {"path": "data/", "name": "ledger.csv"},
//!   "output": {"path": "data/", "name": "report.csv"},
//!   "columns": {"description": 1, "debit": 2, "credit": 3, "date": 0,
//!               "regexColumns": [1, 4], "fixedAmounts": {"Rent": 1250}},
//!   "labels": [{"Label": "Income", "Regex": "PAYROLL"}],
//!   "stopDate": "2023-12-01"
//! }
//! ```
//!
//! No field is required. Anything absent takes its zero value (empty string,
//! column 0, no rules), which can silently point several columns at the same
//! cell. This is accepted behaviour and is not validated.

use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::ReportError;

/// Top-level configuration, loaded once and read-only for the run
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: FileLocation,
    pub output: FileLocation,
    pub columns: Columns,
    pub labels: Vec<LabelRule>,
    #[serde(rename = "stopDate")]
    pub stop_date: String,
}

/// Directory prefix and file name of an input or output file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FileLocation {
    pub path: String,
    pub name: String,
}

impl FileLocation {
    /// `path` and `name` concatenated verbatim
    ///
    /// `path` is expected to carry its own trailing separator.
    pub fn full_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}", self.path, self.name))
    }
}

/// Zero-based column positions in the ledger, plus fixed-amount rules
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Columns {
    pub description: usize,
    pub debit: usize,
    pub credit: usize,
    pub date: usize,
    /// Columns joined with `_` to form the matched text; empty means the
    /// `description` column alone
    #[serde(rename = "regexColumns")]
    pub regex_columns: Vec<usize>,
    #[serde(rename = "fixedAmounts", deserialize_with = "ordered_fixed_amounts")]
    pub fixed_amounts: Vec<FixedAmount>,
}

/// Tag applied to transactions whose debit or credit is a whole multiple of
/// `amount`
#[derive(Debug, Clone, PartialEq)]
pub struct FixedAmount {
    pub name: String,
    pub amount: Decimal,
}

/// A named category and the pattern matched against descriptions
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelRule {
    #[serde(rename = "Label", alias = "label")]
    pub name: String,
    #[serde(rename = "Regex", alias = "regex")]
    pub pattern: String,
}

impl LabelRule {
    pub fn new(name: &str, pattern: &str) -> Self {
        LabelRule {
            name: name.to_string(),
            pattern: pattern.to_string(),
        }
    }
}

// `fixedAmounts` is a JSON object; keep its entries in document order so
// rule evaluation is deterministic.
fn ordered_fixed_amounts<'de, D>(deserializer: D) -> Result<Vec<FixedAmount>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FixedAmountsVisitor;

    impl<'de> Visitor<'de> for FixedAmountsVisitor {
        type Value = Vec<FixedAmount>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of label names to amounts")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut rules = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, amount)) = map.next_entry::<String, Decimal>()? {
                rules.push(FixedAmount { name, amount });
            }
            Ok(rules)
        }
    }

    deserializer.deserialize_any(FixedAmountsVisitor)
}

impl Config {
    /// Parse configuration from JSON text
    ///
    /// `origin` is only used in the error message.
    pub fn from_json(json: &str, origin: &str) -> Result<Self, ReportError> {
        serde_json::from_str(json).map_err(|e| ReportError::config_parse(origin, e))
    }

    /// Read and parse the configuration file at `path`
    ///
    /// # Errors
    ///
    /// - [`ReportError::ConfigRead`] if the file cannot be read
    /// - [`ReportError::ConfigParse`] if the contents are not valid JSON of
    ///   the expected shape
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let origin = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| ReportError::config_read(&origin, e))?;
        let config = Self::from_json(&contents, &origin)?;

        tracing::info!(
            path = %origin,
            labels = config.labels.len(),
            fixed_amounts = config.columns.fixed_amounts.len(),
            "loaded configuration"
        );

        Ok(config)
    }
}
