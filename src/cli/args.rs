use chrono::{Local, NaiveDate};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Long flags that may also be written with a single dash (`-config x.json`)
const SINGLE_DASH_FLAGS: [&str; 3] = ["config", "as-of", "log-level"];

/// Summarize a bank ledger into a monthly per-category report
#[derive(Parser, Debug)]
#[command(name = "monthly-balance", version)]
#[command(about = "Summarize a bank ledger into a monthly per-category CSV report", long_about = None)]
pub struct CliArgs {
    /// Path to the JSON configuration file
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        default_value = "../../config.json",
        help = "Path to configuration file"
    )]
    pub config: PathBuf,

    /// Report as if today were this date (most recent month exported)
    #[arg(
        long = "as-of",
        value_name = "YYYY-MM-DD",
        value_parser = parse_date,
        help = "Date whose month is the first report row (default: today)"
    )]
    pub as_of: Option<NaiveDate>,

    /// Verbosity of diagnostics written to stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level: trace, debug, info, warn, error (RUST_LOG overrides)"
    )]
    pub log_level: String,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}': {} (expected YYYY-MM-DD)", value, e))
}

/// Rewrite `-flag` and `-flag=value` into their `--` form
///
/// Applies only to the flags in `SINGLE_DASH_FLAGS`, and stops at a bare `--`.
/// Without this, clap would read `-config` as `-c onfig`.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_terminator = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_terminator {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                after_terminator = true;
                return arg;
            }

            let Some(rest) = text.strip_prefix('-').filter(|r| !r.starts_with('-')) else {
                return arg;
            };
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if SINGLE_DASH_FLAGS.contains(&name) {
                OsString::from(format!("-{}", text))
            } else {
                arg
            }
        })
        .collect()
}

impl CliArgs {
    /// Parse arguments, accepting single-dash long flags
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    /// The `--as-of` date, or the local current date
    pub fn as_of_date(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }
}
