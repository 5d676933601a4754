// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{normalize_args, CliArgs};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// Single-dash long flags (`-config path`) are accepted alongside the
/// `--config` form. If parsing fails (unknown flag, bad `--as-of` date) or `--help` is given,
/// clap prints the message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse_from(normalize_args(std::env::args_os()))
}
