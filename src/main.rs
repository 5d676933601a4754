//! Monthly balance CLI
//!
//! Reads a bank ledger, sorts every transaction into a configured category,
//! and writes a CSV with one row per month and one column per category.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --config config.json
//! cargo run -- -c config.json --as-of 2024-06-30
//! cargo run -- -c config.json --log-level debug
//! ```
//!
//! Input and output locations, column positions, label patterns and the stop
//! date all come from the configuration file.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (config unreadable, ledger unopenable, bad stop date, output uncreatable)

use monthly_balance::cli;
use monthly_balance::logging;
use monthly_balance::pipeline::ReportPipeline;
use std::process;

fn main() {
    let args = cli::parse_args();
    logging::setup_logging(&args.log_level);

    let result = ReportPipeline::from_config_file(&args.config, args.as_of_date())
        .and_then(|pipeline| pipeline.run());

    if let Err(e) = result {
        println!("Error: {}", e);
        process::exit(1);
    }
}
