//! End-to-end integration tests
//!
//! These tests validate the complete report pipeline using predefined
//! fixtures. Each test:
//! 1. Loads config.json from a fixture directory
//! 2. Redirects the output file into a temporary directory
//! 3. Runs the pipeline with a fixed "today" of 2024-04-18
//! 4. Compares the written report with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path scenarios, including a month with no transactions
//! - Fixed-amount tagging of descriptionless transactions
//! - Label precedence, invalid patterns and malformed ledger cells

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use monthly_balance::config::{Config, FileLocation};
    use monthly_balance::{ReportError, ReportPipeline};
    use rstest::rstest;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 18).unwrap()
    }

    /// Run a fixture by processing its ledger and comparing with expected.csv
    fn run_test_fixture(fixture_name: &str) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let config_path = format!("{}/config.json", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&config_path).exists(),
            "Config file not found: {}",
            config_path
        );

        let mut config = Config::load(Path::new(&config_path))
            .unwrap_or_else(|e| panic!("Failed to load config: {}", e));

        let out_dir = TempDir::new().expect("Failed to create temp dir");
        config.output = FileLocation {
            path: format!("{}/", out_dir.path().display()),
            name: "report.csv".to_string(),
        };

        ReportPipeline::new(config, as_of())
            .run()
            .unwrap_or_else(|e| panic!("Failed to build report: {}", e));

        let actual_output = fs::read_to_string(out_dir.path().join("report.csv"))
            .unwrap_or_else(|e| panic!("Failed to read report: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("happy_path")]
    #[case("fixed_amounts")]
    #[case("label_precedence")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }

    #[test]
    fn test_pipeline_stages_on_fixture() {
        let config = Config::load(Path::new("tests/fixtures/happy_path/config.json")).unwrap();
        let pipeline = ReportPipeline::new(config, as_of());

        let transactions = pipeline.load_transactions().unwrap();
        assert_eq!(transactions.len(), 4);

        let summaries = pipeline.summarize(&transactions);
        let labels: Vec<_> = summaries.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Income", "Uncaptured", "Total"]);
    }

    #[test]
    fn test_missing_config_is_fatal() {
        let result = ReportPipeline::from_config_file(Path::new("tests/fixtures/nope.json"), as_of());
        assert!(matches!(result, Err(ReportError::ConfigRead { .. })));
    }

    #[test]
    fn test_malformed_config_is_fatal() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        fs::write(&path, "{ \"labels\": [ {\"Label\": ").unwrap();

        let result = ReportPipeline::from_config_file(&path, as_of());
        assert!(matches!(result, Err(ReportError::ConfigParse { .. })));
    }
}
