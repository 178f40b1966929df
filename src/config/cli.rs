use crate::adapters::http::{FeedSettings, DEFAULT_MAX_RECORDS, DEFAULT_RESULTS_ENDPOINT};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_archive_name, validate_output_formats, validate_path, validate_positive_number,
    validate_range, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "teer-sr")]
#[command(about = "SR H/E predictions and 4 Guti numbers from the daily teer results")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_RESULTS_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value_t = DEFAULT_MAX_RECORDS)]
    pub max_records: usize,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, default_value = "0")]
    pub retry_attempts: u32,

    #[arg(long, default_value = "1")]
    pub retry_delay_seconds: u64,

    #[arg(long, help = "Snapshot served when the feed is unavailable")]
    pub fallback_file: Option<String>,

    #[arg(long, value_delimiter = ',', default_value = "csv,tsv,json")]
    pub output_formats: Vec<String>,

    #[arg(long, default_value = "teer_predictions.zip")]
    pub archive_name: String,

    #[arg(
        long,
        help = "Print the report without writing the archive or refreshing the fallback file"
    )]
    pub no_export: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn feed_settings(&self) -> FeedSettings {
        FeedSettings {
            endpoint: self.api_endpoint.clone(),
            max_records: self.max_records,
            timeout: Duration::from_secs(self.timeout_seconds),
            retry_attempts: self.retry_attempts,
            retry_delay: Duration::from_secs(self.retry_delay_seconds),
            headers: HashMap::new(),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn max_records(&self) -> usize {
        self.max_records
    }

    fn fallback_file(&self) -> Option<&str> {
        self.fallback_file.as_deref()
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn archive_name(&self) -> &str {
        &self.archive_name
    }

    fn export_enabled(&self) -> bool {
        !self.no_export
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("output_path", &self.output_path)?;
        validate_positive_number("max_records", self.max_records, 1)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        validate_range("retry_attempts", self.retry_attempts, 0, 10)?;
        if let Some(fallback) = &self.fallback_file {
            validate_path("fallback_file", fallback)?;
        }
        validate_output_formats("output_formats", &self.output_formats)?;
        validate_archive_name("archive_name", &self.archive_name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_and_validate() {
        let config = CliConfig::parse_from(["teer-sr"]);

        assert_eq!(config.api_endpoint, DEFAULT_RESULTS_ENDPOINT);
        assert_eq!(config.max_records, 20);
        assert_eq!(config.output_formats, vec!["csv", "tsv", "json"]);
        assert!(config.export_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::parse_from([
            "teer-sr",
            "--max-records",
            "5",
            "--output-formats",
            "csv",
            "--fallback-file",
            "last_known.json",
            "--no-export",
        ]);

        assert_eq!(config.max_records, 5);
        assert_eq!(config.output_formats, vec!["csv"]);
        assert_eq!(config.fallback_file(), Some("last_known.json"));
        assert!(!config.export_enabled());
        assert_eq!(config.feed_settings().max_records, 5);
    }

    #[test]
    fn test_invalid_format_fails_validation() {
        let config = CliConfig::parse_from(["teer-sr", "--output-formats", "csv,xlsx"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_records_fails_validation() {
        let config = CliConfig::parse_from(["teer-sr", "--max-records", "0"]);
        assert!(config.validate().is_err());
    }
}
