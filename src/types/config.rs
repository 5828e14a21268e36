//! Configuration structures for the ED scenario simulator
//!
//! This module contains the simulation configuration structure, its layering
//! (defaults, JSON config file, command line) and validation logic.

use super::OutputFormat;
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default values shared by the CLI, config files and request parameters
pub mod defaults {
    /// Number of patients generated when none is requested
    pub const NUM_PATIENTS: usize = 1000;

    /// Number of staff members on the roster
    pub const STAFF_COUNT: usize = 10;

    /// Length of the simulation window in days
    pub const DAYS: usize = 7;

    /// First simulated day as (year, month, day)
    pub const START_DATE: (i32, u32, u32) = (2025, 1, 15);

    /// Directory exported tables are written to
    pub const OUTPUT_DIR: &str = "generated_data";

    /// Export format name
    pub const OUTPUT_FORMAT: &str = "csv";
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ed-scenario-simulator",
    version,
    about = "ED Scenario Simulator - Generates synthetic emergency-department datasets",
    long_about = "Generates three correlated tables (patients, staff roster, bed utilization) describing a time-bounded emergency-department scenario.

EXAMPLES:
    # Run with default settings
    ed-scenario-simulator

    # Reproducible run with a smaller department
    ed-scenario-simulator --num-patients 100 --staff-count 5 --days 7 --seed 42

    # Use a configuration file
    ed-scenario-simulator --config scenario.json

    # Generate configuration template
    ed-scenario-simulator --print-config > scenario.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag, JSON)
    3. Default values (lowest priority)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of patients to simulate
    #[arg(
        long,
        visible_alias = "rows",
        help = "Number of patients to simulate",
        long_help = "Number of patient rows to generate. Must be greater than 0. Default: 1000"
    )]
    pub num_patients: Option<usize>,

    /// Number of staff members on the roster
    #[arg(
        long,
        help = "Number of staff members",
        long_help = "Number of staff members on the roster. Must be greater than 0. Default: 10"
    )]
    pub staff_count: Option<usize>,

    /// Number of days to simulate
    #[arg(
        long,
        help = "Number of days to simulate",
        long_help = "Length of the simulation window in days. Must be greater than 0. Default: 7"
    )]
    pub days: Option<usize>,

    /// First simulated day
    #[arg(long, help = "First simulated day (YYYY-MM-DD)")]
    pub start_date: Option<NaiveDate>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Output format for exported tables
    #[arg(
        long,
        help = "Output format (csv or jsonl)",
        long_help = "Format of the exported tables. Supported formats: csv, jsonl. Default: csv"
    )]
    pub output_format: Option<String>,

    /// Directory the tables are written to
    #[arg(long, help = "Directory exported tables are written to")]
    pub output_dir: Option<String>,

    /// Skip writing tables and only print the summary
    #[arg(long, help = "Print the generation summary without exporting tables")]
    pub no_export: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Emit logs as JSON
    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    /// Also write logs to daily rolling files in this directory
    #[arg(long, help = "Directory for rolling log files")]
    pub log_dir: Option<String>,

    /// Dry run mode - validate configuration without generating
    #[arg(long, help = "Validate configuration without generating data")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of patients to simulate
    pub num_patients: Option<usize>,

    /// Number of staff members on the roster
    pub staff_count: Option<usize>,

    /// Number of days to simulate
    pub days: Option<usize>,

    /// First simulated day
    pub start_date: Option<NaiveDate>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output format for exported tables
    pub output_format: Option<String>,

    /// Directory exported tables are written to
    pub output_dir: Option<String>,
}

/// Configuration for one ED scenario generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of patients to simulate
    pub num_patients: usize,

    /// Number of staff members on the roster
    pub staff_count: usize,

    /// Number of days to simulate
    pub days: usize,

    /// First simulated day; the window starts at midnight UTC
    pub start_date: NaiveDate,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output format for exported tables
    pub output_format: String,

    /// Directory exported tables are written to
    pub output_dir: String,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    /// Patient count is invalid
    #[error("Patient count must be greater than 0, got {0}")]
    InvalidPatientCount(i64),

    /// Staff count is invalid
    #[error("Staff count must be greater than 0, got {0}")]
    InvalidStaffCount(i64),

    /// Days count is invalid
    #[error("Days count must be greater than 0, got {0}")]
    InvalidDaysCount(i64),

    /// Output format is not supported
    #[error("Unsupported output format: {0} (supported: csv, jsonl)")]
    InvalidOutputFormat(String),
}

/// Default first simulated day
pub fn default_start_date() -> NaiveDate {
    let (year, month, day) = defaults::START_DATE;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_patients: defaults::NUM_PATIENTS,
            staff_count: defaults::STAFF_COUNT,
            days: defaults::DAYS,
            start_date: default_start_date(),
            seed: None,
            output_format: defaults::OUTPUT_FORMAT.to_string(),
            output_dir: defaults::OUTPUT_DIR.to_string(),
        }
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file, filling gaps with defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            num_patients: config_file.num_patients.unwrap_or(defaults.num_patients),
            staff_count: config_file.staff_count.unwrap_or(defaults.staff_count),
            days: config_file.days.unwrap_or(defaults.days),
            start_date: config_file.start_date.unwrap_or(defaults.start_date),
            seed: config_file.seed.or(defaults.seed),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            output_dir: config_file.output_dir.unwrap_or(defaults.output_dir),
        }
    }

    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.num_patients {
            config.num_patients = value;
        }
        if let Some(value) = args.staff_count {
            config.staff_count = value;
        }
        if let Some(value) = args.days {
            config.days = value;
        }
        if let Some(value) = args.start_date {
            config.start_date = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.output_dir {
            config.output_dir = value;
        }
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters, including the export format
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.validate_counts()?;
        self.get_output_format()?;
        Ok(())
    }

    /// Validate only the values generation depends on
    pub fn validate_counts(&self) -> Result<(), ConfigValidationError> {
        if self.num_patients == 0 {
            return Err(ConfigValidationError::InvalidPatientCount(0));
        }

        if self.staff_count == 0 {
            return Err(ConfigValidationError::InvalidStaffCount(0));
        }

        if self.days == 0 {
            return Err(ConfigValidationError::InvalidDaysCount(0));
        }

        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, ConfigValidationError> {
        self.output_format
            .parse()
            .map_err(|_| ConfigValidationError::InvalidOutputFormat(self.output_format.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.staff_count, 10);
        assert_eq!(config.days, 7);
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    }

    #[test]
    fn test_zero_counts_are_rejected() {
        let config = SimulationConfig { num_patients: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidPatientCount(0)));

        let config = SimulationConfig { staff_count: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidStaffCount(0)));

        let config = SimulationConfig { days: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidDaysCount(0)));
    }

    #[test]
    fn test_unknown_output_format_is_rejected() {
        let config = SimulationConfig { output_format: "xlsx".to_string(), ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidOutputFormat(ref f)) if f == "xlsx"
        ));
    }

    #[test]
    fn test_partial_config_file_merges_with_defaults() {
        let config_file: ConfigFile =
            serde_json::from_str(r#"{"staff_count": 4, "seed": 7, "start_date": "2024-03-01"}"#)
                .unwrap();
        let config = SimulationConfig::from_config_file(config_file);

        assert_eq!(config.staff_count, 4);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(config.days, defaults::DAYS);
        assert_eq!(config.num_patients, defaults::NUM_PATIENTS);
    }

    #[test]
    fn test_print_json_round_trips() {
        let config = SimulationConfig { seed: Some(42), ..Default::default() };
        let json = config.print_json().unwrap();
        let parsed: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
