//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CEA_SAMPLER` prefix and nested values use double underscores as separators.
//! An optional `cea-sampler.{toml,yaml,json}` file in the working directory is
//! read first; environment variables override it.
//!
//! # Example
//!
//! ```no_run
//! use cea_sampler::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Writing outputs under {}", config.output.root.display());
//! ```

mod analysis;
mod error;
mod logging;
mod one_or_many;
mod output;
mod run;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use output::OutputConfig;
pub use run::RunConfig;

use serde::Deserialize;

use crate::domain::cea::AnalysisPlan;

/// Root application configuration
///
/// Every section has defaults reproducing the demonstration runs, so an
/// empty environment is a valid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Seed, sample counts and roster
    #[serde(default)]
    pub run: RunConfig,

    /// Output root and path templates
    #[serde(default)]
    pub output: OutputConfig,

    /// CEA collaborator options
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `cea-sampler.*` from the working directory if present
    /// 3. Reads environment variables with `CEA_SAMPLER` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CEA_SAMPLER__RUN__SEED=7` -> `run.seed = 7`
    /// - `CEA_SAMPLER__RUN__SAMPLE_COUNTS=200,2000` -> `run.sample_counts = [200, 2000]`
    /// - `CEA_SAMPLER__ANALYSIS__EPSILONS=1000,5000` -> `analysis.epsilons = [1000.0, 5000.0]`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("cea-sampler").required(false))
            .add_source(
                config::Environment::default()
                    .prefix("CEA_SAMPLER")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("run.sample_counts")
                    .with_list_parse_key("analysis.epsilons")
                    .with_list_parse_key("analysis.alphas"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.run.validate()?;
        self.output.validate()?;
        self.analysis.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// The analysis plan described by the `analysis` and `output` sections
    pub fn plan(&self) -> Result<AnalysisPlan, ValidationError> {
        self.analysis.plan(self.output.templates()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "CEA_SAMPLER__RUN__SEED",
        "CEA_SAMPLER__RUN__SAMPLE_COUNTS",
        "CEA_SAMPLER__RUN__EXPORT_SAMPLES",
        "CEA_SAMPLER__OUTPUT__ROOT",
        "CEA_SAMPLER__ANALYSIS__WTP_MAX",
        "CEA_SAMPLER__ANALYSIS__EPSILONS",
        "CEA_SAMPLER__ANALYSIS__ALPHAS",
        "CEA_SAMPLER__LOGGING__FORMAT",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.run.seed, 0);
        assert_eq!(config.run.sample_counts, vec![200, 2000]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CEA_SAMPLER__RUN__SEED", "7");
        env::set_var("CEA_SAMPLER__RUN__SAMPLE_COUNTS", "50,500");
        env::set_var("CEA_SAMPLER__RUN__EXPORT_SAMPLES", "false");
        env::set_var("CEA_SAMPLER__OUTPUT__ROOT", "/tmp/cea-out");
        env::set_var("CEA_SAMPLER__ANALYSIS__WTP_MAX", "150000");
        env::set_var("CEA_SAMPLER__ANALYSIS__EPSILONS", "500,1000");
        env::set_var("CEA_SAMPLER__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.run.seed, 7);
        assert_eq!(config.run.sample_counts, vec![50, 500]);
        assert!(!config.run.export_samples);
        assert_eq!(config.output.root, std::path::PathBuf::from("/tmp/cea-out"));
        assert_eq!(config.analysis.wtp_max, 150_000.0);
        assert_eq!(config.analysis.epsilons, vec![500.0, 1000.0]);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_single_value_lists_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CEA_SAMPLER__RUN__SAMPLE_COUNTS", "2000");
        env::set_var("CEA_SAMPLER__ANALYSIS__EPSILONS", "1000");
        env::set_var("CEA_SAMPLER__ANALYSIS__ALPHAS", "0.01");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.run.sample_counts, vec![2000]);
        assert_eq!(config.analysis.epsilons, vec![1000.0]);
        assert_eq!(config.analysis.alphas, vec![0.01]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_plan_uses_output_templates() {
        let config = AppConfig::default();
        let plan = config.plan().unwrap();
        assert_eq!(plan.outputs.ce_table.as_str(), "tables/ce table N={n}.csv");
        assert_eq!(plan.min_samples.num_bootstrap_samples, 1_000);
    }

    #[test]
    fn test_validate_rejects_zero_sample_count() {
        let mut config = AppConfig::default();
        config.run.sample_counts = vec![0];
        assert!(config.validate().is_err());
    }
}
