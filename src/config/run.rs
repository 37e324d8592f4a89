//! Run configuration

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use super::error::{ConfigError, ValidationError};
use crate::domain::foundation::SampleCount;
use crate::domain::sampling::Roster;

/// Which runs to perform and with which strategies
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Seed of every run's random stream
    #[serde(default)]
    pub seed: u32,

    /// One run per sample count, in order
    #[serde(
        default = "default_sample_counts",
        deserialize_with = "super::one_or_many::deserialize"
    )]
    pub sample_counts: Vec<usize>,

    /// YAML roster file; the demonstration roster is used when unset
    pub roster_path: Option<PathBuf>,

    /// Write the raw samples of each run as CSV
    #[serde(default = "default_export_samples")]
    pub export_samples: bool,
}

impl RunConfig {
    /// Sample counts as validated values
    pub fn sample_counts(&self) -> Result<Vec<SampleCount>, ValidationError> {
        if self.sample_counts.is_empty() {
            return Err(ValidationError::MissingRequired("RUN__SAMPLE_COUNTS"));
        }
        self.sample_counts
            .iter()
            .map(|&n| SampleCount::try_new(n).map_err(ValidationError::from))
            .collect()
    }

    /// Load the configured roster
    pub fn roster(&self) -> Result<Roster, ConfigError> {
        let Some(path) = &self.roster_path else {
            return Ok(Roster::demonstration());
        };

        let yaml = fs::read_to_string(path).map_err(|e| ConfigError::RosterLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Roster::from_yaml_str(&yaml).map_err(|e| ConfigError::RosterLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate run configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.sample_counts()?;
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            sample_counts: default_sample_counts(),
            roster_path: None,
            export_samples: default_export_samples(),
        }
    }
}

fn default_sample_counts() -> Vec<usize> {
    vec![200, 2000]
}

fn default_export_samples() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_config_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.seed, 0);
        let counts: Vec<_> = config.sample_counts().unwrap().iter().map(|n| n.value()).collect();
        assert_eq!(counts, vec![200, 2000]);
        assert!(config.export_samples);
    }

    #[test]
    fn test_zero_sample_count_rejected() {
        let config = RunConfig {
            sample_counts: vec![200, 0],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::Domain(_))));
    }

    #[test]
    fn test_empty_sample_counts_rejected() {
        let config = RunConfig {
            sample_counts: vec![],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_default_roster_is_demonstration() {
        let roster = RunConfig::default().roster().unwrap();
        assert_eq!(roster, Roster::demonstration());
    }

    #[test]
    fn test_roster_from_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("roster.yaml");
        fs::write(
            &path,
            "- { name: P, cost: { mean: 5, stdev: 1 }, effect: { mean: 1, stdev: 0.1 }, color: teal }\n",
        )
        .unwrap();

        let config = RunConfig {
            roster_path: Some(path),
            ..Default::default()
        };
        let roster = config.roster().unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name.as_str(), "P");
    }

    #[test]
    fn test_missing_roster_file_reports_path() {
        let config = RunConfig {
            roster_path: Some(PathBuf::from("/definitely/not/here.yaml")),
            ..Default::default()
        };
        let err = config.roster().unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }

    #[test]
    fn test_invalid_roster_file_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("roster.yaml");
        fs::write(
            &path,
            "- { name: P, cost: { mean: 5, stdev: -1 }, effect: { mean: 1, stdev: 0.1 }, color: teal }\n",
        )
        .unwrap();

        let config = RunConfig {
            roster_path: Some(path),
            ..Default::default()
        };
        assert!(matches!(config.roster(), Err(ConfigError::RosterLoad { .. })));
    }
}
