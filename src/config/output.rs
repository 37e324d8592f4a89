//! Output configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::cea::{OutputTemplates, PathTemplate};

/// Output locations; templates must contain `{n}`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory every artifact path is relative to
    pub root: PathBuf,

    /// CE plane + NMB plot
    pub cep_nmb_plot: String,

    /// CE summary table
    pub ce_table: String,

    /// Minimum Monte Carlo samples plot
    pub min_samples_plot: String,

    /// Minimum Monte Carlo samples table
    pub min_samples_table: String,

    /// Raw samples CSV
    pub samples: String,
}

impl OutputConfig {
    /// Templates for the collaborator artifacts
    pub fn templates(&self) -> Result<OutputTemplates, ValidationError> {
        Ok(OutputTemplates {
            cep_nmb_plot: PathTemplate::new(self.cep_nmb_plot.as_str())?,
            ce_table: PathTemplate::new(self.ce_table.as_str())?,
            min_samples_plot: PathTemplate::new(self.min_samples_plot.as_str())?,
            min_samples_table: PathTemplate::new(self.min_samples_table.as_str())?,
        })
    }

    /// Template for the raw samples export
    pub fn samples_template(&self) -> Result<PathTemplate, ValidationError> {
        Ok(PathTemplate::new(self.samples.as_str())?)
    }

    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.templates()?;
        self.samples_template()?;
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        let templates = OutputTemplates::default();
        Self {
            root: PathBuf::from("."),
            cep_nmb_plot: templates.cep_nmb_plot.into(),
            ce_table: templates.ce_table.into(),
            min_samples_plot: templates.min_samples_plot.into(),
            min_samples_table: templates.min_samples_table.into(),
            samples: "tables/samples N={n}.csv".to_string(),
        }
    }
}
