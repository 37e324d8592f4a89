//! Analysis plan - everything a run asks of the collaborator besides the samples.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{
    CeTableOptions, CepNmbPlotOptions, MinSamplesPlotOptions, PathTemplate, WtpRange,
};
use crate::domain::foundation::{SampleCount, ValidationError};

/// Where each collaborator artifact goes, templated by sample count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTemplates {
    pub cep_nmb_plot: PathTemplate,
    pub ce_table: PathTemplate,
    pub min_samples_plot: PathTemplate,
    pub min_samples_table: PathTemplate,
}

/// Concrete artifact paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub cep_nmb_plot: PathBuf,
    pub ce_table: PathBuf,
    pub min_samples_plot: PathBuf,
    pub min_samples_table: PathBuf,
}

impl OutputTemplates {
    pub fn render(&self, n: SampleCount) -> OutputPaths {
        OutputPaths {
            cep_nmb_plot: self.cep_nmb_plot.render(n),
            ce_table: self.ce_table.render(n),
            min_samples_plot: self.min_samples_plot.render(n),
            min_samples_table: self.min_samples_table.render(n),
        }
    }
}

impl Default for OutputTemplates {
    fn default() -> Self {
        Self {
            cep_nmb_plot: PathTemplate("figs/cep nmb N={n}.png".to_string()),
            ce_table: PathTemplate("tables/ce table N={n}.csv".to_string()),
            min_samples_plot: PathTemplate("figs/min n N={n}.png".to_string()),
            min_samples_table: PathTemplate("tables/min n N={n}.csv".to_string()),
        }
    }
}

impl OutputPaths {
    /// Paths in the order the collaborator operations run.
    pub fn to_vec(&self) -> Vec<PathBuf> {
        vec![
            self.cep_nmb_plot.clone(),
            self.ce_table.clone(),
            self.min_samples_plot.clone(),
            self.min_samples_table.clone(),
        ]
    }
}

/// Context flags and per-operation options for an analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPlan {
    pub if_paired: bool,
    pub wtp_range: WtpRange,
    pub cep_nmb: CepNmbPlotOptions,
    pub ce_table: CeTableOptions,
    /// Shared by the minimum-sample plot and table; the table ignores the bootstrap count.
    pub min_samples: MinSamplesPlotOptions,
    pub outputs: OutputTemplates,
}

impl AnalysisPlan {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.cep_nmb.validate()?;
        self.ce_table.validate()?;
        self.min_samples.validate()?;
        Ok(())
    }
}

impl Default for AnalysisPlan {
    fn default() -> Self {
        Self {
            if_paired: true,
            wtp_range: WtpRange::default(),
            cep_nmb: CepNmbPlotOptions::default(),
            ce_table: CeTableOptions::default(),
            min_samples: MinSamplesPlotOptions::default(),
            outputs: OutputTemplates::default(),
        }
    }
}
