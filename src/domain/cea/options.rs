//! Options for the four collaborator operations.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ensure_finite, ValidationError};

/// Figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl FigureSize {
    pub fn new(width: f64, height: f64) -> Result<Self, ValidationError> {
        ensure_positive("figure width", width)?;
        ensure_positive("figure height", height)?;
        Ok(Self { width, height })
    }
}

/// Cost-effectiveness plane plus net-monetary-benefit lines, as one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CepNmbPlotOptions {
    pub fig_size: FigureSize,
    /// Applied to costs on the CE plane (0.001 plots thousands).
    pub cost_multiplier: f64,
    /// Applied to NMB values.
    pub nmb_multiplier: f64,
    pub cep_y_label: String,
    pub nmb_y_label: String,
    pub show_strategy_label_on_nmb_frontier: bool,
}

impl CepNmbPlotOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        FigureSize::new(self.fig_size.width, self.fig_size.height)?;
        ensure_positive("cost multiplier", self.cost_multiplier)?;
        ensure_positive("nmb multiplier", self.nmb_multiplier)?;
        Ok(())
    }
}

impl Default for CepNmbPlotOptions {
    fn default() -> Self {
        Self {
            fig_size: FigureSize {
                width: 8.0,
                height: 4.0,
            },
            cost_multiplier: 0.001,
            nmb_multiplier: 0.001,
            cep_y_label: "Additional Cost (Thousand)".to_string(),
            nmb_y_label: "Incremental NMB (Thousand)".to_string(),
            show_strategy_label_on_nmb_frontier: true,
        }
    }
}

/// CE summary table export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CeTableOptions {
    pub cost_multiplier: f64,
}

impl CeTableOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_positive("cost multiplier", self.cost_multiplier)?;
        Ok(())
    }
}

impl Default for CeTableOptions {
    fn default() -> Self {
        Self {
            cost_multiplier: 0.001,
        }
    }
}

/// Minimum Monte Carlo parameter-sample search.
///
/// For every error tolerance `epsilon` and significance level `alpha`, the
/// collaborator estimates how many parameter samples are needed so that the
/// NMB estimates up to `max_wtp` are within `epsilon` with confidence `1 - alpha`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinSamplesOptions {
    pub max_wtp: f64,
    pub epsilons: Vec<f64>,
    pub alphas: Vec<f64>,
}

impl MinSamplesOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_finite("max wtp", self.max_wtp)?;
        if self.max_wtp < 0.0 {
            return Err(ValidationError::out_of_range("max wtp", 0.0, f64::MAX, self.max_wtp));
        }
        if self.epsilons.is_empty() {
            return Err(ValidationError::empty_field("epsilons"));
        }
        for &epsilon in &self.epsilons {
            ensure_positive("epsilons", epsilon)?;
        }
        if self.alphas.is_empty() {
            return Err(ValidationError::empty_field("alphas"));
        }
        for &alpha in &self.alphas {
            ensure_finite("alphas", alpha)?;
            if alpha <= 0.0 || alpha >= 1.0 {
                return Err(ValidationError::out_of_range("alphas", 0.0, 1.0, alpha));
            }
        }
        Ok(())
    }
}

impl Default for MinSamplesOptions {
    fn default() -> Self {
        Self {
            max_wtp: 200_000.0,
            epsilons: vec![1_000.0, 2_000.0, 5_000.0],
            alphas: vec![0.05],
        }
    }
}

/// Minimum-sample plot: the search settings plus the bootstrap replicate count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinSamplesPlotOptions {
    #[serde(flatten)]
    pub search: MinSamplesOptions,
    pub num_bootstrap_samples: usize,
}

impl MinSamplesPlotOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.search.validate()?;
        if self.num_bootstrap_samples == 0 {
            return Err(ValidationError::out_of_range(
                "bootstrap samples",
                1.0,
                usize::MAX as f64,
                0.0,
            ));
        }
        Ok(())
    }
}

impl Default for MinSamplesPlotOptions {
    fn default() -> Self {
        Self {
            search: MinSamplesOptions::default(),
            num_bootstrap_samples: 1_000,
        }
    }
}

fn ensure_positive(field: &str, value: f64) -> Result<f64, ValidationError> {
    ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::out_of_range(field, 0.0, f64::MAX, value));
    }
    Ok(value)
}
