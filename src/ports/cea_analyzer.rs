//! CEA Analyzer Port - The external cost-effectiveness collaborator.
//!
//! This crate prepares samples; computing the frontier, NMB curves, CE tables
//! and minimum Monte Carlo sample counts is delegated to an implementation of
//! this trait. Adapters decide how the work is actually carried out.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

use crate::domain::cea::{
    CeTableOptions, CeaContext, CepNmbPlotOptions, MinSamplesOptions, MinSamplesPlotOptions,
};

/// Port for the cost-effectiveness analysis collaborator.
///
/// # Contract
///
/// Implementations must:
/// - Treat the context as read-only; it is owned by the caller for one run
/// - Write the requested artifact to `file_name` (relative to the adapter's root)
/// - Report unwritable outputs as `AnalysisError::Io` without retrying
///
/// # Usage
///
/// ```rust,ignore
/// let analyzer: &dyn CeaAnalyzer = get_analyzer();
///
/// analyzer.plot_cep_nmb(&ctx, &CepNmbPlotOptions::default(), Path::new("figs/cep nmb N=200.png"))?;
/// analyzer.export_ce_table(&ctx, &CeTableOptions::default(), Path::new("tables/ce table N=200.csv"))?;
/// ```
pub trait CeaAnalyzer: Send + Sync {
    /// Cost-effectiveness plane and net-monetary-benefit lines, as one image.
    fn plot_cep_nmb(
        &self,
        ctx: &CeaContext,
        options: &CepNmbPlotOptions,
        file_name: &Path,
    ) -> Result<(), AnalysisError>;

    /// CE summary table as CSV.
    fn export_ce_table(
        &self,
        ctx: &CeaContext,
        options: &CeTableOptions,
        file_name: &Path,
    ) -> Result<(), AnalysisError>;

    /// Plot of the minimum required parameter-sample count, via bootstrap.
    fn plot_min_monte_carlo_samples(
        &self,
        ctx: &CeaContext,
        options: &MinSamplesPlotOptions,
        file_name: &Path,
    ) -> Result<(), AnalysisError>;

    /// The same minimum-sample computation, as CSV.
    fn export_min_monte_carlo_samples(
        &self,
        ctx: &CeaContext,
        options: &MinSamplesOptions,
        file_name: &Path,
    ) -> Result<(), AnalysisError>;
}

/// The four collaborator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CeaOperation {
    PlotCepNmb,
    ExportCeTable,
    PlotMinMonteCarloSamples,
    ExportMinMonteCarloSamples,
}

impl CeaOperation {
    /// All operations in the order a run invokes them.
    pub fn all() -> &'static [CeaOperation] {
        &[
            CeaOperation::PlotCepNmb,
            CeaOperation::ExportCeTable,
            CeaOperation::PlotMinMonteCarloSamples,
            CeaOperation::ExportMinMonteCarloSamples,
        ]
    }
}

impl fmt::Display for CeaOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CeaOperation::PlotCepNmb => "plot_cep_nmb",
            CeaOperation::ExportCeTable => "export_ce_table",
            CeaOperation::PlotMinMonteCarloSamples => "plot_min_monte_carlo_samples",
            CeaOperation::ExportMinMonteCarloSamples => "export_min_monte_carlo_samples",
        };
        write!(f, "{}", s)
    }
}

/// Errors from the CEA collaborator.
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    #[error("Failed to write {path}: {message}")]
    Io { path: String, message: String },

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Invalid analysis request: {0}")]
    InvalidRequest(String),
}

impl AnalysisError {
    pub fn io(path: &Path, err: impl fmt::Display) -> Self {
        AnalysisError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_display_as_snake_case() {
        assert_eq!(CeaOperation::PlotCepNmb.to_string(), "plot_cep_nmb");
        assert_eq!(
            CeaOperation::ExportMinMonteCarloSamples.to_string(),
            "export_min_monte_carlo_samples"
        );
    }

    #[test]
    fn operation_serde_matches_display() {
        for op in CeaOperation::all() {
            let json = serde_json::to_string(op).unwrap();
            assert_eq!(json, format!("\"{}\"", op));
        }
    }

    #[test]
    fn io_error_names_path() {
        let err = AnalysisError::io(Path::new("figs/x.png"), "permission denied");
        assert_eq!(err.to_string(), "Failed to write figs/x.png: permission denied");
    }
}
