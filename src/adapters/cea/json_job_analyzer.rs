//! JSON Job Analyzer Adapter
//!
//! Hands each collaborator call to an external CEA tool as a JSON job
//! document written next to the requested artifact. A job for
//! `figs/cep nmb N=200.png` lands in `figs/cep nmb N=200.png.job.json` and
//! carries the full analysis context plus the operation's options.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::cea::{
    CeTableOptions, CeaContext, CepNmbPlotOptions, MinSamplesOptions, MinSamplesPlotOptions,
};
use crate::domain::foundation::{JobId, Timestamp};
use crate::ports::{AnalysisError, CeaAnalyzer, CeaOperation};

const JOB_SUFFIX: &str = ".job.json";

/// A single collaborator request as persisted on disk.
#[derive(Debug, Serialize)]
struct JobDocument<'a, O: Serialize> {
    job_id: JobId,
    created_at: Timestamp,
    operation: CeaOperation,
    target: String,
    options: &'a O,
    context: &'a CeaContext,
}

/// Writes collaborator requests as JSON job files under a root directory.
#[derive(Debug, Clone)]
pub struct JsonJobAnalyzer {
    output_root: PathBuf,
}

impl JsonJobAnalyzer {
    /// Create an analyzer writing under `output_root`
    ///
    /// # Example
    /// ```ignore
    /// let analyzer = JsonJobAnalyzer::new("./out");
    /// ```
    pub fn new<P: AsRef<Path>>(output_root: P) -> Self {
        Self {
            output_root: output_root.as_ref().to_path_buf(),
        }
    }

    /// Path of the job document for a requested artifact.
    pub fn job_path(&self, file_name: &Path) -> PathBuf {
        let mut target = self.output_root.join(file_name).into_os_string();
        target.push(JOB_SUFFIX);
        PathBuf::from(target)
    }

    fn write_job<O: Serialize>(
        &self,
        operation: CeaOperation,
        ctx: &CeaContext,
        options: &O,
        file_name: &Path,
    ) -> Result<(), AnalysisError> {
        let job_path = self.job_path(file_name);
        if let Some(parent) = job_path.parent() {
            fs::create_dir_all(parent).map_err(|e| AnalysisError::io(parent, e))?;
        }

        let document = JobDocument {
            job_id: JobId::new(),
            created_at: Timestamp::now(),
            operation,
            target: file_name.display().to_string(),
            options,
            context: ctx,
        };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| AnalysisError::Serialization(e.to_string()))?;

        fs::write(&job_path, json).map_err(|e| AnalysisError::io(&job_path, e))?;

        info!(
            job_id = %document.job_id,
            %operation,
            target = %file_name.display(),
            "Wrote CEA job"
        );
        Ok(())
    }
}

impl CeaAnalyzer for JsonJobAnalyzer {
    fn plot_cep_nmb(
        &self,
        ctx: &CeaContext,
        options: &CepNmbPlotOptions,
        file_name: &Path,
    ) -> Result<(), AnalysisError> {
        self.write_job(CeaOperation::PlotCepNmb, ctx, options, file_name)
    }

    fn export_ce_table(
        &self,
        ctx: &CeaContext,
        options: &CeTableOptions,
        file_name: &Path,
    ) -> Result<(), AnalysisError> {
        self.write_job(CeaOperation::ExportCeTable, ctx, options, file_name)
    }

    fn plot_min_monte_carlo_samples(
        &self,
        ctx: &CeaContext,
        options: &MinSamplesPlotOptions,
        file_name: &Path,
    ) -> Result<(), AnalysisError> {
        self.write_job(CeaOperation::PlotMinMonteCarloSamples, ctx, options, file_name)
    }

    fn export_min_monte_carlo_samples(
        &self,
        ctx: &CeaContext,
        options: &MinSamplesOptions,
        file_name: &Path,
    ) -> Result<(), AnalysisError> {
        self.write_job(CeaOperation::ExportMinMonteCarloSamples, ctx, options, file_name)
    }
}
