//! RunAnalysisHandler - Command handler for one sample-and-analyse run.
//!
//! A run generates samples for every strategy in the roster, bundles them into
//! a CEA context and asks the collaborator for the CE plane/NMB plot, the CE
//! table and the minimum Monte Carlo sample plot and table. Artifact paths are
//! rendered with the run's sample count so runs never overwrite each other.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, info_span};

use crate::domain::cea::{AnalysisPlan, CeaContext};
use crate::domain::foundation::{SampleCount, ValidationError};
use crate::domain::sampling::{GeneratedSamples, Roster, SampleGenerator, SamplingError};
use crate::ports::{AnalysisError, CeaAnalyzer, ExportError, SampleExporter};

/// Command to run one analysis.
#[derive(Debug, Clone, Copy)]
pub struct RunAnalysisCommand {
    /// Observations drawn per strategy.
    pub sample_count: SampleCount,
    /// Seed of the run's random stream.
    pub seed: u32,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct RunAnalysisResult {
    pub sample_count: SampleCount,
    /// The generated samples, in roster order.
    pub samples: GeneratedSamples,
    /// Collaborator artifacts requested, in call order.
    pub outputs: Vec<PathBuf>,
    /// Raw sample export, when an exporter is configured.
    pub samples_path: Option<PathBuf>,
}

/// Error type for analysis runs. Any error aborts the run.
#[derive(Debug, Error)]
pub enum RunAnalysisError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ValidationError),

    #[error("CEA collaborator failed: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Sample export failed: {0}")]
    Export(#[from] ExportError),
}

impl From<SamplingError> for RunAnalysisError {
    fn from(err: SamplingError) -> Self {
        match err {
            SamplingError::InvalidParameter(inner) => RunAnalysisError::InvalidParameter(inner),
        }
    }
}

impl RunAnalysisError {
    /// True for malformed inputs, false for output failures.
    pub fn is_invalid_parameter(&self) -> bool {
        match self {
            RunAnalysisError::InvalidParameter(_) => true,
            RunAnalysisError::Analysis(AnalysisError::InvalidRequest(_)) => true,
            RunAnalysisError::Analysis(_) | RunAnalysisError::Export(_) => false,
        }
    }
}

/// Handler for analysis runs.
pub struct RunAnalysisHandler {
    roster: Roster,
    plan: AnalysisPlan,
    analyzer: Arc<dyn CeaAnalyzer>,
    sample_exporter: Option<Arc<dyn SampleExporter>>,
}

impl RunAnalysisHandler {
    pub fn new(roster: Roster, plan: AnalysisPlan, analyzer: Arc<dyn CeaAnalyzer>) -> Self {
        Self {
            roster,
            plan,
            analyzer,
            sample_exporter: None,
        }
    }

    /// Also write the raw samples of every run.
    pub fn with_sample_exporter(mut self, exporter: Arc<dyn SampleExporter>) -> Self {
        self.sample_exporter = Some(exporter);
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn handle(&self, cmd: RunAnalysisCommand) -> Result<RunAnalysisResult, RunAnalysisError> {
        let n = cmd.sample_count;
        let span = info_span!("run_analysis", n = n.value(), seed = cmd.seed);
        let _enter = span.enter();

        // 1. Reject bad options before doing any work
        self.plan.validate()?;

        // 2. Generate samples from a fresh stream
        let samples = SampleGenerator::generate(&self.roster, n, cmd.seed)?;
        info!(strategies = samples.len(), "Generated samples");

        // 3. Build the analysis context
        let ctx = CeaContext::from_samples(
            &self.roster,
            &samples,
            self.plan.if_paired,
            self.plan.wtp_range,
        )?;

        // 4. Ask the collaborator for every artifact
        let paths = self.plan.outputs.render(n);
        self.analyzer
            .plot_cep_nmb(&ctx, &self.plan.cep_nmb, &paths.cep_nmb_plot)?;
        self.analyzer
            .export_ce_table(&ctx, &self.plan.ce_table, &paths.ce_table)?;
        self.analyzer.plot_min_monte_carlo_samples(
            &ctx,
            &self.plan.min_samples,
            &paths.min_samples_plot,
        )?;
        self.analyzer.export_min_monte_carlo_samples(
            &ctx,
            &self.plan.min_samples.search,
            &paths.min_samples_table,
        )?;

        // 5. Optionally keep the raw samples
        let samples_path = match &self.sample_exporter {
            Some(exporter) => Some(exporter.export(&samples, n)?),
            None => None,
        };

        info!("Analysis run complete");
        Ok(RunAnalysisResult {
            sample_count: n,
            samples,
            outputs: paths.to_vec(),
            samples_path,
        })
    }

    /// Runs each sample count in turn, stopping at the first failure.
    ///
    /// Every run starts its own stream from `seed`, so a run's samples do not
    /// depend on which runs came before it.
    pub fn handle_all(
        &self,
        sample_counts: &[SampleCount],
        seed: u32,
    ) -> Result<Vec<RunAnalysisResult>, RunAnalysisError> {
        sample_counts
            .iter()
            .map(|&sample_count| self.handle(RunAnalysisCommand { sample_count, seed }))
            .collect()
    }
}
