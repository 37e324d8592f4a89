//! In-Memory CEA Analyzer Adapter
//!
//! Records collaborator calls instead of performing them.
//! Useful for testing and dry runs.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::domain::cea::{
    CeTableOptions, CeaContext, CepNmbPlotOptions, MinSamplesOptions, MinSamplesPlotOptions,
};
use crate::ports::{AnalysisError, CeaAnalyzer, CeaOperation};

/// One recorded collaborator call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub operation: CeaOperation,
    pub file_name: PathBuf,
    pub strategy_count: usize,
}

#[derive(Debug, Default)]
struct Recorded {
    calls: Vec<RecordedCall>,
    last_context: Option<CeaContext>,
}

/// In-memory collaborator that remembers every request.
#[derive(Debug, Default)]
pub struct InMemoryCeaAnalyzer {
    recorded: Mutex<Recorded>,
    fail_on: Option<CeaOperation>,
}

impl InMemoryCeaAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// An analyzer that fails with an I/O error on `operation`.
    pub fn failing_on(operation: CeaOperation) -> Self {
        Self {
            recorded: Mutex::default(),
            fail_on: Some(operation),
        }
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// The context of the most recent call.
    pub fn last_context(&self) -> Option<CeaContext> {
        self.lock().last_context.clone()
    }

    /// Clear all recorded calls (useful for tests)
    pub fn clear(&self) {
        let mut recorded = self.lock();
        recorded.calls.clear();
        recorded.last_context = None;
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        // A panicking test thread must not hide earlier calls from the others.
        self.recorded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(
        &self,
        operation: CeaOperation,
        ctx: &CeaContext,
        file_name: &Path,
    ) -> Result<(), AnalysisError> {
        if self.fail_on == Some(operation) {
            return Err(AnalysisError::io(file_name, "simulated write failure"));
        }
        let mut recorded = self.lock();
        recorded.calls.push(RecordedCall {
            operation,
            file_name: file_name.to_path_buf(),
            strategy_count: ctx.strategies.len(),
        });
        recorded.last_context = Some(ctx.clone());
        Ok(())
    }
}

impl CeaAnalyzer for InMemoryCeaAnalyzer {
    fn plot_cep_nmb(
        &self,
        ctx: &CeaContext,
        _options: &CepNmbPlotOptions,
        file_name: &Path,
    ) -> Result<(), AnalysisError> {
        self.record(CeaOperation::PlotCepNmb, ctx, file_name)
    }

    fn export_ce_table(
        &self,
        ctx: &CeaContext,
        _options: &CeTableOptions,
        file_name: &Path,
    ) -> Result<(), AnalysisError> {
        self.record(CeaOperation::ExportCeTable, ctx, file_name)
    }

    fn plot_min_monte_carlo_samples(
        &self,
        ctx: &CeaContext,
        _options: &MinSamplesPlotOptions,
        file_name: &Path,
    ) -> Result<(), AnalysisError> {
        self.record(CeaOperation::PlotMinMonteCarloSamples, ctx, file_name)
    }

    fn export_min_monte_carlo_samples(
        &self,
        ctx: &CeaContext,
        _options: &MinSamplesOptions,
        file_name: &Path,
    ) -> Result<(), AnalysisError> {
        self.record(CeaOperation::ExportMinMonteCarloSamples, ctx, file_name)
    }
}
