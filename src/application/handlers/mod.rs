//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod run_analysis;

pub use run_analysis::{
    RunAnalysisCommand, RunAnalysisError, RunAnalysisHandler, RunAnalysisResult,
};
