//! CEA collaborator adapters.

mod in_memory_analyzer;
mod json_job_analyzer;

pub use in_memory_analyzer::{InMemoryCeaAnalyzer, RecordedCall};
pub use json_job_analyzer::JsonJobAnalyzer;
