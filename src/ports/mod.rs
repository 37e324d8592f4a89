//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CeaAnalyzer` - The cost-effectiveness analysis collaborator
//! - `SampleExporter` - Raw sample persistence

mod cea_analyzer;
mod sample_exporter;

pub use cea_analyzer::{AnalysisError, CeaAnalyzer, CeaOperation};
pub use sample_exporter::{ExportError, SampleExporter};
