//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `cea` - CEA collaborator implementations (JSON job files, in-memory)
//! - `export` - Raw sample exporters (CSV)

pub mod cea;
pub mod export;

pub use cea::{InMemoryCeaAnalyzer, JsonJobAnalyzer, RecordedCall};
pub use export::CsvSampleExporter;
