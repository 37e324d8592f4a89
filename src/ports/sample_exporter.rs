//! Sample Exporter Port - Persisting generated observations.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::foundation::SampleCount;
use crate::domain::sampling::GeneratedSamples;

/// Port for writing the raw paired observations of a run.
///
/// Implementations return the path they wrote so callers can report it.
pub trait SampleExporter: Send + Sync {
    fn export(&self, samples: &GeneratedSamples, n: SampleCount) -> Result<PathBuf, ExportError>;
}

/// Errors from sample export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
}

impl ExportError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
