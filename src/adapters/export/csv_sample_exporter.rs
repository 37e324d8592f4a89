//! CSV Sample Exporter Adapter
//!
//! Writes the paired observations of a run as one long-format CSV:
//! `strategy,index,cost,effect`, strategies in roster order.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::cea::PathTemplate;
use crate::domain::foundation::SampleCount;
use crate::domain::sampling::GeneratedSamples;
use crate::ports::{ExportError, SampleExporter};

#[derive(Debug, Serialize)]
struct SampleRow<'a> {
    strategy: &'a str,
    index: usize,
    cost: f64,
    effect: f64,
}

/// Writes samples to `<output_root>/<template rendered with n>`.
#[derive(Debug, Clone)]
pub struct CsvSampleExporter {
    output_root: PathBuf,
    template: PathTemplate,
}

impl CsvSampleExporter {
    pub fn new<P: AsRef<Path>>(output_root: P, template: PathTemplate) -> Self {
        Self {
            output_root: output_root.as_ref().to_path_buf(),
            template,
        }
    }

    /// Where a run with `n` samples is written.
    pub fn path_for(&self, n: SampleCount) -> PathBuf {
        self.output_root.join(self.template.render(n))
    }
}

impl SampleExporter for CsvSampleExporter {
    fn export(&self, samples: &GeneratedSamples, n: SampleCount) -> Result<PathBuf, ExportError> {
        let path = self.path_for(n);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
        }

        let file = fs::File::create(&path).map_err(|e| ExportError::io(&path, e))?;
        let mut writer = csv::Writer::from_writer(file);
        let mut rows = 0usize;
        for set in samples {
            for (index, (cost, effect)) in set.pairs().enumerate() {
                writer.serialize(SampleRow {
                    strategy: set.strategy_name().as_str(),
                    index,
                    cost,
                    effect,
                })?;
                rows += 1;
            }
        }
        writer.flush().map_err(|e| ExportError::io(&path, e))?;

        info!(path = %path.display(), rows, "Exported samples");
        Ok(path)
    }
}
