//! Sample export adapters.

mod csv_sample_exporter;

pub use csv_sample_exporter::CsvSampleExporter;
