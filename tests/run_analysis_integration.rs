//! Integration tests for a complete analysis run.
//!
//! These tests verify the end-to-end flow:
//! 1. Samples are generated for every strategy in the roster
//! 2. The four CEA jobs are written with paths templated by sample count
//! 3. The raw samples are exported as CSV
//!
//! Uses the file-based adapters against a temporary directory.

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

use cea_sampler::adapters::{CsvSampleExporter, InMemoryCeaAnalyzer, JsonJobAnalyzer};
use cea_sampler::application::{RunAnalysisCommand, RunAnalysisError, RunAnalysisHandler};
use cea_sampler::domain::cea::{AnalysisPlan, PathTemplate};
use cea_sampler::domain::foundation::SampleCount;
use cea_sampler::domain::sampling::Roster;
use cea_sampler::ports::CeaOperation;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn count(n: usize) -> SampleCount {
    SampleCount::try_new(n).unwrap()
}

fn file_handler(root: &Path) -> RunAnalysisHandler {
    let exporter = CsvSampleExporter::new(root, PathTemplate::new("tables/samples N={n}.csv").unwrap());
    RunAnalysisHandler::new(
        Roster::demonstration(),
        AnalysisPlan::default(),
        Arc::new(JsonJobAnalyzer::new(root)),
    )
    .with_sample_exporter(Arc::new(exporter))
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn demonstration_runs_write_jobs_for_both_sample_counts() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let handler = file_handler(root);

    let results = handler.handle_all(&[count(200), count(2000)], 0).unwrap();
    assert_eq!(results.len(), 2);

    for n in [200, 2000] {
        for name in [
            format!("figs/cep nmb N={n}.png.job.json"),
            format!("tables/ce table N={n}.csv.job.json"),
            format!("figs/min n N={n}.png.job.json"),
            format!("tables/min n N={n}.csv.job.json"),
        ] {
            assert!(root.join(&name).is_file(), "missing {name}");
        }
        assert!(root.join(format!("tables/samples N={n}.csv")).is_file());
    }

    let job = read_json(&root.join("figs/cep nmb N=2000.png.job.json"));
    let strategies = job["context"]["strategies"].as_array().unwrap();
    assert_eq!(strategies.len(), 5);
    assert_eq!(strategies[3]["color"], "orange");
    assert_eq!(strategies[3]["effect_observations"].as_array().unwrap().len(), 2000);
}

#[test]
fn job_documents_carry_reference_options() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    file_handler(root)
        .handle(RunAnalysisCommand {
            sample_count: count(10),
            seed: 0,
        })
        .unwrap();

    let cep = read_json(&root.join("figs/cep nmb N=10.png.job.json"));
    assert_eq!(cep["options"]["fig_size"]["width"], 8.0);
    assert_eq!(cep["options"]["nmb_multiplier"], 0.001);
    assert_eq!(cep["options"]["show_strategy_label_on_nmb_frontier"], true);

    let table = read_json(&root.join("tables/ce table N=10.csv.job.json"));
    assert_eq!(table["options"]["cost_multiplier"], 0.001);

    let min_plot = read_json(&root.join("figs/min n N=10.png.job.json"));
    assert_eq!(min_plot["options"]["max_wtp"], 200_000.0);
    assert_eq!(
        min_plot["options"]["epsilons"],
        serde_json::json!([1000.0, 2000.0, 5000.0])
    );
    assert_eq!(min_plot["options"]["num_bootstrap_samples"], 1000);
}

#[test]
fn sample_csv_has_one_row_per_strategy_observation() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let result = file_handler(root)
        .handle(RunAnalysisCommand {
            sample_count: count(7),
            seed: 3,
        })
        .unwrap();

    let path = result.samples_path.unwrap();
    let mut reader = csv::Reader::from_path(&path).unwrap();
    assert_eq!(reader.records().count(), 5 * 7);
}

#[test]
fn reruns_with_same_seed_reproduce_samples() {
    let analyzer = Arc::new(InMemoryCeaAnalyzer::new());
    let handler = RunAnalysisHandler::new(
        Roster::demonstration(),
        AnalysisPlan::default(),
        analyzer.clone(),
    );
    let cmd = RunAnalysisCommand {
        sample_count: count(64),
        seed: 11,
    };

    let first = handler.handle(cmd).unwrap();
    let second = handler.handle(cmd).unwrap();
    assert_eq!(first.samples, second.samples);

    let calls = analyzer.calls();
    assert_eq!(calls.len(), 8);
    assert_eq!(calls[4].operation, CeaOperation::PlotCepNmb);
}

#[test]
fn unwritable_output_aborts_with_collaborator_error() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let err = file_handler(&blocker)
        .handle(RunAnalysisCommand {
            sample_count: count(5),
            seed: 0,
        })
        .unwrap_err();

    assert!(matches!(err, RunAnalysisError::Analysis(_)));
    assert!(!err.is_invalid_parameter());
}
