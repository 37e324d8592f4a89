//! Entry point: loads configuration, sets up logging and runs every
//! configured sample count through the analysis handler.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};

use cea_sampler::adapters::{CsvSampleExporter, JsonJobAnalyzer};
use cea_sampler::application::RunAnalysisHandler;
use cea_sampler::config::{AppConfig, LogFormat, LoggingConfig};

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = logging.env_filter()?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    match logging.format {
        LogFormat::Pretty => builder.try_init().map_err(|e| e.to_string())?,
        LogFormat::Json => builder.json().try_init().map_err(|e| e.to_string())?,
    }
    Ok(())
}

fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let roster = config.run.roster()?;
    let plan = config.plan()?;
    let sample_counts = config.run.sample_counts()?;

    let analyzer = Arc::new(JsonJobAnalyzer::new(&config.output.root));
    let mut handler = RunAnalysisHandler::new(roster, plan, analyzer);
    if config.run.export_samples {
        let exporter =
            CsvSampleExporter::new(&config.output.root, config.output.samples_template()?);
        handler = handler.with_sample_exporter(Arc::new(exporter));
    }

    info!(
        strategies = handler.roster().len(),
        runs = sample_counts.len(),
        seed = config.run.seed,
        root = %config.output.root.display(),
        "Starting analysis"
    );

    for result in handler.handle_all(&sample_counts, config.run.seed)? {
        info!(
            n = result.sample_count.value(),
            outputs = result.outputs.len(),
            samples = ?result.samples_path,
            "Run finished"
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Analysis aborted");
            ExitCode::FAILURE
        }
    }
}
