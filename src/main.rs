use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use archetype_engine::adapters::{BuiltinReferenceData, YamlReferenceData};
use archetype_engine::application::{CompleteAttemptCommand, CompleteAttemptHandler};
use archetype_engine::config::{AppConfig, LoggingConfig};
use archetype_engine::domain::foundation::AttemptId;
use archetype_engine::domain::quiz::Response;
use archetype_engine::ports::ReferenceDataSource;

#[derive(Parser)]
#[command(
    name = "archetype-engine",
    about = "Classify questionnaire responses into an archetype"
)]
struct Cli {
    /// JSON file holding an array of {"question_id", "value"} objects.
    responses: PathBuf,

    /// Reference data YAML file; overrides engine.reference_data_path.
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Attempt identifier to report; a fresh one is generated when omitted.
    #[arg(long)]
    attempt_id: Option<AttemptId>,

    /// Pretty-print the JSON result.
    #[arg(long)]
    pretty: bool,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.log_level));

    // stdout carries the result document, so logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(logging.json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!logging.json).then(|| {
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
        }))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    init_tracing(&config.logging);

    let reference_path = cli
        .reference
        .or_else(|| config.engine.reference_data_path.as_ref().map(PathBuf::from));
    let source: Box<dyn ReferenceDataSource> = match reference_path {
        Some(path) => Box::new(YamlReferenceData::new(path)),
        None => Box::new(BuiltinReferenceData::new()),
    };
    let reference = source
        .load()
        .await
        .with_context(|| format!("Failed to load {}", source.describe()))?;
    info!(source = %source.describe(), version = %reference.version, "Reference data ready");

    let content = tokio::fs::read_to_string(&cli.responses)
        .await
        .with_context(|| format!("Failed to read {}", cli.responses.display()))?;
    let responses: Vec<Response> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", cli.responses.display()))?;

    let aggregator = config.engine.aggregator(reference.scale);
    let classifier = config.engine.classifier()?;
    let handler = CompleteAttemptHandler::new(Arc::new(reference), aggregator, classifier);

    let result = handler.handle(CompleteAttemptCommand {
        attempt_id: cli.attempt_id.unwrap_or_default(),
        responses,
    })?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);

    Ok(())
}
