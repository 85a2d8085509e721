use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use travelbrief::{EnrichmentPipeline, TravelBriefConfig, TravelBriefError};

/// Enrich a trip request with coordinates, a weather forecast and a destination summary
#[derive(Debug, Parser)]
#[command(name = "travelbrief", version, about)]
struct Cli {
    /// Trip request, e.g. "Paris | June 1-7"
    request: String,

    /// Path to a TOML config file
    #[arg(long, env = "TRAVELBRIEF_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (overrides the configured default)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Structured JSON record
    Json,
    /// Natural-language brief
    Brief,
}

fn init_tracing(config: &TravelBriefConfig, verbose: u8) {
    let level = match verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("travelbrief={level}")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.with_target(false).init();
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = TravelBriefConfig::load_from_path(cli.config.clone())?;
    init_tracing(&config, cli.verbose);

    let format = cli.format.unwrap_or(match config.defaults.output_format.as_str() {
        "brief" => OutputFormat::Brief,
        _ => OutputFormat::Json,
    });

    let pipeline = EnrichmentPipeline::from_config(&config.providers)?;
    let context = pipeline.run(&cli.request).await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&context)
                .context("Failed to serialize trip context")?;
            println!("{json}");
        }
        OutputFormat::Brief => print!("{}", context.to_brief()),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<TravelBriefError>() {
                Some(err) => eprintln!("{}", err.user_message()),
                None => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
