use std::process::ExitCode;

use anyhow::{Context, anyhow};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::{
    configs::{Configs, ExporterConfig},
    error::ExportError,
    exporter::{ExportReport, export},
};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Write the JSON object stored in an SSM parameter to ./.env",
    long_about = None
)]
pub struct Args {
    /// SSM parameter holding a JSON object (e.g. /myapp/dev/env)
    pub parameter_name: String,
}

fn setup_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init();
}

pub async fn run(args: &Args) -> anyhow::Result<ExportReport> {
    let config = ExporterConfig::load()
        .await
        .map_err(|e| anyhow!(e))
        .context("Failed to load configuration")?;

    let report = export(&args.parameter_name, &config, None).await?;
    Ok(report)
}

pub async fn start(args: Args) -> ExitCode {
    setup_logging();

    match run(&args).await {
        Ok(report) => {
            info!(
                parameter = report.parameter.as_str(),
                version = ?report.version,
                entries = report.entries,
                path = %report.output_path.display(),
                "Environment file exported"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            let kind = e
                .downcast_ref::<ExportError>()
                .map(ExportError::kind)
                .unwrap_or("ConfigurationError");
            error!(kind, "Export failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
