//! REST API server for scale file generation and upload

use clap::Parser;
use scale_config::{Config, ScaleUploader};
use std::{net::SocketAddr, path::PathBuf, process, sync::Arc};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Generate scale e-label files and upload them to a scale")]
struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind to, overriding the configuration (e.g. 0.0.0.0:5000)
    #[arg(short, long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        tracing::error!(error = %e, "scale-config-api failed");
        process::exit(1);
    }
}

async fn run(args: Args) -> scale_config::Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(bind) = args.bind {
        config.server.api.bind_address = bind;
    }

    let uploader = ScaleUploader::from_config(&config.driver)?;
    if !uploader.driver().is_available() {
        tracing::warn!(
            driver = ?uploader.driver().executable(),
            "scale driver not found, uploads will fail until it is installed"
        );
    }

    scale_config::api::start_api_server(Arc::new(uploader), Arc::new(config)).await
}
