use anyhow::Result;
use clap::Parser;
use hiring_platform::{start_web_server, EnvironmentConfig};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

#[derive(Parser)]
#[command(name = "talentflow", about = "Hiring platform API server")]
struct Args {
    /// Port to bind; falls back to TALENTFLOW_PORT, then 8000
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("hiring_platform=info,rocket=warn")),
        )
        .init();

    let args = Args::parse();
    let port = args
        .port
        .or_else(|| {
            std::env::var("TALENTFLOW_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
        })
        .unwrap_or(8000);

    let config = EnvironmentConfig::load()?;
    config.ensure_directories().await?;

    tracing::info!(
        "Environment: {}",
        std::env::var("TALENTFLOW_ENV").unwrap_or_else(|_| "local".to_string())
    );
    tracing::info!("Uploads: {}", config.uploads_path.display());
    tracing::info!("Server: http://0.0.0.0:{}", port);

    start_web_server(config, port).await
}
