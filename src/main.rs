use std::net::SocketAddr;
use std::path::PathBuf;

use balance_engine::api::{AppState, create_router};
use balance_engine::config::ConfigLoader;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Serves the balance engine over HTTP.
#[derive(Parser)]
#[command(name = "balance-engine")]
#[command(version, about = "Daily attendance balance engine", long_about = None)]
struct Cli {
    /// Directory containing engine.yaml
    #[arg(short, long, default_value = "./config/default")]
    config: PathBuf,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let loader = ConfigLoader::load(&cli.config)?;
    info!(
        organization = %loader.config().organization().name,
        timezone = %loader.config().timezone(),
        "Configuration loaded"
    );

    let app = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!(address = %cli.bind, "Balance engine listening");
    axum::serve(listener, app).await?;

    Ok(())
}
