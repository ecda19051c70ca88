use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chatrelay::config::Config;
use chatrelay::llm::GeminiProvider;
use chatrelay::relay::ChatRelay;
use chatrelay::server::{AppState, build_app};

#[derive(Parser)]
#[command(name = "chatrelay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the YAML config file (optional; defaults apply when missing)
    #[arg(short, long, default_value = "chatrelay.yaml")]
    config: PathBuf,

    /// Override the listen host
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port (takes precedence over PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)
        .await
        .with_context(|| format!("loading {}", cli.config.display()))?;
    config.apply_env()?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    if config.api_key.is_none() {
        warn!(
            "{} is not set. Upstream calls will be rejected by the provider; \
            keep the key in the server environment, never in the frontend.",
            config.upstream.api_key_env
        );
    }

    let credential_configured = config.api_key.is_some();
    let provider = GeminiProvider::from_config(&config.upstream, config.api_key.take());
    info!(endpoint = provider.endpoint(), "Relaying chat to provider");

    let state = AppState {
        relay: ChatRelay::new(Arc::new(provider)),
        credential_configured,
    };
    let app = build_app(
        state,
        config.server.request_timeout_seconds,
        &config.static_dir,
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(
        "Listening on http://{} (static files from {})",
        listener.local_addr()?,
        config.static_dir.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
