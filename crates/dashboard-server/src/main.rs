mod config;
mod wiring;

use std::error::Error;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .init();

    let config = config::Config::from_env()?;
    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!(
        addr = %config.listen_addr,
        metrics_interval_ms = config.sim.metrics_interval_ms,
        countdown_ceiling_secs = config.sim.countdown_ceiling_secs,
        "dashboard listening"
    );

    axum::serve(listener, wiring::build_app(config.sim))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn log_filter(directives: Option<String>) -> EnvFilter {
    match directives {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(DEFAULT_LOG_FILTER),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "could not listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown requested");
}
