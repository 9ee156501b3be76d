use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use motofix_control::config::Config;
use motofix_control::error::GatewayError;
use motofix_control::gateway;
use motofix_control::state::GatewayState;

#[tokio::main]
async fn main() -> Result<(), GatewayError> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false)
        .compact()
        .init();

    let state = Arc::new(GatewayState::new(&config)?);
    let app = gateway::router(state);

    let bind_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|err| GatewayError::Internal(format!("failed to bind {bind_addr}: {err}")))?;

    tracing::info!(
        http_port = config.http_port,
        upstream = %config.upstream_url,
        static_dir = %config.static_dir.display(),
        "gateway started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| GatewayError::Internal(format!("server error: {err}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
