use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use folio_contact::{SimulatedSink, SubmissionController};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{
    config::{Config, DeliveryMode},
    email::SmtpSink,
    routes::{self, AppState},
};

pub async fn serve(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting folio server...");

    let host = host_override.unwrap_or_else(|| config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let controller = match config.contact.delivery {
        DeliveryMode::Simulated => {
            let delay = Duration::from_millis(config.contact.simulated_delay_ms);
            match &config.contact.simulated_failure {
                Some(reason) => {
                    SubmissionController::new(SimulatedSink::failing(delay, reason.clone()))
                }
                None => SubmissionController::new(SimulatedSink::new(delay)),
            }
        }
        DeliveryMode::Smtp => SubmissionController::new(SmtpSink::new(&config.contact.smtp)?),
    };

    let state = AppState {
        config,
        contact: Arc::new(controller),
    };

    let app = routes::router(state)
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl+C handler: {err}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
