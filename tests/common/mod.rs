use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use folio::config::{Config, ContactConfig, ObservabilityConfig, ServerConfig, SiteConfig};
use folio::routes::{self, AppState};
use folio_contact::{SimulatedSink, SubmissionController};
use http_body_util::BodyExt;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        site: SiteConfig::default(),
        contact: ContactConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

/// App with a sink that accepts every message without delay.
pub fn create_test_app() -> Router {
    let controller = SubmissionController::new(SimulatedSink::new(Duration::ZERO));
    create_test_app_with(controller)
}

/// App with a sink that rejects every message with `reason`.
pub fn create_failing_app(reason: &str) -> Router {
    let controller =
        SubmissionController::new(SimulatedSink::failing(Duration::ZERO, reason.to_string()));
    create_test_app_with(controller)
}

fn create_test_app_with(controller: SubmissionController) -> Router {
    routes::router(AppState {
        config: test_config(),
        contact: Arc::new(controller),
    })
}

pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
