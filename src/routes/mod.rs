use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use folio_contact::SubmissionController;

use crate::error::AppError;

mod assets;
mod contact;
mod health;
mod index;
mod projects;
mod theme;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact: Arc<SubmissionController>,
}

pub async fn fallback() -> AppError {
    AppError::NotFound
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index::page))
        .route("/projects/{id}", get(projects::page))
        .route("/contact", post(contact::action))
        .route("/theme", post(theme::action))
        .route("/health", get(health::health))
        .route("/static/{*path}", get(assets::asset))
        .fallback(fallback)
        .with_state(app_state)
}
