use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::template::{NotFoundTemplate, ServerTemplate};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("template error: {0}")]
    Render(#[from] askama::Error),

    #[error("not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => match NotFoundTemplate.render() {
                Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
                Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
            },
            AppError::Render(err) => {
                tracing::error!("failed to render template: {err}");
                match ServerTemplate.render() {
                    Ok(html) => (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response(),
                    Err(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Something went wrong, please retry later",
                    )
                        .into_response(),
                }
            }
        }
    }
}
