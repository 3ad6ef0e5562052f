//! Error types for the JSON/download routes
//!
//! The HTML form flow converts failures into inline page messages by
//! itself; these responses cover `/download` and `/api/*`, where a
//! machine-readable status is the right shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use docx_render::RenderError;
use gus_client::GusError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no NIP supplied")]
    MissingInput,

    #[error("registry lookup failed: {0}")]
    Lookup(#[from] GusError),

    #[error("document rendering failed: {0}")]
    Render(#[from] RenderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingInput => {
                (StatusCode::BAD_REQUEST, "Wpisz NIP klienta.".to_string())
            }
            ApiError::Lookup(GusError::NotFound(nip)) => (
                StatusCode::NOT_FOUND,
                format!("Nie znaleziono podmiotu o NIP {nip}."),
            ),
            ApiError::Lookup(err) => {
                tracing::error!("registry lookup failed: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Nie udało się pobrać danych z GUS. Szczegóły: {err}"),
                )
            }
            ApiError::Render(err) => {
                tracing::error!("document rendering failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Nie udało się wygenerować dokumentu.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
