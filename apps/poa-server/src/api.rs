//! HTTP handlers
//!
//! The form flow (`/generate`) catches every failure and renders it as
//! an inline message; a failed lookup must never take the page down.
//! The download and JSON routes go through [`ApiError`] instead.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use chrono::{FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use docx_render::{render_docx, DOCX_MIME};
use poa_core::record::{LegalForm, RawRecord};
use poa_core::{build_mandate, normalize, CompanyProfile};

use crate::error::ApiError;
use crate::views;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "poa-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler: GET /
pub async fn handle_index() -> Html<String> {
    Html(views::index_page(None))
}

/// Form body for /generate
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub nip: String,
}

/// Handler: POST /generate
///
/// Looks the company up and shows the result page; all failures become
/// inline messages on the form.
pub async fn handle_generate(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Html<String> {
    let nip = sanitize_nip(&form.nip);
    if nip.is_empty() {
        return Html(views::index_page(Some("Wpisz NIP klienta.")));
    }

    info!(%nip, "lookup requested");
    match state.registry.lookup_by_nip(&nip).await {
        Ok(entry) => {
            let profile = normalize(&entry.record, entry.legal_form);
            let missing = profile.missing_address_fields();
            if !missing.is_empty() {
                warn!(%nip, ?missing, "profile incomplete, document will have gaps");
            }
            Html(views::result_page(&nip, &profile, &entry.record, &missing))
        }
        Err(err) => Html(views::index_page(Some(&format!(
            "Nie udało się pobrać danych z GUS. Szczegóły: {err}"
        )))),
    }
}

/// Handler: GET /download/:nip
///
/// Re-runs the lookup (nothing is persisted between requests) and
/// streams the rendered document.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(nip): Path<String>,
) -> Result<Response, ApiError> {
    let nip = sanitize_nip(&nip);
    if nip.is_empty() {
        return Err(ApiError::MissingInput);
    }

    let entry = state.registry.lookup_by_nip(&nip).await?;
    let profile = normalize(&entry.record, entry.legal_form);
    let document = build_mandate(&profile, &nip, local_today());
    let bytes = render_docx(&document)?;

    info!(%nip, size = bytes.len(), "document generated");

    let filename = format!("pelnomocnictwo_BDO_{nip}.docx");
    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// Inspection payload for the raw-data panel and API consumers.
#[derive(Serialize)]
pub struct CompanyResponse {
    pub nip: String,
    pub legal_form: LegalForm,
    pub profile: CompanyProfile,
    pub missing_fields: Vec<&'static str>,
    pub record: RawRecord,
}

/// Handler: GET /api/company/:nip
pub async fn handle_company(
    State(state): State<AppState>,
    Path(nip): Path<String>,
) -> Result<Json<CompanyResponse>, ApiError> {
    let nip = sanitize_nip(&nip);
    if nip.is_empty() {
        return Err(ApiError::MissingInput);
    }

    let entry = state.registry.lookup_by_nip(&nip).await?;
    let profile = normalize(&entry.record, entry.legal_form);
    let missing_fields = profile.missing_address_fields();

    Ok(Json(CompanyResponse {
        nip,
        legal_form: entry.legal_form,
        profile,
        missing_fields,
        record: entry.record,
    }))
}

/// Strip the separators people paste along with a NIP. Presence is the
/// only validation; the checksum is deliberately not verified.
pub fn sanitize_nip(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Current date at the fixed UTC+1 offset used for the date line and the
/// validity clause.
fn local_today() -> NaiveDate {
    let offset = FixedOffset::east_opt(3600).expect("UTC+1 is a valid offset");
    Utc::now().with_timezone(&offset).date_naive()
}
