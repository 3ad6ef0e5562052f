//! Lookup orchestration
//!
//! One lookup is four calls against the service endpoint:
//!
//! | Action | Purpose |
//! |--------|---------|
//! | `Zaloguj` | Exchange the API key for a session id |
//! | `DaneSzukajPodmioty` | Resolve NIP to REGON + entity type |
//! | `DanePobierzPelnyRaport` | Full report matching the entity type |
//! | `Wyloguj` | Best-effort session teardown |
//!
//! Report element names arrive with a `praw_`/`fiz_` prefix depending on
//! the report; keys are stripped and lowercased so the raw record always
//! exposes the same naming scheme regardless of legal form.

use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use poa_core::record::{LegalForm, RawRecord};

use crate::config::GusConfig;
use crate::error::GusError;
use crate::soap;

const SOAP_CONTENT_TYPE: &str = "application/soap+xml; charset=utf-8";

/// Full report names per entity type, as registered in BIR1.1.
const REPORT_LEGAL_PERSON: &str = "BIR11OsPrawna";
const REPORT_SOLE_PROPRIETOR: &str = "BIR11OsFizycznaDzialalnoscCeidg";

/// Registry error code meaning "no entity found".
const ERROR_CODE_NOT_FOUND: &str = "4";

/// Successful lookup: the flattened record plus the legal-form hint the
/// search endpoint reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub record: RawRecord,
    pub legal_form: LegalForm,
}

/// Client for the BIR1.1 registry service.
pub struct GusClient {
    http: reqwest::Client,
    config: GusConfig,
}

impl GusClient {
    pub fn new(config: GusConfig) -> Result<Self, GusError> {
        let http = reqwest::Client::builder().build()?;
        Ok(GusClient { http, config })
    }

    /// Look up a business by its 10-digit NIP.
    ///
    /// The identifier is passed through as given; checksum validation is
    /// out of scope.
    pub async fn lookup_by_nip(&self, nip: &str) -> Result<RegistryEntry, GusError> {
        let sid = self.login().await?;
        let result = self.lookup_with_session(&sid, nip).await;
        self.logout(&sid).await;
        result
    }

    async fn lookup_with_session(&self, sid: &str, nip: &str) -> Result<RegistryEntry, GusError> {
        let search = self.search_by_nip(sid, nip).await?;
        let legal_form = LegalForm::from_registry_code(
            search
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case("Typ"))
                .map(|(_, v)| v.as_str())
                .unwrap_or(""),
        );
        let regon = search
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("Regon"))
            .map(|(_, v)| v.trim().to_string())
            .ok_or_else(|| {
                GusError::UnexpectedResponse("search result without REGON".to_string())
            })?;

        let mut record = RawRecord::new();

        let report_name = match legal_form {
            LegalForm::LegalPerson => Some(REPORT_LEGAL_PERSON),
            LegalForm::SoleProprietor => Some(REPORT_SOLE_PROPRIETOR),
            // No matching report; the search basics below still give the
            // normalizer something to work with.
            LegalForm::Unknown => None,
        };
        if let Some(report_name) = report_name {
            for (key, value) in self.full_report(sid, &regon, report_name).await? {
                record.insert(canonical_key(&key), value);
            }
        }

        // Search-level basics fill only the gaps the report left.
        for (key, value) in search {
            record.insert_missing(canonical_key(&key), value);
        }
        record.insert_missing("nip", nip);

        debug!(fields = record.len(), ?legal_form, "registry lookup complete");
        Ok(RegistryEntry { record, legal_form })
    }

    async fn login(&self) -> Result<String, GusError> {
        let body = soap::login_body(&self.config.api_key);
        let envelope = self.call("Zaloguj", None, &body).await?;
        let sid = soap::extract_result(&envelope, "ZalogujResult")?
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        if sid.is_empty() {
            return Err(GusError::InvalidCredentials);
        }
        Ok(sid)
    }

    async fn logout(&self, sid: &str) {
        let body = soap::logout_body(sid);
        if let Err(err) = self.call("Wyloguj", Some(sid), &body).await {
            warn!(%err, "registry logout failed");
        }
    }

    async fn search_by_nip(
        &self,
        sid: &str,
        nip: &str,
    ) -> Result<Vec<(String, String)>, GusError> {
        let body = soap::search_by_nip_body(nip);
        let envelope = self.call("DaneSzukajPodmioty", Some(sid), &body).await?;
        let payload = soap::extract_result(&envelope, "DaneSzukajPodmiotyResult")?
            .unwrap_or_default();

        if payload.trim().is_empty() {
            return Err(GusError::NotFound(nip.to_string()));
        }

        let mut groups = soap::parse_dane(&payload)?;
        if groups.is_empty() {
            return Err(GusError::NotFound(nip.to_string()));
        }
        let first = groups.remove(0);
        check_error_fields(&first, nip)?;
        Ok(first)
    }

    async fn full_report(
        &self,
        sid: &str,
        regon: &str,
        report_name: &str,
    ) -> Result<Vec<(String, String)>, GusError> {
        let body = soap::full_report_body(regon, report_name);
        let envelope = self.call("DanePobierzPelnyRaport", Some(sid), &body).await?;
        let payload = soap::extract_result(&envelope, "DanePobierzPelnyRaportResult")?
            .unwrap_or_default();

        let mut groups = soap::parse_dane(&payload)?;
        if groups.is_empty() {
            return Err(GusError::UnexpectedResponse(format!(
                "empty {report_name} report for REGON {regon}"
            )));
        }
        let first = groups.remove(0);
        check_error_fields(&first, regon)?;
        Ok(first)
    }

    async fn call(
        &self,
        action: &str,
        sid: Option<&str>,
        body: &str,
    ) -> Result<String, GusError> {
        let envelope = soap::envelope(action, &self.config.base_url, body);

        let mut request = self
            .http
            .post(&self.config.base_url)
            .header(CONTENT_TYPE, SOAP_CONTENT_TYPE)
            .body(envelope);
        if let Some(sid) = sid {
            request = request.header("sid", sid);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(GusError::Service(format!("{action} returned HTTP {status}")));
        }

        soap::extract_envelope(&text)
            .map(str::to_string)
            .ok_or_else(|| {
                GusError::UnexpectedResponse(format!("{action} response without SOAP envelope"))
            })
    }
}

/// Map registry-reported error fields onto client errors.
fn check_error_fields(fields: &[(String, String)], subject: &str) -> Result<(), GusError> {
    let code = fields
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("ErrorCode"))
        .map(|(_, v)| v.trim());

    match code {
        None => Ok(()),
        Some(ERROR_CODE_NOT_FOUND) => Err(GusError::NotFound(subject.to_string())),
        Some(code) => {
            let message = fields
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case("ErrorMessagePl"))
                .map(|(_, v)| v.as_str())
                .unwrap_or("unknown error");
            Err(GusError::Service(format!("code {code}: {message}")))
        }
    }
}

/// Normalize a report element name: strip the legal-form prefix, then
/// lowercase, so `praw_adSiedzUlica_Nazwa` and `fiz_adSiedzUlica_Nazwa`
/// both land on `adsiedzulica_nazwa`.
fn canonical_key(raw: &str) -> String {
    let lower = raw.to_lowercase();
    for prefix in ["fizc_", "fizp_", "fiz_", "praw_"] {
        if let Some(stripped) = lower.strip_prefix(prefix) {
            return stripped.to_string();
        }
    }
    lower
}
