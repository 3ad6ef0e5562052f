//! Error types for the registry client

use thiserror::Error;

/// Failures a lookup can surface.
///
/// The web layer collapses all of these into a single user-visible
/// message with the detail appended, so variants carry human-readable
/// context rather than structured codes.
#[derive(Debug, Error)]
pub enum GusError {
    /// Login succeeded HTTP-wise but the service returned no session id,
    /// which is how BIR signals a bad key.
    #[error("registry rejected the API key")]
    InvalidCredentials,

    /// No entity registered under the queried NIP.
    #[error("no entity found for NIP {0}")]
    NotFound(String),

    /// Error reported by the registry itself (ErrorCode payload or
    /// non-success HTTP status).
    #[error("registry error: {0}")]
    Service(String),

    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed registry response: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Response parsed as XML but did not contain the expected element.
    #[error("unexpected registry response: {0}")]
    UnexpectedResponse(String),
}
