//! Client configuration
//!
//! The credential is a plain value handed in by the caller; the client
//! never reads environment variables or files itself.

/// Production BIR1.1 endpoint.
pub const PRODUCTION_URL: &str =
    "https://wyszukiwarkaregon.stat.gov.pl/wsBIR/UslugaBIRzewnPubl.svc";

/// GUS sandbox endpoint; accepts the publicly documented test key.
pub const SANDBOX_URL: &str =
    "https://wyszukiwarkaregontest.stat.gov.pl/wsBIR/UslugaBIRzewnPubl.svc";

/// Configuration for [`GusClient`](crate::GusClient).
#[derive(Debug, Clone)]
pub struct GusConfig {
    /// API key issued by GUS for the BIR service.
    pub api_key: String,
    /// Service endpoint; production by default, overridable for the
    /// sandbox or a test double.
    pub base_url: String,
}

impl GusConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        GusConfig {
            api_key: api_key.into(),
            base_url: PRODUCTION_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
