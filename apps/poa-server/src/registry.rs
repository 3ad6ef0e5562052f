//! Registry lookup seam
//!
//! Handlers talk to the registry through this trait so the whole
//! application can run against a stub in tests.

use async_trait::async_trait;

use gus_client::{GusClient, GusError, RegistryEntry};

#[async_trait]
pub trait Registry: Send + Sync {
    async fn lookup_by_nip(&self, nip: &str) -> Result<RegistryEntry, GusError>;
}

#[async_trait]
impl Registry for GusClient {
    async fn lookup_by_nip(&self, nip: &str) -> Result<RegistryEntry, GusError> {
        GusClient::lookup_by_nip(self, nip).await
    }
}
