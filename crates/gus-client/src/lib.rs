//! Async client for the GUS BIR1.1 registry service
//!
//! Looks up Polish businesses by NIP against the REGON database
//! (`UslugaBIRzewnPubl`). The service speaks SOAP 1.2 with WS-Addressing
//! and answers with doubly-encoded XML payloads; this crate hides all of
//! that behind one operation:
//!
//! ```no_run
//! # async fn demo() -> Result<(), gus_client::GusError> {
//! use gus_client::{GusClient, GusConfig};
//!
//! let client = GusClient::new(GusConfig::new("my-api-key"))?;
//! let entry = client.lookup_by_nip("1234567890").await?;
//! println!("{:?}", entry.record.get("nazwa"));
//! # Ok(())
//! # }
//! ```
//!
//! Each lookup is a self-contained login, search, report, logout
//! exchange; no session state is kept between calls and nothing is
//! retried. The NIP checksum is deliberately not validated here.

mod client;
mod config;
mod error;
mod soap;

pub use client::{GusClient, RegistryEntry};
pub use config::{GusConfig, PRODUCTION_URL, SANDBOX_URL};
pub use error::GusError;
