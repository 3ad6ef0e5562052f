//! Core domain logic for BDO power-of-attorney generation
//!
//! This crate turns a raw GUS registry record into a ready-to-render
//! document:
//! - Field normalization across the registry's entity-dependent key names
//! - Address line formatting
//! - Province name inflection for the legal prose
//! - Assembly of the pełnomocnictwo paragraph sequence
//!
//! Everything here is pure and synchronous; network lookup and binary
//! rendering live in their own crates.

pub mod address;
pub mod document;
pub mod mandate;
pub mod normalize;
pub mod province;
pub mod record;

pub use address::format_address;
pub use document::{Alignment, DocumentText, Paragraph};
pub use mandate::build_mandate;
pub use normalize::{normalize, CompanyProfile};
pub use province::province_genitive;
pub use record::{LegalForm, RawRecord};
