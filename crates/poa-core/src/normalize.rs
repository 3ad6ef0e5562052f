//! Field normalization from raw registry records
//!
//! The registry reports the same logical fields under different names
//! depending on the entity's legal form: a KRS company answers with
//! `adsiedz*` address keys, a CEIDG report uses plain names, and the
//! search endpoint uses yet another set. The candidate tables below make
//! that precedence explicit: first non-empty candidate wins, and a
//! field with no match degrades to an empty string rather than an error,
//! so document generation can always proceed.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::record::{LegalForm, RawRecord};

/// Candidate keys per canonical field, most specific first.
///
/// Public so tests (and the curious) can see the exact precedence; these
/// tables are the contract with the registry's shifting response shapes.
pub const NAME_KEYS: &[&str] = &["nazwa"];
pub const CITY_KEYS: &[&str] = &[
    "miejscowosc",
    "adsiedzmiejscowosc_nazwa",
    "siedzibamiejscowosc_nazwa",
];
pub const STREET_KEYS: &[&str] = &["ulica", "adsiedzulica_nazwa", "siedzibaulica_nazwa"];
pub const HOUSE_NUMBER_KEYS: &[&str] = &["nr_nieruchomosci", "adsiedznumernieruchomosci"];
pub const UNIT_NUMBER_KEYS: &[&str] = &["nr_lokalu", "adsiedznumerlokalu"];
pub const POSTAL_CODE_KEYS: &[&str] = &["kod_pocztowy", "adsiedzkodpocztowy"];
pub const PROVINCE_KEYS: &[&str] = &["wojewodztwo", "adsiedzwojewodztwo_nazwa"];
pub const REGISTRY_NUMBER_KEYS: &[&str] = &["regon", "regon9"];

/// Given-name / surname keys used when a sole-proprietor report carries
/// no combined `nazwa`.
pub const GIVEN_NAME_KEYS: &[&str] = &["imie1", "imie"];
pub const SURNAME_KEYS: &[&str] = &["nazwisko"];

/// Canonical company data extracted from a registry record.
///
/// Every field is a `String`; an empty string means the registry did not
/// supply the value. Downstream formatting never has to handle absence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub street: String,
    pub house_number: String,
    pub unit_number: String,
    pub postal_code: String,
    pub city: String,
    pub province: String,
    pub registry_number: String,
}

impl CompanyProfile {
    /// Address fields the mandate cannot do without.
    ///
    /// Street is deliberately not included (village addresses have
    /// none), and a blank province already degrades visibly in the
    /// document.
    pub fn missing_address_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.city.is_empty() {
            missing.push("miejscowość");
        }
        if self.postal_code.is_empty() {
            missing.push("kod pocztowy");
        }
        if self.house_number.is_empty() {
            missing.push("nr nieruchomości");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_address_fields().is_empty()
    }
}

/// Build a [`CompanyProfile`] from a raw record.
///
/// Total over arbitrary records: unresolved fields come back as empty
/// strings and are logged, never raised.
pub fn normalize(record: &RawRecord, form: LegalForm) -> CompanyProfile {
    let profile = CompanyProfile {
        name: resolve_name(record, form),
        street: resolve(record, STREET_KEYS),
        house_number: resolve(record, HOUSE_NUMBER_KEYS),
        unit_number: resolve(record, UNIT_NUMBER_KEYS),
        postal_code: format_postal_code(&resolve(record, POSTAL_CODE_KEYS)),
        city: resolve(record, CITY_KEYS),
        province: resolve(record, PROVINCE_KEYS),
        registry_number: resolve(record, REGISTRY_NUMBER_KEYS),
    };

    let missing = profile.missing_address_fields();
    if !missing.is_empty() {
        warn!(?missing, "registry record resolved to an incomplete address");
    }

    profile
}

fn resolve(record: &RawRecord, keys: &[&str]) -> String {
    record
        .first_non_empty(keys)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// Company name, falling back to "given-name surname" for sole
/// proprietors whose report carries the parts but no combined field.
fn resolve_name(record: &RawRecord, form: LegalForm) -> String {
    let name = resolve(record, NAME_KEYS);
    if !name.is_empty() || form == LegalForm::LegalPerson {
        return name;
    }

    let given = resolve(record, GIVEN_NAME_KEYS);
    let surname = resolve(record, SURNAME_KEYS);
    match (given.is_empty(), surname.is_empty()) {
        (false, false) => format!("{given} {surname}"),
        (true, false) => surname,
        (false, true) => given,
        (true, true) => String::new(),
    }
}

/// Reformat a bare 5-digit postal code to the `NN-NNN` convention.
///
/// Already-hyphenated codes (and anything else) pass through unchanged,
/// which makes the function idempotent.
pub fn format_postal_code(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() == 5 && trimmed.chars().all(|c| c.is_ascii_digit()) {
        format!("{}-{}", &trimmed[..2], &trimmed[2..])
    } else {
        trimmed.to_string()
    }
}
