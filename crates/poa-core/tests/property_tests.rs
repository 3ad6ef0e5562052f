//! Property-based tests for the normalization pipeline
//!
//! Fuzzes raw registry records and verifies the totality guarantees the
//! rest of the system leans on: normalization never panics, every
//! canonical field is always a string, and the formatting helpers stay
//! well-behaved on arbitrary input.

use proptest::prelude::*;

use poa_core::normalize::{format_postal_code, normalize};
use poa_core::province::{province_genitive, MANUAL_FILL_PLACEHOLDER};
use poa_core::record::{LegalForm, RawRecord};
use poa_core::{build_mandate, format_address};

/// Arbitrary registry-ish keys: known candidates plus random noise.
fn record_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("nazwa".to_string()),
        Just("miejscowosc".to_string()),
        Just("adsiedzmiejscowosc_nazwa".to_string()),
        Just("ulica".to_string()),
        Just("nr_nieruchomosci".to_string()),
        Just("nr_lokalu".to_string()),
        Just("kod_pocztowy".to_string()),
        Just("wojewodztwo".to_string()),
        Just("regon".to_string()),
        Just("regon9".to_string()),
        Just("imie1".to_string()),
        Just("nazwisko".to_string()),
        "[a-z_]{1,24}",
    ]
}

fn arb_record() -> impl Strategy<Value = RawRecord> {
    prop::collection::vec((record_key(), ".{0,40}"), 0..16)
        .prop_map(|pairs| pairs.into_iter().collect())
}

fn arb_form() -> impl Strategy<Value = LegalForm> {
    prop_oneof![
        Just(LegalForm::LegalPerson),
        Just(LegalForm::SoleProprietor),
        Just(LegalForm::Unknown),
    ]
}

proptest! {
    /// Normalization is total: no panic, and the profile is always fully
    /// populated with (possibly empty) strings.
    #[test]
    fn normalize_never_fails(record in arb_record(), form in arb_form()) {
        let profile = normalize(&record, form);

        // Touch every field; absence would be a type error, but this
        // also pins the no-panic guarantee for formatting on top.
        let _ = format_address(&profile);
        let _ = province_genitive(&profile.province);
        prop_assert!(profile.missing_address_fields().len() <= 3);
    }

    /// The address line always carries the `, <postal> <city>` tail.
    #[test]
    fn address_always_has_tail(record in arb_record(), form in arb_form()) {
        let profile = normalize(&record, form);
        let line = format_address(&profile);
        let tail = format!(", {} {}", profile.postal_code, profile.city);
        prop_assert!(line.ends_with(&tail));
    }

    /// Postal code formatting is idempotent on its own output.
    #[test]
    fn postal_code_idempotent(raw in ".{0,12}") {
        let once = format_postal_code(&raw);
        prop_assert_eq!(format_postal_code(&once), once);
    }

    /// The inflector is total and never returns an empty string.
    #[test]
    fn province_genitive_total(name in ".{0,30}") {
        let genitive = province_genitive(&name);
        prop_assert!(!genitive.is_empty());
        if name.trim().is_empty() {
            prop_assert_eq!(genitive, MANUAL_FILL_PLACEHOLDER);
        }
    }

    /// Document assembly succeeds for any normalized record and keeps a
    /// fixed paragraph count.
    #[test]
    fn mandate_paragraph_count_fixed(
        record in arb_record(),
        form in arb_form(),
        nip in "[0-9]{0,10}",
    ) {
        let profile = normalize(&record, form);
        let today = chrono::NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let doc = build_mandate(&profile, &nip, today);
        prop_assert_eq!(doc.len(), 22);
    }
}
