//! Raw registry record as returned by a GUS lookup
//!
//! The registry answers with different key sets depending on which
//! sub-schema handled the query (KRS companies vs CEIDG sole
//! proprietors), so the record is a loosely-typed string map with no
//! invariant on which keys are present. All of its quirks are resolved
//! by the normalizer; nothing downstream should touch raw keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Legal form of the registered entity, as reported by the registry's
/// search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalForm {
    /// KRS-registered legal person (code `P`).
    LegalPerson,
    /// CEIDG sole proprietor (code `F`).
    SoleProprietor,
    /// Anything else, including missing type information.
    Unknown,
}

impl LegalForm {
    /// Map the registry's one-letter type code.
    pub fn from_registry_code(code: &str) -> Self {
        match code.trim() {
            "P" | "p" => LegalForm::LegalPerson,
            "F" | "f" => LegalForm::SoleProprietor,
            _ => LegalForm::Unknown,
        }
    }
}

/// Untyped key-value record from a registry lookup.
///
/// Keys are stored lowercased as produced by the client; values are kept
/// verbatim. Empty values are common and treated the same as absent keys
/// by [`first_non_empty`](RawRecord::first_non_empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(BTreeMap<String, String>);

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Insert only when the key is not already present.
    pub fn insert_missing(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_insert_with(|| value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// First candidate key whose value is non-blank.
    ///
    /// This is the single lookup primitive the normalizer builds on: the
    /// precedence order is whatever order `keys` lists, nothing implicit.
    pub fn first_non_empty(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|k| self.get(k))
            .find(|v| !v.trim().is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}
