//! Single-line address formatting
//!
//! Produces the address line used both in the document header and inside
//! the mandate body.

use crate::normalize::CompanyProfile;

/// Locality marker prefixed to named streets.
pub const STREET_MARKER: &str = "ul.";

/// Format a profile into one printable address line.
///
/// The registry is inconsistent about whether a street name already
/// carries the `ul.` marker, so a case-insensitive substring check
/// decides whether to add one. This is a heuristic, not a parse: a
/// street whose name merely contains "ul." anywhere is left alone.
///
/// The `, <postal> <city>` tail is always appended, even when both parts
/// are empty; a visibly truncated line is the intended degraded output
/// for incomplete records.
pub fn format_address(profile: &CompanyProfile) -> String {
    let mut line = String::new();

    if profile.street.is_empty() {
        // Village address with no named street.
        line.push_str(&profile.house_number);
    } else {
        if !profile
            .street
            .to_lowercase()
            .contains(STREET_MARKER)
        {
            line.push_str(STREET_MARKER);
            line.push(' ');
        }
        line.push_str(&profile.street);
        line.push(' ');
        line.push_str(&profile.house_number);
    }

    if !profile.unit_number.is_empty() {
        line.push('/');
        line.push_str(&profile.unit_number);
    }

    line.push_str(", ");
    line.push_str(&profile.postal_code);
    line.push(' ');
    line.push_str(&profile.city);

    line
}
