//! Province name inflection
//!
//! The mandate body reads "przed Urzędem Marszałkowskim Województwa X",
//! which requires the province name in its genitive form. The 16 Polish
//! provinces are tabulated; anything else falls back to capitalization
//! so the document stays generatable for unexpected registry output.

/// Placeholder inserted when the registry supplied no province at all,
/// left for manual completion on the printed document.
pub const MANUAL_FILL_PLACEHOLDER: &str = "........................................";

/// Nominative (lowercase) to genitive (capitalized) forms of the 16
/// provinces.
pub const GENITIVE_FORMS: &[(&str, &str)] = &[
    ("dolnośląskie", "Dolnośląskiego"),
    ("kujawsko-pomorskie", "Kujawsko-Pomorskiego"),
    ("lubelskie", "Lubelskiego"),
    ("lubuskie", "Lubuskiego"),
    ("łódzkie", "Łódzkiego"),
    ("małopolskie", "Małopolskiego"),
    ("mazowieckie", "Mazowieckiego"),
    ("opolskie", "Opolskiego"),
    ("podkarpackie", "Podkarpackiego"),
    ("podlaskie", "Podlaskiego"),
    ("pomorskie", "Pomorskiego"),
    ("śląskie", "Śląskiego"),
    ("świętokrzyskie", "Świętokrzyskiego"),
    ("warmińsko-mazurskie", "Warmińsko-Mazurskiego"),
    ("wielkopolskie", "Wielkopolskiego"),
    ("zachodniopomorskie", "Zachodniopomorskiego"),
];

/// Genitive form of a nominative province name, case-insensitively.
///
/// Unknown non-blank input is capitalized as-is; blank input yields
/// [`MANUAL_FILL_PLACEHOLDER`]. Pure and total.
pub fn province_genitive(nominative: &str) -> String {
    let lookup = nominative.trim().to_lowercase();
    if lookup.is_empty() {
        return MANUAL_FILL_PLACEHOLDER.to_string();
    }

    GENITIVE_FORMS
        .iter()
        .find(|(nom, _)| *nom == lookup)
        .map(|(_, gen)| (*gen).to_string())
        .unwrap_or_else(|| capitalize(&lookup))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
