//! Server-rendered HTML pages
//!
//! Deliberately plain: one form, one result page, no client-side code.

use poa_core::record::RawRecord;
use poa_core::{format_address, CompanyProfile};

const TITLE: &str = "Generator Pełnomocnictw BDO";

fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pl">
<head>
<meta charset="utf-8">
<title>{TITLE}</title>
<style>
body {{ font-family: sans-serif; max-width: 42rem; margin: 2rem auto; padding: 0 1rem; }}
.error {{ background: #fdecea; border: 1px solid #c0392b; padding: .75rem; }}
.warning {{ background: #fff6e0; border: 1px solid #b9770e; padding: .75rem; }}
.success {{ background: #e9f7ef; border: 1px solid #1e8449; padding: .75rem; }}
input[type=text] {{ font-size: 1.1rem; padding: .4rem; width: 14rem; }}
button, .button {{ font-size: 1.1rem; padding: .4rem 1rem; }}
table {{ border-collapse: collapse; }}
td, th {{ border: 1px solid #ccc; padding: .2rem .5rem; text-align: left; }}
</style>
</head>
<body>
<h1>♻️ {TITLE}</h1>
<h3>Elite Waste</h3>
{body}
</body>
</html>"#
    )
}

/// Landing page with the NIP form; `error` renders the inline message
/// area.
pub fn index_page(error: Option<&str>) -> String {
    let message = match error {
        Some(text) => format!("<p class=\"error\">{}</p>\n", escape_html(text)),
        None => String::new(),
    };

    page(&format!(
        r#"<p>Wpisz NIP klienta poniżej. System obsługuje zarówno spółki (KRS) jak i JDG (CEIDG).</p>
{message}<form method="post" action="/generate">
<label for="nip">NIP:</label>
<input type="text" id="nip" name="nip" maxlength="10" placeholder="1234567890">
<button type="submit">Generuj pełnomocnictwo</button>
</form>"#
    ))
}

/// Result page: status message, optional incompleteness warning, the
/// raw registry record for manual diagnosis, and the download action.
pub fn result_page(
    nip: &str,
    profile: &CompanyProfile,
    record: &RawRecord,
    missing: &[&str],
) -> String {
    let nip = escape_html(nip);

    let status = if missing.is_empty() {
        format!(
            "<p class=\"success\">Znaleziono: <strong>{}</strong></p>",
            escape_html(&profile.name)
        )
    } else {
        format!(
            "<p class=\"warning\">Dane adresowe są niekompletne (brak: {}). \
             Dokument zostanie wygenerowany z pustymi polami. Sprawdź dane źródłowe poniżej.</p>",
            escape_html(&missing.join(", "))
        )
    };

    let rows: String = record
        .iter()
        .map(|(key, value)| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                escape_html(key),
                escape_html(value)
            )
        })
        .collect();

    page(&format!(
        r#"{status}
<p>Adres: {address}</p>
<p><a class="button" href="/download/{nip}">Pobierz pełnomocnictwo (.docx)</a></p>
<details>
<summary>Dane źródłowe z GUS</summary>
<table>
<tr><th>Pole</th><th>Wartość</th></tr>
{rows}</table>
</details>
<p><a href="/">← Nowe wyszukiwanie</a></p>"#,
        address = escape_html(&format_address(profile)),
    ))
}

/// Minimal HTML escaping for interpolated registry data.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"A&B"</b>"#),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn index_page_without_error_has_no_message_area() {
        let html = index_page(None);
        assert!(!html.contains("class=\"error\""));
        assert!(html.contains("name=\"nip\""));
    }

    #[test]
    fn index_page_renders_inline_error() {
        let html = index_page(Some("Wpisz NIP klienta."));
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("Wpisz NIP klienta."));
    }
}
