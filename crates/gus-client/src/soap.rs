//! SOAP plumbing for the BIR1.1 service
//!
//! Requests are SOAP 1.2 envelopes with WS-Addressing headers; responses
//! come back MTOM-framed (the envelope sits between MIME boundary
//! lines) and result payloads are XML documents escaped into a text
//! node, so they get unescaped here and parsed a second time.

use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::GusError;

const BIR_NS: &str = "http://CIS/BIR/PUBL/2014/07";
const DATA_NS: &str = "http://CIS/BIR/PUBL/2014/07/DataContract";

/// Build a request envelope for the given WS-Addressing action.
pub fn envelope(action: &str, to: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://www.w3.org/2003/05/soap-envelope" xmlns:wsa="http://www.w3.org/2005/08/addressing" xmlns:ns="{BIR_NS}" xmlns:dat="{DATA_NS}">
  <soap:Header>
    <wsa:Action>{BIR_NS}/IUslugaBIRzewnPubl/{action}</wsa:Action>
    <wsa:To>{to}</wsa:To>
  </soap:Header>
  <soap:Body>
{body}
  </soap:Body>
</soap:Envelope>"#,
        to = escape(to),
    )
}

pub fn login_body(api_key: &str) -> String {
    format!(
        "    <ns:Zaloguj><ns:pKluczUzytkownika>{}</ns:pKluczUzytkownika></ns:Zaloguj>",
        escape(api_key)
    )
}

pub fn logout_body(sid: &str) -> String {
    format!(
        "    <ns:Wyloguj><ns:pIdentyfikatorSesji>{}</ns:pIdentyfikatorSesji></ns:Wyloguj>",
        escape(sid)
    )
}

pub fn search_by_nip_body(nip: &str) -> String {
    format!(
        "    <ns:DaneSzukajPodmioty><ns:pParametryWyszukiwania><dat:Nip>{}</dat:Nip></ns:pParametryWyszukiwania></ns:DaneSzukajPodmioty>",
        escape(nip)
    )
}

pub fn full_report_body(regon: &str, report_name: &str) -> String {
    format!(
        "    <ns:DanePobierzPelnyRaport><ns:pRegon>{}</ns:pRegon><ns:pNazwaRaportu>{}</ns:pNazwaRaportu></ns:DanePobierzPelnyRaport>",
        escape(regon),
        escape(report_name)
    )
}

/// Slice the SOAP envelope out of an MTOM multipart body.
///
/// The service wraps the envelope in MIME boundaries with part headers;
/// the framing is fixed, so locating the envelope tags beats pulling in
/// a multipart parser. Plain (unframed) envelopes pass through.
pub fn extract_envelope(body: &str) -> Option<&str> {
    let start = body.find("<s:Envelope").or_else(|| body.find("<soap:Envelope"))?;
    let end = body
        .rfind("</s:Envelope>")
        .map(|i| i + "</s:Envelope>".len())
        .or_else(|| {
            body.rfind("</soap:Envelope>")
                .map(|i| i + "</soap:Envelope>".len())
        })?;
    body.get(start..end)
}

/// Text content of the first element with the given local name, fully
/// unescaped. `Ok(None)` when the element is absent or self-closing.
pub fn extract_result(xml: &str, tag: &str) -> Result<Option<String>, GusError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == tag.as_bytes() => {
                let mut out = String::new();
                loop {
                    match reader.read_event()? {
                        Event::Text(t) => out.push_str(&t.unescape()?),
                        Event::CData(c) => {
                            out.push_str(&String::from_utf8_lossy(&c.into_inner()))
                        }
                        Event::End(end) if end.local_name().as_ref() == tag.as_bytes() => {
                            return Ok(Some(out));
                        }
                        Event::Eof => {
                            return Err(GusError::UnexpectedResponse(format!(
                                "unterminated <{tag}> element"
                            )));
                        }
                        _ => {}
                    }
                }
            }
            Event::Empty(e) if e.local_name().as_ref() == tag.as_bytes() => {
                return Ok(None);
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// Flatten the `<dane>` groups of an unescaped report payload into
/// (element name, text) pairs, one list per group.
pub fn parse_dane(xml: &str) -> Result<Vec<Vec<(String, String)>>, GusError> {
    let mut reader = Reader::from_str(xml);
    let mut groups = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"dane" => {
                groups.push(read_group(&mut reader)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(groups)
}

fn read_group(reader: &mut Reader<&[u8]>) -> Result<Vec<(String, String)>, GusError> {
    let mut fields = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(field) => {
                let name = String::from_utf8_lossy(field.local_name().as_ref()).into_owned();
                let mut value = String::new();
                loop {
                    match reader.read_event()? {
                        Event::Text(t) => value.push_str(&t.unescape()?),
                        Event::CData(c) => {
                            value.push_str(&String::from_utf8_lossy(&c.into_inner()))
                        }
                        Event::End(_) => break,
                        Event::Eof => {
                            return Err(GusError::UnexpectedResponse(
                                "unterminated report field".to_string(),
                            ));
                        }
                        _ => {}
                    }
                }
                fields.push((name, value));
            }
            Event::Empty(field) => {
                let name = String::from_utf8_lossy(field.local_name().as_ref()).into_owned();
                fields.push((name, String::new()));
            }
            Event::End(e) if e.local_name().as_ref() == b"dane" => break,
            Event::Eof => {
                return Err(GusError::UnexpectedResponse(
                    "unterminated <dane> group".to_string(),
                ));
            }
            _ => {}
        }
    }

    Ok(fields)
}
