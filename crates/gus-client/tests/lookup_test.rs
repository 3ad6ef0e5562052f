//! Contract tests for the BIR1.1 lookup flow
//!
//! Simulates the registry with wiremock. Request bodies are matched on
//! their SOAP operation element, so each mock answers exactly one of the
//! login / search / report / logout calls.

use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gus_client::{GusClient, GusConfig, GusError};
use poa_core::record::LegalForm;

const SID: &str = "0123456789abcdef0123";

fn soap_response(result_tag: &str, inner: &str) -> String {
    // Result payloads are XML documents escaped into a text node, as the
    // live service sends them.
    let escaped = inner
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    format!(
        "<s:Envelope xmlns:s=\"http://www.w3.org/2003/05/soap-envelope\"><s:Body>\
         <{result_tag}Response xmlns=\"http://CIS/BIR/PUBL/2014/07\">\
         <{result_tag}Result>{escaped}</{result_tag}Result>\
         </{result_tag}Response></s:Body></s:Envelope>"
    )
}

fn login_response() -> String {
    format!(
        "<s:Envelope xmlns:s=\"http://www.w3.org/2003/05/soap-envelope\"><s:Body>\
         <ZalogujResponse xmlns=\"http://CIS/BIR/PUBL/2014/07\">\
         <ZalogujResult>{SID}</ZalogujResult>\
         </ZalogujResponse></s:Body></s:Envelope>"
    )
}

async fn mount_session(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("Zaloguj"))
        .respond_with(ResponseTemplate::new(200).set_body_string(login_response()))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("Wyloguj"))
        .respond_with(ResponseTemplate::new(200).set_body_string(soap_response("Wyloguj", "true")))
        .mount(server)
        .await;
}

fn test_client(server: &MockServer) -> GusClient {
    GusClient::new(GusConfig::new("test-key").with_base_url(server.uri())).unwrap()
}

#[tokio::test]
async fn lookup_legal_person_merges_report_and_search() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("DaneSzukajPodmioty"))
        .respond_with(ResponseTemplate::new(200).set_body_string(soap_response(
            "DaneSzukajPodmioty",
            "<root><dane><Regon>123456789</Regon><Nip>1234567890</Nip><Typ>P</Typ>\
             <Nazwa>ACME SP Z O O</Nazwa><Wojewodztwo>ŁÓDZKIE</Wojewodztwo></dane></root>",
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("BIR11OsPrawna"))
        .respond_with(ResponseTemplate::new(200).set_body_string(soap_response(
            "DanePobierzPelnyRaport",
            "<root><dane>\
             <praw_nazwa>ACME SPÓŁKA Z OGRANICZONĄ ODPOWIEDZIALNOŚCIĄ</praw_nazwa>\
             <praw_adSiedzMiejscowosc_Nazwa>Łódź</praw_adSiedzMiejscowosc_Nazwa>\
             <praw_adSiedzUlica_Nazwa>Piotrkowska</praw_adSiedzUlica_Nazwa>\
             <praw_adSiedzNumerNieruchomosci>1</praw_adSiedzNumerNieruchomosci>\
             <praw_adSiedzKodPocztowy>90001</praw_adSiedzKodPocztowy>\
             <praw_adSiedzWojewodztwo_Nazwa>łódzkie</praw_adSiedzWojewodztwo_Nazwa>\
             </dane></root>",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let entry = test_client(&server)
        .lookup_by_nip("1234567890")
        .await
        .unwrap();

    assert_eq!(entry.legal_form, LegalForm::LegalPerson);
    assert_eq!(
        entry.record.get("nazwa"),
        Some("ACME SPÓŁKA Z OGRANICZONĄ ODPOWIEDZIALNOŚCIĄ")
    );
    assert_eq!(entry.record.get("adsiedzulica_nazwa"), Some("Piotrkowska"));
    assert_eq!(entry.record.get("adsiedzkodpocztowy"), Some("90001"));
    // Search basics fill gaps without clobbering report values.
    assert_eq!(entry.record.get("regon"), Some("123456789"));
    assert_eq!(entry.record.get("nip"), Some("1234567890"));
    assert_eq!(
        entry.record.get("adsiedzwojewodztwo_nazwa"),
        Some("łódzkie")
    );
}

#[tokio::test]
async fn lookup_sole_proprietor_requests_ceidg_report() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("DaneSzukajPodmioty"))
        .respond_with(ResponseTemplate::new(200).set_body_string(soap_response(
            "DaneSzukajPodmioty",
            "<root><dane><Regon>987654321</Regon><Typ>F</Typ></dane></root>",
        )))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("BIR11OsFizycznaDzialalnoscCeidg"))
        .respond_with(ResponseTemplate::new(200).set_body_string(soap_response(
            "DanePobierzPelnyRaport",
            "<root><dane>\
             <fiz_nazwa>Jan Kowalski Usługi</fiz_nazwa>\
             <fiz_regon9>987654321</fiz_regon9>\
             <fiz_adSiedzNumerNieruchomosci>7</fiz_adSiedzNumerNieruchomosci>\
             </dane></root>",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let entry = test_client(&server)
        .lookup_by_nip("9876543210")
        .await
        .unwrap();

    assert_eq!(entry.legal_form, LegalForm::SoleProprietor);
    assert_eq!(entry.record.get("nazwa"), Some("Jan Kowalski Usługi"));
    assert_eq!(entry.record.get("regon9"), Some("987654321"));
}

#[tokio::test]
async fn unknown_nip_maps_to_not_found() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("DaneSzukajPodmioty"))
        .respond_with(ResponseTemplate::new(200).set_body_string(soap_response(
            "DaneSzukajPodmioty",
            "<root><dane><ErrorCode>4</ErrorCode>\
             <ErrorMessagePl>Nie znaleziono podmiotu</ErrorMessagePl></dane></root>",
        )))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .lookup_by_nip("0000000000")
        .await
        .unwrap_err();

    assert!(matches!(err, GusError::NotFound(nip) if nip == "0000000000"));
}

#[tokio::test]
async fn empty_search_result_maps_to_not_found() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("DaneSzukajPodmioty"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(soap_response("DaneSzukajPodmioty", "")),
        )
        .mount(&server)
        .await;

    let err = test_client(&server)
        .lookup_by_nip("1111111111")
        .await
        .unwrap_err();
    assert!(matches!(err, GusError::NotFound(_)));
}

#[tokio::test]
async fn blank_session_id_means_invalid_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("Zaloguj"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<s:Envelope xmlns:s=\"http://www.w3.org/2003/05/soap-envelope\"><s:Body>\
             <ZalogujResponse xmlns=\"http://CIS/BIR/PUBL/2014/07\">\
             <ZalogujResult></ZalogujResult>\
             </ZalogujResponse></s:Body></s:Envelope>",
        ))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .lookup_by_nip("1234567890")
        .await
        .unwrap_err();
    assert!(matches!(err, GusError::InvalidCredentials));
}

#[tokio::test]
async fn mtom_framed_response_is_accepted() {
    let server = MockServer::start().await;

    let framed = format!(
        "--uuid:1b2c3d\r\nContent-Type: application/xop+xml\r\n\r\n{}\r\n--uuid:1b2c3d--",
        login_response()
    );
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("Zaloguj"))
        .respond_with(ResponseTemplate::new(200).set_body_string(framed))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("Wyloguj"))
        .respond_with(ResponseTemplate::new(200).set_body_string(soap_response("Wyloguj", "true")))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("DaneSzukajPodmioty"))
        .respond_with(ResponseTemplate::new(200).set_body_string(soap_response(
            "DaneSzukajPodmioty",
            "<root><dane><ErrorCode>4</ErrorCode></dane></root>",
        )))
        .mount(&server)
        .await;

    // Login succeeded through the MTOM framing; the search then reports
    // not-found, proving the session round-trip worked.
    let err = test_client(&server)
        .lookup_by_nip("2222222222")
        .await
        .unwrap_err();
    assert!(matches!(err, GusError::NotFound(_)));
}

#[tokio::test]
async fn http_failure_surfaces_as_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .lookup_by_nip("1234567890")
        .await
        .unwrap_err();
    assert!(matches!(err, GusError::Service(_)));
}
