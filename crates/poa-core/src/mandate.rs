//! Assembly of the BDO power-of-attorney document
//!
//! The legal prose is fixed; only company data, the tax id and the date
//! are interpolated. The paragraph count and ordering never vary with
//! input, which keeps the rendered document byte-stable for identical
//! inputs.

use chrono::NaiveDate;

use crate::address::format_address;
use crate::document::{Alignment, DocumentText, Paragraph};
use crate::normalize::CompanyProfile;
use crate::province::province_genitive;

/// City the document is issued in.
pub const ISSUE_CITY: &str = "Łódź";

/// The two attorneys-in-fact named by the mandate, in the genitive form
/// used by the body text.
pub const ATTORNEYS_GENITIVE: &str = "Pana Pawła Bolimowskiego oraz Pana Patryka Kosteckiego";

/// The six activities the attorneys are authorized to perform through
/// the principal's individual BDO account.
pub const AUTHORIZED_ACTIVITIES: [&str; 6] = [
    "złożenia wniosku o wpis do rejestru BDO,",
    "składania wniosków aktualizacyjnych dotyczących danych objętych wpisem,",
    "złożenia wniosku o wykreślenie z rejestru BDO,",
    "sporządzania i składania rocznych sprawozdań o wytwarzanych odpadach i o gospodarowaniu odpadami,",
    "prowadzenia ewidencji odpadów, w tym wystawiania kart przekazania odpadów oraz kart ewidencji odpadów,",
    "odbierania oraz składania pism, oświadczeń i innej korespondencji w ramach indywidualnego konta podmiotu w systemie BDO.",
];

const TITLE_SIZE_PT: u32 = 14;
const ACTIVITY_INDENT_CM: f32 = 0.75;

/// Build the full document for one company.
///
/// Deterministic: identical profile, tax id and date produce identical
/// output.
pub fn build_mandate(profile: &CompanyProfile, nip: &str, today: NaiveDate) -> DocumentText {
    let date = today.format("%d.%m.%Y");
    let address = format_address(profile);
    let province = province_genitive(&profile.province);

    let body = format!(
        "Działając w imieniu {name} z siedzibą w {city}, {address}, posiadając prawo \
         reprezentacji tego podmiotu w zakresie ustanawiania pełnomocnictw, upoważniam \
         {ATTORNEYS_GENITIVE} do samodzielnej reprezentacji {name} przed Urzędem \
         Marszałkowskim Województwa {province} w następujących sprawach załatwianych za \
         pośrednictwem indywidualnego konta w Bazie danych o produktach i opakowaniach \
         oraz o gospodarce odpadami (BDO), prowadzonej na podstawie art. 79 ustawy z dnia \
         14 grudnia 2012 r. o odpadach, to jest w zakresie:",
        name = profile.name,
        city = profile.city,
        address = address,
        province = province,
    );

    let mut paragraphs = vec![
        Paragraph::text(format!("{ISSUE_CITY}, dnia {date} r.")).align(Alignment::Right),
        Paragraph::blank(),
        Paragraph::text("Mocodawca").bold(),
        Paragraph::text(profile.name.to_uppercase()),
        Paragraph::text(address),
        Paragraph::text(format!("NIP: {nip}")),
        Paragraph::text(format!("REGON: {}", profile.registry_number)),
        Paragraph::blank(),
        Paragraph::text("PEŁNOMOCNICTWO")
            .align(Alignment::Center)
            .bold()
            .size(TITLE_SIZE_PT),
        Paragraph::blank(),
        Paragraph::text(body).align(Alignment::Justified),
    ];

    for (i, activity) in AUTHORIZED_ACTIVITIES.iter().enumerate() {
        paragraphs.push(
            Paragraph::text(format!("{}) {activity}", i + 1))
                .align(Alignment::Justified)
                .indent(ACTIVITY_INDENT_CM),
        );
    }

    paragraphs.push(
        Paragraph::text(format!(
            "Pełnomocnictwo obowiązuje od dnia {date} r. i zostaje udzielone na czas \
             nieokreślony."
        ))
        .align(Alignment::Justified),
    );
    paragraphs.push(
        Paragraph::text(
            "Pełnomocnictwo może zostać odwołane w każdym czasie, a odwołanie wywołuje \
             skutek z chwilą doręczenia go Urzędowi Marszałkowskiemu.",
        )
        .align(Alignment::Justified),
    );
    paragraphs.push(Paragraph::blank());
    paragraphs.push(
        Paragraph::text("............................................").align(Alignment::Center),
    );
    paragraphs.push(
        Paragraph::text("(podpis osoby upoważnionej do reprezentacji Mocodawcy)")
            .align(Alignment::Center),
    );

    DocumentText::new(paragraphs)
}
