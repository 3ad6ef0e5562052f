//! WordprocessingML generation for `word/document.xml`

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use poa_core::document::{Alignment, DocumentText, Paragraph};

use crate::error::RenderError;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Twentieths of a point per centimeter (1440 twips per inch).
const TWIPS_PER_CM: f32 = 1440.0 / 2.54;

fn jc_value(alignment: Alignment) -> Option<&'static str> {
    match alignment {
        Alignment::Left => None,
        Alignment::Right => Some("right"),
        Alignment::Center => Some("center"),
        Alignment::Justified => Some("both"),
    }
}

/// Serialize the paragraph sequence into a complete `document.xml`.
pub fn document_xml(doc: &DocumentText) -> Result<String, RenderError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let mut root = BytesStart::new("w:document");
    root.push_attribute(("xmlns:w", W_NS));
    writer.write_event(Event::Start(root))?;
    writer.write_event(Event::Start(BytesStart::new("w:body")))?;

    for paragraph in doc.iter() {
        write_paragraph(&mut writer, paragraph)?;
    }

    writer.write_event(Event::Empty(BytesStart::new("w:sectPr")))?;
    writer.write_event(Event::End(BytesEnd::new("w:body")))?;
    writer.write_event(Event::End(BytesEnd::new("w:document")))?;

    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_paragraph(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    paragraph: &Paragraph,
) -> Result<(), RenderError> {
    writer.write_event(Event::Start(BytesStart::new("w:p")))?;

    let jc = jc_value(paragraph.alignment);
    if jc.is_some() || paragraph.indent_cm.is_some() {
        writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
        if let Some(cm) = paragraph.indent_cm {
            let twips = (cm * TWIPS_PER_CM).round() as i64;
            let mut ind = BytesStart::new("w:ind");
            ind.push_attribute(("w:left", twips.to_string().as_str()));
            writer.write_event(Event::Empty(ind))?;
        }
        if let Some(value) = jc {
            let mut jc_el = BytesStart::new("w:jc");
            jc_el.push_attribute(("w:val", value));
            writer.write_event(Event::Empty(jc_el))?;
        }
        writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
    }

    if !paragraph.text.is_empty() {
        writer.write_event(Event::Start(BytesStart::new("w:r")))?;

        if paragraph.bold || paragraph.font_size_pt.is_some() {
            writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;
            if paragraph.bold {
                writer.write_event(Event::Empty(BytesStart::new("w:b")))?;
            }
            if let Some(pt) = paragraph.font_size_pt {
                // WordprocessingML measures font size in half-points.
                let half_points = (pt * 2).to_string();
                let mut sz = BytesStart::new("w:sz");
                sz.push_attribute(("w:val", half_points.as_str()));
                writer.write_event(Event::Empty(sz))?;
                let mut sz_cs = BytesStart::new("w:szCs");
                sz_cs.push_attribute(("w:val", half_points.as_str()));
                writer.write_event(Event::Empty(sz_cs))?;
            }
            writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;
        }

        let mut text = BytesStart::new("w:t");
        text.push_attribute(("xml:space", "preserve"));
        writer.write_event(Event::Start(text))?;
        writer.write_event(Event::Text(BytesText::new(&paragraph.text)))?;
        writer.write_event(Event::End(BytesEnd::new("w:t")))?;

        writer.write_event(Event::End(BytesEnd::new("w:r")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("w:p")))?;
    Ok(())
}
