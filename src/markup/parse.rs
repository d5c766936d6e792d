//! Markup parsing functions.

use crate::dom::{Document, ElementId};
use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parse page markup from a string.
pub fn parse_document(markup: &str) -> Result<Document> {
    let mut reader = Reader::from_str(markup);
    reader.config_mut().trim_text(true);

    let mut doc = Document::new();
    let mut stack: Vec<ElementId> = Vec::new();
    let mut seen_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let id = open_element(&mut doc, &e, &stack, &mut seen_root)?;
                stack.push(id);
            }
            Event::Empty(e) => {
                open_element(&mut doc, &e, &stack, &mut seen_root)?;
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Text(t) => {
                let Some(&parent) = stack.last() else {
                    continue;
                };
                let text = t.unescape().map_err(|e| Error::Markup(e.to_string()))?;
                if text.is_empty() {
                    continue;
                }
                let joined = match doc.text(parent) {
                    Some(existing) => format!("{existing} {text}"),
                    None => text.into_owned(),
                };
                doc.set_text(parent, &joined)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(Error::Markup("missing <body> root element".into()));
    }
    Ok(doc)
}

/// Parse page markup from disk.
pub fn parse_document_file(path: &std::path::Path) -> Result<Document> {
    let contents = std::fs::read_to_string(path)?;
    parse_document(&contents)
}

fn open_element(
    doc: &mut Document,
    start: &BytesStart<'_>,
    stack: &[ElementId],
    seen_root: &mut bool,
) -> Result<ElementId> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    let id = match stack.last() {
        Some(&parent) => {
            let id = doc.create_element(&tag);
            doc.append_child(parent, id)?;
            id
        }
        None if *seen_root => {
            return Err(Error::Markup(format!("unexpected second root element <{tag}>")));
        }
        None if !tag.eq_ignore_ascii_case("body") => {
            return Err(Error::Markup(format!("root element must be <body>, found <{tag}>")));
        }
        None => {
            *seen_root = true;
            doc.body()
        }
    };

    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::Markup(e.to_string()))?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::Markup(e.to_string()))?;
        if name == "hidden" {
            if let Some(el) = doc.get_mut(id) {
                el.hidden = true;
            }
            continue;
        }
        doc.set_attribute(id, &name, &value)?;
    }
    Ok(id)
}
