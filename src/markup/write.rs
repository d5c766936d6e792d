//! Markup serialization.

use crate::dom::{Document, ElementId};
use quick_xml::escape::escape;
use std::fmt::Write;

/// Serialize `id` and its subtree on one line. Attributes come out sorted by
/// name; hidden elements carry `hidden=""` last.
pub fn to_markup(doc: &Document, id: ElementId) -> String {
    let mut out = String::new();
    write_element(doc, id, &mut out);
    out
}

fn write_element(doc: &Document, id: ElementId, out: &mut String) {
    let Some(el) = doc.get(id) else {
        return;
    };

    let _ = write!(out, "<{}", el.tag);
    for (name, value) in &el.attributes {
        let _ = write!(out, " {}=\"{}\"", name, escape(value.as_str()));
    }
    if el.hidden {
        out.push_str(" hidden=\"\"");
    }

    if el.children.is_empty() && el.text.as_deref().unwrap_or_default().is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    if let Some(text) = &el.text {
        out.push_str(&escape(text.as_str()));
    }
    for &child in &el.children {
        write_element(doc, child, out);
    }
    let _ = write!(out, "</{}>", el.tag);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse_document;

    #[test]
    fn writes_sorted_attributes_and_escapes() {
        let mut doc = Document::new();
        let body = doc.body();
        let b = doc.create_element("button");
        doc.append_child(body, b).unwrap();
        doc.set_attribute(b, "title", "a \"quoted\" <hint>").unwrap();
        doc.set_attribute(b, "class", "app-tippy").unwrap();
        doc.set_text(b, "Save & exit").unwrap();

        insta::assert_snapshot!(
            to_markup(&doc, body),
            @r#"<body><button class="app-tippy" title="a &quot;quoted&quot; &lt;hint&gt;">Save &amp; exit</button></body>"#
        );
    }

    #[test]
    fn parse_then_write_is_stable() {
        let src = r#"<body><nav id="menu"><a class="app-tippy" href="/" title="Start page">Home</a><i/></nav></body>"#;
        let doc = parse_document(src).unwrap();
        assert_eq!(to_markup(&doc, doc.body()), src);
    }

    #[test]
    fn hidden_flag_is_written() {
        let mut doc = Document::new();
        let body = doc.body();
        let d = doc.create_element("div");
        doc.append_child(body, d).unwrap();
        doc.get_mut(d).unwrap().hidden = true;
        assert_eq!(to_markup(&doc, body), r#"<body><div hidden=""/></body>"#);
    }
}
