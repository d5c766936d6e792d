//! Element node - tag, attributes, children and text.

use super::{next_element_id, ElementId};
use std::collections::BTreeMap;

/// A single element in the document tree.
#[derive(Debug, Clone)]
pub struct Element {
    /// Unique element ID.
    pub id: ElementId,
    /// Lowercase tag name.
    pub tag: String,
    /// Parent element ID (None for the body root and detached elements).
    pub parent_id: Option<ElementId>,
    /// Child element IDs in document order.
    pub children: Vec<ElementId>,
    /// Attributes, kept sorted so serialization is stable.
    pub attributes: BTreeMap<String, String>,
    /// Text content (leaf text only, no mixed content).
    pub text: Option<String>,
    /// Whether the element is hidden from rendering.
    pub hidden: bool,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            id: next_element_id(),
            tag: tag.to_ascii_lowercase(),
            parent_id: None,
            children: Vec::new(),
            attributes: BTreeMap::new(),
            text: None,
            hidden: false,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    /// Whitespace-separated entries of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attribute("class")
            .unwrap_or_default()
            .split_ascii_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let joined = match self.attribute("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {}", existing.trim(), class),
            _ => class.to_string(),
        };
        self.set_attribute("class", &joined);
    }

    /// Value of the `id` attribute.
    pub fn dom_id(&self) -> Option<&str> {
        self.attribute("id")
    }
}
