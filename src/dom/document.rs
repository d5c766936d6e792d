//! Document - owner of every element in a page.

use super::{Element, ElementId, Selector};
use crate::error::{Error, Result};
use crate::event::DelegateRegistry;
use std::collections::HashMap;

/// All elements of one page, keyed by id, plus the `body` root.
#[derive(Debug)]
pub struct Document {
    /// Elements by ID (connected and detached).
    elements: HashMap<ElementId, Element>,
    /// The `body` element every page starts with.
    body: ElementId,
    /// Delegated listeners attached to elements of this document.
    listeners: DelegateRegistry,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let body = Element::new("body");
        let id = body.id;
        let mut elements = HashMap::new();
        elements.insert(id, body);
        Self {
            elements,
            body: id,
            listeners: DelegateRegistry::new(),
        }
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    pub fn listeners(&self) -> &DelegateRegistry {
        &self.listeners
    }

    pub fn listeners_mut(&mut self) -> &mut DelegateRegistry {
        &mut self.listeners
    }

    /// Number of elements owned by the document, including detached ones.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Create a detached element. Attach it with [`Document::append_child`].
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        let element = Element::new(tag);
        let id = element.id;
        self.elements.insert(id, element);
        id
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        if !self.elements.contains_key(&parent) {
            return Err(Error::ElementNotFound(parent));
        }
        if !self.elements.contains_key(&child) {
            return Err(Error::ElementNotFound(child));
        }
        if self.contains(child, parent) {
            return Err(Error::Markup(format!(
                "cannot append element {child} inside its own subtree"
            )));
        }

        self.detach(child);
        if let Some(el) = self.elements.get_mut(&child) {
            el.parent_id = Some(parent);
        }
        if let Some(p) = self.elements.get_mut(&parent) {
            p.children.push(child);
        }
        Ok(())
    }

    /// Remove an element and its whole subtree. Returns how many elements were dropped.
    ///
    /// The body root cannot be removed.
    pub fn remove(&mut self, id: ElementId) -> usize {
        if id == self.body || !self.elements.contains_key(&id) {
            return 0;
        }
        self.detach(id);

        let mut stack = vec![id];
        let mut removed = 0;
        while let Some(next) = stack.pop() {
            if let Some(el) = self.elements.remove(&next) {
                stack.extend(el.children);
                removed += 1;
            }
        }
        removed
    }

    fn detach(&mut self, id: ElementId) {
        let Some(parent_id) = self.elements.get_mut(&id).and_then(|e| e.parent_id.take()) else {
            return;
        };
        if let Some(parent) = self.elements.get_mut(&parent_id) {
            parent.children.retain(|&c| c != id);
        }
    }

    pub fn get_attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.elements.get(&id).and_then(|e| e.attribute(name))
    }

    pub fn has_attribute(&self, id: ElementId, name: &str) -> bool {
        self.elements
            .get(&id)
            .is_some_and(|e| e.has_attribute(name))
    }

    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) -> Result<()> {
        let el = self.elements.get_mut(&id).ok_or(Error::ElementNotFound(id))?;
        el.set_attribute(name, value);
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: ElementId, name: &str) -> Option<String> {
        self.elements
            .get_mut(&id)
            .and_then(|e| e.remove_attribute(name))
    }

    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.elements.get(&id).and_then(|e| e.text.as_deref())
    }

    pub fn set_text(&mut self, id: ElementId, text: &str) -> Result<()> {
        let el = self.elements.get_mut(&id).ok_or(Error::ElementNotFound(id))?;
        el.text = Some(text.to_string());
        Ok(())
    }

    /// Like DOM `Node.contains`: true when `node` is `ancestor` or lies below it.
    pub fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.elements.get(&id).and_then(|e| e.parent_id);
        }
        false
    }

    /// Whether the element is attached under the body root.
    pub fn is_connected(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id) && self.contains(self.body, id)
    }

    /// Nearest element from `node` upwards that matches `selector`, stopping
    /// before `within`. Only strict descendants of `within` are considered.
    pub fn closest(
        &self,
        node: ElementId,
        selector: &Selector,
        within: ElementId,
    ) -> Option<ElementId> {
        if !self.contains(within, node) {
            return None;
        }
        let mut current = Some(node);
        while let Some(id) = current {
            if id == within {
                return None;
            }
            let el = self.elements.get(&id)?;
            if selector.matches(el) {
                return Some(id);
            }
            current = el.parent_id;
        }
        None
    }

    /// Descendants of `root` matching `selector`, in document order.
    pub fn query_selector_all(&self, root: ElementId, selector: &Selector) -> Vec<ElementId> {
        let mut found = Vec::new();
        let mut stack: Vec<ElementId> = match self.elements.get(&root) {
            Some(el) => el.children.iter().rev().copied().collect(),
            None => return found,
        };
        while let Some(id) = stack.pop() {
            let Some(el) = self.elements.get(&id) else {
                continue;
            };
            if selector.matches(el) {
                found.push(id);
            }
            stack.extend(el.children.iter().rev().copied());
        }
        found
    }

    pub fn query_selector(&self, root: ElementId, selector: &Selector) -> Option<ElementId> {
        self.query_selector_all(root, selector).into_iter().next()
    }

    /// Find a connected element by its `id` attribute.
    pub fn get_element_by_id(&self, dom_id: &str) -> Option<ElementId> {
        let selector = Selector::parse(&format!("#{dom_id}")).ok()?;
        self.query_selector(self.body, &selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> (Document, ElementId, ElementId, ElementId) {
        let mut doc = Document::new();
        let body = doc.body();
        let nav = doc.create_element("nav");
        let button = doc.create_element("button");
        let icon = doc.create_element("i");
        doc.append_child(body, nav).unwrap();
        doc.append_child(nav, button).unwrap();
        doc.append_child(button, icon).unwrap();
        doc.set_attribute(button, "class", "app-tippy").unwrap();
        (doc, nav, button, icon)
    }

    #[test]
    fn closest_walks_up_to_marked_ancestor() {
        let (doc, _, button, icon) = tree();
        let sel = Selector::parse(".app-tippy").unwrap();
        assert_eq!(doc.closest(icon, &sel, doc.body()), Some(button));
        assert_eq!(doc.closest(button, &sel, doc.body()), Some(button));
    }

    #[test]
    fn closest_ignores_matches_outside_root() {
        let (doc, nav, button, icon) = tree();
        let sel = Selector::parse(".app-tippy").unwrap();
        // The root itself never counts as a delegate target.
        assert_eq!(doc.closest(icon, &sel, button), None);
        assert_eq!(doc.closest(nav, &sel, icon), None);
    }

    #[test]
    fn remove_drops_subtree_and_detaches() {
        let (mut doc, nav, button, icon) = tree();
        let before = doc.len();
        assert_eq!(doc.remove(button), 2);
        assert_eq!(doc.len(), before - 2);
        assert!(doc.get(icon).is_none());
        assert!(doc.get(nav).unwrap().children.is_empty());
    }

    #[test]
    fn body_cannot_be_removed() {
        let (mut doc, ..) = tree();
        assert_eq!(doc.remove(doc.body()), 0);
        assert!(doc.get(doc.body()).is_some());
    }

    #[test]
    fn append_rejects_cycles() {
        let (mut doc, nav, _, icon) = tree();
        assert!(doc.append_child(icon, nav).is_err());
    }

    #[test]
    fn append_moves_between_parents() {
        let (mut doc, nav, button, _) = tree();
        let body = doc.body();
        doc.append_child(body, button).unwrap();
        assert!(doc.get(nav).unwrap().children.is_empty());
        assert_eq!(doc.get(body).unwrap().children, vec![nav, button]);
    }

    #[test]
    fn detached_elements_are_not_connected() {
        let mut doc = Document::new();
        let orphan = doc.create_element("span");
        assert!(!doc.is_connected(orphan));
        doc.append_child(doc.body(), orphan).unwrap();
        assert!(doc.is_connected(orphan));
    }

    #[test]
    fn query_selector_all_is_document_order() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.create_element("p");
        let b = doc.create_element("p");
        let c = doc.create_element("p");
        doc.append_child(body, a).unwrap();
        doc.append_child(a, b).unwrap();
        doc.append_child(body, c).unwrap();
        let sel = Selector::parse("p").unwrap();
        assert_eq!(doc.query_selector_all(body, &sel), vec![a, b, c]);
    }

    #[test]
    fn set_attribute_on_missing_element_fails() {
        let mut doc = Document::new();
        assert!(matches!(
            doc.set_attribute(u64::MAX, "title", "x"),
            Err(Error::ElementNotFound(_))
        ));
    }
}
