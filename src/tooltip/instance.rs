//! The single shared tooltip widget.

use super::Placement;
use crate::dom::{Document, ElementId};
use crate::error::{Error, Result};

/// Widget state for the shared tooltip.
///
/// Its element subtree is created on the first [`TooltipInstance::show`] and
/// appended to the container chosen by [`AppendTarget`](super::AppendTarget):
///
/// ```text
/// <div data-tippy-root="">
///   <div class="tippy-box" data-placement="right" role="tooltip">
///     <div class="tippy-content">…</div>
///   </div>
/// </div>
/// ```
#[derive(Debug)]
pub struct TooltipInstance {
    container: ElementId,
    placement: Placement,
    /// Outer `data-tippy-root` element, once materialized.
    popper: Option<ElementId>,
    /// Inner `.tippy-content` element holding the text.
    content_el: Option<ElementId>,
    reference: Option<ElementId>,
    content: String,
}

impl TooltipInstance {
    pub fn new(container: ElementId, placement: Placement) -> Self {
        Self {
            container,
            placement,
            popper: None,
            content_el: None,
            reference: None,
            content: String::new(),
        }
    }

    /// Element the widget is currently shown for.
    pub fn reference(&self) -> Option<ElementId> {
        self.reference
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_visible(&self) -> bool {
        self.reference.is_some()
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// The widget's outer element, if it has been created.
    pub fn popper(&self) -> Option<ElementId> {
        self.popper
    }

    pub fn set_content(&mut self, doc: &mut Document, text: &str) {
        self.content = text.to_string();
        if let Some(el) = self.content_el {
            let _ = doc.set_text(el, text);
        }
    }

    /// Create the widget's elements unless they still exist in the document.
    fn materialize(&mut self, doc: &mut Document) -> Result<ElementId> {
        if let Some(popper) = self.popper {
            if doc.contains(self.container, popper) {
                return Ok(popper);
            }
            doc.remove(popper);
            self.popper = None;
            self.content_el = None;
        }
        if doc.get(self.container).is_none() {
            return Err(Error::ElementNotFound(self.container));
        }

        let popper = doc.create_element("div");
        doc.set_attribute(popper, "data-tippy-root", "")?;

        let tippy_box = doc.create_element("div");
        doc.set_attribute(tippy_box, "class", "tippy-box")?;
        doc.set_attribute(tippy_box, "data-placement", self.placement.as_str())?;
        doc.set_attribute(tippy_box, "role", "tooltip")?;

        let content = doc.create_element("div");
        doc.set_attribute(content, "class", "tippy-content")?;
        doc.set_text(content, &self.content)?;

        doc.append_child(tippy_box, content)?;
        doc.append_child(popper, tippy_box)?;
        doc.append_child(self.container, popper)?;

        tracing::debug!("Tooltip widget created under element {}", self.container);
        self.popper = Some(popper);
        self.content_el = Some(content);
        Ok(popper)
    }

    /// Display the widget for `reference`.
    pub fn show(&mut self, doc: &mut Document, reference: ElementId) -> Result<()> {
        let popper = self.materialize(doc)?;
        if let Some(el) = doc.get_mut(popper) {
            el.hidden = false;
        }
        self.reference = Some(reference);
        Ok(())
    }

    pub fn hide(&mut self, doc: &mut Document) {
        if let Some(el) = self.popper.and_then(|p| doc.get_mut(p)) {
            el.hidden = true;
        }
        self.reference = None;
    }

    /// Remove the widget's elements from the document.
    pub fn destroy(&mut self, doc: &mut Document) {
        if let Some(popper) = self.popper.take() {
            doc.remove(popper);
        }
        self.content_el = None;
        self.reference = None;
        self.content.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_is_created_lazily_under_root() {
        let mut doc = Document::new();
        let root = doc.body();
        let before = doc.len();
        let mut tip = TooltipInstance::new(root, Placement::Right);
        assert_eq!(doc.len(), before);
        assert!(tip.popper().is_none());

        let reference = doc.create_element("button");
        doc.append_child(root, reference).unwrap();
        tip.set_content(&mut doc, "Help");
        tip.show(&mut doc, reference).unwrap();

        let popper = tip.popper().unwrap();
        assert_eq!(doc.get(popper).unwrap().parent_id, Some(root));
        assert!(!doc.get(popper).unwrap().hidden);
        assert_eq!(tip.reference(), Some(reference));

        let tippy_box = doc.get(popper).unwrap().children[0];
        assert_eq!(doc.get_attribute(tippy_box, "data-placement"), Some("right"));
        let content = doc.get(tippy_box).unwrap().children[0];
        assert_eq!(doc.text(content), Some("Help"));
    }

    #[test]
    fn widget_is_reused_across_shows() {
        let mut doc = Document::new();
        let root = doc.body();
        let mut tip = TooltipInstance::new(root, Placement::Top);
        tip.show(&mut doc, root).unwrap();
        let first = tip.popper();
        tip.hide(&mut doc);
        assert!(doc.get(first.unwrap()).unwrap().hidden);
        tip.show(&mut doc, root).unwrap();
        assert_eq!(tip.popper(), first);
    }

    #[test]
    fn widget_is_recreated_after_external_removal() {
        let mut doc = Document::new();
        let root = doc.body();
        let mut tip = TooltipInstance::new(root, Placement::Right);
        tip.show(&mut doc, root).unwrap();
        let first = tip.popper().unwrap();
        doc.remove(first);
        tip.show(&mut doc, root).unwrap();
        assert_ne!(tip.popper(), Some(first));
        assert!(doc.is_connected(tip.popper().unwrap()));
    }

    #[test]
    fn missing_container_creates_nothing() {
        let mut doc = Document::new();
        let body = doc.body();
        let section = doc.create_element("section");
        doc.append_child(body, section).unwrap();
        let mut tip = TooltipInstance::new(section, Placement::Right);
        doc.remove(section);
        let before = doc.len();

        assert!(matches!(tip.show(&mut doc, body), Err(Error::ElementNotFound(_))));
        assert_eq!(doc.len(), before);
        assert!(!tip.is_visible());
    }

    #[test]
    fn destroy_removes_elements() {
        let mut doc = Document::new();
        let root = doc.body();
        let before = doc.len();
        let mut tip = TooltipInstance::new(root, Placement::Right);
        tip.show(&mut doc, root).unwrap();
        tip.destroy(&mut doc);
        assert_eq!(doc.len(), before);
        assert!(!tip.is_visible());
    }
}
