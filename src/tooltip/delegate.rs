//! Delegated tooltip controller: one listener on a root, one shared widget.

use super::hint::{on_hidden, on_show};
use super::{TooltipInstance, TooltipProps, Trigger, MANAGED_HINT_ATTR};
use crate::dom::{Document, ElementId, Selector};
use crate::error::{Error, Result};
use crate::event::{DomEvent, EventKind, ListenerId};

/// Owns the delegated listener and the shared [`TooltipInstance`].
///
/// Construct one per page and call [`TooltipController::initialize`] once.
/// A second `initialize` while attached is rejected with
/// [`Error::DuplicateListener`]; call [`TooltipController::destroy`] first to
/// re-attach.
#[derive(Debug)]
pub struct TooltipController {
    props: TooltipProps,
    selector: Selector,
    listener: Option<ListenerId>,
    root: Option<ElementId>,
    instance: Option<TooltipInstance>,
}

impl TooltipController {
    pub fn new(props: TooltipProps) -> Result<Self> {
        let selector = Selector::parse(&props.target)?;
        Ok(Self {
            props,
            selector,
            listener: None,
            root: None,
            instance: None,
        })
    }

    pub fn props(&self) -> &TooltipProps {
        &self.props
    }

    pub fn is_initialized(&self) -> bool {
        self.listener.is_some()
    }

    pub fn root(&self) -> Option<ElementId> {
        self.root
    }

    pub fn listener(&self) -> Option<ListenerId> {
        self.listener
    }

    /// The shared widget, once it has been shown at least once.
    pub fn instance(&self) -> Option<&TooltipInstance> {
        self.instance.as_ref()
    }

    /// Reference element the widget is currently shown for.
    pub fn shown_reference(&self) -> Option<ElementId> {
        self.instance.as_ref().and_then(TooltipInstance::reference)
    }

    /// Content currently displayed by the widget (empty when hidden or never shown).
    pub fn content(&self) -> &str {
        self.instance.as_ref().map_or("", TooltipInstance::content)
    }

    /// Attach the delegated listener to `root`. No element is touched until
    /// the first interaction.
    pub fn initialize(&mut self, doc: &mut Document, root: ElementId) -> Result<()> {
        if let Some(current) = self.root.filter(|_| self.listener.is_some()) {
            tracing::warn!("Tooltip delegate already attached to element {}", current);
            return Err(Error::DuplicateListener {
                root: current,
                selector: self.selector.to_string(),
            });
        }
        if doc.get(root).is_none() {
            return Err(Error::ElementNotFound(root));
        }

        let listener = doc.listeners_mut().register(root, self.selector.clone())?;
        tracing::debug!(
            "Tooltip delegate for '{}' attached to element {} (placement={}, touch={})",
            self.selector,
            root,
            self.props.placement.as_str(),
            self.props.touch
        );
        self.listener = Some(listener);
        self.root = Some(root);
        Ok(())
    }

    /// Route one event through the delegate. Returns whether it changed the
    /// tooltip's visibility.
    pub fn handle_event(&mut self, doc: &mut Document, event: &DomEvent) -> bool {
        let Some(listener) = self.listener else {
            return false;
        };
        if event.is_touch() && !self.props.touch {
            tracing::trace!("Ignoring touch {} on element {}", event.kind.as_str(), event.target);
            return false;
        }

        let mut changed = self.hide_if_detached(doc);

        let reference = doc
            .listeners()
            .resolve(doc, event.target)
            .into_iter()
            .find(|(id, _)| *id == listener)
            .map(|(_, reference)| reference);
        let Some(reference) = reference else {
            return changed;
        };

        let shown = self.shown_reference();
        match event.kind {
            EventKind::MouseEnter if self.props.has_trigger(Trigger::MouseEnter) => {
                changed |= self.show(doc, reference);
            }
            EventKind::FocusIn if self.props.has_trigger(Trigger::Focus) => {
                changed |= self.show(doc, reference);
            }
            EventKind::Click if self.props.has_trigger(Trigger::Click) => {
                if shown == Some(reference) {
                    changed |= self.hide(doc);
                } else {
                    changed |= self.show(doc, reference);
                }
            }
            EventKind::MouseLeave | EventKind::FocusOut if shown == Some(reference) => {
                changed |= self.hide(doc);
            }
            _ => {}
        }
        changed
    }

    /// Show the shared widget for `reference`, hiding it from any other
    /// reference first. Showing for the current reference again is a no-op,
    /// and references outside the delegation root are refused. The hint is
    /// only moved once the widget is in place.
    pub fn show(&mut self, doc: &mut Document, reference: ElementId) -> bool {
        let Some(root) = self.root.filter(|_| self.listener.is_some()) else {
            return false;
        };
        match self.shown_reference() {
            Some(current) if current == reference => return false,
            Some(_) => {
                self.hide(doc);
            }
            None => {}
        }

        if !doc.contains(root, reference) {
            tracing::debug!("Element {} is outside delegation root {}", reference, root);
            return false;
        }

        let container = self.props.append_to.container(doc, root);
        let placement = self.props.placement;
        let instance = self
            .instance
            .get_or_insert_with(|| TooltipInstance::new(container, placement));
        if let Err(e) = instance.show(doc, reference) {
            tracing::warn!("Failed to show tooltip for element {}: {}", reference, e);
            return false;
        }
        let content = on_show(doc, reference);
        instance.set_content(doc, &content);
        true
    }

    /// Dismiss the widget and restore the reference's `title`.
    pub fn hide(&mut self, doc: &mut Document) -> bool {
        let Some(instance) = self.instance.as_mut() else {
            return false;
        };
        let Some(reference) = instance.reference() else {
            return false;
        };
        instance.hide(doc);
        on_hidden(doc, reference);
        instance.set_content(doc, "");
        true
    }

    /// Re-read the parked hint of the shown reference into the widget, e.g.
    /// after its translation changed.
    pub fn refresh(&mut self, doc: &mut Document) {
        let Some(instance) = self.instance.as_mut() else {
            return;
        };
        let Some(reference) = instance.reference() else {
            return;
        };
        let hint = doc
            .get_attribute(reference, MANAGED_HINT_ATTR)
            .unwrap_or_default()
            .to_string();
        instance.set_content(doc, &hint);
    }

    fn hide_if_detached(&mut self, doc: &mut Document) -> bool {
        let Some(root) = self.root else {
            return false;
        };
        match self.shown_reference() {
            Some(reference) if !doc.contains(root, reference) => {
                tracing::debug!("Reference element {} left delegation root {}", reference, root);
                self.hide(doc)
            }
            _ => false,
        }
    }

    /// Detach the listener and remove the widget. The shown reference, if
    /// any, gets its `title` back first.
    pub fn destroy(&mut self, doc: &mut Document) {
        self.hide(doc);
        if let Some(mut instance) = self.instance.take() {
            instance.destroy(doc);
        }
        if let Some(listener) = self.listener.take() {
            doc.listeners_mut().remove(listener);
        }
        self.root = None;
    }
}
