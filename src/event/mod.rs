//! Input events and the delegated-listener registry.

use crate::dom::{Document, ElementId, Selector};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Interaction kinds the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    MouseEnter,
    MouseLeave,
    FocusIn,
    FocusOut,
    Click,
}

impl EventKind {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mouseenter" | "mouseover" => Some(Self::MouseEnter),
            "mouseleave" | "mouseout" => Some(Self::MouseLeave),
            "focusin" | "focus" => Some(Self::FocusIn),
            "focusout" | "blur" => Some(Self::FocusOut),
            "click" => Some(Self::Click),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
            Self::FocusIn => "focusin",
            Self::FocusOut => "focusout",
            Self::Click => "click",
        }
    }
}

/// What produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerType {
    #[default]
    Mouse,
    Touch,
    Pen,
    Keyboard,
}

/// An event aimed at one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    pub kind: EventKind,
    pub target: ElementId,
    pub pointer: PointerType,
}

impl DomEvent {
    pub fn new(kind: EventKind, target: ElementId) -> Self {
        let pointer = match kind {
            EventKind::FocusIn | EventKind::FocusOut => PointerType::Keyboard,
            _ => PointerType::Mouse,
        };
        Self { kind, target, pointer }
    }

    pub fn with_pointer(mut self, pointer: PointerType) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn is_touch(&self) -> bool {
        self.pointer == PointerType::Touch
    }
}

/// Event queue for pending host input.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<DomEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: DomEvent) {
        self.pending.push(event);
    }

    pub fn drain(&mut self) -> Vec<DomEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Handle for one registered delegated listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Debug, Clone)]
struct Delegate {
    root: ElementId,
    selector: Selector,
}

/// One listener per `(root, selector)` pair; participation of individual
/// elements is decided at dispatch time by selector matching.
#[derive(Debug, Default)]
pub struct DelegateRegistry {
    delegates: HashMap<ListenerId, Delegate>,
    next_id: u64,
}

impl DelegateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a delegated listener. A second listener for the same root and
    /// selector is rejected.
    pub fn register(&mut self, root: ElementId, selector: Selector) -> Result<ListenerId> {
        if self
            .delegates
            .values()
            .any(|d| d.root == root && d.selector == selector)
        {
            return Err(Error::DuplicateListener {
                root,
                selector: selector.to_string(),
            });
        }
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.delegates.insert(id, Delegate { root, selector });
        Ok(id)
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        self.delegates.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.delegates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.delegates.is_empty()
    }

    pub fn root_of(&self, id: ListenerId) -> Option<ElementId> {
        self.delegates.get(&id).map(|d| d.root)
    }

    /// Listeners interested in `target`, each paired with the matched
    /// reference element (the target itself or its nearest matching ancestor).
    pub fn resolve(&self, doc: &Document, target: ElementId) -> Vec<(ListenerId, ElementId)> {
        let mut hits: Vec<_> = self
            .delegates
            .iter()
            .filter_map(|(&id, d)| doc.closest(target, &d.selector, d.root).map(|r| (id, r)))
            .collect();
        hits.sort_by_key(|(id, _)| *id);
        hits
    }
}
