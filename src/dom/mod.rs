//! Headless document tree that the tooltip layer decorates.
//!
//! Elements are owned by the [`Document`]; everything else refers to them by
//! [`ElementId`], so an element can be removed without invalidating anyone
//! who still holds its id.

mod document;
mod element;
mod selector;

pub use document::Document;
pub use element::Element;
pub use selector::Selector;

use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of an element. Ids are never reused within a process.
pub type ElementId = u64;

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a unique element ID.
pub fn next_element_id() -> ElementId {
    NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed)
}
