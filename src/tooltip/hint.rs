//! Moving an element's hint between `title` and the managed attribute.
//!
//! Reads skip attributes that are present but empty, so a blank `title` next
//! to a parked value never wins. Writes only happen when at least one of the
//! two attributes exists; an element that never had a hint keeps neither.

use super::{MANAGED_HINT_ATTR, NATIVE_HINT_ATTR};
use crate::dom::{Document, ElementId};
use crate::error::{Error, Result};

/// Where an element's hint currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintState {
    /// Neither attribute is set.
    Unset,
    /// `title` holds the hint; no widget shown for it.
    Idle,
    /// The managed attribute holds the hint; the widget displays it.
    Shown,
}

/// Classify the element's hint attributes.
///
/// Both attributes at once is an [`Error::AttributeStateViolation`]. A missing
/// element reports [`HintState::Unset`].
pub fn hint_state(doc: &Document, element: ElementId) -> Result<HintState> {
    let native = doc.has_attribute(element, NATIVE_HINT_ATTR);
    let managed = doc.has_attribute(element, MANAGED_HINT_ATTR);
    match (native, managed) {
        (false, false) => Ok(HintState::Unset),
        (true, false) => Ok(HintState::Idle),
        (false, true) => Ok(HintState::Shown),
        (true, true) => Err(Error::AttributeStateViolation { element }),
    }
}

/// First non-empty value among `names`, else the empty string.
fn read_hint(doc: &Document, element: ElementId, names: [&str; 2]) -> String {
    names
        .iter()
        .filter_map(|name| doc.get_attribute(element, name))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}

fn check(doc: &Document, element: ElementId) -> bool {
    match hint_state(doc, element) {
        Ok(HintState::Unset) => false,
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("{}", e);
            true
        }
    }
}

/// Park the hint in the managed attribute and return the text to display.
///
/// Calling this again without [`on_hidden`] in between keeps the text.
pub fn on_show(doc: &mut Document, element: ElementId) -> String {
    let hint = read_hint(doc, element, [NATIVE_HINT_ATTR, MANAGED_HINT_ATTR]);
    if !check(doc, element) {
        tracing::debug!("Element {} has no hint, showing empty tooltip", element);
        return hint;
    }

    if doc.set_attribute(element, MANAGED_HINT_ATTR, &hint).is_ok() {
        doc.remove_attribute(element, NATIVE_HINT_ATTR);
        tracing::debug!("Element {} shown with hint {:?}", element, hint);
    }
    hint
}

/// Restore the hint into `title` and drop the managed attribute.
pub fn on_hidden(doc: &mut Document, element: ElementId) {
    let hint = read_hint(doc, element, [MANAGED_HINT_ATTR, NATIVE_HINT_ATTR]);
    if !check(doc, element) {
        return;
    }

    if doc.set_attribute(element, NATIVE_HINT_ATTR, &hint).is_ok() {
        doc.remove_attribute(element, MANAGED_HINT_ATTR);
        tracing::debug!("Element {} hidden, title restored to {:?}", element, hint);
    }
}
