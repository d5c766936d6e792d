//! Writing translations into the document.

use super::http::HttpClient;
use super::translate::Translator;
use crate::dom::{Document, ElementId, Selector};
use crate::tooltip::{MANAGED_HINT_ATTR, NATIVE_HINT_ATTR};

/// Key whose translation replaces the element's text.
pub const TEXT_KEY_ATTR: &str = "data-i18n";
/// Key whose translation becomes the element's hint.
pub const TITLE_KEY_ATTR: &str = "data-i18n-title";

/// Translate every element below `root` that carries [`TEXT_KEY_ATTR`] or
/// [`TITLE_KEY_ATTR`]. Returns the number of elements touched.
///
/// A translated hint goes to the managed attribute while the tooltip is
/// shown for that element, so dismissal restores the new text.
pub fn apply_translations<C: HttpClient>(
    doc: &mut Document,
    root: ElementId,
    translator: &Translator<C>,
) -> usize {
    let mut touched = 0;
    for id in doc.query_selector_all(root, &Selector::universal()) {
        let mut changed = false;

        if let Some(key) = doc.get_attribute(id, TEXT_KEY_ATTR).map(str::to_string) {
            let _ = doc.set_text(id, &translator.instant(&key));
            changed = true;
        }

        if let Some(key) = doc.get_attribute(id, TITLE_KEY_ATTR).map(str::to_string) {
            let attr = if doc.has_attribute(id, MANAGED_HINT_ATTR) {
                MANAGED_HINT_ATTR
            } else {
                NATIVE_HINT_ATTR
            };
            let _ = doc.set_attribute(id, attr, &translator.instant(&key));
            changed = true;
        }

        if changed {
            touched += 1;
        }
    }
    tracing::debug!("Applied translations to {} element(s)", touched);
    touched
}
