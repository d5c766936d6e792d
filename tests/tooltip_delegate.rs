//! Delegated tooltip behavior against parsed pages.

mod common;

use common::find;
use proptest::prelude::*;
use tippy_l10n::dom::{Document, ElementId, Selector};
use tippy_l10n::event::{DomEvent, EventKind};
use tippy_l10n::markup::{parse_document, to_markup};
use tippy_l10n::tooltip::hint::{on_hidden, on_show};
use tippy_l10n::tooltip::{TooltipController, TooltipProps, MANAGED_HINT_ATTR, NATIVE_HINT_ATTR};

fn attached(markup: &str) -> (Document, TooltipController) {
    let mut doc = parse_document(markup).unwrap();
    let mut tooltips = TooltipController::new(TooltipProps::default()).unwrap();
    let body = doc.body();
    tooltips.initialize(&mut doc, body).unwrap();
    (doc, tooltips)
}

// ============================================================================
// Hover scenario
// ============================================================================

#[test]
fn hover_parks_title_and_leave_restores_it() {
    let (mut doc, mut tooltips) =
        attached(r#"<body><button id="help" class="app-tippy" title="Help text">Help</button></body>"#);
    let help = find(&doc, "#help");

    tooltips.handle_event(&mut doc, &DomEvent::new(EventKind::MouseEnter, help));
    assert_eq!(doc.get_attribute(help, MANAGED_HINT_ATTR), Some("Help text"));
    assert!(!doc.has_attribute(help, NATIVE_HINT_ATTR));
    assert_eq!(tooltips.content(), "Help text");
    insta::assert_snapshot!(
        to_markup(&doc, doc.body()),
        @r#"<body><button class="app-tippy" data-tippy-value="Help text" id="help">Help</button><div data-tippy-root=""><div class="tippy-box" data-placement="right" role="tooltip"><div class="tippy-content">Help text</div></div></div></body>"#
    );

    tooltips.handle_event(&mut doc, &DomEvent::new(EventKind::MouseLeave, help));
    assert_eq!(doc.get_attribute(help, NATIVE_HINT_ATTR), Some("Help text"));
    assert!(!doc.has_attribute(help, MANAGED_HINT_ATTR));
    assert_eq!(tooltips.content(), "");
    insta::assert_snapshot!(
        to_markup(&doc, doc.body()),
        @r#"<body><button class="app-tippy" id="help" title="Help text">Help</button><div data-tippy-root="" hidden=""><div class="tippy-box" data-placement="right" role="tooltip"><div class="tippy-content"/></div></div></body>"#
    );
}

#[test]
fn one_widget_is_shared_by_all_references() {
    let (mut doc, mut tooltips) = attached(
        r#"<body>
             <button id="a" class="app-tippy" title="First">A</button>
             <button id="b" class="app-tippy" title="Second">B</button>
           </body>"#,
    );
    let (a, b) = (find(&doc, "#a"), find(&doc, "#b"));

    tooltips.handle_event(&mut doc, &DomEvent::new(EventKind::MouseEnter, a));
    let popper = tooltips.instance().unwrap().popper();
    tooltips.handle_event(&mut doc, &DomEvent::new(EventKind::MouseLeave, a));
    tooltips.handle_event(&mut doc, &DomEvent::new(EventKind::MouseEnter, b));

    assert_eq!(tooltips.instance().unwrap().popper(), popper);
    assert_eq!(tooltips.content(), "Second");
    let roots = doc.query_selector_all(doc.body(), &Selector::parse("div").unwrap());
    assert_eq!(roots.iter().filter(|&&id| doc.has_attribute(id, "data-tippy-root")).count(), 1);
}

#[test]
fn elements_added_after_initialize_participate() {
    let (mut doc, mut tooltips) = attached("<body><main/></body>");
    let main = find(&doc, "main");
    let late = doc.create_element("a");
    doc.append_child(main, late).unwrap();
    doc.set_attribute(late, "class", "app-tippy").unwrap();
    doc.set_attribute(late, "title", "Added later").unwrap();

    assert!(tooltips.handle_event(&mut doc, &DomEvent::new(EventKind::MouseEnter, late)));
    assert_eq!(tooltips.content(), "Added later");
}

#[test]
fn events_on_descendants_resolve_to_the_reference() {
    let (mut doc, mut tooltips) = attached(
        r#"<body><button id="icon-button" class="app-tippy" title="Settings"><i id="icon"/></button></body>"#,
    );
    let icon = find(&doc, "#icon");
    let button = find(&doc, "#icon-button");

    tooltips.handle_event(&mut doc, &DomEvent::new(EventKind::FocusIn, icon));
    assert_eq!(tooltips.shown_reference(), Some(button));
    assert_eq!(doc.get_attribute(button, MANAGED_HINT_ATTR), Some("Settings"));
}

#[test]
fn elements_outside_the_target_class_are_left_alone() {
    let (mut doc, mut tooltips) =
        attached(r#"<body><button id="plain" title="Native only">X</button></body>"#);
    let plain = find(&doc, "#plain");

    assert!(!tooltips.handle_event(&mut doc, &DomEvent::new(EventKind::MouseEnter, plain)));
    assert_eq!(doc.get_attribute(plain, NATIVE_HINT_ATTR), Some("Native only"));
    assert!(tooltips.instance().is_none());
}

#[test]
fn element_without_hint_shows_empty_tooltip() {
    let (mut doc, mut tooltips) = attached(r#"<body><span id="bare" class="app-tippy"/></body>"#);
    let bare = find(&doc, "#bare");

    tooltips.handle_event(&mut doc, &DomEvent::new(EventKind::MouseEnter, bare));
    assert_eq!(tooltips.content(), "");
    assert!(!doc.has_attribute(bare, MANAGED_HINT_ATTR));
    tooltips.handle_event(&mut doc, &DomEvent::new(EventKind::MouseLeave, bare));
    assert!(!doc.has_attribute(bare, NATIVE_HINT_ATTR));
    assert!(!doc.has_attribute(bare, MANAGED_HINT_ATTR));
}

#[test]
fn destroy_restores_shown_reference_and_removes_widget() {
    let (mut doc, mut tooltips) =
        attached(r#"<body><button id="help" class="app-tippy" title="Help text">Help</button></body>"#);
    let help = find(&doc, "#help");
    tooltips.handle_event(&mut doc, &DomEvent::new(EventKind::MouseEnter, help));

    tooltips.destroy(&mut doc);
    assert_eq!(
        to_markup(&doc, doc.body()),
        r#"<body><button class="app-tippy" id="help" title="Help text">Help</button></body>"#
    );
    assert!(doc.listeners().is_empty());
}

// ============================================================================
// Hint laws
// ============================================================================

fn hint_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 .,!?&<>\"']{1,40}"
}

fn lone_element(attr: &str, value: &str) -> (Document, ElementId) {
    let mut doc = Document::new();
    let body = doc.body();
    let el = doc.create_element("span");
    doc.append_child(body, el).unwrap();
    doc.set_attribute(el, attr, value).unwrap();
    (doc, el)
}

proptest! {
    #[test]
    fn show_then_hide_restores_title(text in hint_text()) {
        let (mut doc, el) = lone_element(NATIVE_HINT_ATTR, &text);
        prop_assert_eq!(on_show(&mut doc, el), text.clone());
        on_hidden(&mut doc, el);
        prop_assert_eq!(doc.get_attribute(el, NATIVE_HINT_ATTR), Some(text.as_str()));
        prop_assert!(!doc.has_attribute(el, MANAGED_HINT_ATTR));
    }

    #[test]
    fn show_is_idempotent(text in hint_text()) {
        let (mut doc, el) = lone_element(MANAGED_HINT_ATTR, &text);
        prop_assert_eq!(on_show(&mut doc, el), text.clone());
        prop_assert_eq!(on_show(&mut doc, el), text.clone());
        prop_assert_eq!(doc.get_attribute(el, MANAGED_HINT_ATTR), Some(text.as_str()));
        prop_assert!(!doc.has_attribute(el, NATIVE_HINT_ATTR));
    }

    #[test]
    fn markup_survives_a_hover_cycle(text in hint_text()) {
        let mut doc = Document::new();
        let body = doc.body();
        let el = doc.create_element("button");
        doc.append_child(body, el).unwrap();
        doc.set_attribute(el, "class", "app-tippy").unwrap();
        doc.set_attribute(el, NATIVE_HINT_ATTR, &text).unwrap();
        let before = to_markup(&doc, el);

        let mut tooltips = TooltipController::new(TooltipProps::default()).unwrap();
        tooltips.initialize(&mut doc, body).unwrap();
        tooltips.handle_event(&mut doc, &DomEvent::new(EventKind::MouseEnter, el));
        tooltips.handle_event(&mut doc, &DomEvent::new(EventKind::MouseLeave, el));

        prop_assert_eq!(to_markup(&doc, el), before);
    }
}

#[test]
fn hide_without_any_hint_is_a_no_op() {
    let mut doc = Document::new();
    let body = doc.body();
    let el = doc.create_element("span");
    doc.append_child(body, el).unwrap();

    on_hidden(&mut doc, el);
    assert!(!doc.has_attribute(el, NATIVE_HINT_ATTR));
    assert!(!doc.has_attribute(el, MANAGED_HINT_ATTR));
}
