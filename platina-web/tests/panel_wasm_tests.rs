#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, KeyboardEvent, KeyboardEventInit};

use platina_web::a11y::{ANNOUNCER_ID, AccessibilityPanel};
use platina_web::{dom, input, services};

wasm_bindgen_test_configure!(run_in_browser);

const PREFS_KEY: &str = "platinaAccessibility";
const CONTROL_IDS: [&str; 4] = [
    "highContrastBtn",
    "fontSizeBtn",
    "readingModeBtn",
    "resetAccessibilityBtn",
];
const SECTION_IDS: [&str; 3] = ["inicio", "sobre", "mentoria"];

/// Rebuild the page fixture: control buttons, section anchors, clean body
/// classes, and no saved preferences.
fn reset_fixture() -> Document {
    let doc = dom::document();
    let body = doc.body().expect("document body");
    body.set_inner_html("");
    body.set_class_name("");
    for id in CONTROL_IDS {
        let button = doc.create_element("button").expect("create button");
        button.set_id(id);
        body.append_child(&button).expect("append button");
    }
    for id in SECTION_IDS {
        let section = doc.create_element("section").expect("create section");
        section.set_id(id);
        body.append_child(&section).expect("append section");
    }
    let storage = dom::local_storage().expect("localStorage");
    storage.remove_item(PREFS_KEY).expect("clear saved prefs");
    doc
}

fn click(doc: &Document, id: &str) {
    let button: HtmlElement = doc
        .get_element_by_id(id)
        .expect("control exists")
        .dyn_into()
        .expect("cast to html element");
    button.click();
}

fn body_classes(doc: &Document) -> Vec<String> {
    let list = doc.body().expect("body").class_list();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

fn pressed(doc: &Document, id: &str) -> Option<String> {
    doc.get_element_by_id(id)
        .and_then(|el| el.get_attribute("aria-pressed"))
}

#[wasm_bindgen_test]
fn contrast_toggle_marks_body_and_button() {
    let doc = reset_fixture();
    let panel = AccessibilityPanel::restore();
    platina_web::a11y::install_controls(&panel).expect("wire controls");

    click(&doc, "highContrastBtn");
    assert!(body_classes(&doc).contains(&"high-contrast".to_string()));
    assert_eq!(pressed(&doc, "highContrastBtn"), Some("true".into()));

    click(&doc, "highContrastBtn");
    assert!(!body_classes(&doc).contains(&"high-contrast".to_string()));
    assert_eq!(pressed(&doc, "highContrastBtn"), Some("false".into()));
}

#[wasm_bindgen_test]
fn font_steps_apply_exactly_one_marker_and_wrap() {
    let doc = reset_fixture();
    let panel = AccessibilityPanel::restore();

    let expected = [
        Some("font-large"),
        Some("font-xlarge"),
        Some("font-xxlarge"),
        None,
    ];
    for marker in expected {
        panel.increase_font_size();
        let font_classes: Vec<String> = body_classes(&doc)
            .into_iter()
            .filter(|c| c.starts_with("font-"))
            .collect();
        match marker {
            Some(class) => assert_eq!(font_classes, vec![class.to_string()]),
            None => assert!(font_classes.is_empty(), "step 0 must carry no font marker"),
        }
    }
}

#[wasm_bindgen_test]
fn announcer_is_created_once_and_reused() {
    let doc = reset_fixture();
    let panel = AccessibilityPanel::restore();

    panel.announce("primeira mensagem");
    panel.announce("segunda mensagem");

    let announcers = doc
        .query_selector_all(&format!("#{ANNOUNCER_ID}"))
        .expect("query announcer");
    assert_eq!(announcers.length(), 1, "live region must be reused");

    let announcer = doc.get_element_by_id(ANNOUNCER_ID).expect("live region");
    assert_eq!(announcer.get_attribute("aria-live"), Some("polite".into()));
    assert_eq!(announcer.get_attribute("aria-atomic"), Some("true".into()));
    assert_eq!(announcer.text_content(), Some("segunda mensagem".into()));
}

#[wasm_bindgen_test]
fn saved_record_restores_all_markers() {
    let doc = reset_fixture();
    let storage = dom::local_storage().expect("localStorage");
    storage
        .set_item(
            PREFS_KEY,
            r#"{"fontSize":2,"highContrast":true,"readingMode":true,"timestamp":1700000000000}"#,
        )
        .expect("seed saved prefs");

    let _panel = AccessibilityPanel::restore();

    let classes = body_classes(&doc);
    assert!(classes.contains(&"font-xlarge".to_string()));
    assert!(classes.contains(&"high-contrast".to_string()));
    assert!(classes.contains(&"reading-mode".to_string()));
    assert_eq!(pressed(&doc, "highContrastBtn"), Some("true".into()));
    assert_eq!(pressed(&doc, "readingModeBtn"), Some("true".into()));
}

#[wasm_bindgen_test]
fn garbage_record_restores_defaults_without_panicking() {
    let doc = reset_fixture();
    let storage = dom::local_storage().expect("localStorage");
    storage
        .set_item(PREFS_KEY, "definitely not json {")
        .expect("seed garbage");

    let panel = AccessibilityPanel::restore();

    assert_eq!(panel.state(), platina_core::AccessibilityState::default());
    assert!(body_classes(&doc).is_empty());
}

#[wasm_bindgen_test]
fn reset_clears_markers_and_every_pressed_indicator() {
    let doc = reset_fixture();
    let panel = AccessibilityPanel::restore();
    panel.toggle_high_contrast();
    panel.toggle_reading_mode();
    panel.increase_font_size();

    panel.reset();

    assert!(body_classes(&doc).is_empty());
    for id in ["highContrastBtn", "fontSizeBtn", "readingModeBtn"] {
        assert_eq!(pressed(&doc, id), Some("false".into()), "{id} still pressed");
    }
}

fn keydown(doc: &Document, key: &str, alt: bool) -> bool {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_alt_key(alt);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("build keydown");
    doc.dispatch_event(&event).expect("dispatch keydown")
}

#[wasm_bindgen_test]
fn modifier_zero_resets_through_the_keyboard() {
    let doc = reset_fixture();
    let panel = AccessibilityPanel::restore();
    input::install_shortcuts(&panel).expect("wire shortcuts");
    panel.toggle_high_contrast();
    panel.increase_font_size();

    let not_canceled = keydown(&doc, "0", true);

    assert!(!not_canceled, "mapped combination must suppress the default");
    assert_eq!(panel.state(), platina_core::AccessibilityState::default());
    assert!(body_classes(&doc).is_empty());
}

#[wasm_bindgen_test]
fn unmapped_key_is_a_no_op() {
    let doc = reset_fixture();
    let panel = AccessibilityPanel::restore();
    input::install_shortcuts(&panel).expect("wire shortcuts");
    panel.toggle_high_contrast();
    let before = panel.state();

    let not_canceled = keydown(&doc, "q", false);

    assert!(not_canceled, "unmapped keys must keep the browser default");
    assert_eq!(panel.state(), before);
}

#[wasm_bindgen_test]
fn known_service_link_announces_navigation() {
    let doc = reset_fixture();
    let body = doc.body().expect("body");
    let known = doc.create_element("a").expect("anchor");
    known.set_attribute("href", "#mentoria").expect("href");
    known.set_id("mentoria-link");
    body.append_child(&known).expect("append anchor");
    let unknown = doc.create_element("a").expect("anchor");
    unknown.set_attribute("href", "#contato").expect("href");
    unknown.set_id("contato-link");
    body.append_child(&unknown).expect("append anchor");

    let panel = AccessibilityPanel::restore();
    services::install_tracking(&panel).expect("wire tracking");
    panel.announce("estado inicial");

    click(&doc, "contato-link");
    let announcer = doc.get_element_by_id(ANNOUNCER_ID).expect("live region");
    assert_eq!(
        announcer.text_content(),
        Some("estado inicial".into()),
        "unknown fragments must not announce"
    );

    click(&doc, "mentoria-link");
    let text = announcer.text_content().unwrap_or_default();
    assert!(
        text.contains("Mentoria Individual"),
        "expected service name in announcement, got {text:?}"
    );
}
