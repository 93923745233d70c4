// Accessibility panel controller

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use platina_core::keys::Section;
use platina_core::state::{AccessibilityState, MARKER_CLASSES, StateChange};

use crate::{dom, i18n, storage};

/// Live region that receives every announcement.
pub const ANNOUNCER_ID: &str = "screen-reader-announcer";

const HIGH_CONTRAST_BTN: &str = "highContrastBtn";
const FONT_SIZE_BTN: &str = "fontSizeBtn";
const READING_MODE_BTN: &str = "readingModeBtn";
const RESET_BTN: &str = "resetAccessibilityBtn";

// Controls whose aria-pressed indicator the panel maintains.
const TOGGLE_BUTTONS: &[&str] = &[HIGH_CONTRAST_BTN, FONT_SIZE_BTN, READING_MODE_BTN];

/// Owns the accessibility state and keeps the document presentation,
/// persisted preferences, and screen-reader announcements in sync with it.
///
/// Shared as `Rc<AccessibilityPanel>`; collaborators that need to trigger
/// announcements receive a clone instead of reaching through globals.
pub struct AccessibilityPanel {
    state: RefCell<AccessibilityState>,
}

impl AccessibilityPanel {
    /// Restore the panel from persisted preferences.
    ///
    /// Anything unusable in storage silently falls back to defaults; the
    /// restored presentation and pressed indicators are applied immediately
    /// so the page matches the state before any user interaction.
    #[must_use]
    pub fn restore() -> Rc<Self> {
        let state = storage::load().unwrap_or_default();
        let panel = Rc::new(Self {
            state: RefCell::new(state),
        });
        panel.sync_presentation();
        panel.sync_pressed_indicators();
        panel
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> AccessibilityState {
        *self.state.borrow()
    }

    /// Flip high-contrast mode.
    pub fn toggle_high_contrast(&self) {
        let change = self.state.borrow_mut().toggle_high_contrast();
        self.apply_change(change);
    }

    /// Advance the font step, wrapping back to normal past the maximum.
    pub fn increase_font_size(&self) {
        let change = self.state.borrow_mut().increase_font_size();
        self.apply_change(change);
    }

    /// Flip reading mode.
    pub fn toggle_reading_mode(&self) {
        let change = self.state.borrow_mut().toggle_reading_mode();
        self.apply_change(change);
    }

    /// Return every setting to its default in one step.
    pub fn reset(&self) {
        let change = self.state.borrow_mut().reset();
        self.apply_change(change);
    }

    /// Queue a message for assistive technology.
    ///
    /// The live region is created lazily, once, and reused. Assistive
    /// technology reads it whenever its content changes, so a repeated
    /// identical message may not be re-announced.
    pub fn announce(&self, message: &str) {
        if let Some(node) = announcer() {
            node.set_text_content(Some(message));
        }
    }

    /// Scroll to a page section and announce its name.
    pub fn jump_to_section(&self, section: Section) {
        if let Some(target) = dom::document().get_element_by_id(section.anchor()) {
            dom::scroll_to(&target);
        }
        self.announce(&i18n::t(section.message_key()));
    }

    fn apply_change(&self, change: StateChange) {
        self.sync_presentation();
        match change {
            StateChange::HighContrast(enabled) => set_pressed(HIGH_CONTRAST_BTN, enabled),
            StateChange::ReadingMode(enabled) => set_pressed(READING_MODE_BTN, enabled),
            StateChange::Reset => {
                for id in TOGGLE_BUTTONS {
                    set_pressed(id, false);
                }
            }
            StateChange::FontStep(_) => {}
        }
        self.announce(&i18n::t(change.message_key()));
        storage::save(&self.state.borrow());
    }

    /// Apply the state's marker set to the document root in one step.
    ///
    /// Every known marker is cleared before the active subset is applied,
    /// so the sync is idempotent and a reset ends with no markers at all.
    fn sync_presentation(&self) {
        let Some(body) = dom::document().body() else {
            return;
        };
        let list = body.class_list();
        for class in MARKER_CLASSES {
            let _ = list.remove_1(class);
        }
        for class in self.state.borrow().marker_classes() {
            let _ = list.add_1(class);
        }
    }

    fn sync_pressed_indicators(&self) {
        let state = self.state();
        set_pressed(HIGH_CONTRAST_BTN, state.high_contrast);
        set_pressed(READING_MODE_BTN, state.reading_mode);
    }
}

/// Wire the panel's control buttons to their operations.
///
/// Buttons absent from the page are skipped.
///
/// # Errors
/// Returns an error when a listener cannot be attached.
pub fn install_controls(panel: &Rc<AccessibilityPanel>) -> Result<(), JsValue> {
    wire_button(
        HIGH_CONTRAST_BTN,
        panel,
        AccessibilityPanel::toggle_high_contrast,
    )?;
    wire_button(FONT_SIZE_BTN, panel, AccessibilityPanel::increase_font_size)?;
    wire_button(
        READING_MODE_BTN,
        panel,
        AccessibilityPanel::toggle_reading_mode,
    )?;
    wire_button(RESET_BTN, panel, AccessibilityPanel::reset)?;
    Ok(())
}

fn wire_button(
    id: &str,
    panel: &Rc<AccessibilityPanel>,
    action: fn(&AccessibilityPanel),
) -> Result<(), JsValue> {
    let Some(button) = dom::document().get_element_by_id(id) else {
        return Ok(());
    };
    let panel = Rc::clone(panel);
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| action(&panel));
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn set_pressed(id: &str, pressed: bool) {
    if let Some(button) = dom::document().get_element_by_id(id) {
        let _ = button.set_attribute("aria-pressed", if pressed { "true" } else { "false" });
    }
}

fn announcer() -> Option<Element> {
    let doc = dom::document();
    if let Some(node) = doc.get_element_by_id(ANNOUNCER_ID) {
        return Some(node);
    }
    let node = doc.create_element("div").ok()?;
    node.set_id(ANNOUNCER_ID);
    node.set_class_name("sr-only");
    let _ = node.set_attribute("aria-live", "polite");
    let _ = node.set_attribute("aria-atomic", "true");
    doc.body()?.append_child(&node).ok()?;
    Some(node)
}
