use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, KeyboardEvent};

use platina_core::keys::{Shortcut, shortcut_for};

use crate::a11y::AccessibilityPanel;
use crate::dom;

const FOCUSABLE_QUERY: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex='-1'])";

/// Listen for modifier+digit shortcuts on the whole document.
///
/// Recognized combinations suppress the browser default before dispatching;
/// every other key falls through untouched.
///
/// # Errors
/// Returns an error when the document listener cannot be attached.
pub fn install_shortcuts(panel: &Rc<AccessibilityPanel>) -> Result<(), JsValue> {
    let panel = Rc::clone(panel);
    let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        let Some(shortcut) = shortcut_for(&event.key(), event.alt_key()) else {
            return;
        };
        event.prevent_default();
        match shortcut {
            Shortcut::JumpTo(section) => panel.jump_to_section(section),
            Shortcut::ResetAll => panel.reset(),
        }
    });
    dom::document()
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Mark keyboard-focusable elements with a transient `focused` class on
/// focus and clear it on blur. Visual affordance only; accessibility state
/// is untouched.
///
/// # Errors
/// Returns an error when a listener cannot be attached.
pub fn install_focus_rings() -> Result<(), JsValue> {
    let nodes = dom::document().query_selector_all(FOCUSABLE_QUERY)?;
    let focus =
        Closure::<dyn FnMut(_)>::new(|event: web_sys::Event| set_focus_marker(&event, true));
    let blur =
        Closure::<dyn FnMut(_)>::new(|event: web_sys::Event| set_focus_marker(&event, false));
    for index in 0..nodes.length() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        element.add_event_listener_with_callback("focus", focus.as_ref().unchecked_ref())?;
        element.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref())?;
    }
    focus.forget();
    blur.forget();
    Ok(())
}

fn set_focus_marker(event: &web_sys::Event, focused: bool) {
    let Some(element) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return;
    };
    let _ = if focused {
        element.class_list().add_1("focused")
    } else {
        element.class_list().remove_1("focused")
    };
}
