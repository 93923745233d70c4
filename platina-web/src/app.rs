use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::a11y::{self, AccessibilityPanel};
use crate::{dom, i18n, input, services};

const SETUP_BANNER_STYLE: &str = "background:#ff4757;color:#fff;padding:1rem;text-align:center;position:fixed;top:0;left:0;right:0;z-index:10000;cursor:pointer";
const SETUP_BANNER_TIMEOUT_MS: i32 = 5_000;
const SLOW_LOAD_THRESHOLD_MS: f64 = 3_000.0;

/// Initialize the panel once the document structure is available.
///
/// Runs immediately when the DOM is already parsed, otherwise defers to
/// `DOMContentLoaded`. Initialization happens exactly once either way.
pub fn boot() {
    let doc = dom::document();
    if doc.ready_state() == "loading" {
        let closure = Closure::once(init);
        let _ = doc
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        init();
    }
}

fn init() {
    if let Err(err) = try_init() {
        let message = dom::js_error_message(&err);
        dom::console_error(&format!("accessibility setup failed: {message}"));
        show_setup_banner();
    }
}

fn try_init() -> Result<(), JsValue> {
    let panel = AccessibilityPanel::restore();
    a11y::install_controls(&panel)?;
    input::install_shortcuts(&panel)?;
    input::install_focus_rings()?;
    services::install_tracking(&panel)?;
    install_smooth_scroll()?;
    install_load_timing()?;
    panel.announce(&i18n::t("app.loaded"));
    log::info!("accessibility panel ready");
    Ok(())
}

/// Page-level fallback when wiring fails: a dismissible alert banner that
/// auto-removes after a fixed delay. The rest of the page stays usable.
fn show_setup_banner() {
    let doc = dom::document();
    let Ok(banner) = doc.create_element("div") else {
        return;
    };
    let _ = banner.set_attribute("role", "alert");
    let _ = banner.set_attribute("style", SETUP_BANNER_STYLE);
    banner.set_text_content(Some(&i18n::t("app.setup-error")));
    let Some(body) = doc.body() else {
        return;
    };
    if body.append_child(&banner).is_err() {
        return;
    }

    let dismissed = banner.clone();
    let dismiss = Closure::once(move || dismissed.remove());
    let _ = banner.add_event_listener_with_callback("click", dismiss.as_ref().unchecked_ref());
    dismiss.forget();

    let expired = banner;
    let _ = dom::set_timeout(move || expired.remove(), SETUP_BANNER_TIMEOUT_MS);
}

// Smooth-scroll in-page anchor links instead of letting the browser jump.
fn install_smooth_scroll() -> Result<(), JsValue> {
    let anchors = dom::document().query_selector_all("a[href^='#']")?;
    let closure = Closure::<dyn FnMut(_)>::new(|event: web_sys::Event| {
        let Some(link) = event
            .current_target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(fragment) = href.strip_prefix('#') else {
            return;
        };
        if fragment.is_empty() {
            return;
        }
        let Some(target) = dom::document().get_element_by_id(fragment) else {
            return;
        };
        event.prevent_default();
        dom::scroll_to(&target);
    });
    for index in 0..anchors.length() {
        let Some(node) = anchors.get(index) else {
            continue;
        };
        let Ok(anchor) = node.dyn_into::<Element>() else {
            continue;
        };
        anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    }
    closure.forget();
    Ok(())
}

// Log navigation→load elapsed time once the page finishes loading.
fn install_load_timing() -> Result<(), JsValue> {
    let closure = Closure::once(|| {
        let Some(performance) = dom::window().performance() else {
            return;
        };
        let timing = performance.timing();
        let elapsed = timing.load_event_end() - timing.navigation_start();
        if elapsed <= 0.0 {
            return;
        }
        log::debug!("page load took {elapsed:.0}ms");
        if elapsed > SLOW_LOAD_THRESHOLD_MS {
            log::warn!("slow page load ({elapsed:.0}ms)");
        }
    });
    dom::window().add_event_listener_with_callback("load", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
