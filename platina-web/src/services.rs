use std::collections::BTreeMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use platina_core::services::service_for_fragment;

use crate::a11y::AccessibilityPanel;
use crate::{dom, i18n};

/// Track clicks on in-page links that point at known services.
///
/// A click on an anchor whose fragment maps to a service logs the mapping
/// and announces the navigation through the injected panel. Unknown
/// fragments do nothing.
///
/// # Errors
/// Returns an error when a listener cannot be attached.
pub fn install_tracking(panel: &Rc<AccessibilityPanel>) -> Result<(), JsValue> {
    let anchors = dom::document().query_selector_all("a[href*='#']")?;
    let panel = Rc::clone(panel);
    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
        let Some(link) = event
            .current_target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some((_, fragment)) = href.split_once('#') else {
            return;
        };
        let Some(service) = service_for_fragment(fragment) else {
            return;
        };
        let name = i18n::t(service.name_key());
        log::info!("service link clicked: {name}");
        let mut vars = BTreeMap::new();
        vars.insert("name", name.as_str());
        panel.announce(&i18n::tr("services.navigating", Some(&vars)));
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
