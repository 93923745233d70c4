use platina_core::prefs::{self, PrefsRecord};
use platina_core::state::AccessibilityState;

use crate::dom;

const PREFS_KEY: &str = "platinaAccessibility";

/// Read the persisted preference record.
///
/// A missing key, malformed payload, or storage failure all degrade to
/// `None` so the caller falls back to defaults; the reason is logged only.
#[must_use]
pub fn load() -> Option<AccessibilityState> {
    let storage = match dom::local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("preferences unavailable: {}", dom::js_error_message(&err));
            return None;
        }
    };
    let raw = match storage.get_item(PREFS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            log::warn!(
                "could not read saved preferences: {}",
                dom::js_error_message(&err)
            );
            return None;
        }
    };
    match prefs::decode(&raw) {
        Ok(state) => Some(state),
        Err(err) => {
            log::warn!("could not parse saved preferences: {err}");
            None
        }
    }
}

/// Persist the state under the fixed preferences key, stamped with the
/// current clock.
///
/// A write failure is logged and swallowed; the in-memory state stays
/// authoritative and the next mutation simply tries again.
pub fn save(state: &AccessibilityState) {
    #[allow(clippy::cast_possible_truncation)]
    let timestamp_ms = js_sys::Date::now() as i64;
    let Ok(payload) = PrefsRecord::stamped(state, timestamp_ms).to_json() else {
        return;
    };
    let result = dom::local_storage().and_then(|storage| storage.set_item(PREFS_KEY, &payload));
    if let Err(err) = result {
        log::warn!(
            "could not save preferences: {}",
            dom::js_error_message(&err)
        );
    }
}
