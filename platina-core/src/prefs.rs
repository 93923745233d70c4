use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::state::{AccessibilityState, FontStep};

/// Persisted preference record as written to the key-value store.
///
/// Field names are frozen for compatibility with records saved by earlier
/// releases; `timestamp` is epoch milliseconds, stamped at save time and
/// never read back into state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefsRecord {
    pub font_size: u8,
    pub high_contrast: bool,
    pub reading_mode: bool,
    pub timestamp: i64,
}

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("malformed preference record: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl PrefsRecord {
    /// Snapshot a state for persistence, stamped with the caller's clock.
    #[must_use]
    pub fn stamped(state: &AccessibilityState, timestamp_ms: i64) -> Self {
        Self {
            font_size: state.font_step.index(),
            high_contrast: state.high_contrast,
            reading_mode: state.reading_mode,
            timestamp: timestamp_ms,
        }
    }

    /// Serialize for the key-value store.
    ///
    /// # Errors
    /// Returns [`PrefsError::Malformed`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PrefsError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Decode a persisted record into a state, total over field contents.
///
/// Payloads that are not JSON at all are an error; within a parsed payload,
/// every missing or invalid field falls back to its default: an absent,
/// non-integer, or out-of-range `fontSize` becomes the normal step, and
/// non-boolean mode flags become `false`.
///
/// # Errors
/// Returns [`PrefsError::Malformed`] when `raw` is not valid JSON.
pub fn decode(raw: &str) -> Result<AccessibilityState, PrefsError> {
    let value: Value = serde_json::from_str(raw)?;
    Ok(state_from_value(&value))
}

fn state_from_value(value: &Value) -> AccessibilityState {
    let font_step = value
        .get("fontSize")
        .and_then(Value::as_u64)
        .and_then(|idx| u8::try_from(idx).ok())
        .and_then(FontStep::from_index)
        .unwrap_or_default();
    let high_contrast = value
        .get("highContrast")
        .and_then(Value::as_bool)
        .unwrap_or_default();
    let reading_mode = value
        .get("readingMode")
        .and_then(Value::as_bool)
        .unwrap_or_default();

    AccessibilityState {
        font_step,
        high_contrast,
        reading_mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_the_wire_field_names() {
        let state = AccessibilityState {
            font_step: FontStep::ExtraLarge,
            high_contrast: true,
            reading_mode: false,
        };
        let json = PrefsRecord::stamped(&state, 1_700_000_000_000).to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["fontSize"], 2);
        assert_eq!(value["highContrast"], true);
        assert_eq!(value["readingMode"], false);
        assert_eq!(value["timestamp"], 1_700_000_000_000_i64);
        assert_eq!(decode(&json).unwrap(), state);
    }

    #[test]
    fn missing_fields_default_per_field() {
        let state = decode(r#"{"highContrast":true}"#).unwrap();
        assert_eq!(state.font_step, FontStep::Normal);
        assert!(state.high_contrast);
        assert!(!state.reading_mode);
    }

    #[test]
    fn invalid_fields_default_without_discarding_the_rest() {
        let state = decode(r#"{"fontSize":"big","highContrast":1,"readingMode":true}"#).unwrap();
        assert_eq!(state.font_step, FontStep::Normal);
        assert!(!state.high_contrast);
        assert!(state.reading_mode);
    }

    #[test]
    fn out_of_range_font_size_falls_back_to_normal() {
        let state = decode(r#"{"fontSize":7}"#).unwrap();
        assert_eq!(state.font_step, FontStep::Normal);
        let state = decode(r#"{"fontSize":-1}"#).unwrap();
        assert_eq!(state.font_step, FontStep::Normal);
    }

    #[test]
    fn non_json_payload_is_an_error() {
        assert!(matches!(
            decode("not json at all"),
            Err(PrefsError::Malformed(_))
        ));
    }

    #[test]
    fn non_object_payload_degrades_to_defaults() {
        assert_eq!(decode("42").unwrap(), AccessibilityState::default());
    }
}
