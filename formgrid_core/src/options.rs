// Copyright 2025 the Formgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Form-wide configuration merged with per-control `options`.
//!
//! A form carries one config object; every control may carry an `options`
//! object in its layout element. Renderers read the overlay of the two, with
//! the control's keys winning.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Rendering options understood by the built-in controls and cells.
///
/// Unknown keys are preserved in [`Options::extra`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Size the input to its content instead of the full width.
    pub trim: bool,
    /// Request input focus on first render.
    pub focus: bool,
    /// Enforce the schema's `maxLength` on the input itself.
    pub restrict: bool,
    /// Suppress the required marker.
    pub hide_required_asterisk: bool,
    /// Show the description even when the control is not focused.
    pub show_unfocused_description: bool,
    /// Render strings as multi-line text areas.
    pub multi: bool,
    /// Render bounded numbers as sliders.
    pub slider: bool,
    /// Layout used for each element of a list array control.
    pub detail: Option<Value>,
    /// Keys not interpreted here.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Options {
    /// Overlay `ui_options` on `config` and parse the result.
    ///
    /// Non-object inputs are ignored. A key whose value has the wrong shape
    /// (for example a string where a flag is expected) is skipped, so the
    /// value beneath it, or the default, stays in effect.
    pub fn merged(config: &Value, ui_options: Option<&Value>) -> Self {
        let mut merged = Map::new();
        for source in [Some(config), ui_options].into_iter().flatten() {
            if let Value::Object(map) = source {
                for (k, v) in map {
                    if Self::accepts(k, v) {
                        merged.insert(k.clone(), v.clone());
                    } else {
                        tracing::debug!(key = %k, value = %v, "ignoring malformed option");
                    }
                }
            }
        }
        match serde_json::from_value(Value::Object(merged)) {
            Ok(options) => options,
            Err(err) => {
                tracing::debug!(%err, "ignoring malformed control options");
                Self::default()
            }
        }
    }

    fn accepts(key: &str, value: &Value) -> bool {
        let mut single = Map::new();
        single.insert(key.to_owned(), value.clone());
        serde_json::from_value::<Self>(Value::Object(single)).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn control_options_override_config() {
        let config = json!({ "trim": true, "restrict": true });
        let ui = json!({ "trim": false, "focus": true });
        let o = Options::merged(&config, Some(&ui));
        assert!(!o.trim);
        assert!(o.restrict);
        assert!(o.focus);
    }

    #[test]
    fn camel_case_keys_and_extras() {
        let o = Options::merged(
            &json!({}),
            Some(&json!({ "hideRequiredAsterisk": true, "variant": "quiet" })),
        );
        assert!(o.hide_required_asterisk);
        assert_eq!(o.extra.get("variant"), Some(&json!("quiet")));
    }

    #[test]
    fn malformed_falls_back_to_defaults() {
        let o = Options::merged(&json!(null), Some(&json!({ "trim": "yes" })));
        assert_eq!(o, Options::default());
    }

    #[test]
    fn malformed_keys_are_skipped_individually() {
        let config = json!({ "trim": true, "focus": true });
        let ui = json!({ "focus": "yes", "restrict": true, "multi": 1 });
        let o = Options::merged(&config, Some(&ui));
        assert!(o.trim);
        assert!(o.focus);
        assert!(o.restrict);
        assert!(!o.multi);

        let o = Options::merged(&json!({ "trim": true }), Some(&json!({ "focus": "yes" })));
        assert!(o.trim);
        assert!(!o.focus);
    }
}
