// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Nightlight sub-state.

use serde_json::Value;

use crate::json;

/// Nightlight state: a timed fade to a target brightness.
///
/// Always present on a decoded [`State`](crate::State); a payload without
/// the `nl` block yields the all-defaults value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Nightlight {
    /// Duration of the nightlight in minutes.
    pub duration: u32,
    /// Whether the nightlight fades smoothly to the target brightness.
    pub fade: bool,
    /// Whether the nightlight is currently active.
    pub on: bool,
    /// Target brightness of the nightlight.
    pub target_brightness: u32,
}

impl Nightlight {
    /// Decodes the `nl` block of a state payload, defaulting every
    /// missing field.
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        let nightlight = payload.get("nl").unwrap_or(&Value::Null);
        Self {
            duration: json::u32_or(nightlight, "dur", 1),
            fade: json::bool_or(nightlight, "fade", false),
            on: json::bool_or(nightlight, "on", false),
            target_brightness: json::u32_or(nightlight, "tbri", 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_full_block() {
        let payload = json!({"nl": {"dur": 60, "fade": true, "on": true, "tbri": 10}});
        let nightlight = Nightlight::from_payload(&payload);

        assert_eq!(nightlight.duration, 60);
        assert!(nightlight.fade);
        assert!(nightlight.on);
        assert_eq!(nightlight.target_brightness, 10);
    }

    #[test]
    fn missing_block_yields_defaults() {
        let nightlight = Nightlight::from_payload(&json!({}));

        assert_eq!(
            nightlight,
            Nightlight {
                duration: 1,
                fade: false,
                on: false,
                target_brightness: 0,
            }
        );
    }

    #[test]
    fn partial_block_defaults_the_rest() {
        let payload = json!({"nl": {"on": true}});
        let nightlight = Nightlight::from_payload(&payload);

        assert!(nightlight.on);
        assert_eq!(nightlight.duration, 1);
        assert_eq!(nightlight.target_brightness, 0);
    }
}
