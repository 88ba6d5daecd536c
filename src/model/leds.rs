// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LED hardware description.

use serde_json::Value;

use crate::json;

/// Static description of the attached LED strip hardware.
///
/// Always present on a decoded [`Info`](crate::Info); a payload without
/// the `leds` block yields the all-defaults value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Leds {
    /// Number of LEDs on the strip.
    pub count: u32,
    /// Current refresh rate, when the firmware reports one.
    pub fps: Option<u32>,
    /// Configured maximum power budget in milliamps.
    pub max_power: u32,
    /// Maximum number of segments the firmware supports.
    pub max_segments: u32,
    /// GPIO pin the strip is attached to.
    pub pin: u32,
    /// Current power draw estimate in milliamps.
    pub power: u32,
    /// Whether the strip has a dedicated white channel.
    pub rgbw: bool,
    /// Whether the white channel slider is shown in the UI.
    pub wv: bool,
}

impl Leds {
    /// Decodes the `leds` block of an info payload, defaulting every
    /// missing field.
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        let leds = payload.get("leds").unwrap_or(&Value::Null);
        Self {
            count: json::u32_or(leds, "count", 0),
            fps: json::u32_opt(leds, "fps"),
            max_power: json::u32_or(leds, "maxpwr", 0),
            max_segments: json::u32_or(leds, "maxseg", 0),
            pin: json::u32_or(leds, "pin", 0),
            power: json::u32_or(leds, "pwr", 0),
            rgbw: json::bool_or(leds, "rgbw", false),
            wv: json::bool_or(leds, "wv", true),
        }
    }
}
