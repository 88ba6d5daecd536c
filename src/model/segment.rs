// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Segment state decoding.
//!
//! Segments are the unit of independent control on a WLED strip: each
//! covers a contiguous LED range with its own colors, effect, palette and
//! playback parameters. The firmware reports them as an array whose
//! position doubles as the segment ID, and omits any field that matches
//! the device-level state — decoding therefore needs the enclosing
//! state's `on`/`bri` values and the current catalogs as context.

use serde_json::Value;

use crate::json;
use crate::model::{Color, Effect, Palette};

/// State of one LED strip segment.
///
/// [`effect`](Self::effect) and [`palette`](Self::palette) are resolved
/// copies of the catalog entries as they were when the segment was
/// decoded; replacing the device's catalogs later does not rewrite
/// already-decoded segments.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Segment {
    /// Position of this segment in the reported segment array.
    pub segment_id: usize,
    /// Index of the first LED covered by this segment.
    pub start: u32,
    /// Index of the first LED after this segment.
    pub stop: u32,
    /// Number of LEDs covered, `stop - start` unless reported explicitly.
    pub length: u32,
    /// Whether the segment is on.
    pub on: bool,
    /// Brightness of the segment.
    pub brightness: u32,
    /// Effect intensity.
    pub intensity: u32,
    /// Effect speed.
    pub speed: u32,
    /// Whether the effect runs in reverse direction.
    pub reverse: bool,
    /// Whether the segment is selected for UI and API operations.
    pub selected: bool,
    /// ID of the segment this one mirrors, `-1` when none.
    pub clones: i64,
    /// Primary color slot.
    pub color_primary: Color,
    /// Secondary (background) color slot.
    pub color_secondary: Color,
    /// Tertiary color slot.
    pub color_tertiary: Color,
    /// Active effect, resolved against the effect catalog.
    pub effect: Effect,
    /// Active palette, resolved against the palette catalog.
    pub palette: Palette,
}

impl Segment {
    /// Decodes one entry of a state payload's `seg` array.
    ///
    /// `segment_id` is the entry's array position. `state_on` and
    /// `state_brightness` are the enclosing device-level values, used as
    /// defaults when the segment omits its own `on`/`bri` fields.
    ///
    /// Decoding never fails: missing or malformed fields resolve to
    /// their defaults, unresolvable effect/palette IDs to the `Unknown`
    /// sentinel, and unfilled color slots to the shared
    /// [`Color::BLACK`] fallback.
    #[must_use]
    pub fn from_payload(
        segment_id: usize,
        payload: &Value,
        effects: &[Effect],
        palettes: &[Palette],
        state_on: bool,
        state_brightness: u32,
    ) -> Self {
        let start = json::u32_or(payload, "start", 0);
        let stop = json::u32_or(payload, "stop", 0);
        let length = json::u32_or(payload, "len", stop.saturating_sub(start));

        // The color array carries up to three slots in order: primary,
        // secondary, tertiary. Whatever the payload does not fill gets
        // the one shared black fallback, matching device behavior for
        // freshly created segments.
        let mut colors = payload
            .get("col")
            .and_then(Value::as_array)
            .map_or(&[] as &[Value], Vec::as_slice)
            .iter();
        let mut next_color = || {
            colors
                .next()
                .and_then(Color::from_value)
                .unwrap_or(Color::BLACK)
        };
        let color_primary = next_color();
        let color_secondary = next_color();
        let color_tertiary = next_color();

        let effect = Effect::resolve(effects, json::u32_or(payload, "fx", 0));
        let palette = Palette::resolve(palettes, json::u32_or(payload, "pal", 0));

        Self {
            segment_id,
            start,
            stop,
            length,
            on: json::bool_or(payload, "on", state_on),
            brightness: json::u32_or(payload, "bri", state_brightness),
            intensity: json::u32_or(payload, "ix", 0),
            speed: json::u32_or(payload, "sx", 0),
            reverse: json::bool_or(payload, "reverse", false),
            selected: json::bool_or(payload, "sel", false),
            clones: json::i64_or(payload, "cln", -1),
            color_primary,
            color_secondary,
            color_tertiary,
            effect,
            palette,
        }
    }
}
