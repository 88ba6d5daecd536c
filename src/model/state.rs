// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Live device state decoding.

use serde_json::Value;

use crate::json;
use crate::model::{Effect, Nightlight, Palette, Segment, Sync};

/// Live, mutable device state from the device's `state` section.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct State {
    /// Master brightness.
    pub brightness: u32,
    /// Nightlight state.
    pub nightlight: Nightlight,
    /// Master on/off state.
    pub on: bool,
    /// Playlist slot, `-1` when no playlist is running.
    pub playlist: i64,
    /// Preset slot, `-1` when no preset is active.
    pub preset: i64,
    /// Segments in reported order; array position is the segment ID.
    pub segments: Vec<Segment>,
    /// UDP sync state.
    pub sync: Sync,
    /// Crossfade duration between color updates, in 100ms units.
    pub transition: u32,
}

impl State {
    /// Decodes a `state` payload against the given catalogs.
    ///
    /// The device-level `on` and `bri` values are extracted first and
    /// threaded into every segment decode as ambient defaults, since
    /// segments omit these fields when they match the device level.
    /// Segments keep the catalog entries as resolved here even if the
    /// catalogs are replaced later.
    #[must_use]
    pub fn from_payload(payload: &Value, effects: &[Effect], palettes: &[Palette]) -> Self {
        let brightness = json::u32_or(payload, "bri", 1);
        let on = json::bool_or(payload, "on", false);

        let segments = payload
            .get("seg")
            .and_then(Value::as_array)
            .map_or(&[] as &[Value], Vec::as_slice)
            .iter()
            .enumerate()
            .map(|(segment_id, segment)| {
                Segment::from_payload(segment_id, segment, effects, palettes, on, brightness)
            })
            .collect();

        Self {
            brightness,
            nightlight: Nightlight::from_payload(payload),
            on,
            playlist: json::i64_or(payload, "pl", -1),
            preset: json::i64_or(payload, "ps", -1),
            segments,
            sync: Sync::from_payload(payload),
            transition: json::u32_or(payload, "transition", 0),
        }
    }

    /// Whether the playlist slot holds the `-1` sentinel.
    ///
    /// The firmware reports `-1` when no playlist is running, so despite
    /// its name this returns `true` precisely in that case. The literal
    /// comparison is kept as-is for drop-in compatibility with existing
    /// integrations that depend on it.
    #[must_use]
    pub fn playlist_active(&self) -> bool {
        self.playlist == -1
    }

    /// Whether the preset slot holds the `-1` sentinel.
    ///
    /// Same caveat as [`playlist_active`](Self::playlist_active): `true`
    /// means the firmware reported the "none active" sentinel.
    #[must_use]
    pub fn preset_active(&self) -> bool {
        self.preset == -1
    }

    /// Returns the segment with the given ID, if present.
    #[must_use]
    pub fn segment(&self, segment_id: usize) -> Option<&Segment> {
        self.segments
            .iter()
            .find(|segment| segment.segment_id == segment_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalogs() -> (Vec<Effect>, Vec<Palette>) {
        (
            Effect::catalog_from(&json!(["Solid", "Blink"])).unwrap(),
            Palette::catalog_from(&json!(["Default"])).unwrap(),
        )
    }

    #[test]
    fn decode_full_state() {
        let (effects, palettes) = catalogs();
        let payload = json!({
            "on": true,
            "bri": 140,
            "transition": 7,
            "ps": 3,
            "pl": -1,
            "nl": {"on": true, "dur": 30, "fade": true, "tbri": 5},
            "udpn": {"send": true, "recv": false},
            "seg": [
                {"start": 0, "stop": 20, "fx": 1},
                {"start": 20, "stop": 30, "fx": 0}
            ]
        });

        let state = State::from_payload(&payload, &effects, &palettes);

        assert!(state.on);
        assert_eq!(state.brightness, 140);
        assert_eq!(state.transition, 7);
        assert_eq!(state.preset, 3);
        assert_eq!(state.playlist, -1);
        assert!(state.nightlight.on);
        assert!(state.sync.send);
        assert_eq!(state.segments.len(), 2);
        assert_eq!(state.segments[0].effect.name, "Blink");
        assert_eq!(state.segments[1].effect.name, "Solid");
    }

    #[test]
    fn empty_payload_yields_defaults() {
        let state = State::from_payload(&json!({}), &[], &[]);

        assert!(!state.on);
        assert_eq!(state.brightness, 1);
        assert_eq!(state.playlist, -1);
        assert_eq!(state.preset, -1);
        assert_eq!(state.transition, 0);
        assert!(state.segments.is_empty());
        assert!(!state.nightlight.on);
        assert!(!state.sync.send);
    }

    #[test]
    fn segment_ids_follow_array_order() {
        let (effects, palettes) = catalogs();
        let payload = json!({"seg": [{"stop": 10}, {"start": 10, "stop": 20}, {}]});

        let state = State::from_payload(&payload, &effects, &palettes);
        let ids: Vec<usize> = state.segments.iter().map(|s| s.segment_id).collect();
        assert_eq!(ids, [0, 1, 2]);
    }

    #[test]
    fn ambient_values_reach_segments() {
        let (effects, palettes) = catalogs();
        let payload = json!({"on": true, "bri": 77, "seg": [{}]});

        let state = State::from_payload(&payload, &effects, &palettes);
        assert!(state.segments[0].on);
        assert_eq!(state.segments[0].brightness, 77);
    }

    #[test]
    fn playlist_and_preset_sentinel_accessors() {
        let state = State::from_payload(&json!({"pl": -1, "ps": -1}), &[], &[]);
        assert!(state.playlist_active());
        assert!(state.preset_active());

        let state = State::from_payload(&json!({"pl": 2, "ps": 5}), &[], &[]);
        assert!(!state.playlist_active());
        assert!(!state.preset_active());
    }

    #[test]
    fn segment_lookup_by_id() {
        let (effects, palettes) = catalogs();
        let payload = json!({"seg": [{"stop": 10}, {"start": 10, "stop": 20}]});

        let state = State::from_payload(&payload, &effects, &palettes);
        assert_eq!(state.segment(1).unwrap().start, 10);
        assert!(state.segment(5).is_none());
    }

    #[test]
    fn non_array_seg_decodes_to_no_segments() {
        let state = State::from_payload(&json!({"seg": {"0": {}}}), &[], &[]);
        assert!(state.segments.is_empty());
    }
}
