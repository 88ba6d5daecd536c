// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The device aggregate.
//!
//! [`Device`] owns everything known about one WLED controller: the effect
//! and palette catalogs, the identity/capability snapshot and the live
//! state. It is seeded from one full status payload and then kept current
//! by feeding it whatever partial payloads arrive — each of the four
//! sections is replaced wholesale when present and left untouched when
//! absent, so a state-only refresh never discards previously learned
//! catalogs.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{Effect, Info, Palette, State};

/// All known information about one WLED device.
///
/// # Partial updates
///
/// WLED exposes the catalogs, info and state both as one combined
/// document and as individual endpoints, and push channels typically
/// carry state alone. [`update_from_payload`](Self::update_from_payload)
/// accepts any of these shapes; segments always resolve their effect and
/// palette references against the tables as of that same update.
///
/// # Examples
///
/// ```
/// use wledr_lib::Device;
///
/// let payload = serde_json::json!({
///     "effects": ["Solid", "Blink"],
///     "palettes": ["Default"],
///     "info": {"name": "Hallway", "ver": "0.13.0"},
///     "state": {"on": true, "bri": 128, "seg": [{"start": 0, "stop": 30, "fx": 1}]}
/// });
///
/// let device = Device::from_payload(&payload)?;
/// assert_eq!(device.info.name, "Hallway");
/// assert_eq!(device.state.segments[0].effect.name, "Blink");
/// # Ok::<(), wledr_lib::Error>(())
/// ```
///
/// # Concurrency
///
/// Updates take `&mut self` and are not internally synchronized. Code
/// sharing a device behind interior mutability must serialize updates
/// itself; interleaved updates could pair a stale catalog with a newer
/// state.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Device {
    /// Effect catalog, sorted by name.
    pub effects: Vec<Effect>,
    /// Palette catalog, sorted by name.
    pub palettes: Vec<Palette>,
    /// Identity and capability snapshot.
    pub info: Info,
    /// Live device state.
    pub state: State,
}

/// Top-level sections a payload must carry to seed a device.
const REQUIRED_KEYS: [&str; 4] = ["effects", "palettes", "info", "state"];

impl Device {
    /// Constructs a device from an initial full status payload.
    ///
    /// The payload must carry all four top-level keys (`effects`,
    /// `palettes`, `info`, `state`); their values may still be null or
    /// empty, in which case the corresponding section starts out at its
    /// defaults. After the key check this behaves exactly like an update
    /// against an empty aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteData`] when a required key is absent.
    pub fn from_payload(payload: &Value) -> Result<Self> {
        if let Some(key) = REQUIRED_KEYS
            .iter()
            .copied()
            .find(|key| payload.get(key).is_none())
        {
            return Err(Error::IncompleteData { key });
        }

        let mut device = Self {
            effects: Vec::new(),
            palettes: Vec::new(),
            info: Info::from_payload(&Value::Null),
            state: State::from_payload(&Value::Null, &[], &[]),
        };
        device.update_from_payload(payload);
        Ok(device)
    }

    /// Constructs a device from a raw JSON status document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] when the document is not valid JSON, and
    /// [`Error::IncompleteData`] as [`from_payload`](Self::from_payload).
    pub fn from_json_str(document: &str) -> Result<Self> {
        let payload: Value = serde_json::from_str(document)?;
        Self::from_payload(&payload)
    }

    /// Applies a full or partial status payload in place.
    ///
    /// Each section the payload carries a usable value for is replaced
    /// wholesale: catalogs on a non-empty array, info and state on a
    /// non-empty object. Sections the payload omits (or carries as null
    /// or empty) keep their current value — a catalog is never merged
    /// entry-by-entry. The state decodes against the catalogs as already
    /// updated by this same call, so a payload replacing both stays
    /// internally consistent.
    ///
    /// Returns `&mut self` so arriving payloads can be chained.
    pub fn update_from_payload(&mut self, payload: &Value) -> &mut Self {
        if let Some(effects) = payload.get("effects").and_then(Effect::catalog_from) {
            tracing::debug!(count = effects.len(), "replacing effect catalog");
            self.effects = effects;
        }

        if let Some(palettes) = payload.get("palettes").and_then(Palette::catalog_from) {
            tracing::debug!(count = palettes.len(), "replacing palette catalog");
            self.palettes = palettes;
        }

        if let Some(info) = payload.get("info").filter(|value| is_populated(value)) {
            tracing::debug!("replacing device info");
            self.info = Info::from_payload(info);
        }

        if let Some(state) = payload.get("state").filter(|value| is_populated(value)) {
            let segments = state.get("seg").and_then(Value::as_array).map(Vec::len);
            tracing::debug!(segments, "replacing device state");
            self.state = State::from_payload(state, &self.effects, &self.palettes);
        }

        self
    }

    /// Returns the effect with the given catalog ID, if present.
    #[must_use]
    pub fn effect(&self, effect_id: u32) -> Option<&Effect> {
        self.effects
            .iter()
            .find(|effect| effect.effect_id == effect_id)
    }

    /// Returns the palette with the given catalog ID, if present.
    #[must_use]
    pub fn palette(&self, palette_id: u32) -> Option<&Palette> {
        self.palettes
            .iter()
            .find(|palette| palette.palette_id == palette_id)
    }
}

/// A section value worth decoding: a non-empty JSON object.
fn is_populated(value: &Value) -> bool {
    value.as_object().is_some_and(|map| !map.is_empty())
}
