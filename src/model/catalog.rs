// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Effect and palette catalogs.
//!
//! The device enumerates its built-in effects and color palettes as plain
//! arrays of names; an entry's array position is the firmware-assigned
//! numeric ID that segments reference through their `fx` and `pal`
//! fields. Catalogs are rebuilt wholesale from such an array and kept
//! sorted by display name, while IDs stay bound to the original
//! positions.

use serde_json::Value;

/// One entry of the device's effect catalog.
///
/// Identity is [`effect_id`](Self::effect_id); the name is display-only
/// and determines catalog ordering.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Effect {
    /// Firmware-assigned effect ID (position in the reported array).
    pub effect_id: u32,
    /// Display name of the effect.
    pub name: String,
}

impl Effect {
    /// Builds the effect catalog from the payload's `effects` array.
    ///
    /// Each element becomes one entry with its array position as ID; the
    /// resulting catalog is sorted by name (stable, so equal names keep
    /// ascending ID order). Returns `None` when the value is missing,
    /// not an array, or empty — callers keep their previous catalog in
    /// that case. Non-string elements decode to an empty name.
    #[must_use]
    pub fn catalog_from(value: &Value) -> Option<Vec<Self>> {
        catalog_from(value).map(|entries| {
            entries
                .into_iter()
                .map(|(effect_id, name)| Self { effect_id, name })
                .collect()
        })
    }

    /// Looks up an effect by ID, substituting the `Unknown` sentinel
    /// when the catalog has no such entry.
    pub(crate) fn resolve(effects: &[Self], effect_id: u32) -> Self {
        effects
            .iter()
            .find(|effect| effect.effect_id == effect_id)
            .cloned()
            .unwrap_or_else(|| {
                tracing::warn!(effect_id, "effect ID not in catalog, substituting Unknown");
                Self {
                    effect_id: 0,
                    name: "Unknown".to_string(),
                }
            })
    }
}

/// One entry of the device's color palette catalog.
///
/// Identity is [`palette_id`](Self::palette_id); the name is display-only
/// and determines catalog ordering.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Palette {
    /// Firmware-assigned palette ID (position in the reported array).
    pub palette_id: u32,
    /// Display name of the palette.
    pub name: String,
}

impl Palette {
    /// Builds the palette catalog from the payload's `palettes` array.
    ///
    /// Same contract as [`Effect::catalog_from`].
    #[must_use]
    pub fn catalog_from(value: &Value) -> Option<Vec<Self>> {
        catalog_from(value).map(|entries| {
            entries
                .into_iter()
                .map(|(palette_id, name)| Self { palette_id, name })
                .collect()
        })
    }

    /// Looks up a palette by ID, substituting the `Unknown` sentinel
    /// when the catalog has no such entry.
    pub(crate) fn resolve(palettes: &[Self], palette_id: u32) -> Self {
        palettes
            .iter()
            .find(|palette| palette.palette_id == palette_id)
            .cloned()
            .unwrap_or_else(|| {
                tracing::warn!(palette_id, "palette ID not in catalog, substituting Unknown");
                Self {
                    palette_id: 0,
                    name: "Unknown".to_string(),
                }
            })
    }
}

/// Shared catalog construction: positions become IDs, entries sort by
/// name. `None` for missing, non-array or empty input.
fn catalog_from(value: &Value) -> Option<Vec<(u32, String)>> {
    let names = value.as_array()?;
    if names.is_empty() {
        return None;
    }

    let mut entries: Vec<(u32, String)> = names
        .iter()
        .zip(0u32..)
        .map(|(name, id)| (id, name.as_str().unwrap_or_default().to_string()))
        .collect();
    entries.sort_by(|(_, a), (_, b)| a.cmp(b));
    Some(entries)
}
