// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! UDP sync sub-state.

use serde_json::Value;

use crate::json;

/// UDP sync state: broadcast and receive of state changes between
/// multiple devices on the same network.
///
/// Always present on a decoded [`State`](crate::State); a payload without
/// the `udpn` block yields the all-defaults value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Sync {
    /// Whether state changes are broadcast to other devices.
    pub send: bool,
    /// Whether broadcasts from other devices are applied.
    pub receive: bool,
}

impl Sync {
    /// Decodes the `udpn` block of a state payload, defaulting every
    /// missing field.
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        let sync = payload.get("udpn").unwrap_or(&Value::Null);
        Self {
            send: json::bool_or(sync, "send", false),
            receive: json::bool_or(sync, "recv", false),
        }
    }
}
