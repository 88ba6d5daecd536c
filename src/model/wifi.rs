// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wi-Fi connection information.

use serde_json::Value;

use crate::json;

/// Wi-Fi connection information as reported by the device.
///
/// Unlike the other info blocks this one is genuinely optional: a device
/// without Wi-Fi information omits the `wifi` key entirely, and
/// [`from_payload`](Self::from_payload) then returns `None` rather than a
/// zero-valued struct. An empty `wifi` block still decodes to a present,
/// all-defaults value — callers can rely on the distinction.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Wifi {
    /// BSSID of the access point the device is associated with.
    pub bssid: String,
    /// Wi-Fi channel.
    pub channel: u32,
    /// Received signal strength in dBm.
    pub rssi: i64,
    /// Signal quality in percent.
    pub signal: u32,
}

impl Wifi {
    /// Decodes the `wifi` block of an info payload.
    ///
    /// Returns `None` iff the payload has no `wifi` key at all.
    #[must_use]
    pub fn from_payload(payload: &Value) -> Option<Self> {
        let wifi = payload.get("wifi")?;
        Some(Self {
            bssid: json::string_or(wifi, "bssid", "00:00:00:00:00:00"),
            channel: json::u32_or(wifi, "channel", 0),
            rssi: json::i64_or(wifi, "rssi", 0),
            signal: json::u32_or(wifi, "signal", 0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_full_block() {
        let payload = json!({"wifi": {
            "bssid": "AA:AA:AA:AA:AA:BB",
            "channel": 11,
            "rssi": -76,
            "signal": 48
        }});
        let wifi = Wifi::from_payload(&payload).unwrap();

        assert_eq!(wifi.bssid, "AA:AA:AA:AA:AA:BB");
        assert_eq!(wifi.channel, 11);
        assert_eq!(wifi.rssi, -76);
        assert_eq!(wifi.signal, 48);
    }

    #[test]
    fn missing_key_is_absent() {
        assert_eq!(Wifi::from_payload(&json!({})), None);
    }

    #[test]
    fn empty_block_is_present_with_defaults() {
        let wifi = Wifi::from_payload(&json!({"wifi": {}})).unwrap();

        assert_eq!(
            wifi,
            Wifi {
                bssid: "00:00:00:00:00:00".to_string(),
                channel: 0,
                rssi: 0,
                signal: 0,
            }
        );
    }
}
