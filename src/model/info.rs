// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device identity and capability information.

use serde_json::Value;

use crate::json;
use crate::model::{Leds, Wifi};

/// Identity and capability snapshot from the device's `info` section.
///
/// Everything here is static or slow-moving: build identification,
/// hardware description, network identity and resource counters.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Info {
    /// Platform name of the microcontroller, e.g. `esp8266`.
    pub architecture: String,
    /// Version of the underlying Arduino core, dot-separated.
    pub arduino_core_version: String,
    /// Producing brand, `WLED` for stock firmware.
    pub brand: String,
    /// Build type of the firmware binary.
    pub build_type: String,
    /// Number of effects included in the firmware.
    pub effect_count: u32,
    /// Bytes of heap currently available.
    pub free_heap: u64,
    /// LED strip hardware description.
    pub leds: Leds,
    /// IP of the realtime data source, when live override is active.
    pub live_ip: String,
    /// Realtime data source mode.
    pub live_mode: String,
    /// Whether a realtime data source currently overrides the state.
    pub live: bool,
    /// MAC address of the device.
    pub mac_address: String,
    /// Friendly name of the device.
    pub name: String,
    /// Number of palettes included in the firmware.
    pub pallet_count: u32,
    /// Product name.
    pub product: String,
    /// Port used for UDP sync traffic.
    pub udp_port: u32,
    /// Seconds since the device booted.
    pub uptime: u64,
    /// Numeric build identifier.
    pub version_id: String,
    /// Firmware version string.
    pub version: String,
    /// Number of connected websocket clients, `None` when the build has
    /// no websocket support.
    pub websocket: Option<u32>,
    /// Wi-Fi connection information, `None` when the device reports none.
    pub wifi: Option<Wifi>,
}

impl Info {
    /// Decodes an `info` payload, defaulting every missing field.
    ///
    /// Two normalizations apply: the Arduino core version swaps the
    /// payload's `_` separators for `.`, and a websocket client count of
    /// `-1` (build without websocket support) becomes `None` instead of
    /// a sentinel that callers would have to know about.
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        let websocket = payload
            .get("ws")
            .and_then(Value::as_i64)
            .and_then(|clients| match clients {
                -1 => None,
                clients => u32::try_from(clients).ok(),
            });

        Self {
            architecture: json::string_or(payload, "arch", "Unknown"),
            arduino_core_version: json::string_or(payload, "core", "Unknown").replace('_', "."),
            brand: json::string_or(payload, "brand", "WLED"),
            build_type: json::string_or(payload, "btype", "Unknown"),
            effect_count: json::u32_or(payload, "fxcount", 0),
            free_heap: json::u64_or(payload, "freeheap", 0),
            leds: Leds::from_payload(payload),
            live_ip: json::string_or(payload, "lip", "Unknown"),
            live_mode: json::string_or(payload, "lm", "Unknown"),
            live: json::bool_or(payload, "live", false),
            mac_address: json::string_or(payload, "mac", ""),
            name: json::string_or(payload, "name", "WLED Light"),
            pallet_count: json::u32_or(payload, "palcount", 0),
            product: json::string_or(payload, "product", "DIY Light"),
            udp_port: json::u32_or(payload, "udpport", 0),
            uptime: json::u64_or(payload, "uptime", 0),
            version_id: json::string_or(payload, "vid", "Unknown"),
            version: json::string_or(payload, "ver", "Unknown"),
            websocket,
            wifi: Wifi::from_payload(payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_full_payload() {
        let payload = json!({
            "arch": "esp8266",
            "core": "2_4_2",
            "brand": "WLED",
            "btype": "bin",
            "fxcount": 118,
            "freeheap": 14600,
            "leds": {"count": 30, "maxpwr": 850, "maxseg": 10, "pin": 2, "pwr": 470},
            "lip": "127.0.0.1",
            "lm": "E1.31",
            "live": true,
            "mac": "aabbccddeeff",
            "name": "Hallway Strip",
            "palcount": 46,
            "product": "DIY Light",
            "udpport": 21324,
            "uptime": 32,
            "vid": "1909122",
            "ver": "0.8.5",
            "ws": 2,
            "wifi": {"bssid": "AA:AA:AA:AA:AA:BB", "channel": 11, "rssi": -76, "signal": 48}
        });

        let info = Info::from_payload(&payload);

        assert_eq!(info.architecture, "esp8266");
        assert_eq!(info.arduino_core_version, "2.4.2");
        assert_eq!(info.brand, "WLED");
        assert_eq!(info.build_type, "bin");
        assert_eq!(info.effect_count, 118);
        assert_eq!(info.free_heap, 14600);
        assert_eq!(info.leds.count, 30);
        assert_eq!(info.live_ip, "127.0.0.1");
        assert_eq!(info.live_mode, "E1.31");
        assert!(info.live);
        assert_eq!(info.mac_address, "aabbccddeeff");
        assert_eq!(info.name, "Hallway Strip");
        assert_eq!(info.pallet_count, 46);
        assert_eq!(info.udp_port, 21324);
        assert_eq!(info.uptime, 32);
        assert_eq!(info.version_id, "1909122");
        assert_eq!(info.version, "0.8.5");
        assert_eq!(info.websocket, Some(2));
        assert_eq!(info.wifi.as_ref().unwrap().channel, 11);
    }

    #[test]
    fn empty_payload_yields_defaults() {
        let info = Info::from_payload(&json!({}));

        assert_eq!(info.architecture, "Unknown");
        assert_eq!(info.arduino_core_version, "Unknown");
        assert_eq!(info.brand, "WLED");
        assert_eq!(info.build_type, "Unknown");
        assert_eq!(info.effect_count, 0);
        assert_eq!(info.mac_address, "");
        assert_eq!(info.name, "WLED Light");
        assert_eq!(info.product, "DIY Light");
        assert_eq!(info.websocket, None);
        assert_eq!(info.wifi, None);
        assert_eq!(info.leds.count, 0);
    }

    #[test]
    fn core_version_separator_is_rewritten() {
        let info = Info::from_payload(&json!({"core": "3_0_2"}));
        assert_eq!(info.arduino_core_version, "3.0.2");
    }

    #[test]
    fn websocket_sentinel_normalizes_to_absent() {
        let info = Info::from_payload(&json!({"ws": -1}));
        assert_eq!(info.websocket, None);

        let info = Info::from_payload(&json!({"ws": 0}));
        assert_eq!(info.websocket, Some(0));
    }

    #[test]
    fn wifi_presence_tracks_payload_key() {
        let info = Info::from_payload(&json!({"wifi": {}}));
        assert!(info.wifi.is_some());

        let info = Info::from_payload(&json!({}));
        assert!(info.wifi.is_none());
    }
}
