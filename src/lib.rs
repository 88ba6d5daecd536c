// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `WLEDr` Lib - A Rust library modeling WLED device state.
//!
//! This library decodes the JSON status API of WLED addressable-LED
//! controllers into a strongly-typed, incrementally updatable object
//! graph, so integrations work with real types instead of raw payloads.
//!
//! # Supported Features
//!
//! - **Typed status model**: Effects, palettes, LED hardware limits,
//!   per-segment state, nightlight, UDP sync, Wi-Fi info
//! - **Best-effort decoding**: Every field has a documented default;
//!   partial or oddly-shaped firmware payloads never fail to decode
//! - **Catalog resolution**: Segments carry their effect and palette
//!   resolved by firmware ID, with an `Unknown` sentinel on misses
//! - **Partial updates**: Feeding a state-only payload refreshes the
//!   state while keeping previously learned catalogs and info
//!
//! Transport is out of scope: this crate consumes payloads that an HTTP
//! client, websocket listener or test fixture has already fetched.
//!
//! # Quick Start
//!
//! ```
//! use wledr_lib::Device;
//!
//! let payload = serde_json::json!({
//!     "effects": ["Solid", "Blink"],
//!     "palettes": ["Default"],
//!     "info": {
//!         "name": "Hallway Strip",
//!         "ver": "0.13.0",
//!         "leds": {"count": 30, "rgbw": false}
//!     },
//!     "state": {
//!         "on": true,
//!         "bri": 128,
//!         "seg": [{"start": 0, "stop": 30, "fx": 1, "col": [[255, 0, 0]]}]
//!     }
//! });
//!
//! let mut device = Device::from_payload(&payload)?;
//! assert_eq!(device.info.name, "Hallway Strip");
//! assert_eq!(device.info.leds.count, 30);
//!
//! let segment = &device.state.segments[0];
//! assert_eq!(segment.effect.name, "Blink");
//! assert_eq!(segment.color_primary.to_hex(), "FF0000");
//!
//! // Later payloads update the aggregate in place; sections they omit
//! // keep their current value.
//! device.update_from_payload(&serde_json::json!({"state": {"on": false}}));
//! assert!(!device.state.on);
//! assert_eq!(device.effects.len(), 2);
//! # Ok::<(), wledr_lib::Error>(())
//! ```

mod device;
pub mod error;
mod json;
pub mod model;

pub use device::Device;
pub use error::{Error, Result};
pub use model::{Color, Effect, Info, Leds, Nightlight, Palette, Segment, State, Sync, Wifi};
