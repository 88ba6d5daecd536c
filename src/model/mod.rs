// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed model of WLED status payloads.
//!
//! Each type decodes one section of the device's JSON status response
//! through a `from_payload` constructor. Decoding is deliberately
//! best-effort: WLED firmware omits feature blocks freely and changes
//! payload shape across versions, so every field carries a documented
//! default and no constructor here can fail.
//!
//! # Types
//!
//! - [`Effect`] / [`Palette`] - catalog entries with firmware-assigned IDs
//! - [`Color`] - segment color with 3 (RGB) or 4 (RGBW) channels
//! - [`Nightlight`] / [`Sync`] - always-present state sub-objects
//! - [`Leds`] / [`Wifi`] - hardware and network description
//! - [`Segment`] - one independently controlled LED range
//! - [`Info`] / [`State`] - the two top-level payload sections

mod catalog;
mod color;
mod info;
mod leds;
mod nightlight;
mod segment;
mod state;
mod sync;
mod wifi;

pub use catalog::{Effect, Palette};
pub use color::Color;
pub use info::Info;
pub use leds::Leds;
pub use nightlight::Nightlight;
pub use segment::Segment;
pub use state::State;
pub use sync::Sync;
pub use wifi::Wifi;
