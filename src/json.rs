// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed field extraction over loosely-typed payloads.
//!
//! WLED firmware payloads vary across versions: feature blocks disappear,
//! fields change presence, and third-party builds ship odd values. Every
//! getter here therefore resolves an absent key or a wrong-typed value to
//! the caller's default instead of failing, which keeps the whole decode
//! path total.

use serde_json::Value;

/// Returns the string at `key`, or `default` when absent or not a string.
pub(crate) fn string_or(payload: &Value, key: &str, default: &str) -> String {
    payload
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

/// Returns the bool at `key`, or `default` when absent or not a bool.
pub(crate) fn bool_or(payload: &Value, key: &str, default: bool) -> bool {
    payload.get(key).and_then(Value::as_bool).unwrap_or(default)
}

/// Returns the unsigned integer at `key`, or `default` when absent,
/// negative, fractional or out of range.
pub(crate) fn u32_or(payload: &Value, key: &str, default: u32) -> u32 {
    payload
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|raw| u32::try_from(raw).ok())
        .unwrap_or(default)
}

/// Returns the unsigned integer at `key`, or `default` when absent or
/// not representable.
pub(crate) fn u64_or(payload: &Value, key: &str, default: u64) -> u64 {
    payload.get(key).and_then(Value::as_u64).unwrap_or(default)
}

/// Returns the signed integer at `key`, or `default` when absent or not
/// representable. Used for fields carrying `-1` sentinels.
pub(crate) fn i64_or(payload: &Value, key: &str, default: i64) -> i64 {
    payload.get(key).and_then(Value::as_i64).unwrap_or(default)
}

/// Returns the unsigned integer at `key`, or `None` when the field is
/// absent or not representable.
pub(crate) fn u32_opt(payload: &Value, key: &str) -> Option<u32> {
    payload
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|raw| u32::try_from(raw).ok())
}
