// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `WLEDr` library.
//!
//! Decoding is best-effort and total: missing or malformed fields inside a
//! payload resolve to documented defaults instead of failing. The only
//! failure the model layer itself can report is an initial payload that
//! lacks one of the required top-level sections outright.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The initial payload is missing a required top-level section.
    ///
    /// A WLED status response always carries the `effects`, `palettes`,
    /// `info` and `state` keys once the device is reachable. Their values
    /// may be empty or null (the device omits feature blocks freely), but
    /// a payload without the keys themselves is not a status response and
    /// cannot seed a [`Device`](crate::Device).
    #[error("WLED data is incomplete, cannot construct device object (missing key `{key}`)")]
    IncompleteData {
        /// The first required key that was absent.
        key: &'static str,
    },

    /// JSON parsing failed.
    ///
    /// Only raised by the [`Device::from_json_str`](crate::Device::from_json_str)
    /// convenience; decoding an already-parsed payload never produces it.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_data_display() {
        let err = Error::IncompleteData { key: "effects" };
        assert_eq!(
            err.to_string(),
            "WLED data is incomplete, cannot construct device object (missing key `effects`)"
        );
    }

    #[test]
    fn error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("JSON parse error:"));
    }
}
