// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Segment color values with 3 (RGB) or 4 (RGBW) channels.
//!
//! WLED reports segment colors as a flat array of channel arrays whose
//! width depends on the LED hardware: plain RGB strips report three
//! channels, RGBW strips four. This module provides the value type both
//! widths decode into.

use std::fmt;

use serde_json::Value;

/// A segment color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use wledr_lib::Color;
///
/// let orange = Color::Rgb(255, 128, 0);
/// assert_eq!(orange.red(), 255);
/// assert_eq!(orange.white(), None);
/// assert_eq!(orange.to_hex(), "FF8000");
///
/// let warm = Color::Rgbw(255, 128, 0, 64);
/// assert_eq!(warm.white(), Some(64));
/// assert_eq!(warm.to_hex(), "FF800040");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Color {
    /// Three-channel color for RGB strips.
    Rgb(u8, u8, u8),
    /// Four-channel color for RGBW strips, white channel last.
    Rgbw(u8, u8, u8, u8),
}

impl Color {
    /// All channels off. The shared fallback for color slots a payload
    /// does not fill.
    pub const BLACK: Self = Self::Rgb(0, 0, 0);

    /// Decodes one entry of a segment's `col` array.
    ///
    /// Returns `None` unless the entry is an array carrying at least
    /// three leading integer channels in 0-255. A fourth channel turns
    /// the value into [`Color::Rgbw`]; anything beyond the fourth is
    /// ignored.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let channels: Vec<u8> = value
            .as_array()?
            .iter()
            .map_while(|channel| {
                channel
                    .as_u64()
                    .and_then(|raw| u8::try_from(raw).ok())
            })
            .collect();

        match channels.as_slice() {
            [r, g, b, w, ..] => Some(Self::Rgbw(*r, *g, *b, *w)),
            [r, g, b] => Some(Self::Rgb(*r, *g, *b)),
            _ => None,
        }
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        match self {
            Self::Rgb(r, _, _) | Self::Rgbw(r, _, _, _) => *r,
        }
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        match self {
            Self::Rgb(_, g, _) | Self::Rgbw(_, g, _, _) => *g,
        }
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        match self {
            Self::Rgb(_, _, b) | Self::Rgbw(_, _, b, _) => *b,
        }
    }

    /// Returns the white component, or `None` for RGB colors.
    #[must_use]
    pub const fn white(&self) -> Option<u8> {
        match self {
            Self::Rgb(..) => None,
            Self::Rgbw(_, _, _, w) => Some(*w),
        }
    }

    /// Returns `true` when the color carries a white channel.
    #[must_use]
    pub const fn is_rgbw(&self) -> bool {
        matches!(self, Self::Rgbw(..))
    }

    /// Returns the color as an uppercase hex string without prefix,
    /// six digits for RGB and eight for RGBW.
    #[must_use]
    pub fn to_hex(&self) -> String {
        match self {
            Self::Rgb(r, g, b) => format!("{r:02X}{g:02X}{b:02X}"),
            Self::Rgbw(r, g, b, w) => format!("{r:02X}{g:02X}{b:02X}{w:02X}"),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::Rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, w): (u8, u8, u8, u8)) -> Self {
        Self::Rgbw(r, g, b, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_rgb_entry() {
        let color = Color::from_value(&json!([255, 0, 0])).unwrap();
        assert_eq!(color, Color::Rgb(255, 0, 0));
        assert!(!color.is_rgbw());
    }

    #[test]
    fn decode_rgbw_entry() {
        let color = Color::from_value(&json!([255, 160, 0, 64])).unwrap();
        assert_eq!(color, Color::Rgbw(255, 160, 0, 64));
        assert_eq!(color.white(), Some(64));
    }

    #[test]
    fn decode_ignores_extra_channels() {
        let color = Color::from_value(&json!([1, 2, 3, 4, 5, 6])).unwrap();
        assert_eq!(color, Color::Rgbw(1, 2, 3, 4));
    }

    #[test]
    fn decode_rejects_short_or_invalid_entries() {
        assert_eq!(Color::from_value(&json!([255])), None);
        assert_eq!(Color::from_value(&json!([255, 0])), None);
        assert_eq!(Color::from_value(&json!("FF0000")), None);
        assert_eq!(Color::from_value(&json!(null)), None);
        // A wrong-typed channel truncates the sequence.
        assert_eq!(Color::from_value(&json!([255, "0", 0])), None);
        assert_eq!(Color::from_value(&json!([255, 300, 0])), None);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::Rgb(255, 128, 0).to_hex(), "FF8000");
        assert_eq!(Color::Rgbw(0, 15, 255, 1).to_hex(), "000FFF01");
        assert_eq!(Color::Rgb(255, 0, 0).to_string(), "#FF0000");
    }

    #[test]
    fn channel_accessors() {
        let color = Color::Rgb(10, 20, 30);
        assert_eq!(color.red(), 10);
        assert_eq!(color.green(), 20);
        assert_eq!(color.blue(), 30);
        assert_eq!(color.white(), None);
    }

    #[test]
    fn default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
        assert_eq!(Color::BLACK, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn from_tuples() {
        let rgb: Color = (255u8, 0u8, 0u8).into();
        assert_eq!(rgb, Color::Rgb(255, 0, 0));

        let rgbw: Color = (255u8, 0u8, 0u8, 128u8).into();
        assert_eq!(rgbw, Color::Rgbw(255, 0, 0, 128));
    }
}
