//! Color - packed RGBA cell color
//!
//! Stored as ABGR (0xAABBGGRR), so the little-endian bytes from
//! `to_rgba_bytes` are already in the RGBA8 order export bitmaps use.
//! Serialized as `#rrggbb` (or `#rrggbbaa` when not opaque).

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color `{0}` must be 6 or 8 hex digits")]
    Length(String),
    #[error("color `{0}` contains a non-hex digit")]
    Digit(String),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32))
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xff)
    }

    /// Opaque color from a `0xRRGGBB` literal.
    #[inline]
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rrggbbaa` or `rrggbbaa` (any case).
    pub fn parse(text: &str) -> Result<Self, ColorParseError> {
        let digits = text.trim().trim_start_matches('#');
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::Length(text.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::Digit(text.to_string()))?;
        // from_str_radix accepts a leading '+'
        if digits.starts_with('+') {
            return Err(ColorParseError::Digit(text.to_string()));
        }

        if digits.len() == 6 {
            Ok(Self::hex(value))
        } else {
            Ok(Self::rgba(
                (value >> 24) as u8,
                (value >> 16) as u8,
                (value >> 8) as u8,
                value as u8,
            ))
        }
    }

    #[inline]
    pub const fn abgr(self) -> u32 { self.0 }

    #[inline]
    pub const fn r(self) -> u8 { self.0 as u8 }

    #[inline]
    pub const fn g(self) -> u8 { (self.0 >> 8) as u8 }

    #[inline]
    pub const fn b(self) -> u8 { (self.0 >> 16) as u8 }

    #[inline]
    pub const fn a(self) -> u8 { (self.0 >> 24) as u8 }

    #[inline]
    pub const fn to_rgba_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// CSS form used for canvas fill/stroke styles and for persistence.
    pub fn to_hex(self) -> String {
        if self.a() == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r(), self.g(), self.b(), self.a())
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
