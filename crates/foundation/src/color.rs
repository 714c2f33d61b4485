//! Solid RGB colors.
//!
//! Palettes and stroke/fill symbology are written in CSS-style hex
//! notation (`#rrggbb`, with the `#rgb` shorthand accepted on input).
//! The type serializes as that string form so view descriptors stay
//! readable in their JSON encoding.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque 8-bit-per-channel RGB color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the `#rgb` shorthand (case-insensitive digits).
    pub fn parse_hex(text: &str) -> Result<Self, ColorError> {
        let Some(digits) = text.strip_prefix('#') else {
            return Err(ColorError::MissingHash);
        };
        let nibbles = digits
            .chars()
            .map(hex_nibble)
            .collect::<Result<Vec<u8>, ColorError>>()?;
        match nibbles.as_slice() {
            // Shorthand doubles each digit: #1af == #11aaff.
            &[r, g, b] => Ok(Self::rgb(r * 17, g * 17, b * 17)),
            &[r1, r0, g1, g0, b1, b0] => {
                Ok(Self::rgb(r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0))
            }
            other => Err(ColorError::Length { digits: other.len() }),
        }
    }
}

fn hex_nibble(c: char) -> Result<u8, ColorError> {
    c.to_digit(16).map(|d| d as u8).ok_or(ColorError::Digit(c))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::parse_hex(&text).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    MissingHash,
    Length { digits: usize },
    Digit(char),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::MissingHash => write!(f, "color must start with '#'"),
            ColorError::Length { digits } => {
                write!(f, "expected 3 or 6 hex digits, got {digits}")
            }
            ColorError::Digit(c) => write!(f, "invalid hex digit {c:?}"),
        }
    }
}

impl std::error::Error for ColorError {}
