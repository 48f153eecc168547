// SPDX-License-Identifier: GPL-3.0-only

//! Opaque resource handles and color values.
//!
//! A [`Resource`] names a drawable, icon, or other asset owned by the
//! embedding host. The widget model stores and forwards these handles but
//! never resolves or validates them; resolving a name that the host does not
//! know is a host-level concern.
//!
//! [`Color`] is a plain RGB value with `#RRGGBB` hex parsing, used for text
//! colors and icon tints. In template documents both types appear as JSON
//! strings.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Resource
// ============================================================================

/// An opaque, named handle to a host-managed asset.
///
/// Handles are compared by name only. The empty name is permitted but has no
/// special meaning to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource(String);

impl Resource {
    /// Creates a handle with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the handle's name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Resource {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for Resource {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Resource)
    }
}

// ============================================================================
// Color
// ============================================================================

/// An RGB color value.
///
/// Parses from and serializes to `#RRGGBB` hex strings, the form used in
/// template documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Color {
    /// Creates a color from individual channel values.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a color from a hex string.
    ///
    /// Accepts `#RRGGBB` and `RRGGBB`, case-insensitive, with surrounding
    /// whitespace ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorParseError`] when the string is not six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 {
            return Err(ColorParseError::new(hex, "expected 6 hex digits (RRGGBB)"));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::new(hex, "invalid hex digit"))?;

        Ok(Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        })
    }

    /// Renders the color as an uppercase `#RRGGBB` string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::from_hex(&text).map_err(D::Error::custom)
    }
}

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    input: String,
    reason: &'static str,
}

impl ColorParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for ColorParseError {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        assert_eq!(Color::from_hex("#FF0000").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_hex("00ff00").unwrap(), Color::rgb(0, 255, 0));
        assert_eq!(Color::from_hex("  #0000FF  ").unwrap(), Color::rgb(0, 0, 255));
        assert_eq!(Color::from_hex("#0080FF").unwrap(), Color::rgb(0, 128, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Color::from_hex("#FFF").is_err(), "short form is not accepted");
        assert!(Color::from_hex("#FFFFFFF").is_err(), "7 digits rejected");
        assert!(Color::from_hex("GGGGGG").is_err(), "non-hex digits rejected");
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("#").is_err());
    }

    #[test]
    fn test_hex_roundtrip() {
        let original = Color::rgb(123, 45, 67);
        let parsed = Color::from_hex(&original.to_hex()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(Color::rgb(255, 0, 0).to_string(), "#FF0000");
        assert_eq!(Color::rgb(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn test_color_serde_string_form() {
        let color = Color::rgb(51, 102, 255);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#3366FF\"");

        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);

        let err = serde_json::from_str::<Color>("\"#XYZ\"");
        assert!(err.is_err(), "malformed hex should fail deserialization");
    }

    #[test]
    fn test_color_parse_error_display() {
        let err = Color::from_hex("#12").unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("#12"), "error should echo the input");
        assert!(rendered.contains("6 hex digits"), "error should name the expectation");
    }

    #[test]
    fn test_resource_name_and_display() {
        let res = Resource::named("backspace");
        assert_eq!(res.name(), "backspace");
        assert_eq!(res.to_string(), "backspace");
        assert_eq!(Resource::from("ok"), Resource::named("ok"));
    }

    #[test]
    fn test_resource_serde_is_plain_string() {
        let res = Resource::named("key-background");
        let json = serde_json::to_string(&res).unwrap();
        assert_eq!(json, "\"key-background\"");

        let back: Resource = serde_json::from_str(&json).unwrap();
        assert_eq!(back, res);
    }
}
