// SPDX-License-Identifier: GPL-3.0-only

//! Declarative style bundles.
//!
//! Styles describe appearance without touching any key. A [`KeyStyle`] is a
//! set of optional per-key attributes; a [`PadStyle`] carries pad-wide bulk
//! attributes plus the auxiliary key faces. Every field is optional: an unset
//! field is simply not applied, it never resets a key back to a default.
//!
//! Both types deserialize from template JSON and can be built in code through
//! `with_` chains.

use crate::resource::{Color, Resource};
use serde::{Deserialize, Serialize};

// ============================================================================
// Margins
// ============================================================================

/// Outer margins of a key, in display units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margins {
    #[serde(default)]
    pub left: f32,
    #[serde(default)]
    pub top: f32,
    #[serde(default)]
    pub right: f32,
    #[serde(default)]
    pub bottom: f32,
}

impl Margins {
    /// Creates margins with the given per-side values.
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates margins with the same value on all four sides.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

/// A margin specification, either one value for all sides or explicit
/// per-side values.
///
/// In JSON a bare number is the uniform form and an object the per-side
/// form, so one field cannot carry both at once:
///
/// ```json
/// "margins": 4.0
/// "margins": { "left": 2.0, "top": 4.0, "right": 2.0, "bottom": 4.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarginSpec {
    /// The same margin on all four sides.
    Uniform(f32),
    /// Explicit values per side.
    PerSide(Margins),
}

impl MarginSpec {
    /// Resolves the specification into concrete per-side margins.
    #[must_use]
    pub fn resolve(&self) -> Margins {
        match *self {
            MarginSpec::Uniform(value) => Margins::uniform(value),
            MarginSpec::PerSide(margins) => margins,
        }
    }
}

impl From<f32> for MarginSpec {
    fn from(value: f32) -> Self {
        MarginSpec::Uniform(value)
    }
}

impl From<Margins> for MarginSpec {
    fn from(margins: Margins) -> Self {
        MarginSpec::PerSide(margins)
    }
}

// ============================================================================
// KeyStyle
// ============================================================================

/// Optional per-key attributes.
///
/// Applied in a fixed order (see [`Key::apply_style`]); any field left as
/// `None` leaves the corresponding key attribute untouched.
///
/// [`Key::apply_style`]: crate::key::Key::apply_style
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyStyle {
    /// Text content. Setting text makes the text surface the visible one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,

    /// Text size in display units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_size: Option<f32>,

    /// Icon resource. Setting an icon makes the icon surface the visible one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Resource>,

    /// Icon size in display units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<f32>,

    /// Icon tint color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_tint: Option<Color>,

    /// Background resource for both surfaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Resource>,

    /// Background resource for the key's wrapper.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapper_background: Option<Resource>,
}

impl KeyStyle {
    /// Creates an empty style that applies nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the text color.
    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Sets the text size.
    #[must_use]
    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = Some(size);
        self
    }

    /// Sets the icon resource.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<Resource>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the icon size.
    #[must_use]
    pub fn with_icon_size(mut self, size: f32) -> Self {
        self.icon_size = Some(size);
        self
    }

    /// Sets the icon tint.
    #[must_use]
    pub fn with_icon_tint(mut self, tint: Color) -> Self {
        self.icon_tint = Some(tint);
        self
    }

    /// Sets the surface background.
    #[must_use]
    pub fn with_background(mut self, background: impl Into<Resource>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Sets the wrapper background.
    #[must_use]
    pub fn with_wrapper_background(mut self, background: impl Into<Resource>) -> Self {
        self.wrapper_background = Some(background.into());
        self
    }

    /// Returns true when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.text_color.is_none()
            && self.text_size.is_none()
            && self.icon.is_none()
            && self.icon_size.is_none()
            && self.icon_tint.is_none()
            && self.background.is_none()
            && self.wrapper_background.is_none()
    }
}

// ============================================================================
// PadStyle
// ============================================================================

/// Pad-wide bulk attributes and auxiliary key faces.
///
/// The `keys_` fields fan out to every standard key during construction; the
/// `left_key_` and `right_key_` fields give the auxiliary keys content and
/// make them visible.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PadStyle {
    /// Text size for every standard key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys_text_size: Option<f32>,

    /// Text color for every standard key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys_text_color: Option<Color>,

    /// Icon size for every standard key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys_icon_size: Option<f32>,

    /// Icon tint for every standard key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys_icon_tint: Option<Color>,

    /// Surface background for every standard key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys_background: Option<Resource>,

    /// Wrapper background for every standard key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys_wrapper_background: Option<Resource>,

    /// Outer margins for every standard key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margins: Option<MarginSpec>,

    /// Text face for the left auxiliary key. Also reveals the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_key_text: Option<String>,

    /// Icon face for the left auxiliary key. Also reveals the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_key_icon: Option<Resource>,

    /// Text face for the right auxiliary key. Also reveals the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_key_text: Option<String>,

    /// Icon face for the right auxiliary key. Also reveals the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_key_icon: Option<Resource>,
}

impl PadStyle {
    /// Creates an empty style that applies nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text size for every standard key.
    #[must_use]
    pub fn with_keys_text_size(mut self, size: f32) -> Self {
        self.keys_text_size = Some(size);
        self
    }

    /// Sets the text color for every standard key.
    #[must_use]
    pub fn with_keys_text_color(mut self, color: Color) -> Self {
        self.keys_text_color = Some(color);
        self
    }

    /// Sets the icon size for every standard key.
    #[must_use]
    pub fn with_keys_icon_size(mut self, size: f32) -> Self {
        self.keys_icon_size = Some(size);
        self
    }

    /// Sets the icon tint for every standard key.
    #[must_use]
    pub fn with_keys_icon_tint(mut self, tint: Color) -> Self {
        self.keys_icon_tint = Some(tint);
        self
    }

    /// Sets the surface background for every standard key.
    #[must_use]
    pub fn with_keys_background(mut self, background: impl Into<Resource>) -> Self {
        self.keys_background = Some(background.into());
        self
    }

    /// Sets the wrapper background for every standard key.
    #[must_use]
    pub fn with_keys_wrapper_background(mut self, background: impl Into<Resource>) -> Self {
        self.keys_wrapper_background = Some(background.into());
        self
    }

    /// Sets the outer margins for every standard key.
    #[must_use]
    pub fn with_margins(mut self, margins: impl Into<MarginSpec>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    /// Sets the left auxiliary key's text face.
    #[must_use]
    pub fn with_left_key_text(mut self, text: impl Into<String>) -> Self {
        self.left_key_text = Some(text.into());
        self
    }

    /// Sets the left auxiliary key's icon face.
    #[must_use]
    pub fn with_left_key_icon(mut self, icon: impl Into<Resource>) -> Self {
        self.left_key_icon = Some(icon.into());
        self
    }

    /// Sets the right auxiliary key's text face.
    #[must_use]
    pub fn with_right_key_text(mut self, text: impl Into<String>) -> Self {
        self.right_key_text = Some(text.into());
        self
    }

    /// Sets the right auxiliary key's icon face.
    #[must_use]
    pub fn with_right_key_icon(mut self, icon: impl Into<Resource>) -> Self {
        self.right_key_icon = Some(icon.into());
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margins_uniform() {
        let m = Margins::uniform(4.0);
        assert_eq!(m, Margins::new(4.0, 4.0, 4.0, 4.0));
    }

    #[test]
    fn test_margin_spec_resolve() {
        assert_eq!(MarginSpec::Uniform(3.0).resolve(), Margins::uniform(3.0));

        let per_side = Margins::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(MarginSpec::PerSide(per_side).resolve(), per_side);
    }

    /// A bare number and an object deserialize into the two margin forms.
    #[test]
    fn test_margin_spec_untagged_forms() {
        let uniform: MarginSpec = serde_json::from_str("4.5").unwrap();
        assert_eq!(uniform, MarginSpec::Uniform(4.5));

        let per_side: MarginSpec =
            serde_json::from_str(r#"{ "left": 1.0, "top": 2.0, "right": 3.0, "bottom": 4.0 }"#)
                .unwrap();
        assert_eq!(per_side.resolve(), Margins::new(1.0, 2.0, 3.0, 4.0));

        // Omitted sides default to zero.
        let partial: MarginSpec = serde_json::from_str(r#"{ "top": 8.0 }"#).unwrap();
        assert_eq!(partial.resolve(), Margins::new(0.0, 8.0, 0.0, 0.0));
    }

    #[test]
    fn test_key_style_empty_by_default() {
        let style = KeyStyle::new();
        assert!(style.is_empty());
        assert_eq!(style, KeyStyle::default());
    }

    #[test]
    fn test_key_style_builder_chain() {
        let style = KeyStyle::new()
            .with_text("7")
            .with_text_size(24.0)
            .with_text_color(Color::rgb(255, 255, 255))
            .with_background("round-key");

        assert_eq!(style.text.as_deref(), Some("7"));
        assert_eq!(style.text_size, Some(24.0));
        assert_eq!(style.text_color, Some(Color::rgb(255, 255, 255)));
        assert_eq!(style.background, Some(Resource::named("round-key")));
        assert!(style.icon.is_none());
    }

    /// Unset fields are omitted from JSON and an empty object parses back
    /// as the all-`None` style.
    #[test]
    fn test_key_style_serde_sparse() {
        let json = serde_json::to_string(&KeyStyle::default()).unwrap();
        assert_eq!(json, "{}");

        let style: KeyStyle = serde_json::from_str("{}").unwrap();
        assert!(style.is_empty());

        let style: KeyStyle =
            serde_json::from_str(r##"{ "text": "1", "text_color": "#B0BEC5" }"##).unwrap();
        assert_eq!(style.text.as_deref(), Some("1"));
        assert_eq!(style.text_color, Some(Color::rgb(0xB0, 0xBE, 0xC5)));
        assert!(style.text_size.is_none());
    }

    #[test]
    fn test_pad_style_serde_sparse() {
        let json = serde_json::to_string(&PadStyle::default()).unwrap();
        assert_eq!(json, "{}");

        let style: PadStyle = serde_json::from_str(
            r#"{
                "keys_text_size": 20.0,
                "margins": 2.0,
                "right_key_icon": "backspace"
            }"#,
        )
        .unwrap();
        assert_eq!(style.keys_text_size, Some(20.0));
        assert_eq!(style.margins, Some(MarginSpec::Uniform(2.0)));
        assert_eq!(style.right_key_icon, Some(Resource::named("backspace")));
        assert!(style.left_key_text.is_none());
    }

    #[test]
    fn test_pad_style_builder_chain() {
        let style = PadStyle::new()
            .with_keys_text_size(18.0)
            .with_margins(Margins::new(2.0, 4.0, 2.0, 4.0))
            .with_left_key_text("clear")
            .with_right_key_icon("backspace");

        assert_eq!(style.keys_text_size, Some(18.0));
        assert_eq!(
            style.margins.map(|m| m.resolve()),
            Some(Margins::new(2.0, 4.0, 2.0, 4.0))
        );
        assert_eq!(style.left_key_text.as_deref(), Some("clear"));
        assert_eq!(style.right_key_icon, Some(Resource::named("backspace")));
    }
}
