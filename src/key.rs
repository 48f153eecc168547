// SPDX-License-Identifier: GPL-3.0-only

//! The key widget.
//!
//! A [`Key`] carries two stacked surfaces, one for text and one for an icon,
//! of which exactly one is visible at any time. Setting text reveals the text
//! surface and conceals the icon surface; setting an icon does the reverse.
//! The concealed surface keeps its content, so switching back restores what
//! was there before.
//!
//! Activation is synchronous: [`Key::click`] and [`Key::long_click`] run the
//! installed handler on the calling thread and report whether anything ran.
//! Handlers are shared [`Rc`] closures so a pad can hand one closure to every
//! key it owns.

use crate::defaults::{DEFAULT_TEXT_SIZE, KEY_BACKGROUND};
use crate::resource::{Color, Resource};
use crate::style::{KeyStyle, Margins};
use std::fmt;
use std::rc::Rc;

/// Handler invoked when a key is clicked.
pub type ClickHandler = Rc<dyn Fn(&Key)>;

/// Handler invoked when a key is long-clicked. Returns `true` when the
/// long-click was consumed.
pub type LongClickHandler = Rc<dyn Fn(&Key) -> bool>;

// ============================================================================
// Surfaces
// ============================================================================

/// The text face of a key.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSurface {
    value: String,
    color: Option<Color>,
    size: f32,
    background: Resource,
    visible: bool,
}

impl TextSurface {
    fn new() -> Self {
        Self {
            value: String::new(),
            color: None,
            size: DEFAULT_TEXT_SIZE,
            background: Resource::named(KEY_BACKGROUND),
            visible: true,
        }
    }

    /// Returns the text content, which may be empty.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the text color, if one was set.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Returns the text size in display units.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns the surface background.
    pub fn background(&self) -> &Resource {
        &self.background
    }

    /// Returns whether this is the key's visible surface.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Sets the text color.
    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    /// Sets the text size.
    pub fn set_size(&mut self, size: f32) {
        self.size = size;
    }

    /// Sets this surface's background, leaving the icon surface alone.
    pub fn set_background(&mut self, background: impl Into<Resource>) {
        self.background = background.into();
    }
}

/// The icon face of a key.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSurface {
    resource: Option<Resource>,
    tint: Option<Color>,
    size: Option<f32>,
    background: Resource,
    visible: bool,
}

impl IconSurface {
    fn new() -> Self {
        Self {
            resource: None,
            tint: None,
            size: None,
            background: Resource::named(KEY_BACKGROUND),
            visible: false,
        }
    }

    /// Returns the icon resource, if one was set.
    pub fn resource(&self) -> Option<&Resource> {
        self.resource.as_ref()
    }

    /// Returns the tint color, if one was set.
    pub fn tint(&self) -> Option<Color> {
        self.tint
    }

    /// Returns the icon size in display units, if one was set.
    pub fn size(&self) -> Option<f32> {
        self.size
    }

    /// Returns the surface background.
    pub fn background(&self) -> &Resource {
        &self.background
    }

    /// Returns whether this is the key's visible surface.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Sets the tint color.
    pub fn set_tint(&mut self, tint: Color) {
        self.tint = Some(tint);
    }

    /// Sets the icon size.
    pub fn set_size(&mut self, size: f32) {
        self.size = Some(size);
    }

    /// Sets this surface's background, leaving the text surface alone.
    pub fn set_background(&mut self, background: impl Into<Resource>) {
        self.background = background.into();
    }
}

// ============================================================================
// Content and value
// ============================================================================

/// What the visible surface of a key currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content<'a> {
    /// The text surface is active with this value.
    Text(&'a str),
    /// The icon surface is active with this resource.
    Icon(&'a Resource),
    /// The icon surface is active but no resource has been set.
    Empty,
}

/// An owned key face, either text or an icon resource.
///
/// Used where a caller supplies one face without caring which kind it is,
/// such as [`KeyPad::set_left_key`].
///
/// [`KeyPad::set_left_key`]: crate::pad::KeyPad::set_left_key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyValue {
    /// A text face.
    Text(String),
    /// An icon face.
    Icon(Resource),
}

impl From<&str> for KeyValue {
    fn from(text: &str) -> Self {
        KeyValue::Text(text.to_string())
    }
}

impl From<String> for KeyValue {
    fn from(text: String) -> Self {
        KeyValue::Text(text)
    }
}

impl From<Resource> for KeyValue {
    fn from(icon: Resource) -> Self {
        KeyValue::Icon(icon)
    }
}

// ============================================================================
// Key
// ============================================================================

/// A single activatable key.
///
/// Freshly constructed keys show an empty text surface at the default text
/// size with the stock background, and are visible. Styling is cumulative:
/// each setter adjusts one attribute and leaves the rest alone.
pub struct Key {
    position: usize,
    text: TextSurface,
    icon: IconSurface,
    wrapper_background: Option<Resource>,
    margins: Margins,
    visible: bool,
    on_click: Option<ClickHandler>,
    on_long_click: Option<LongClickHandler>,
}

impl Key {
    /// Creates a blank key with default appearance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: 0,
            text: TextSurface::new(),
            icon: IconSurface::new(),
            wrapper_background: None,
            margins: Margins::default(),
            visible: true,
            on_click: None,
            on_long_click: None,
        }
    }

    /// Creates a key and applies the given style to it.
    #[must_use]
    pub fn with_style(style: &KeyStyle) -> Self {
        let mut key = Self::new();
        key.apply_style(style);
        key
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the key's position in its pad's discovery order, or 0 for a
    /// key built outside a pad.
    pub fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Returns the text surface.
    pub fn text_surface(&self) -> &TextSurface {
        &self.text
    }

    /// Returns the text surface mutably, for styling one surface on its own.
    ///
    /// Which surface is visible stays under the key's control; the surface
    /// itself offers no way to change that.
    pub fn text_surface_mut(&mut self) -> &mut TextSurface {
        &mut self.text
    }

    /// Returns the icon surface.
    pub fn icon_surface(&self) -> &IconSurface {
        &self.icon
    }

    /// Returns the icon surface mutably. See [`Key::text_surface_mut`].
    pub fn icon_surface_mut(&mut self) -> &mut IconSurface {
        &mut self.icon
    }

    /// Returns the stored text content, whether or not the text surface is
    /// the visible one.
    pub fn text(&self) -> &str {
        &self.text.value
    }

    /// Returns the stored icon resource, whether or not the icon surface is
    /// the visible one.
    pub fn icon(&self) -> Option<&Resource> {
        self.icon.resource.as_ref()
    }

    /// Returns the wrapper background, if one was set.
    pub fn wrapper_background(&self) -> Option<&Resource> {
        self.wrapper_background.as_ref()
    }

    /// Returns the key's outer margins.
    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// Returns whether the key as a whole is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Reports what the active surface shows.
    ///
    /// This reflects the surface toggle only; a key hidden with [`Key::hide`]
    /// still reports its face. Check [`Key::is_visible`] separately.
    pub fn content(&self) -> Content<'_> {
        if self.text.visible {
            Content::Text(&self.text.value)
        } else if let Some(resource) = &self.icon.resource {
            Content::Icon(resource)
        } else {
            Content::Empty
        }
    }

    // ------------------------------------------------------------------
    // Styling
    // ------------------------------------------------------------------

    /// Applies every set field of a style to this key.
    ///
    /// Fields apply in a fixed order: text, text color, background, text
    /// size, icon, icon size, icon tint, wrapper background. When a style
    /// carries both text and an icon the icon is applied last, so the icon
    /// surface ends up visible.
    pub fn apply_style(&mut self, style: &KeyStyle) {
        if let Some(text) = &style.text {
            self.set_text(text.clone());
        }
        if let Some(color) = style.text_color {
            self.set_text_color(color);
        }
        if let Some(background) = &style.background {
            self.set_background(background.clone());
        }
        if let Some(size) = style.text_size {
            self.set_text_size(size);
        }
        if let Some(icon) = &style.icon {
            self.set_icon(icon.clone());
        }
        if let Some(size) = style.icon_size {
            self.set_icon_size(size);
        }
        if let Some(tint) = style.icon_tint {
            self.set_icon_tint(tint);
        }
        if let Some(background) = &style.wrapper_background {
            self.set_wrapper_background(background.clone());
        }
    }

    /// Sets the text content and makes the text surface the visible one.
    ///
    /// The icon surface keeps its resource for later reuse.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text.value = text.into();
        self.text.visible = true;
        self.icon.visible = false;
    }

    /// Sets the icon resource and makes the icon surface the visible one.
    ///
    /// The text surface keeps its content for later reuse.
    pub fn set_icon(&mut self, icon: impl Into<Resource>) {
        self.icon.resource = Some(icon.into());
        self.icon.visible = true;
        self.text.visible = false;
    }

    /// Sets either face from a [`KeyValue`].
    pub fn set_value(&mut self, value: impl Into<KeyValue>) {
        match value.into() {
            KeyValue::Text(text) => self.set_text(text),
            KeyValue::Icon(icon) => self.set_icon(icon),
        }
    }

    /// Sets the text color without changing which surface is visible.
    pub fn set_text_color(&mut self, color: Color) {
        self.text.color = Some(color);
    }

    /// Sets the text size without changing which surface is visible.
    pub fn set_text_size(&mut self, size: f32) {
        self.text.size = size;
    }

    /// Sets the icon size without changing which surface is visible.
    pub fn set_icon_size(&mut self, size: f32) {
        self.icon.size = Some(size);
    }

    /// Sets the icon tint without changing which surface is visible.
    pub fn set_icon_tint(&mut self, tint: Color) {
        self.icon.tint = Some(tint);
    }

    /// Sets the background of both surfaces.
    pub fn set_background(&mut self, background: impl Into<Resource>) {
        let background = background.into();
        self.text.background = background.clone();
        self.icon.background = background;
    }

    /// Sets the background of the key's wrapper.
    pub fn set_wrapper_background(&mut self, background: impl Into<Resource>) {
        self.wrapper_background = Some(background.into());
    }

    /// Sets the key's outer margins.
    pub fn set_margins(&mut self, margins: Margins) {
        self.margins = margins;
    }

    // ------------------------------------------------------------------
    // Visibility
    // ------------------------------------------------------------------

    /// Conceals the icon surface and reveals the text surface.
    ///
    /// Does nothing when the icon surface is already concealed, so calling
    /// this repeatedly cannot leave both surfaces hidden or both visible.
    pub fn hide_icon(&mut self) {
        if self.icon.visible {
            self.icon.visible = false;
            self.text.visible = true;
        }
    }

    /// Conceals the text surface and reveals the icon surface.
    ///
    /// Does nothing when the text surface is already concealed.
    pub fn hide_text(&mut self) {
        if self.text.visible {
            self.text.visible = false;
            self.icon.visible = true;
        }
    }

    /// Hides the key entirely. A hidden key ignores activation.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Makes the key visible again.
    pub fn show(&mut self) {
        self.visible = true;
    }

    // ------------------------------------------------------------------
    // Activation
    // ------------------------------------------------------------------

    /// Installs the click handler, replacing any previous one.
    pub fn set_on_click(&mut self, handler: ClickHandler) {
        self.on_click = Some(handler);
    }

    /// Removes the click handler.
    pub fn clear_on_click(&mut self) {
        self.on_click = None;
    }

    /// Installs the long-click handler, replacing any previous one.
    pub fn set_on_long_click(&mut self, handler: LongClickHandler) {
        self.on_long_click = Some(handler);
    }

    /// Removes the long-click handler.
    pub fn clear_on_long_click(&mut self) {
        self.on_long_click = None;
    }

    /// Activates the key.
    ///
    /// Runs the click handler synchronously and returns `true`. Returns
    /// `false` without running anything when the key is hidden or has no
    /// handler installed.
    pub fn click(&self) -> bool {
        if !self.visible {
            return false;
        }
        match &self.on_click {
            Some(handler) => {
                handler(self);
                true
            }
            None => false,
        }
    }

    /// Long-activates the key.
    ///
    /// Runs the long-click handler synchronously and returns its result.
    /// Returns `false` without running anything when the key is hidden or
    /// has no handler installed.
    pub fn long_click(&self) -> bool {
        if !self.visible {
            return false;
        }
        match &self.on_long_click {
            Some(handler) => handler(self),
            None => false,
        }
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("position", &self.position)
            .field("text", &self.text)
            .field("icon", &self.icon)
            .field("wrapper_background", &self.wrapper_background)
            .field("margins", &self.margins)
            .field("visible", &self.visible)
            .field("on_click", &self.on_click.is_some())
            .field("on_long_click", &self.on_long_click.is_some())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// A new key shows an empty text surface with stock defaults.
    #[test]
    fn test_new_key_defaults() {
        let key = Key::new();
        assert!(key.text_surface().is_visible(), "text surface starts visible");
        assert!(!key.icon_surface().is_visible(), "icon surface starts hidden");
        assert_eq!(key.text(), "");
        assert_eq!(key.text_surface().size(), DEFAULT_TEXT_SIZE);
        assert_eq!(
            key.text_surface().background(),
            &Resource::named(KEY_BACKGROUND)
        );
        assert!(key.icon().is_none());
        assert!(key.is_visible());
        assert_eq!(key.content(), Content::Text(""));
    }

    #[test]
    fn test_set_text_reveals_text_surface() {
        let mut key = Key::new();
        key.set_icon(Resource::named("backspace"));
        assert!(key.icon_surface().is_visible());

        key.set_text("5");
        assert!(key.text_surface().is_visible());
        assert!(!key.icon_surface().is_visible());
        assert_eq!(key.content(), Content::Text("5"));

        // The concealed icon surface keeps its resource.
        assert_eq!(key.icon(), Some(&Resource::named("backspace")));
    }

    #[test]
    fn test_set_icon_reveals_icon_surface() {
        let mut key = Key::new();
        key.set_text("9");

        let icon = Resource::named("fingerprint");
        key.set_icon(icon.clone());
        assert!(key.icon_surface().is_visible());
        assert!(!key.text_surface().is_visible());
        assert_eq!(key.content(), Content::Icon(&icon));

        // The concealed text surface keeps its value.
        assert_eq!(key.text(), "9");
    }

    /// Concealing an already concealed surface must not disturb the other
    /// one, no matter how often it is repeated.
    #[test]
    fn test_hide_icon_is_idempotent() {
        let mut key = Key::new();

        key.hide_icon();
        key.hide_icon();
        assert!(key.text_surface().is_visible());
        assert!(!key.icon_surface().is_visible());

        key.set_icon(Resource::named("ok"));
        key.hide_icon();
        assert!(key.text_surface().is_visible());
        assert!(!key.icon_surface().is_visible());
    }

    #[test]
    fn test_hide_text_is_idempotent() {
        let mut key = Key::new();

        key.hide_text();
        key.hide_text();
        assert!(key.icon_surface().is_visible());
        assert!(!key.text_surface().is_visible());

        key.hide_icon();
        assert!(key.text_surface().is_visible());
        assert!(!key.icon_surface().is_visible());
    }

    /// No setter sequence may leave both surfaces visible or both hidden.
    #[test]
    fn test_exactly_one_surface_visible() {
        let mut key = Key::new();
        let steps: Vec<Box<dyn Fn(&mut Key)>> = vec![
            Box::new(|k| k.set_text("1")),
            Box::new(|k| k.set_icon(Resource::named("a"))),
            Box::new(|k| k.hide_icon()),
            Box::new(|k| k.hide_text()),
            Box::new(|k| k.set_text_color(Color::rgb(1, 2, 3))),
            Box::new(|k| k.set_icon(Resource::named("b"))),
            Box::new(|k| k.hide_icon()),
            Box::new(|k| k.set_text("2")),
        ];

        for (index, step) in steps.iter().enumerate() {
            step(&mut key);
            let text = key.text_surface().is_visible();
            let icon = key.icon_surface().is_visible();
            assert!(
                text != icon,
                "after step {index}: text={text} icon={icon}, expected exactly one visible"
            );
        }
    }

    /// A style carrying both text and an icon ends with the icon visible,
    /// because icons apply after text.
    #[test]
    fn test_apply_style_icon_wins_over_text() {
        let style = KeyStyle::new()
            .with_text("0")
            .with_icon("fingerprint")
            .with_text_size(30.0)
            .with_icon_tint(Color::rgb(255, 255, 255));

        let key = Key::with_style(&style);
        assert!(key.icon_surface().is_visible());
        assert_eq!(key.text(), "0", "text value is still stored");
        assert_eq!(key.text_surface().size(), 30.0);
        assert_eq!(key.icon_surface().tint(), Some(Color::rgb(255, 255, 255)));
    }

    /// Unset style fields leave existing attributes untouched.
    #[test]
    fn test_apply_style_skips_unset_fields() {
        let mut key = Key::new();
        key.set_text("7");
        key.set_text_color(Color::rgb(10, 20, 30));

        key.apply_style(&KeyStyle::new().with_text_size(26.0));

        assert_eq!(key.text(), "7");
        assert_eq!(key.text_surface().color(), Some(Color::rgb(10, 20, 30)));
        assert_eq!(key.text_surface().size(), 26.0);
    }

    #[test]
    fn test_set_background_covers_both_surfaces() {
        let mut key = Key::new();
        key.set_background("flat-key");
        assert_eq!(key.text_surface().background(), &Resource::named("flat-key"));
        assert_eq!(key.icon_surface().background(), &Resource::named("flat-key"));
    }

    /// The mutable surface accessors style one surface without touching the
    /// other, and cannot flip which surface is visible.
    #[test]
    fn test_surface_escape_hatch() {
        let mut key = Key::new();

        key.text_surface_mut().set_background("text-cell");
        key.text_surface_mut().set_size(14.0);
        key.icon_surface_mut().set_tint(Color::rgb(200, 200, 200));

        assert_eq!(key.text_surface().background(), &Resource::named("text-cell"));
        assert_eq!(
            key.icon_surface().background(),
            &Resource::named(KEY_BACKGROUND),
            "icon surface keeps its own background"
        );
        assert_eq!(key.text_surface().size(), 14.0);
        assert_eq!(key.icon_surface().tint(), Some(Color::rgb(200, 200, 200)));

        assert!(key.text_surface().is_visible());
        assert!(!key.icon_surface().is_visible());
    }

    #[test]
    fn test_set_value_switches_face() {
        let mut key = Key::new();

        key.set_value("enter");
        assert_eq!(key.content(), Content::Text("enter"));

        key.set_value(Resource::named("enter-icon"));
        assert_eq!(key.content(), Content::Icon(&Resource::named("enter-icon")));
    }

    #[test]
    fn test_click_without_handler_reports_false() {
        let key = Key::new();
        assert!(!key.click());
        assert!(!key.long_click());
    }

    #[test]
    fn test_click_runs_handler() {
        let log: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

        let mut key = Key::new();
        key.set_text("3");
        let sink = Rc::clone(&log);
        key.set_on_click(Rc::new(move |k: &Key| {
            sink.borrow_mut().push(k.text().to_string());
        }));

        assert!(key.click());
        assert!(key.click());
        assert_eq!(*log.borrow(), vec!["3".to_string(), "3".to_string()]);
    }

    /// Hidden keys swallow activation without running handlers.
    #[test]
    fn test_hidden_key_ignores_activation() {
        let count = Rc::new(RefCell::new(0usize));

        let mut key = Key::new();
        let sink = Rc::clone(&count);
        key.set_on_click(Rc::new(move |_| {
            *sink.borrow_mut() += 1;
        }));
        key.set_on_long_click(Rc::new(|_| true));

        key.hide();
        assert!(!key.click());
        assert!(!key.long_click());
        assert_eq!(*count.borrow(), 0, "hidden key must not run handlers");

        key.show();
        assert!(key.click());
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_long_click_returns_handler_result() {
        let mut key = Key::new();

        key.set_on_long_click(Rc::new(|_| true));
        assert!(key.long_click());

        key.set_on_long_click(Rc::new(|_| false));
        assert!(!key.long_click(), "unconsumed long-click reports false");
    }

    #[test]
    fn test_clear_handlers() {
        let mut key = Key::new();
        key.set_on_click(Rc::new(|_| {}));
        key.set_on_long_click(Rc::new(|_| true));

        key.clear_on_click();
        key.clear_on_long_click();
        assert!(!key.click());
        assert!(!key.long_click());
    }
}
