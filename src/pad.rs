// SPDX-License-Identifier: GPL-3.0-only

//! The keypad container.
//!
//! A [`KeyPad`] owns every key it was built with in one arena and arranges
//! them through a [`ViewNode`] tree of groups, one group per template row.
//! Construction walks a [`Template`]: key slots become standard keys, group
//! slots nest, and the `left`/`right` slots bind the two auxiliary keys.
//!
//! Standard keys are discovered depth-first through the tree and numbered
//! 0..n in that order; the auxiliary keys are excluded from discovery, from
//! bulk styling, and from pad-level handlers. They start hidden and only
//! appear once the host gives them a face through [`KeyPad::set_left_key`],
//! [`KeyPad::set_right_key`], or the `left_key_`/`right_key_` fields of a
//! [`PadStyle`].
//!
//! A template that never places an auxiliary slot still yields a working
//! pad: the missing key is kept detached from the tree, hidden, so the
//! auxiliary accessors and setters behave the same either way.

use crate::key::{ClickHandler, Key, KeyValue, LongClickHandler};
use crate::resource::{Color, Resource};
use crate::style::{MarginSpec, PadStyle};
use crate::template::types::{Slot, Template};
use crate::view::{KeyId, ViewNode};
use std::rc::Rc;

/// A pad of keys built from a template.
#[derive(Debug)]
pub struct KeyPad {
    name: String,
    slab: Vec<Key>,
    root: ViewNode,
    /// Standard keys in discovery order. Never contains `left` or `right`.
    keys: Vec<KeyId>,
    left: KeyId,
    right: KeyId,
}

impl KeyPad {
    /// Builds a pad from a template with no extra styling.
    #[must_use]
    pub fn new(template: &Template) -> Self {
        Self::with_style(template, &PadStyle::default())
    }

    /// Builds the stock numeric pad.
    #[must_use]
    pub fn numeric() -> Self {
        Self::new(&Template::numeric())
    }

    /// Builds a pad from a template and applies a pad style to it.
    ///
    /// Inflation happens first, so bulk fields of the style reach every
    /// standard key the template produced. Auxiliary faces in the style are
    /// applied last, icon after text, matching per-key style order.
    #[must_use]
    pub fn with_style(template: &Template, style: &PadStyle) -> Self {
        let mut slab = Vec::new();
        let mut left = None;
        let mut right = None;

        let mut rows = Vec::with_capacity(template.rows.len());
        for row in &template.rows {
            let mut children = Vec::with_capacity(row.slots.len());
            for slot in &row.slots {
                children.push(inflate_slot(slot, &mut slab, &mut left, &mut right));
            }
            rows.push(ViewNode::Group(children));
        }
        let root = ViewNode::Group(rows);

        // A template without auxiliary slots still gets working auxiliary
        // keys; they just live outside the tree.
        let left = left.unwrap_or_else(|| {
            tracing::debug!(
                "Template '{}' has no left slot; keeping a detached hidden left key",
                template.name
            );
            push_key(&mut slab, hidden_key())
        });
        let right = right.unwrap_or_else(|| {
            tracing::debug!(
                "Template '{}' has no right slot; keeping a detached hidden right key",
                template.name
            );
            push_key(&mut slab, hidden_key())
        });

        let mut ids = Vec::new();
        root.collect_keys(&mut ids);
        let keys: Vec<KeyId> = ids.into_iter().filter(|id| *id != left && *id != right).collect();

        for (position, id) in keys.iter().enumerate() {
            slab[id.0].set_position(position);
        }

        let mut pad = Self {
            name: template.name.clone(),
            slab,
            root,
            keys,
            left,
            right,
        };
        pad.apply_style(style);

        tracing::debug!(
            "Built pad '{}': {} standard key(s) across {} row(s)",
            pad.name,
            pad.len(),
            template.rows.len()
        );

        pad
    }

    /// Returns the name of the template this pad was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the widget tree, one top-level group per template row.
    ///
    /// Auxiliary keys appear in the tree only where the template placed
    /// them.
    pub fn view(&self) -> &ViewNode {
        &self.root
    }

    // ------------------------------------------------------------------
    // Collection
    // ------------------------------------------------------------------

    /// Returns the number of standard keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true when the pad has no standard keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over the standard keys in discovery order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter().map(|id| &self.slab[id.0])
    }

    /// Runs `f` over every standard key in discovery order, mutably.
    pub fn for_each_key(&mut self, mut f: impl FnMut(&mut Key)) {
        for id in &self.keys {
            f(&mut self.slab[id.0]);
        }
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    /// Finds the first standard key whose stored text equals `text`.
    ///
    /// Comparison uses the stored text value even when the key currently
    /// shows its icon surface. Auxiliary keys are never returned.
    pub fn find_key(&self, text: &str) -> Option<&Key> {
        self.keys().find(|key| key.text() == text)
    }

    /// Mutable variant of [`KeyPad::find_key`].
    pub fn find_key_mut(&mut self, text: &str) -> Option<&mut Key> {
        let id = self
            .keys
            .iter()
            .copied()
            .find(|id| self.slab[id.0].text() == text)?;
        Some(&mut self.slab[id.0])
    }

    /// Finds the first standard key whose stored text is the decimal
    /// rendering of `value`.
    pub fn find_key_by_value(&self, value: i64) -> Option<&Key> {
        self.find_key(&value.to_string())
    }

    /// Mutable variant of [`KeyPad::find_key_by_value`].
    pub fn find_key_by_value_mut(&mut self, value: i64) -> Option<&mut Key> {
        self.find_key_mut(&value.to_string())
    }

    /// Returns the standard key at `position` in discovery order.
    pub fn key_at(&self, position: usize) -> Option<&Key> {
        self.keys.get(position).map(|id| &self.slab[id.0])
    }

    /// Mutable variant of [`KeyPad::key_at`].
    pub fn key_at_mut(&mut self, position: usize) -> Option<&mut Key> {
        let id = *self.keys.get(position)?;
        Some(&mut self.slab[id.0])
    }

    // ------------------------------------------------------------------
    // Auxiliary keys
    // ------------------------------------------------------------------

    /// Returns the left auxiliary key.
    pub fn left_key(&self) -> &Key {
        &self.slab[self.left.0]
    }

    /// Returns the left auxiliary key mutably.
    pub fn left_key_mut(&mut self) -> &mut Key {
        &mut self.slab[self.left.0]
    }

    /// Returns the right auxiliary key.
    pub fn right_key(&self) -> &Key {
        &self.slab[self.right.0]
    }

    /// Returns the right auxiliary key mutably.
    pub fn right_key_mut(&mut self) -> &mut Key {
        &mut self.slab[self.right.0]
    }

    /// Gives the left auxiliary key a face and makes it visible.
    pub fn set_left_key(&mut self, value: impl Into<KeyValue>) {
        let key = self.left_key_mut();
        key.set_value(value);
        key.show();
    }

    /// Gives the right auxiliary key a face and makes it visible.
    pub fn set_right_key(&mut self, value: impl Into<KeyValue>) {
        let key = self.right_key_mut();
        key.set_value(value);
        key.show();
    }

    // ------------------------------------------------------------------
    // Bulk styling
    // ------------------------------------------------------------------

    /// Applies every set field of a pad style.
    ///
    /// The `keys_` fields fan out over the standard keys; the auxiliary
    /// fields give the left and right keys a face and reveal them, icon
    /// applied after text.
    pub fn apply_style(&mut self, style: &PadStyle) {
        if let Some(size) = style.keys_text_size {
            self.set_keys_text_size(size);
        }
        if let Some(color) = style.keys_text_color {
            self.set_keys_text_color(color);
        }
        if let Some(size) = style.keys_icon_size {
            self.set_icons_size(size);
        }
        if let Some(tint) = style.keys_icon_tint {
            self.set_icons_tint(tint);
        }
        if let Some(background) = &style.keys_background {
            self.set_keys_background(background.clone());
        }
        if let Some(background) = &style.keys_wrapper_background {
            self.set_keys_wrapper_background(background.clone());
        }
        if let Some(margins) = style.margins {
            self.set_margins(margins);
        }

        if let Some(text) = &style.left_key_text {
            self.set_left_key(text.clone());
        }
        if let Some(icon) = &style.left_key_icon {
            self.set_left_key(icon.clone());
        }
        if let Some(text) = &style.right_key_text {
            self.set_right_key(text.clone());
        }
        if let Some(icon) = &style.right_key_icon {
            self.set_right_key(icon.clone());
        }
    }

    /// Sets the text size of every standard key.
    pub fn set_keys_text_size(&mut self, size: f32) {
        self.for_each_key(|key| key.set_text_size(size));
    }

    /// Sets the text color of every standard key.
    pub fn set_keys_text_color(&mut self, color: Color) {
        self.for_each_key(|key| key.set_text_color(color));
    }

    /// Sets the icon size of every standard key.
    pub fn set_icons_size(&mut self, size: f32) {
        self.for_each_key(|key| key.set_icon_size(size));
    }

    /// Sets the icon tint of every standard key.
    pub fn set_icons_tint(&mut self, tint: Color) {
        self.for_each_key(|key| key.set_icon_tint(tint));
    }

    /// Sets the surface background of every standard key.
    pub fn set_keys_background(&mut self, background: impl Into<Resource>) {
        let background = background.into();
        self.for_each_key(|key| key.set_background(background.clone()));
    }

    /// Sets the wrapper background of every standard key.
    pub fn set_keys_wrapper_background(&mut self, background: impl Into<Resource>) {
        let background = background.into();
        self.for_each_key(|key| key.set_wrapper_background(background.clone()));
    }

    /// Sets the outer margins of every standard key.
    pub fn set_margins(&mut self, margins: impl Into<MarginSpec>) {
        let resolved = margins.into().resolve();
        self.for_each_key(|key| key.set_margins(resolved));
    }

    // ------------------------------------------------------------------
    // Activation
    // ------------------------------------------------------------------

    /// Installs `handler` as the click handler of every standard key.
    ///
    /// The closure is shared, not cloned per key. Auxiliary keys are left
    /// alone; give them handlers through [`KeyPad::left_key_mut`] and
    /// [`KeyPad::right_key_mut`].
    pub fn on_click<F>(&mut self, handler: F)
    where
        F: Fn(&Key) + 'static,
    {
        let handler: ClickHandler = Rc::new(handler);
        for id in &self.keys {
            self.slab[id.0].set_on_click(Rc::clone(&handler));
        }
    }

    /// Installs `handler` as the long-click handler of every standard key.
    pub fn on_long_click<F>(&mut self, handler: F)
    where
        F: Fn(&Key) -> bool + 'static,
    {
        let handler: LongClickHandler = Rc::new(handler);
        for id in &self.keys {
            self.slab[id.0].set_on_long_click(Rc::clone(&handler));
        }
    }

    /// Clicks the standard key at `position`.
    ///
    /// Returns `true` when a handler ran. Out-of-range positions, hidden
    /// keys, and keys without a handler all report `false`.
    pub fn click(&self, position: usize) -> bool {
        match self.key_at(position) {
            Some(key) => key.click(),
            None => {
                tracing::warn!(
                    "Click at position {} is out of range ({} keys)",
                    position,
                    self.keys.len()
                );
                false
            }
        }
    }

    /// Long-clicks the standard key at `position`.
    ///
    /// Returns the handler's result, or `false` when nothing ran.
    pub fn long_click(&self, position: usize) -> bool {
        match self.key_at(position) {
            Some(key) => key.long_click(),
            None => {
                tracing::warn!(
                    "Long-click at position {} is out of range ({} keys)",
                    position,
                    self.keys.len()
                );
                false
            }
        }
    }
}

impl Default for KeyPad {
    /// The stock numeric pad.
    fn default() -> Self {
        Self::numeric()
    }
}

// ============================================================================
// Inflation helpers
// ============================================================================

fn push_key(slab: &mut Vec<Key>, key: Key) -> KeyId {
    let id = KeyId(slab.len());
    slab.push(key);
    id
}

fn hidden_key() -> Key {
    let mut key = Key::new();
    key.hide();
    key
}

/// Turns a template slot into a tree node, allocating keys in the arena.
///
/// The first left/right slot binds the corresponding auxiliary key; further
/// ones degrade to blank standard keys rather than rebinding.
fn inflate_slot(
    slot: &Slot,
    slab: &mut Vec<Key>,
    left: &mut Option<KeyId>,
    right: &mut Option<KeyId>,
) -> ViewNode {
    match slot {
        Slot::Key(style) => ViewNode::Key(push_key(slab, Key::with_style(style))),
        Slot::Group { slots } => {
            let mut children = Vec::with_capacity(slots.len());
            for child in slots {
                children.push(inflate_slot(child, slab, left, right));
            }
            ViewNode::Group(children)
        }
        Slot::Left => {
            if left.is_some() {
                tracing::warn!("Second left slot in template; treating it as a standard key");
                ViewNode::Key(push_key(slab, Key::new()))
            } else {
                let id = push_key(slab, hidden_key());
                *left = Some(id);
                ViewNode::Key(id)
            }
        }
        Slot::Right => {
            if right.is_some() {
                tracing::warn!("Second right slot in template; treating it as a standard key");
                ViewNode::Key(push_key(slab, Key::new()))
            } else {
                let id = push_key(slab, hidden_key());
                *right = Some(id);
                ViewNode::Key(id)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
