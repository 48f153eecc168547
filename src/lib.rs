// SPDX-License-Identifier: GPL-3.0-only

//! Padview - A styleable keypad widget toolkit
//!
//! This crate provides the widget model for numeric and custom keypads:
//! a [`KeyPad`] of [`Key`]s built from declarative JSON templates, with
//! per-key and pad-wide styling, lookups, and synchronous click dispatch.
//!
//! # Architecture
//!
//! The crate splits into two layers:
//!
//! 1. **Widget model** (`key`, `pad`, `view`): A [`KeyPad`] owns its keys in
//!    an arena and arranges them in a tree of groups. Each [`Key`] carries a
//!    text surface and an icon surface, exactly one of which is visible.
//!    Hosts render from this model and feed pointer activation back through
//!    [`KeyPad::click`] and [`KeyPad::long_click`].
//!
//! 2. **Declarative layer** (`template`, `style`): JSON templates describe
//!    rows of slots and their styling; pad styles bundle bulk attributes and
//!    the auxiliary key faces. Parsing is permissive, collecting warnings
//!    next to a usable template.
//!
//! Rendering and input capture stay in the host. The model stores resource
//! names and colors but never touches a display.
//!
//! # Modules
//!
//! - `defaults`: Widget-wide default constants
//! - `key`: The key widget with its text and icon surfaces
//! - `pad`: The keypad container built from templates
//! - `resource`: Opaque resource handles and colors
//! - `style`: Declarative per-key and pad-wide style bundles
//! - `template`: JSON template parsing and validation
//! - `view`: The arena-indexed widget tree

pub mod defaults;
pub mod key;
pub mod pad;
pub mod resource;
pub mod style;
pub mod template;
pub mod view;

// Re-export the core API at the crate root
pub use crate::key::{ClickHandler, Content, Key, KeyValue, LongClickHandler};
pub use crate::pad::KeyPad;
pub use crate::resource::{Color, Resource};
pub use crate::style::{KeyStyle, MarginSpec, Margins, PadStyle};
pub use crate::template::{Template, parse_template_file, parse_template_str};
pub use crate::view::{KeyId, ViewNode};

// ============================================================================
// Integration Tests
// ============================================================================
