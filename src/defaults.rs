// SPDX-License-Identifier: GPL-3.0-only

//! Centralized widget defaults.
//!
//! Values here are the fallbacks applied when a style bundle or template
//! leaves an attribute unset. Everything else in a [`KeyStyle`](crate::style::KeyStyle)
//! or [`PadStyle`](crate::style::PadStyle) defaults to "unset, do not apply".

/// Default text size for key labels, in the host's scalable text units.
pub const DEFAULT_TEXT_SIZE: f32 = 20.0;

/// Name of the built-in background resource applied to both key surfaces.
///
/// The handle is opaque to this crate; the embedding host resolves it to an
/// actual drawable.
pub const KEY_BACKGROUND: &str = "key-background";

/// Name of the built-in numeric template (see `Template::numeric`).
pub const NUMERIC_TEMPLATE: &str = "numeric";
