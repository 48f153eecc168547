// SPDX-License-Identifier: GPL-3.0-only

//! JSON template parser for keypad definitions.
//!
//! This module loads declarative pad descriptions from JSON: rows of slots,
//! where each slot is a styled key, a nested group of slots, or one of the
//! two auxiliary positions. A parsed [`Template`] is the input to
//! [`KeyPad::new`].
//!
//! # Features
//!
//! - **Row and slot structure**: Define a pad as rows of keys and groups
//! - **Inline styling**: Key slots carry [`KeyStyle`] fields next to the tag
//! - **Auxiliary positions**: `left` and `right` slots place the two
//!   host-driven keys
//! - **Permissive validation**: Cosmetic issues come back as warnings next
//!   to a usable template
//! - **Helpful error messages**: Includes file paths, line numbers, slot
//!   paths, and suggestions
//!
//! # Example Usage
//!
//! ## Parsing a template file
//!
//! ```rust,ignore
//! use padview::template::parse_template_file;
//!
//! match parse_template_file("templates/numeric.json") {
//!     Ok(outcome) => {
//!         let template = outcome.template;
//!         println!("Loaded template: {}", template.name);
//!
//!         if outcome.has_warnings() {
//!             println!("Parsed with {} warnings:", outcome.warning_count());
//!             for warning in &outcome.warnings {
//!                 println!("  {}", warning);
//!             }
//!         }
//!     }
//!     Err(e) => {
//!         eprintln!("Failed to load template: {}", e);
//!     }
//! }
//! ```
//!
//! ## Parsing from a string
//!
//! ```rust,ignore
//! use padview::template::parse_template_str;
//!
//! let json = r#"{
//!     "name": "pin",
//!     "rows": [
//!         { "slots": [ { "type": "key", "text": "1" },
//!                      { "type": "key", "text": "2" },
//!                      { "type": "key", "text": "3" } ] },
//!         { "slots": [ { "type": "left" },
//!                      { "type": "key", "text": "0" },
//!                      { "type": "right" } ] }
//!     ]
//! }"#;
//!
//! let outcome = parse_template_str(json)?;
//! println!("Parsed template: {}", outcome.template.name);
//! ```
//!
//! # Error Handling
//!
//! Parsing is permissive: non-fatal issues ride along as warnings in the
//! [`ParseOutcome`], while structural problems return a [`TemplateError`].
//! The fatal cases are I/O failures, JSON syntax errors, duplicate auxiliary
//! slots, and groups nested past [`MAX_NESTING_DEPTH`].
//!
//! [`KeyPad::new`]: crate::pad::KeyPad::new
//! [`KeyStyle`]: crate::style::KeyStyle

// Sub-modules
pub mod parser;
pub mod types;
pub mod validation;

// Re-export public API - Error handling types
pub use types::{Issue, ParseOutcome, Severity, TemplateError};

// Re-export public API - Parser functions
pub use parser::{parse_template_file, parse_template_str};

// Re-export public API - Data structures
pub use types::{Row, Slot, Template};

// Re-export public API - Validation
pub use validation::{MAX_NESTING_DEPTH, validate_template};

// ============================================================================
// Public API Integration Tests
// ============================================================================
