// SPDX-License-Identifier: GPL-3.0-only

//! Core data types for the JSON template parser.
//!
//! A template is the declarative description a [`KeyPad`] is built from:
//! rows of slots, where a slot is a styled key, a nested group, or one of
//! the two auxiliary positions. This module also defines the parser's error
//! and outcome types.
//!
//! [`KeyPad`]: crate::pad::KeyPad

use crate::style::KeyStyle;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Error Handling Types
// ============================================================================

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal problem that prevents the template from being used
    Error,
    /// Non-fatal issue worth fixing
    Warning,
}

/// A validation issue discovered while checking a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Severity level (Error or Warning)
    pub severity: Severity,
    /// Human-readable description of the issue
    pub message: String,
    /// Path to the slot that caused the issue (e.g., "rows[3].slots[2]")
    pub slot_path: String,
    /// Optional suggestion for how to fix the issue
    pub suggestion: Option<String>,
}

impl Issue {
    /// Creates a new issue.
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        slot_path: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            slot_path: slot_path.into(),
            suggestion: None,
        }
    }

    /// Creates a warning-level issue.
    pub fn warning(message: impl Into<String>, slot_path: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message, slot_path)
    }

    /// Creates an error-level issue.
    pub fn error(message: impl Into<String>, slot_path: impl Into<String>) -> Self {
        Self::new(Severity::Error, message, slot_path)
    }

    /// Adds a suggestion to the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity_str = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        };

        write!(f, "[{}] {}: {}", severity_str, self.slot_path, self.message)?;

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Error type for template parsing operations.
///
/// Each variant carries context fields so error messages can point at the
/// offending file, line, or slot.
#[derive(Debug)]
pub enum TemplateError {
    /// I/O error occurred while reading a template file
    Io {
        /// The underlying I/O error
        source: std::io::Error,
        /// Optional file path that caused the error
        file_path: Option<String>,
        /// Optional suggestion for fixing the error
        suggestion: Option<String>,
    },

    /// JSON parsing error
    Json {
        /// The underlying JSON parsing error
        source: serde_json::Error,
        /// Optional file path being parsed
        file_path: Option<String>,
        /// Line number where the error occurred (from serde_json)
        line_number: Option<usize>,
        /// Optional suggestion for fixing the error
        suggestion: Option<String>,
    },

    /// Fatal validation issues found in a parsed template
    Validation {
        /// List of error-level issues found
        issues: Vec<Issue>,
        /// Optional file path being validated
        file_path: Option<String>,
    },

    /// Group nesting deeper than the allowed maximum
    DepthExceeded {
        /// Description of where the limit was hit
        message: String,
        /// The depth limit that was exceeded
        max_depth: usize,
        /// The actual depth reached
        actual_depth: usize,
        /// Optional file path being validated
        file_path: Option<String>,
        /// Optional suggestion for reducing depth
        suggestion: Option<String>,
    },
}

impl TemplateError {
    /// Creates an I/O error without file context.
    pub fn io(source: std::io::Error) -> Self {
        Self::Io {
            source,
            file_path: None,
            suggestion: None,
        }
    }

    /// Creates an I/O error with the offending file path.
    pub fn io_with_path(source: std::io::Error, file_path: impl Into<String>) -> Self {
        Self::Io {
            source,
            file_path: Some(file_path.into()),
            suggestion: Some("Check that the file exists and you have read permissions".into()),
        }
    }

    /// Creates a JSON parsing error, picking up the line number from serde.
    pub fn json(source: serde_json::Error) -> Self {
        let line_number = source.line().into();
        Self::Json {
            source,
            file_path: None,
            line_number,
            suggestion: Some("Check the JSON syntax at the indicated line".into()),
        }
    }

    /// Creates a JSON parsing error with the offending file path.
    pub fn json_with_path(source: serde_json::Error, file_path: impl Into<String>) -> Self {
        let line_number = source.line().into();
        Self::Json {
            source,
            file_path: Some(file_path.into()),
            line_number,
            suggestion: Some("Check the JSON syntax at the indicated line".into()),
        }
    }

    /// Creates a validation error from a list of issues.
    pub fn validation(issues: Vec<Issue>) -> Self {
        Self::Validation {
            issues,
            file_path: None,
        }
    }

    /// Creates a depth limit error.
    pub fn depth_exceeded(
        message: impl Into<String>,
        max_depth: usize,
        actual_depth: usize,
    ) -> Self {
        Self::DepthExceeded {
            message: message.into(),
            max_depth,
            actual_depth,
            file_path: None,
            suggestion: Some(format!("Flatten groups to {} levels or fewer", max_depth)),
        }
    }

    /// Attaches a file path to the error when it does not carry one yet.
    pub fn with_file_path(self, path: impl Into<String>) -> Self {
        let path = path.into();
        match self {
            Self::Io {
                source,
                file_path,
                suggestion,
            } => Self::Io {
                source,
                file_path: file_path.or(Some(path)),
                suggestion,
            },
            Self::Json {
                source,
                file_path,
                line_number,
                suggestion,
            } => Self::Json {
                source,
                file_path: file_path.or(Some(path)),
                line_number,
                suggestion,
            },
            Self::Validation { issues, file_path } => Self::Validation {
                issues,
                file_path: file_path.or(Some(path)),
            },
            Self::DepthExceeded {
                message,
                max_depth,
                actual_depth,
                file_path,
                suggestion,
            } => Self::DepthExceeded {
                message,
                max_depth,
                actual_depth,
                file_path: file_path.or(Some(path)),
                suggestion,
            },
        }
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::Io {
                source,
                file_path,
                suggestion,
            } => {
                write!(f, "I/O error")?;
                if let Some(path) = file_path {
                    write!(f, " reading file '{}'", path)?;
                }
                write!(f, ": {}", source)?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
            TemplateError::Json {
                source,
                file_path,
                line_number,
                suggestion,
            } => {
                write!(f, "JSON parsing error")?;
                if let Some(path) = file_path {
                    write!(f, " in file '{}'", path)?;
                }
                if let Some(line) = line_number {
                    write!(f, " at line {}", line)?;
                }
                write!(f, ": {}", source)?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
            TemplateError::Validation { issues, file_path } => {
                write!(f, "Validation failed")?;
                if let Some(path) = file_path {
                    write!(f, " for file '{}'", path)?;
                }
                writeln!(f, " with {} issue(s):", issues.len())?;
                for (i, issue) in issues.iter().enumerate() {
                    write!(f, "  {}. {}", i + 1, issue)?;
                    if i < issues.len() - 1 {
                        writeln!(f)?;
                    }
                }
            }
            TemplateError::DepthExceeded {
                message,
                max_depth,
                actual_depth,
                file_path,
                suggestion,
            } => {
                write!(f, "Maximum group depth exceeded")?;
                if let Some(path) = file_path {
                    write!(f, " in file '{}'", path)?;
                }
                write!(
                    f,
                    ": {} (limit: {}, actual: {})",
                    message, max_depth, actual_depth
                )?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for TemplateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TemplateError::Io { source, .. } => Some(source),
            TemplateError::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TemplateError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err)
    }
}

impl From<serde_json::Error> for TemplateError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err)
    }
}

// ============================================================================
// ParseOutcome Type
// ============================================================================

/// Result of successfully parsing a template, with any non-fatal warnings.
///
/// Parsing is permissive: a usable template comes back even when validation
/// noticed issues, as long as none were fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome<T> {
    /// The successfully parsed template
    pub template: T,
    /// Non-fatal validation warnings
    pub warnings: Vec<Issue>,
}

impl<T> ParseOutcome<T> {
    /// Creates an outcome with no warnings.
    pub fn new(template: T) -> Self {
        Self {
            template,
            warnings: Vec::new(),
        }
    }

    /// Creates an outcome carrying warnings.
    pub fn with_warnings(template: T, warnings: Vec<Issue>) -> Self {
        Self { template, warnings }
    }

    /// Returns true if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Consumes the outcome and returns the template, discarding warnings.
    pub fn into_template(self) -> T {
        self.template
    }
}

// ============================================================================
// Template Data Structures
// ============================================================================

/// One slot in a template row.
///
/// JSON uses a `type` tag: `key` slots carry [`KeyStyle`] fields inline,
/// `group` slots nest further slots, and `left`/`right` mark the auxiliary
/// key positions.
///
/// ```json
/// { "type": "key", "text": "1" }
/// { "type": "group", "slots": [ { "type": "key", "text": "0" } ] }
/// { "type": "left" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Slot {
    /// A standard key with optional styling
    Key(KeyStyle),
    /// A nested container of slots
    Group {
        /// Child slots in display order
        slots: Vec<Slot>,
    },
    /// The left auxiliary key position
    Left,
    /// The right auxiliary key position
    Right,
}

impl Slot {
    /// Creates a key slot showing the given text.
    pub fn text_key(text: impl Into<String>) -> Self {
        Slot::Key(KeyStyle::new().with_text(text))
    }
}

/// A row of slots in a template.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    /// Slots in this row
    #[serde(default)]
    pub slots: Vec<Slot>,
}

impl Row {
    /// Creates a row from its slots.
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }
}

/// A complete keypad template.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Template {
    /// Template name
    #[serde(default)]
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Rows of slots, top to bottom
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Template {
    /// Creates an empty template with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            rows: Vec::new(),
        }
    }

    /// The stock numeric arrangement: three rows of digits, then a bottom
    /// row of left auxiliary, zero, right auxiliary.
    #[must_use]
    pub fn numeric() -> Self {
        Self {
            name: crate::defaults::NUMERIC_TEMPLATE.to_string(),
            description: Some("Standard 3x4 numeric arrangement".to_string()),
            rows: vec![
                Row::new(vec![
                    Slot::text_key("1"),
                    Slot::text_key("2"),
                    Slot::text_key("3"),
                ]),
                Row::new(vec![
                    Slot::text_key("4"),
                    Slot::text_key("5"),
                    Slot::text_key("6"),
                ]),
                Row::new(vec![
                    Slot::text_key("7"),
                    Slot::text_key("8"),
                    Slot::text_key("9"),
                ]),
                Row::new(vec![Slot::Left, Slot::text_key("0"), Slot::Right]),
            ],
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
