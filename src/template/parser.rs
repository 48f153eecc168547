// SPDX-License-Identifier: GPL-3.0-only

//! Template parsing for loading JSON pad definitions.
//!
//! Two entry points: [`parse_template_file`] reads from the filesystem and
//! attaches the path to any error it produces, [`parse_template_str`] works
//! on JSON already in memory. Both validate the parsed template and return
//! it together with any non-fatal warnings.

use crate::template::types::{ParseOutcome, Template, TemplateError};
use crate::template::validation::validate_template;
use std::fs;

/// Parses a keypad template from a JSON file.
///
/// I/O problems (missing file, permissions) and JSON problems (syntax,
/// wrong shapes) come back as distinct error variants, both carrying the
/// file path.
///
/// # Arguments
///
/// * `path` - Path to the JSON template file
///
/// # Returns
///
/// Returns a [`ParseOutcome`] with the template and any warnings, or a
/// [`TemplateError`] when reading, parsing, or validation fails.
///
/// # Example
///
/// ```rust,ignore
/// use padview::template::parse_template_file;
///
/// match parse_template_file("templates/numeric.json") {
///     Ok(outcome) => {
///         println!("Loaded template: {}", outcome.template.name);
///         for warning in &outcome.warnings {
///             eprintln!("{}", warning);
///         }
///     }
///     Err(e) => eprintln!("Failed to load template: {}", e),
/// }
/// ```
pub fn parse_template_file(path: &str) -> Result<ParseOutcome<Template>, TemplateError> {
    let json = fs::read_to_string(path).map_err(|e| TemplateError::io_with_path(e, path))?;

    let template: Template =
        serde_json::from_str(&json).map_err(|e| TemplateError::json_with_path(e, path))?;

    let outcome = validate_template(template).map_err(|e| e.with_file_path(path))?;

    tracing::debug!(
        "Loaded template '{}' from {}: {} row(s), {} warning(s)",
        outcome.template.name,
        path,
        outcome.template.rows.len(),
        outcome.warning_count()
    );

    Ok(outcome)
}

/// Parses a keypad template from a JSON string.
///
/// Use this when the JSON is already in memory, or in tests. Validation runs
/// the same way as for files; errors simply carry no file path.
///
/// # Arguments
///
/// * `json` - JSON string containing the template definition
///
/// # Returns
///
/// Returns a [`ParseOutcome`] with the template and any warnings, or a
/// [`TemplateError`] when parsing or validation fails.
pub fn parse_template_str(json: &str) -> Result<ParseOutcome<Template>, TemplateError> {
    let template: Template = serde_json::from_str(json).map_err(TemplateError::json)?;

    validate_template(template)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::types::Slot;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CLEAN_TEMPLATE: &str = r#"{
        "name": "pin",
        "description": "PIN entry pad",
        "rows": [
            { "slots": [ { "type": "key", "text": "1" }, { "type": "key", "text": "2" } ] },
            { "slots": [ { "type": "left" }, { "type": "key", "text": "0" }, { "type": "right" } ] }
        ]
    }"#;

    #[test]
    fn test_parse_valid_string() {
        let outcome = parse_template_str(CLEAN_TEMPLATE).expect("clean template should parse");
        assert_eq!(outcome.template.name, "pin");
        assert_eq!(outcome.template.rows.len(), 2);
        assert!(!outcome.has_warnings(), "warnings: {:?}", outcome.warnings);

        match &outcome.template.rows[0].slots[0] {
            Slot::Key(style) => assert_eq!(style.text.as_deref(), Some("1")),
            other => panic!("Expected key slot, got {:?}", other),
        }
    }

    /// Styled slots carry their fields inline next to the type tag.
    #[test]
    fn test_parse_styled_slots() {
        let json = r##"{
            "name": "styled",
            "description": "test",
            "rows": [
                { "slots": [
                    { "type": "left" },
                    { "type": "key", "text": "1", "text_size": 24.0, "text_color": "#FFFFFF" },
                    { "type": "key", "icon": "fingerprint", "icon_tint": "#80CBC4" },
                    { "type": "right" }
                ] }
            ]
        }"##;

        let outcome = parse_template_str(json).expect("styled template should parse");
        let slots = &outcome.template.rows[0].slots;

        match &slots[1] {
            Slot::Key(style) => {
                assert_eq!(style.text_size, Some(24.0));
                assert_eq!(
                    style.text_color.map(|c| c.to_hex()),
                    Some("#FFFFFF".to_string())
                );
            }
            other => panic!("Expected key slot, got {:?}", other),
        }

        match &slots[2] {
            Slot::Key(style) => {
                assert_eq!(style.icon.as_ref().map(|r| r.name()), Some("fingerprint"));
                assert!(style.text.is_none());
            }
            other => panic!("Expected key slot, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_template_file("/nonexistent/path/to/pad.json");
        let err = result.expect_err("missing file should fail");

        match &err {
            TemplateError::Io {
                file_path,
                suggestion,
                ..
            } => {
                assert_eq!(file_path.as_deref(), Some("/nonexistent/path/to/pad.json"));
                assert!(suggestion.is_some());
            }
            other => panic!("Expected Io error, got {:?}", other),
        }

        let rendered = format!("{}", err);
        assert!(rendered.contains("I/O error"));
        assert!(rendered.contains("/nonexistent/path/to/pad.json"));
    }

    #[test]
    fn test_malformed_json_reports_line() {
        let json = r#"{
            "name": "broken",
            "rows":
        }"#;

        let err = parse_template_str(json).expect_err("malformed JSON should fail");
        match &err {
            TemplateError::Json { line_number, .. } => {
                assert!(line_number.is_some(), "line number should be present");
            }
            other => panic!("Expected Json error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_template_file_valid() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(CLEAN_TEMPLATE.as_bytes())
            .expect("Failed to write temp file");
        let path = temp_file.path().to_str().unwrap();

        let outcome = parse_template_file(path).expect("file should parse");
        assert_eq!(outcome.template.name, "pin");
        assert!(!outcome.has_warnings());
    }

    /// Fatal validation raised from a file carries the file path.
    #[test]
    fn test_file_validation_error_carries_path() {
        let json = r#"{
            "name": "dup",
            "rows": [
                { "slots": [ { "type": "left" }, { "type": "left" } ] }
            ]
        }"#;

        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(json.as_bytes())
            .expect("Failed to write temp file");
        let path = temp_file.path().to_str().unwrap().to_string();

        let err = parse_template_file(&path).expect_err("duplicate left slot should fail");
        match &err {
            TemplateError::Validation { file_path, issues } => {
                assert_eq!(file_path.as_deref(), Some(path.as_str()));
                assert_eq!(issues.len(), 1);
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    /// Warnings ride along without failing the parse.
    #[test]
    fn test_warnings_do_not_fail_parse() {
        let json = r#"{
            "rows": [
                { "slots": [ { "type": "key", "text": "1", "icon": "one" } ] }
            ]
        }"#;

        let outcome = parse_template_str(json).expect("warnings should not be fatal");
        assert!(outcome.has_warnings());

        let messages: Vec<&str> = outcome
            .warnings
            .iter()
            .map(|issue| issue.message.as_str())
            .collect();
        assert!(messages.contains(&"Template name is empty"));
        assert!(
            messages
                .iter()
                .any(|m| m.contains("both text and an icon"))
        );
    }
}
