// SPDX-License-Identifier: GPL-3.0-only

//! Validation rules for keypad templates.
//!
//! Validation is permissive: cosmetic problems come back as warnings next to
//! a usable template, and only structural problems are fatal. Fatal problems
//! are duplicate auxiliary slots and group nesting past the depth limit.

use crate::style::KeyStyle;
use crate::template::types::{Issue, ParseOutcome, Slot, Template, TemplateError};

/// Maximum allowed nesting depth for groups. A slot sitting directly in a
/// row is at depth 1.
pub const MAX_NESTING_DEPTH: usize = 8;

/// First-seen paths of the auxiliary slots, used to report duplicates.
#[derive(Default)]
struct AuxSlots {
    left: Option<String>,
    right: Option<String>,
}

/// Validates a template and returns it with any warnings.
///
/// # Errors
///
/// Returns [`TemplateError::Validation`] when a template declares more than
/// one left or right slot, and [`TemplateError::DepthExceeded`] when groups
/// nest past [`MAX_NESTING_DEPTH`].
pub fn validate_template(template: Template) -> Result<ParseOutcome<Template>, TemplateError> {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();
    let mut aux = AuxSlots::default();
    let mut key_count = 0usize;

    validate_metadata(&template, &mut warnings);

    if template.rows.is_empty() {
        warnings.push(
            Issue::warning("Template has no rows", "rows")
                .with_suggestion("Add at least one row of slots"),
        );
    }

    for (row_index, row) in template.rows.iter().enumerate() {
        let row_path = format!("rows[{}]", row_index);

        if row.slots.is_empty() {
            warnings.push(
                Issue::warning("Row has no slots", &row_path)
                    .with_suggestion("Remove the empty row or add slots"),
            );
        }

        for (slot_index, slot) in row.slots.iter().enumerate() {
            let slot_path = format!("{}.slots[{}]", row_path, slot_index);
            validate_slot(
                slot,
                &slot_path,
                1,
                &mut aux,
                &mut key_count,
                &mut warnings,
                &mut errors,
            )?;
        }
    }

    if !errors.is_empty() {
        return Err(TemplateError::validation(errors));
    }

    if key_count == 0 && !template.rows.is_empty() {
        warnings.push(Issue::warning("Template has no key slots", "rows"));
    }

    if aux.left.is_none() {
        warnings.push(
            Issue::warning("Template has no left slot", "rows").with_suggestion(
                "Add { \"type\": \"left\" } where the left auxiliary key should sit",
            ),
        );
    }

    if aux.right.is_none() {
        warnings.push(
            Issue::warning("Template has no right slot", "rows").with_suggestion(
                "Add { \"type\": \"right\" } where the right auxiliary key should sit",
            ),
        );
    }

    Ok(ParseOutcome::with_warnings(template, warnings))
}

/// Warns about missing template metadata.
fn validate_metadata(template: &Template, warnings: &mut Vec<Issue>) {
    if template.name.is_empty() {
        warnings.push(
            Issue::warning("Template name is empty", "name")
                .with_suggestion("Provide a descriptive name for the template"),
        );
    }

    if template.description.is_none() {
        warnings.push(Issue::warning("Missing template description", "description"));
    }
}

/// Validates one slot, recursing into groups.
fn validate_slot(
    slot: &Slot,
    slot_path: &str,
    depth: usize,
    aux: &mut AuxSlots,
    key_count: &mut usize,
    warnings: &mut Vec<Issue>,
    errors: &mut Vec<Issue>,
) -> Result<(), TemplateError> {
    match slot {
        Slot::Key(style) => {
            *key_count += 1;
            validate_key_style(style, slot_path, warnings);
        }
        Slot::Group { slots } => {
            if depth > MAX_NESTING_DEPTH {
                return Err(TemplateError::depth_exceeded(
                    format!("Group at {} nests too deeply", slot_path),
                    MAX_NESTING_DEPTH,
                    depth,
                ));
            }

            if slots.is_empty() {
                warnings.push(
                    Issue::warning("Group has no slots", slot_path)
                        .with_suggestion("Remove the empty group or add slots"),
                );
            }

            for (index, child) in slots.iter().enumerate() {
                let child_path = format!("{}.slots[{}]", slot_path, index);
                validate_slot(
                    child,
                    &child_path,
                    depth + 1,
                    aux,
                    key_count,
                    warnings,
                    errors,
                )?;
            }
        }
        Slot::Left => {
            if let Some(first) = &aux.left {
                errors.push(
                    Issue::error(
                        format!("Second left slot (first at {})", first),
                        slot_path,
                    )
                    .with_suggestion("Keep a single left slot per template"),
                );
            } else {
                aux.left = Some(slot_path.to_string());
            }
        }
        Slot::Right => {
            if let Some(first) = &aux.right {
                errors.push(
                    Issue::error(
                        format!("Second right slot (first at {})", first),
                        slot_path,
                    )
                    .with_suggestion("Keep a single right slot per template"),
                );
            } else {
                aux.right = Some(slot_path.to_string());
            }
        }
    }

    Ok(())
}

/// Warns about a key style that cannot render the way it reads.
fn validate_key_style(style: &KeyStyle, slot_path: &str, warnings: &mut Vec<Issue>) {
    if style.text.is_some() && style.icon.is_some() {
        warnings.push(
            Issue::warning(
                "Slot carries both text and an icon; the icon face will be shown",
                slot_path,
            )
            .with_suggestion("Keep one of text or icon per slot"),
        );
    }

    if let Some(size) = style.text_size {
        if size <= 0.0 {
            warnings.push(
                Issue::warning(
                    format!("Text size {} is not positive", size),
                    format!("{}.text_size", slot_path),
                )
                .with_suggestion("Use a positive size in display units"),
            );
        }
    }

    if let Some(size) = style.icon_size {
        if size <= 0.0 {
            warnings.push(
                Issue::warning(
                    format!("Icon size {} is not positive", size),
                    format!("{}.icon_size", slot_path),
                )
                .with_suggestion("Use a positive size in display units"),
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
