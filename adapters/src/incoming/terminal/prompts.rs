use std::fmt::Write as _;
use std::path::PathBuf;

use domain::field::{FieldDescriptor, FieldKind, FieldValue};

/// Prompt text for one field. Select prompts enumerate the options so the
/// user can answer with an index or a name.
#[must_use]
pub fn field_prompt(field: &FieldDescriptor) -> String {
    let mut prompt = String::new();
    match &field.kind {
        FieldKind::File => {
            let _ = write!(prompt, "{} (path): ", field.label);
        }
        FieldKind::Number => {
            let _ = write!(prompt, "{}: ", field.label);
        }
        FieldKind::Text => {
            let _ = write!(prompt, "{}: ", field.label);
        }
        FieldKind::Select { options } => {
            let _ = writeln!(prompt, "{}:", field.label);
            for (index, option) in options.iter().enumerate() {
                let default = if index == 0 { " (default)" } else { "" };
                let _ = writeln!(prompt, "  {}. {option}{default}", index + 1);
            }
            let _ = write!(prompt, "> ");
        }
    }
    prompt
}

/// Parses one line of user input for a field. `Ok(None)` means the user left
/// the field blank; selects resolve blanks to their default option. `Err`
/// carries a message to show before re-prompting.
pub fn parse_field_input(
    field: &FieldDescriptor,
    line: &str,
) -> Result<Option<FieldValue>, String> {
    let line = line.trim();
    match &field.kind {
        FieldKind::File => {
            if line.is_empty() {
                Ok(None)
            } else {
                Ok(Some(FieldValue::File(PathBuf::from(line))))
            }
        }
        FieldKind::Number => {
            if line.is_empty() {
                return Ok(None);
            }
            line.parse::<f64>()
                .map(|n| Some(FieldValue::Number(n)))
                .map_err(|_| format!("'{line}' is not a number, try again"))
        }
        FieldKind::Text => {
            if line.is_empty() {
                Ok(None)
            } else {
                Ok(Some(FieldValue::Text(line.to_string())))
            }
        }
        FieldKind::Select { options } => {
            if line.is_empty() {
                return Ok(field
                    .default_option()
                    .map(|option| FieldValue::Choice(option.to_string())));
            }
            if let Ok(number) = line.parse::<usize>() {
                return number
                    .checked_sub(1)
                    .and_then(|index| options.get(index))
                    .map(|option| Some(FieldValue::Choice(option.clone())))
                    .ok_or_else(|| format!("Pick a number between 1 and {}", options.len()));
            }
            options
                .iter()
                .find(|option| option.eq_ignore_ascii_case(line))
                .map(|option| Some(FieldValue::Choice(option.clone())))
                .ok_or_else(|| format!("'{line}' is not one of: {}", options.join(", ")))
        }
    }
}
