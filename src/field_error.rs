use crate::constants::{ERR_FIELD_EMAIL, ERR_FIELD_REQUIRED};
use crate::form::{FormControl, ValidationError};

/// Message to show under a field, if any.
///
/// Nothing is shown until the field is both invalid and touched. When several
/// validators fail, the first of required, minimum length, maximum length and
/// email wins, regardless of the order the validators were declared in.
pub fn error_message(control: &FormControl) -> Option<String> {
    if !must_show_error_message(control) {
        return None;
    }
    first_error_message(&control.errors())
}

fn must_show_error_message(control: &FormControl) -> bool {
    control.is_invalid() && control.is_touched()
}

fn first_error_message(errors: &[ValidationError]) -> Option<String> {
    if errors.contains(&ValidationError::Required) {
        return Some(ERR_FIELD_REQUIRED.to_string());
    }
    if let Some(required_length) = errors.iter().find_map(|e| match e {
        ValidationError::MinLength {
            required_length, ..
        } => Some(*required_length),
        _ => None,
    }) {
        return Some(format!(
            "O campo deve ter no mínimo {} caracter(es)",
            required_length
        ));
    }
    if let Some(required_length) = errors.iter().find_map(|e| match e {
        ValidationError::MaxLength {
            required_length, ..
        } => Some(*required_length),
        _ => None,
    }) {
        return Some(format!(
            "O campo deve ter no máximo {} caracter(es)",
            required_length
        ));
    }
    if errors.contains(&ValidationError::Email) {
        return Some(ERR_FIELD_EMAIL.to_string());
    }
    None
}
