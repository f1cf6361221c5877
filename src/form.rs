use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

// Local part and dotted domain labels; overall and local-part lengths are
// checked separately since the regex engine has no lookahead.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_EMAIL_LOCAL_LENGTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    MinLength {
        required_length: usize,
        actual_length: usize,
    },
    MaxLength {
        required_length: usize,
        actual_length: usize,
    },
    Email,
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

// Length of strings and arrays; other values have no length and pass
// length validators.
fn value_length(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, _)) = email.split_once('@') else {
        return false;
    };
    email.len() <= MAX_EMAIL_LENGTH
        && local.len() <= MAX_EMAIL_LOCAL_LENGTH
        && EMAIL_REGEX.is_match(email)
}

impl Validator {
    pub fn validate(&self, value: &Value) -> Option<ValidationError> {
        match *self {
            Validator::Required => is_empty_value(value).then_some(ValidationError::Required),
            _ if is_empty_value(value) => None,
            Validator::MinLength(required_length) => value_length(value)
                .filter(|len| *len < required_length)
                .map(|actual_length| ValidationError::MinLength {
                    required_length,
                    actual_length,
                }),
            Validator::MaxLength(required_length) => value_length(value)
                .filter(|len| *len > required_length)
                .map(|actual_length| ValidationError::MaxLength {
                    required_length,
                    actual_length,
                }),
            Validator::Email => match value {
                Value::String(s) if is_valid_email(s) => None,
                _ => Some(ValidationError::Email),
            },
        }
    }
}

/// One named form field: its value, validators and interaction flags.
#[derive(Debug, Clone, PartialEq)]
pub struct FormControl {
    name: String,
    value: Value,
    initial: Value,
    validators: Vec<Validator>,
    touched: bool,
    dirty: bool,
}

impl FormControl {
    pub fn new(name: impl Into<String>, initial: Value, validators: Vec<Validator>) -> Self {
        Self {
            name: name.into(),
            value: initial.clone(),
            initial,
            validators,
            touched: false,
            dirty: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The value rendered for a text input: strings as-is, null as empty.
    pub fn text(&self) -> String {
        match &self.value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    pub fn set_value(&mut self, value: Value) {
        self.value = value;
        self.dirty = true;
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    pub fn errors(&self) -> Vec<ValidationError> {
        self.validators
            .iter()
            .filter_map(|v| v.validate(&self.value))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.validators
            .iter()
            .all(|v| v.validate(&self.value).is_none())
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    pub fn reset(&mut self) {
        self.value = self.initial.clone();
        self.touched = false;
        self.dirty = false;
    }
}

/// Ordered set of form controls whose combined value is a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormGroup {
    controls: Vec<FormControl>,
}

impl FormGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, initial: Value, validators: Vec<Validator>) -> Self {
        self.controls.push(FormControl::new(name, initial, validators));
        self
    }

    pub fn controls(&self) -> &[FormControl] {
        &self.controls
    }

    pub fn get(&self, name: &str) -> Option<&FormControl> {
        self.controls.iter().find(|c| c.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FormControl> {
        self.controls.iter_mut().find(|c| c.name == name)
    }

    /// Sets one field's value. Returns `false` when no such field exists.
    pub fn set_value(&mut self, name: &str, value: Value) -> bool {
        match self.get_mut(name) {
            Some(control) => {
                control.set_value(value);
                true
            }
            None => false,
        }
    }

    pub fn mark_touched(&mut self, name: &str) {
        if let Some(control) = self.get_mut(name) {
            control.mark_touched();
        }
    }

    pub fn mark_all_touched(&mut self) {
        self.controls.iter_mut().for_each(FormControl::mark_touched);
    }

    /// Copies the keys of `value` that match a field; unknown keys are ignored.
    pub fn patch_value(&mut self, value: &Value) {
        let Value::Object(fields) = value else {
            return;
        };
        for control in &mut self.controls {
            if let Some(v) = fields.get(&control.name) {
                control.value = v.clone();
            }
        }
    }

    pub fn value(&self) -> Value {
        let fields: Map<String, Value> = self
            .controls
            .iter()
            .map(|c| (c.name.clone(), c.value.clone()))
            .collect();
        Value::Object(fields)
    }

    pub fn is_valid(&self) -> bool {
        self.controls.iter().all(FormControl::is_valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn reset(&mut self) {
        self.controls.iter_mut().for_each(FormControl::reset);
    }
}
