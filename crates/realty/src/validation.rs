//! Field-level validation errors shared by listing intake, search parsing, and the EMI
//! calculator.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

/// One offending input field and why it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Malformed or out-of-range input. Always names every field that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid input ({})", summary(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

fn summary(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            fields: vec![FieldError::new(field, message)],
        }
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|error| error.field).collect()
    }

    pub fn mentions(&self, field: &str) -> bool {
        self.fields.iter().any(|error| error.field == field)
    }

    /// `Ok(())` when nothing was collected.
    pub fn check(fields: Vec<FieldError>) -> Result<(), Self> {
        if fields.is_empty() {
            Ok(())
        } else {
            Err(Self { fields })
        }
    }
}

pub fn is_valid_email(raw: &str) -> bool {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(raw))
}

/// Ten-digit Indian mobile number starting with 6-9.
pub fn is_valid_mobile(raw: &str) -> bool {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[6-9][0-9]{9}$").ok())
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(raw))
}

/// Reads loosely-typed JSON objects field by field, collecting every problem instead of
/// stopping at the first one.
pub(crate) struct PayloadReader<'a> {
    object: Option<&'a Map<String, Value>>,
    errors: Vec<FieldError>,
}

impl<'a> PayloadReader<'a> {
    pub(crate) fn new(payload: &'a Value) -> Self {
        let object = payload.as_object();
        let mut errors = Vec::new();
        if object.is_none() {
            errors.push(FieldError::new("body", "expected a JSON object"));
        }
        Self { object, errors }
    }

    fn raw(&self, field: &'static str) -> Option<&'a Value> {
        self.object
            .and_then(|object| object.get(field))
            .filter(|value| !value.is_null())
    }

    fn reject(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Required, non-blank string. Surrounding whitespace is trimmed.
    pub(crate) fn text(&mut self, field: &'static str) -> Option<String> {
        match self.raw(field) {
            None => {
                self.reject(field, "is required");
                None
            }
            Some(Value::String(value)) if value.trim().is_empty() => {
                self.reject(field, "must not be blank");
                None
            }
            Some(Value::String(value)) => Some(value.trim().to_string()),
            Some(_) => {
                self.reject(field, "must be a string");
                None
            }
        }
    }

    /// Optional string; blank values collapse to `None`.
    pub(crate) fn optional_text(&mut self, field: &'static str) -> Option<String> {
        match self.raw(field) {
            None => None,
            Some(Value::String(value)) => {
                let trimmed = value.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Some(_) => {
                self.reject(field, "must be a string");
                None
            }
        }
    }

    /// Required value parsed from a string or a JSON number.
    pub(crate) fn parsed<T: FromStr>(&mut self, field: &'static str, expected: &str) -> Option<T> {
        let parsed = match self.raw(field) {
            None => {
                self.reject(field, "is required");
                return None;
            }
            Some(Value::String(value)) => value.trim().parse::<T>().ok(),
            Some(Value::Number(number)) => number.to_string().parse::<T>().ok(),
            Some(_) => None,
        };

        if parsed.is_none() {
            self.reject(field, format!("must be {expected}"));
        }
        parsed
    }

    /// Optional boolean defaulting to `false`.
    pub(crate) fn flag(&mut self, field: &'static str) -> bool {
        match self.raw(field) {
            None => false,
            Some(Value::Bool(value)) => *value,
            Some(_) => {
                self.reject(field, "must be a boolean");
                false
            }
        }
    }

    pub(crate) fn finish<T>(self, value: Option<T>) -> Result<T, ValidationError> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(ValidationError {
                fields: self.errors,
            }),
        }
    }
}
