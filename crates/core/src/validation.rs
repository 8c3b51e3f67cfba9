//! Request validation helpers.
//!
//! Two kinds of checks run before any write:
//! - required fields must be non-empty / non-zero ([`RequiredFields`]),
//! - field formats (length bounds, e-mail shape) declared on DTOs with
//!   `validator` derive attributes ([`validate_format`]).

use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

/// Collects missing required fields and reports them in one message.
///
/// ```
/// use facility_core::validation::RequiredFields;
/// let err = RequiredFields::new()
///     .text("code", "")
///     .text("name", "")
///     .check()
///     .unwrap_err();
/// assert_eq!(err.to_string(), "code and name are required");
/// ```
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a non-empty string.
    pub fn text(mut self, field: &'static str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.missing.push(field);
        }
        self
    }

    /// Require a positive identifier.
    pub fn id(mut self, field: &'static str, value: DbId) -> Self {
        if value <= 0 {
            self.missing.push(field);
        }
        self
    }

    /// Require a non-zero number.
    pub fn number(mut self, field: &'static str, value: i32) -> Self {
        if value == 0 {
            self.missing.push(field);
        }
        self
    }

    pub fn check(self) -> Result<(), CoreError> {
        match self.missing.as_slice() {
            [] => Ok(()),
            [one] => Err(CoreError::Validation(format!("{one} is required"))),
            [first, second] => Err(CoreError::Validation(format!(
                "{first} and {second} are required"
            ))),
            [init @ .., last] => Err(CoreError::Validation(format!(
                "{}, and {last} are required",
                init.join(", ")
            ))),
        }
    }
}

/// Run the `validator` rules declared on a DTO and convert failures into a
/// [`CoreError::Validation`] naming every offending field.
pub fn validate_format<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(|errors| {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, _)| field.to_string())
            .collect();
        fields.sort();
        CoreError::Validation(format!("invalid value for: {}", fields.join(", ")))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
