//! Reusable validation rules for value object constructors.
//!
//! Each rule checks one string value on behalf of a named field. Value
//! objects call them explicitly from their constructors; [`validate`] runs a
//! list of rules and stops at the first failure.

use crate::domain::{EmailAddress, ValidationError};
use crate::text::text_width;

/// A single validation rule.
pub trait Rule {
    /// Check a present value.
    fn check(&self, field: &'static str, value: &str) -> Result<(), ValidationError>;

    /// Check a value that may be absent. Absent values pass unless the rule
    /// overrides this.
    fn check_optional(
        &self,
        field: &'static str,
        value: Option<&str>,
    ) -> Result<(), ValidationError> {
        match value {
            Some(value) => self.check(field, value),
            None => Ok(()),
        }
    }
}

/// Rejects empty and whitespace-only values, and absent ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Required;

impl Rule for Required {
    fn check(&self, field: &'static str, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::missing(field));
        }
        Ok(())
    }

    fn check_optional(
        &self,
        field: &'static str,
        value: Option<&str>,
    ) -> Result<(), ValidationError> {
        self.check(field, value.unwrap_or_default())
    }
}

/// Length bounds, optionally measured with full-width characters as two
/// columns (see [`text_width`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringLength {
    min: usize,
    max: usize,
    full_width_as_two: bool,
}

impl StringLength {
    /// At most `max` characters.
    pub fn new(max: usize) -> Self {
        Self {
            min: 0,
            max,
            full_width_as_two: false,
        }
    }

    /// Also require at least `min` characters.
    pub fn with_min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }

    /// Count full-width characters as two.
    pub fn full_width_as_two(mut self) -> Self {
        self.full_width_as_two = true;
        self
    }
}

impl Rule for StringLength {
    fn check(&self, field: &'static str, value: &str) -> Result<(), ValidationError> {
        let actual = text_width(value, self.full_width_as_two);
        if actual < self.min || actual > self.max {
            return Err(ValidationError::LengthOutOfRange {
                field,
                min: self.min,
                max: self.max,
                actual,
            });
        }
        Ok(())
    }
}

/// Requires a well-formed email address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailFormat {
    allow_empty: bool,
}

impl EmailFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept the empty string as "no address".
    pub fn allow_empty() -> Self {
        Self { allow_empty: true }
    }
}

impl Rule for EmailFormat {
    fn check(&self, field: &'static str, value: &str) -> Result<(), ValidationError> {
        if self.allow_empty && value.is_empty() {
            return Ok(());
        }
        EmailAddress::new(value).map(|_| ()).map_err(|err| match err {
            ValidationError::MissingValue { .. } => ValidationError::missing(field),
            _ => ValidationError::invalid(field, value),
        })
    }
}

/// Run `rules` against `value` in order.
///
/// # Errors
///
/// The error of the first rule that fails.
pub fn validate(
    field: &'static str,
    value: &str,
    rules: &[&dyn Rule],
) -> Result<(), ValidationError> {
    rules.iter().try_for_each(|rule| rule.check(field, value))
}
