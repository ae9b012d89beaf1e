//! PhoneNumber value object.

use super::errors::ValidationError;
use super::value_object::ValueObject;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A phone number paired with its international calling code.
///
/// The calling code is stored without the leading `+`. The local number is
/// kept exactly as given; country-specific types such as
/// [`JapanesePhoneNumber`](super::JapanesePhoneNumber) normalize it first.
///
/// # Example
///
/// ```
/// use jp_value_objects::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1", "555-1234").unwrap();
/// assert_eq!(phone.country_code(), "1");
/// assert_eq!(phone.number(), "555-1234");
/// assert_eq!(phone.to_string(), "+1 555-1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPhoneNumber")]
pub struct PhoneNumber {
    country_code: String,
    number: String,
}

impl PhoneNumber {
    /// Create a new PhoneNumber.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingValue` if the country code is blank,
    /// or is nothing but a `+`.
    pub fn new(
        country_code: impl Into<String>,
        number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let country_code = country_code.into();
        let stripped = country_code.trim().trim_start_matches('+');
        if stripped.is_empty() {
            return Err(ValidationError::missing("country code"));
        }

        Ok(Self {
            country_code: stripped.to_string(),
            number: number.into(),
        })
    }

    // Caller guarantees a non-empty code without `+`
    pub(super) fn from_validated(country_code: &str, number: String) -> Self {
        Self {
            country_code: country_code.to_string(),
            number,
        }
    }

    /// International calling code without the `+`.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Local part of the number.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// E.164-style rendering: `+`, the calling code, then the local digits
    /// with any leading trunk `0` dropped.
    pub fn to_international(&self) -> String {
        let digits: String = self.number.chars().filter(|c| c.is_ascii_digit()).collect();
        format!("+{}{}", self.country_code, digits.trim_start_matches('0'))
    }
}

impl ValueObject for PhoneNumber {}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} {}", self.country_code, self.number)
    }
}

// Deserialization goes through `new` so the calling code is re-validated
#[derive(Deserialize)]
struct RawPhoneNumber {
    country_code: String,
    number: String,
}

impl TryFrom<RawPhoneNumber> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(raw: RawPhoneNumber) -> Result<Self, Self::Error> {
        PhoneNumber::new(raw.country_code, raw.number)
    }
}
