//! EmailAddress value object.

use super::errors::ValidationError;
use super::value_object::{SingleValue, ValueObject};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const FIELD: &str = "email address";

/// A validated email address.
///
/// # Example
///
/// ```
/// use jp_value_objects::domain::EmailAddress;
///
/// let email = EmailAddress::new("taro@example.co.jp").unwrap();
/// assert_eq!(email.local_part(), "taro");
/// assert_eq!(email.domain(), "example.co.jp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    value: String,
    at: usize,
}

impl EmailAddress {
    /// Create a new EmailAddress.
    ///
    /// # Validation Rules
    ///
    /// - Must not be blank
    /// - Must not contain whitespace
    /// - Exactly one `@`, with a non-empty local part before it
    /// - Domain has at least one `.` and no empty labels
    ///
    /// # Errors
    ///
    /// `ValidationError::MissingValue` for blank input,
    /// `ValidationError::InvalidFormat` otherwise.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let value = email.into();
        if value.trim().is_empty() {
            return Err(ValidationError::missing(FIELD));
        }

        match Self::at_position(&value) {
            Some(at) => Ok(Self { value, at }),
            None => Err(ValidationError::invalid(FIELD, value)),
        }
    }

    /// Byte offset of the single `@`, if the address is well formed.
    fn at_position(email: &str) -> Option<usize> {
        if email.chars().any(char::is_whitespace) {
            return None;
        }

        let at = email.find('@')?;
        let (local, domain) = (&email[..at], &email[at + 1..]);
        if local.is_empty() || domain.contains('@') {
            return None;
        }

        if !domain.contains('.') || domain.split('.').any(str::is_empty) {
            return None;
        }

        Some(at)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Part before the `@`.
    pub fn local_part(&self) -> &str {
        &self.value[..self.at]
    }

    /// Part after the `@`.
    pub fn domain(&self) -> &str {
        &self.value[self.at + 1..]
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl ValueObject for EmailAddress {}

impl SingleValue for EmailAddress {
    type Value = str;

    fn value(&self) -> &str {
        &self.value
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
        assert!(EmailAddress::new("user.name+tag@example.co.uk").is_ok());
    }

    #[test]
    fn test_email_blank_is_missing() {
        assert_eq!(
            EmailAddress::new("  "),
            Err(ValidationError::missing(FIELD))
        );
    }

    #[test]
    fn test_email_validates_format() {
        for bad in [
            "invalid",
            "@example.com",
            "user@",
            "user@domain",
            "user@@example.com",
            "user@example..com",
            "user@.example.com",
            "user name@example.com",
        ] {
            assert!(
                matches!(
                    EmailAddress::new(bad),
                    Err(ValidationError::InvalidFormat { .. })
                ),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_email_parts() {
        let email = EmailAddress::new("hanako@mail.example.jp").unwrap();
        assert_eq!(email.local_part(), "hanako");
        assert_eq!(email.domain(), "mail.example.jp");
    }

    #[test]
    fn test_email_serde() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"user@example.com\"");

        let back: EmailAddress = serde_json::from_str("\"user@example.com\"").unwrap();
        assert_eq!(back, email);

        let result: Result<EmailAddress, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
