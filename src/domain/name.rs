//! Personal name value objects.

use super::errors::ValidationError;
use super::value_object::{SingleValue, ValueObject};
use crate::validation::{Required, Rule};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A free-form full name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FullName(String);

impl FullName {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self(full_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for FullName {}

impl SingleValue for FullName {
    type Value = str;

    fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A Japanese name: family name first, given name optional.
///
/// # Example
///
/// ```
/// use jp_value_objects::domain::JapaneseFullName;
///
/// let name = JapaneseFullName::new("山田", Some("太郎")).unwrap();
/// assert_eq!(name.to_string(), "山田 太郎");
///
/// let family_only = JapaneseFullName::new("山田", None::<String>).unwrap();
/// assert_eq!(family_only.to_string(), "山田");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawJapaneseFullName")]
pub struct JapaneseFullName {
    last_name: String,
    first_name: Option<String>,
}

impl JapaneseFullName {
    /// # Errors
    ///
    /// `ValidationError::MissingValue` if the family name is blank.
    pub fn new(
        last_name: impl Into<String>,
        first_name: Option<impl Into<String>>,
    ) -> Result<Self, ValidationError> {
        let last_name = last_name.into();
        Required.check("last name", &last_name)?;

        Ok(Self {
            last_name,
            first_name: first_name.map(Into::into),
        })
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// `"last first"`, with an empty given name kept as a trailing space.
    pub fn full_name(&self) -> FullName {
        FullName(format!(
            "{} {}",
            self.last_name,
            self.first_name.as_deref().unwrap_or_default()
        ))
    }
}

impl ValueObject for JapaneseFullName {}

impl fmt::Display for JapaneseFullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first_name.as_deref() {
            Some(first) if !first.trim().is_empty() => write!(f, "{} {}", self.last_name, first),
            _ => f.write_str(&self.last_name),
        }
    }
}

#[derive(Deserialize)]
struct RawJapaneseFullName {
    last_name: String,
    #[serde(default)]
    first_name: Option<String>,
}

impl TryFrom<RawJapaneseFullName> for JapaneseFullName {
    type Error = ValidationError;

    fn try_from(raw: RawJapaneseFullName) -> Result<Self, Self::Error> {
        JapaneseFullName::new(raw.last_name, raw.first_name)
    }
}
