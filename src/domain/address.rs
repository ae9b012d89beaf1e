//! Address value object with Japanese postal code.

use super::errors::ValidationError;
use super::value_object::ValueObject;
use crate::validation::{Required, Rule};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static ZIP_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{3}-[0-9]{4}|[0-9]{7})$").expect("Failed to compile zip code regex")
});

/// A postal address in Japan.
///
/// The zip code is accepted as `123-4567` or `1234567` and kept as entered.
/// Prefecture and city are required; street and building are optional.
///
/// # Example
///
/// ```
/// use jp_value_objects::domain::Address;
///
/// let address = Address::new("100-0001", "東京都", "千代田区", "千代田1-1", None).unwrap();
/// assert_eq!(address.zip_code_digits(), "1000001");
/// assert_eq!(address.to_string(), "〒100-0001 東京都千代田区千代田1-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAddress")]
pub struct Address {
    zip_code: String,
    prefecture: String,
    city: String,
    street: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    building: Option<String>,
}

impl Address {
    /// Create a new Address.
    ///
    /// # Errors
    ///
    /// - `ValidationError::MissingValue` for a blank zip code, prefecture or
    ///   city.
    /// - `ValidationError::InvalidFormat` for a zip code that is neither
    ///   `NNN-NNNN` nor `NNNNNNN`.
    pub fn new(
        zip_code: impl Into<String>,
        prefecture: impl Into<String>,
        city: impl Into<String>,
        street: impl Into<String>,
        building: Option<String>,
    ) -> Result<Self, ValidationError> {
        let zip_code = zip_code.into();
        let prefecture = prefecture.into();
        let city = city.into();

        Required.check("zip code", &zip_code)?;
        if !ZIP_CODE_REGEX.is_match(&zip_code) {
            return Err(ValidationError::invalid("zip code", zip_code));
        }
        Required.check("prefecture", &prefecture)?;
        Required.check("city", &city)?;

        Ok(Self {
            zip_code,
            prefecture,
            city,
            street: street.into(),
            building: building.filter(|b| !b.trim().is_empty()),
        })
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    /// The 7 zip code digits without the hyphen.
    pub fn zip_code_digits(&self) -> String {
        self.zip_code.replace('-', "")
    }

    pub fn prefecture(&self) -> &str {
        &self.prefecture
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn building(&self) -> Option<&str> {
        self.building.as_deref()
    }
}

impl ValueObject for Address {}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.zip_code_digits();
        write!(
            f,
            "〒{}-{} {}{}{}",
            &digits[..3],
            &digits[3..],
            self.prefecture,
            self.city,
            self.street
        )?;
        if let Some(building) = &self.building {
            write!(f, " {}", building)?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawAddress {
    zip_code: String,
    prefecture: String,
    city: String,
    #[serde(default)]
    street: String,
    #[serde(default)]
    building: Option<String>,
}

impl TryFrom<RawAddress> for Address {
    type Error = ValidationError;

    fn try_from(raw: RawAddress) -> Result<Self, Self::Error> {
        Address::new(
            raw.zip_code,
            raw.prefecture,
            raw.city,
            raw.street,
            raw.building,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokyo(zip: &str) -> Result<Address, ValidationError> {
        Address::new(zip, "東京都", "千代田区", "丸の内1-1", None)
    }

    #[test]
    fn test_address_accepts_both_zip_forms() {
        assert_eq!(tokyo("100-0005").unwrap().zip_code(), "100-0005");
        assert_eq!(tokyo("1000005").unwrap().zip_code_digits(), "1000005");
    }

    #[test]
    fn test_address_rejects_bad_zip() {
        assert_eq!(tokyo(""), Err(ValidationError::missing("zip code")));
        for bad in ["100-00051", "10-00005", "100_0005", "１００-０００５", "100-000"] {
            assert!(
                matches!(tokyo(bad), Err(ValidationError::InvalidFormat { .. })),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_address_requires_prefecture_and_city() {
        assert_eq!(
            Address::new("1000005", " ", "千代田区", "", None),
            Err(ValidationError::missing("prefecture"))
        );
        assert_eq!(
            Address::new("1000005", "東京都", "", "", None),
            Err(ValidationError::missing("city"))
        );
    }

    #[test]
    fn test_address_street_may_be_empty() {
        let address = Address::new("1000005", "東京都", "千代田区", "", None).unwrap();
        assert_eq!(address.street(), "");
    }

    #[test]
    fn test_address_display() {
        let address = Address::new(
            "1000005",
            "東京都",
            "千代田区",
            "丸の内1-1",
            Some("丸の内ビル 10F".to_string()),
        )
        .unwrap();
        assert_eq!(
            address.to_string(),
            "〒100-0005 東京都千代田区丸の内1-1 丸の内ビル 10F"
        );
    }

    #[test]
    fn test_address_blank_building_is_none() {
        let address =
            Address::new("1000005", "東京都", "千代田区", "", Some("  ".to_string())).unwrap();
        assert_eq!(address.building(), None);
    }

    #[test]
    fn test_address_serde() {
        let address = tokyo("100-0005").unwrap();
        let json = serde_json::to_string(&address).unwrap();
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);

        let bad = r#"{"zip_code":"abc","prefecture":"東京都","city":"千代田区"}"#;
        assert!(serde_json::from_str::<Address>(bad).is_err());
    }
}
