//! JapanesePhoneNumber value object and the hyphenation rules for the
//! Japanese numbering plan.

use super::errors::ValidationError;
use super::phone::PhoneNumber;
use super::value_object::{SingleValue, ValueObject};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// ITU calling code for Japan.
pub const JAPAN_COUNTRY_CODE: &str = "81";

const FIELD: &str = "phone number";

static DIGITS_ONLY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10,11}$").expect("Failed to compile phone digits regex"));

const MOBILE_PREFIXES: [&str; 3] = ["070", "080", "090"];
const IP_PHONE_PREFIX: &str = "050";
const FREE_DIAL_PREFIXES: [&str; 2] = ["0120", "0800"];
const NAVI_DIAL_PREFIX: &str = "0570";

/// Area code lengths tried for fixed-line numbers, longest first.
const AREA_CODE_LENGTHS: [usize; 3] = [4, 3, 2];

/// Numbering-plan category, as decided by the hyphenation rule that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneNumberKind {
    /// 070 / 080 / 090.
    Mobile,
    /// 050, 11 digits.
    IpPhone,
    /// 0120 / 0800, 10 digits.
    FreeDial,
    /// 0570, 10 digits.
    NaviDial,
    /// Geographic number split by area-code probing.
    FixedLine,
    /// Split by total length only, or not split at all.
    Unclassified,
}

impl fmt::Display for PhoneNumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Mobile => "mobile",
            Self::IpPhone => "ip phone",
            Self::FreeDial => "free dial",
            Self::NaviDial => "navi dial",
            Self::FixedLine => "fixed line",
            Self::Unclassified => "unclassified",
        };
        f.write_str(label)
    }
}

/// Result of splitting a digit string into display groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Split<'a> {
    kind: PhoneNumberKind,
    groups: Option<[&'a str; 3]>,
}

impl<'a> Split<'a> {
    fn at(kind: PhoneNumberKind, digits: &'a str, first: usize, second: usize) -> Self {
        Self {
            kind,
            groups: Some([
                &digits[..first],
                &digits[first..second],
                &digits[second..],
            ]),
        }
    }
}

/// Check whether a digit string starts with a mobile prefix.
pub fn is_mobile_number(digits: &str) -> bool {
    MOBILE_PREFIXES.iter().any(|prefix| digits.starts_with(prefix))
}

// Callers must pass ASCII digits only; every index below is a byte offset.
fn split(digits: &str) -> Split<'_> {
    let len = digits.len();

    if is_mobile_number(digits) && len > 7 {
        return Split::at(PhoneNumberKind::Mobile, digits, 3, 7);
    }

    if digits.starts_with(IP_PHONE_PREFIX) && len == 11 {
        return Split::at(PhoneNumberKind::IpPhone, digits, 3, 7);
    }

    if len == 10 {
        if FREE_DIAL_PREFIXES.iter().any(|p| digits.starts_with(p)) {
            return Split::at(PhoneNumberKind::FreeDial, digits, 4, 7);
        }
        if digits.starts_with(NAVI_DIAL_PREFIX) {
            return Split::at(PhoneNumberKind::NaviDial, digits, 4, 7);
        }
    }

    for area_len in AREA_CODE_LENGTHS {
        if len <= area_len {
            continue;
        }
        let remaining = len - area_len;
        if remaining == 6 || remaining == 7 {
            return Split::at(
                PhoneNumberKind::FixedLine,
                digits,
                area_len,
                area_len + remaining / 2,
            );
        }
    }

    match len {
        10 => Split::at(PhoneNumberKind::Unclassified, digits, 3, 6),
        11 => Split::at(PhoneNumberKind::Unclassified, digits, 3, 7),
        _ => Split {
            kind: PhoneNumberKind::Unclassified,
            groups: None,
        },
    }
}

/// Insert hyphens into a Japanese phone number made of ASCII digits.
///
/// Rules are tried in order and the first match wins:
///
/// 1. mobile (`070`, `080`, `090`): `3-4-rest`
/// 2. IP phone (`050`, 11 digits): `3-4-4`
/// 3. free dial / navi dial (`0120`, `0800`, `0570`, 10 digits): `4-3-3`
/// 4. fixed line: the first area code length of 4, 3, 2 that leaves 6 or 7
///    subscriber digits; those are split in half (shorter half first)
/// 5. 10 digits: `3-3-4`, 11 digits: `3-4-4`
///
/// Anything else is returned unchanged. The area code is not checked against
/// the real numbering plan, so genuine 2-digit area codes such as Tokyo's
/// `03` come out as a 4-digit group.
///
/// Input containing anything other than ASCII digits is returned unchanged.
pub fn hyphenate(digits: &str) -> String {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }
    match split(digits).groups {
        Some([area, mid, last]) => format!("{}-{}-{}", area, mid, last),
        None => digits.to_string(),
    }
}

/// A validated Japanese phone number.
///
/// Hyphens and surrounding whitespace are removed on construction; what
/// remains must be 10 or 11 ASCII digits. Display renders the canonical
/// hyphenated form.
///
/// # Example
///
/// ```
/// use jp_value_objects::domain::{JapanesePhoneNumber, PhoneNumberKind};
///
/// let phone = JapanesePhoneNumber::new(" 090-1234-5678 ").unwrap();
/// assert_eq!(phone.raw_number(), "09012345678");
/// assert_eq!(phone.hyphenated(), "090-1234-5678");
/// assert_eq!(phone.kind(), PhoneNumberKind::Mobile);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JapanesePhoneNumber {
    raw_number: String,
}

impl JapanesePhoneNumber {
    /// Create a new JapanesePhoneNumber from user input.
    ///
    /// # Errors
    ///
    /// - `ValidationError::MissingValue` if the input is empty or only
    ///   whitespace. This is checked before the format.
    /// - `ValidationError::InvalidFormat` carrying the original input if,
    ///   after removing hyphens and trimming, it is not 10 or 11 ASCII digits.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let phone = phone.as_ref();
        if phone.trim().is_empty() {
            return Err(ValidationError::missing(FIELD));
        }

        let normalized = Self::normalize(phone);
        if !DIGITS_ONLY_REGEX.is_match(&normalized) {
            return Err(ValidationError::invalid(FIELD, phone));
        }

        Ok(Self {
            raw_number: normalized,
        })
    }

    /// Create a number from three separately entered groups, such as the
    /// three input boxes of a form.
    ///
    /// # Errors
    ///
    /// Same as [`JapanesePhoneNumber::new`] applied to the concatenation.
    pub fn from_parts(
        first: impl AsRef<str>,
        second: impl AsRef<str>,
        third: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        Self::new(format!(
            "{}{}{}",
            first.as_ref(),
            second.as_ref(),
            third.as_ref()
        ))
    }

    fn normalize(phone: &str) -> String {
        phone.replace('-', "").trim().to_string()
    }

    /// The normalized digit-only number.
    pub fn raw_number(&self) -> &str {
        &self.raw_number
    }

    /// Always `"81"`.
    pub fn country_code(&self) -> &'static str {
        JAPAN_COUNTRY_CODE
    }

    /// Canonical hyphenated representation.
    pub fn hyphenated(&self) -> String {
        hyphenate(&self.raw_number)
    }

    /// The three display groups, or `None` when the number is not split.
    pub fn segments(&self) -> Option<(&str, &str, &str)> {
        split(&self.raw_number)
            .groups
            .map(|[area, mid, last]| (area, mid, last))
    }

    /// Numbering-plan category of this number.
    pub fn kind(&self) -> PhoneNumberKind {
        split(&self.raw_number).kind
    }

    /// Whether the number starts with a mobile prefix.
    pub fn is_mobile(&self) -> bool {
        is_mobile_number(&self.raw_number)
    }

    /// Whether the number is a 050 IP phone number.
    pub fn is_ip_phone(&self) -> bool {
        self.raw_number.starts_with(IP_PHONE_PREFIX)
    }

    /// Generic phone number view: calling code `81` and the normalized digits.
    pub fn to_phone_number(&self) -> PhoneNumber {
        PhoneNumber::from(self.clone())
    }

    /// Convert into the normalized digit String.
    pub fn into_inner(self) -> String {
        self.raw_number
    }
}

impl ValueObject for JapanesePhoneNumber {}

impl SingleValue for JapanesePhoneNumber {
    type Value = str;

    fn value(&self) -> &str {
        &self.raw_number
    }
}

impl From<JapanesePhoneNumber> for PhoneNumber {
    fn from(phone: JapanesePhoneNumber) -> Self {
        PhoneNumber::from_validated(JAPAN_COUNTRY_CODE, phone.raw_number)
    }
}

impl FromStr for JapanesePhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for JapanesePhoneNumber {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for JapanesePhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// Serde support - serialize as the normalized digits
impl Serialize for JapanesePhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw_number.serialize(serializer)
    }
}

// Serde support - accepts hyphenated or plain input, validated like `new`
impl<'de> Deserialize<'de> for JapanesePhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        JapanesePhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for JapanesePhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hyphenated())
    }
}
