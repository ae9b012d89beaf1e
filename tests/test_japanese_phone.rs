//! Integration tests for Japanese phone number normalization and hyphenation.
//!
//! These tests validate:
//! - The documented formatting scenarios for each numbering-plan category
//! - Error classification for blank and malformed input
//! - Properties that must hold for every valid number

use jp_value_objects::domain::{hyphenate, JapanesePhoneNumber, PhoneNumberKind, ValidationError};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case("090-1234-5678", "09012345678", "090-1234-5678", PhoneNumberKind::Mobile)]
#[case("07011112222", "07011112222", "070-1111-2222", PhoneNumberKind::Mobile)]
#[case("050-1234-5678", "05012345678", "050-1234-5678", PhoneNumberKind::IpPhone)]
#[case("0120-123-456", "0120123456", "0120-123-456", PhoneNumberKind::FreeDial)]
#[case("0800-123-456", "0800123456", "0800-123-456", PhoneNumberKind::FreeDial)]
#[case("0570-123-456", "0570123456", "0570-123-456", PhoneNumberKind::NaviDial)]
#[case("0312345678", "0312345678", "0312-345-678", PhoneNumberKind::FixedLine)]
#[case("06-6123-4567", "0661234567", "0661-234-567", PhoneNumberKind::FixedLine)]
#[case("0466-12-3456", "0466123456", "0466-123-456", PhoneNumberKind::FixedLine)]
#[case("012-3456-7890", "01234567890", "0123-456-7890", PhoneNumberKind::FixedLine)]
fn test_scenarios(
    #[case] input: &str,
    #[case] digits: &str,
    #[case] hyphenated: &str,
    #[case] kind: PhoneNumberKind,
) {
    let phone = JapanesePhoneNumber::new(input).unwrap();
    assert_eq!(phone.raw_number(), digits);
    assert_eq!(phone.hyphenated(), hyphenated);
    assert_eq!(phone.to_string(), hyphenated);
    assert_eq!(phone.kind(), kind);
    assert_eq!(phone.country_code(), "81");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t")]
fn test_blank_input_is_missing_value(#[case] input: &str) {
    assert!(matches!(
        JapanesePhoneNumber::new(input),
        Err(ValidationError::MissingValue { .. })
    ));
}

#[rstest]
#[case("abc-123")]
#[case("123456789")]
#[case("123456789012")]
#[case("090-1234-567a")]
#[case("+81-90-1234-5678")]
#[case("(03)1234-5678")]
#[case("080 1234 5678")]
fn test_malformed_input_is_invalid_format(#[case] input: &str) {
    match JapanesePhoneNumber::new(input) {
        Err(ValidationError::InvalidFormat { input: carried, .. }) => assert_eq!(carried, input),
        other => panic!("Expected InvalidFormat, got: {:?}", other),
    }
}

#[test]
fn test_from_parts_matches_single_input() {
    let parts = JapanesePhoneNumber::from_parts("0120", "123", "456").unwrap();
    let single = JapanesePhoneNumber::new("0120-123-456").unwrap();
    assert_eq!(parts, single);
}

proptest! {
    /// Any 10 or 11 digit string is accepted and normalizes to itself.
    #[test]
    fn prop_valid_digits_are_accepted(digits in "[0-9]{10,11}") {
        let phone = JapanesePhoneNumber::new(&digits).unwrap();
        prop_assert_eq!(phone.raw_number(), digits.as_str());
    }

    /// Stripping the inserted hyphens gives back the normalized digits.
    #[test]
    fn prop_hyphenation_round_trips(digits in "[0-9]{10,11}") {
        let phone = JapanesePhoneNumber::new(&digits).unwrap();
        let hyphenated = phone.hyphenated();
        prop_assert_eq!(hyphenated.replace('-', ""), digits);
        prop_assert_eq!(hyphenated.matches('-').count(), 2);
    }

    /// Hyphenation is deterministic.
    #[test]
    fn prop_hyphenation_is_idempotent(digits in "[0-9]{10,11}") {
        let phone = JapanesePhoneNumber::new(&digits).unwrap();
        prop_assert_eq!(phone.hyphenated(), phone.hyphenated());
        prop_assert_eq!(phone.to_string(), hyphenate(&digits));
    }

    /// A hyphenated number parses back to an equal value.
    #[test]
    fn prop_hyphenated_form_parses_back(digits in "[0-9]{10,11}") {
        let phone = JapanesePhoneNumber::new(&digits).unwrap();
        let reparsed = JapanesePhoneNumber::new(phone.hyphenated()).unwrap();
        prop_assert_eq!(reparsed, phone);
    }

    /// Wrong digit counts are always rejected as InvalidFormat.
    #[test]
    fn prop_wrong_lengths_are_rejected(digits in "[0-9]{1,9}|[0-9]{12,16}") {
        let is_invalid_format = matches!(
            JapanesePhoneNumber::new(&digits),
            Err(ValidationError::InvalidFormat { .. })
        );
        prop_assert!(is_invalid_format);
    }

    /// Hyphens anywhere in the input do not change the result.
    #[test]
    fn prop_hyphens_are_ignored(digits in "[0-9]{10,11}", cut in 1usize..9) {
        let with_hyphen = format!("{}-{}", &digits[..cut], &digits[cut..]);
        let a = JapanesePhoneNumber::new(&digits).unwrap();
        let b = JapanesePhoneNumber::new(&with_hyphen).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Any input with a non-digit letter is rejected.
    #[test]
    fn prop_letters_are_rejected(prefix in "[0-9]{5}", letter in "[a-zA-Z]", suffix in "[0-9]{5}") {
        let input = format!("{}{}{}", prefix, letter, suffix);
        prop_assert!(JapanesePhoneNumber::new(&input).is_err());
    }
}
