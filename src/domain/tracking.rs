//! Postal tracking (registration) numbers.
//!
//! A tracking number is `TE` + 8-digit base + check digit + `BR`, 13
//! characters total. The base and check digit are the "object number"
//! the Correios remessa layout carries without prefix or suffix.

use crate::service::checkdigit::{self, CheckDigitError};

/// Object acronym stamped on generated numbers (test-object service code).
pub const OBJECT_PREFIX: &str = "TE";

/// Origin-country suffix.
pub const COUNTRY_SUFFIX: &str = "BR";

/// Largest 8-digit registration base.
pub const MAX_REGISTRATION_BASE: u32 = 99_999_999;

/// A registration base together with its verified check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackingNumber {
    base: u32,
    check_digit: u8,
}

impl TrackingNumber {
    /// Build a tracking number from its 8-digit base.
    ///
    /// # Errors
    ///
    /// Returns [`CheckDigitError`] when the base exceeds 8 digits or is the
    /// rejected all-zero base.
    pub fn new(base: u32) -> Result<Self, CheckDigitError> {
        let check_digit = checkdigit::check_digit_for(base)?;
        Ok(Self { base, check_digit })
    }

    /// Numeric base value.
    #[must_use]
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Verified check digit.
    #[must_use]
    pub const fn check_digit(&self) -> u8 {
        self.check_digit
    }

    /// The zero-padded 8-digit base.
    #[must_use]
    pub fn base_digits(&self) -> String {
        format!("{:08}", self.base)
    }

    /// The 9 digits (base + check digit) the remessa object-number field
    /// carries.
    #[must_use]
    pub fn object_digits(&self) -> String {
        format!("{:08}{}", self.base, self.check_digit)
    }

    /// Compose with an alternate suffix; label composition swaps the
    /// country code without touching base or check digit.
    #[must_use]
    pub fn with_suffix(&self, suffix: &str) -> String {
        format!(
            "{OBJECT_PREFIX}{:08}{}{suffix}",
            self.base, self.check_digit
        )
    }

    /// Parse a canonical `TE#########BR` number, verifying the embedded
    /// check digit.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let (acronym, number) = parse_object_number(input)?;
        (acronym == OBJECT_PREFIX).then_some(number)
    }
}

impl std::fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{OBJECT_PREFIX}{:08}{}{COUNTRY_SUFFIX}",
            self.base, self.check_digit
        )
    }
}

/// Split any `XX#########BR` object number into its service acronym and
/// numeric body, verifying the embedded check digit.
///
/// Remessa batches may carry object numbers under other service codes;
/// the acronym is returned so the detail record can reproduce it.
#[must_use]
pub fn parse_object_number(input: &str) -> Option<(String, TrackingNumber)> {
    let trimmed = input.trim();
    if !trimmed.is_ascii() {
        return None;
    }

    let body = trimmed.strip_suffix(COUNTRY_SUFFIX)?;
    if body.len() != 11 {
        return None;
    }

    let (acronym, digits) = body.split_at(2);
    if !acronym.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let base: u32 = digits[..8].parse().ok()?;
    let embedded: u8 = digits[8..].parse().ok()?;

    let number = TrackingNumber::new(base).ok()?;
    (number.check_digit == embedded).then(|| (acronym.to_string(), number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_shape() {
        let number = TrackingNumber::new(12_345_678).unwrap();
        assert_eq!(number.to_string(), "TE123456785BR");
        assert_eq!(number.to_string().len(), 13);
    }

    #[test]
    fn test_short_base_is_zero_padded() {
        let number = TrackingNumber::new(42).unwrap();
        let text = number.to_string();
        assert!(text.starts_with("TE00000042"));
        assert!(text.ends_with("BR"));
    }

    #[test]
    fn test_object_digits() {
        let number = TrackingNumber::new(12_345_678).unwrap();
        assert_eq!(number.object_digits(), "123456785");
        assert_eq!(number.base_digits(), "12345678");
        assert_eq!(number.check_digit(), 5);
    }

    #[test]
    fn test_suffix_substitution_keeps_body() {
        let number = TrackingNumber::new(12_345_678).unwrap();
        let relabeled = number.with_suffix("AA");
        assert_eq!(relabeled, "TE123456785AA");
        assert_eq!(relabeled[..11], number.to_string()[..11]);
    }

    #[test]
    fn test_parse_round_trip() {
        let number = TrackingNumber::new(98_765_432).unwrap();
        let parsed = TrackingNumber::parse(&number.to_string()).unwrap();
        assert_eq!(parsed, number);
    }

    #[test]
    fn test_parse_rejects_tampered_check_digit() {
        assert!(TrackingNumber::parse("TE123456785BR").is_some());
        assert!(TrackingNumber::parse("TE123456784BR").is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(TrackingNumber::parse("TE12345678BR").is_none());
        assert!(TrackingNumber::parse("TE1234567855BR").is_none());
        assert!(TrackingNumber::parse("123456785").is_none());
        assert!(TrackingNumber::parse("TE123456785XX").is_none());
        assert!(TrackingNumber::parse("").is_none());
    }

    #[test]
    fn test_parse_object_number_keeps_foreign_acronym() {
        let (acronym, number) = parse_object_number("YY123456785BR").unwrap();
        assert_eq!(acronym, "YY");
        assert_eq!(number.base(), 12_345_678);
    }

    #[test]
    fn test_zero_base_is_rejected() {
        assert!(TrackingNumber::new(0).is_err());
        assert!(TrackingNumber::parse("TE000000005BR").is_none());
    }

    #[test]
    fn test_max_base() {
        let number = TrackingNumber::new(MAX_REGISTRATION_BASE).unwrap();
        assert_eq!(number.to_string(), "TE999999995BR");
    }
}
