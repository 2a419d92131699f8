//! Bulgarian phone number validation and normalization.
//!
//! A normalized number has the canonical form `+359` followed by nine
//! digits: a two-digit mobile operator code (87, 88, or 89), one digit in
//! 2-9, and six further digits. Three raw spellings of the country code
//! are accepted: `+359…`, `00359…`, and a single leading `0`.
//!
//! Validation runs as an ordered pipeline over consecutive prefixes of the
//! input. Each rule consumes what it matched and hands the remainder to
//! the next; the first failing rule names the error and later rules are
//! never consulted.

use std::fmt;
use thiserror::Error;

/// Canonical country-code prefix of every normalized number.
pub const COUNTRY_CODE_PREFIX: &str = "+359";

/// Characters after the country code in the canonical form.
const NATIONAL_SIGNIFICANT_LEN: usize = 9;

/// Validation failures, named after the first pipeline rule violated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
    /// The input does not start with `+359`, `00359`, or a single `0`.
    #[error("invalid country code: expected '+359', '00359', or a leading '0'")]
    CountryCode,
    /// The operator code after the country code is not 87, 88, or 89.
    #[error("invalid operator code: expected 87, 88, or 89")]
    OperatorCode,
    /// The subscriber part is not a digit 2-9 followed by six digits.
    #[error("invalid subscriber number: expected a digit 2-9 followed by six digits")]
    InvalidNumber,
}

/// A validated Bulgarian phone number in its single canonical form.
///
/// Only constructible through [`parse`]; holding one is proof the number
/// passed the full validation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedNumber(String);

impl NormalizedNumber {
    /// The canonical `+359XXXXXXXXX` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip the country code: `+359`, `00359`, or `0` not followed by
/// another `0`.
fn strip_country_code(raw: &str) -> Result<&str, NumberError> {
    if let Some(rest) = raw.strip_prefix(COUNTRY_CODE_PREFIX) {
        return Ok(rest);
    }
    if let Some(rest) = raw.strip_prefix("00359") {
        return Ok(rest);
    }
    match raw.strip_prefix('0') {
        Some(rest) if !rest.starts_with('0') => Ok(rest),
        _ => Err(NumberError::CountryCode),
    }
}

/// Strip the two-character operator code: `8` then `7`, `8`, or `9`.
fn strip_operator_code(rest: &str) -> Result<&str, NumberError> {
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some('8'), Some('7'..='9')) => Ok(chars.as_str()),
        _ => Err(NumberError::OperatorCode),
    }
}

/// Check the subscriber part: exactly seven characters, the first in 2-9,
/// the remaining six any digit.
fn check_subscriber(rest: &str) -> Result<(), NumberError> {
    let mut chars = rest.chars();
    match chars.next() {
        Some('2'..='9') => {}
        _ => return Err(NumberError::InvalidNumber),
    }
    let tail = chars.as_str();
    if tail.len() == 6 && tail.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(NumberError::InvalidNumber)
    }
}

/// Validate `raw` and produce its canonical form.
///
/// The canonical form is rebuilt as `+359` plus the last nine characters
/// of the raw input: every accepted spelling carries the significant
/// digits in its tail, so the three variants of the same number normalize
/// identically. The tail is taken positionally from the raw string rather
/// than from what the rules matched.
///
/// # Errors
///
/// The error of the first rule that failed; later rules are not evaluated.
pub fn parse(raw: &str) -> Result<NormalizedNumber, NumberError> {
    let rest = strip_country_code(raw)?;
    let rest = strip_operator_code(rest)?;
    check_subscriber(rest)?;

    // The rules covered the whole input with ASCII matches, so slicing
    // nine bytes off the tail cannot split a character.
    let tail = &raw[raw.len() - NATIONAL_SIGNIFICANT_LEN..];
    Ok(NormalizedNumber(format!("{COUNTRY_CODE_PREFIX}{tail}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_variant() {
        let number = parse("+359878123456").unwrap();
        assert_eq!(number.as_str(), "+359878123456");
    }

    #[test]
    fn test_all_variants_normalize_identically() {
        let canonical = parse("+359878123456").unwrap();
        assert_eq!(parse("0878123456").unwrap(), canonical);
        assert_eq!(parse("00359878123456").unwrap(), canonical);
    }

    #[test]
    fn test_canonical_shape() {
        for raw in ["+359878123456", "0888234567", "00359897999999"] {
            let number = parse(raw).unwrap();
            assert!(number.as_str().starts_with(COUNTRY_CODE_PREFIX));
            assert_eq!(number.as_str().len(), 13);
        }
    }

    #[test]
    fn test_all_operator_codes() {
        assert!(parse("+359877123456").is_ok());
        assert!(parse("+359888123456").is_ok());
        assert!(parse("+359899123456").is_ok());
    }

    #[test]
    fn test_country_code_errors() {
        // Doubled '+' fails the very first rule.
        assert_eq!(parse("++359878123456"), Err(NumberError::CountryCode));
        // '00' that is not '00359' fails the first rule, never the later ones.
        assert_eq!(parse("009878123456"), Err(NumberError::CountryCode));
        assert_eq!(parse(""), Err(NumberError::CountryCode));
        assert_eq!(parse("359878123456"), Err(NumberError::CountryCode));
    }

    #[test]
    fn test_operator_code_errors() {
        // 86 is not a mobile operator code.
        assert_eq!(parse("+359868123456"), Err(NumberError::OperatorCode));
        assert_eq!(parse("0778123456"), Err(NumberError::OperatorCode));
        // A bare country code has nothing left for the operator rule.
        assert_eq!(parse("0"), Err(NumberError::OperatorCode));
        assert_eq!(parse("+359"), Err(NumberError::OperatorCode));
    }

    #[test]
    fn test_subscriber_errors() {
        // First subscriber digit must be 2-9.
        assert_eq!(parse("+359871123456"), Err(NumberError::InvalidNumber));
        // One digit short.
        assert_eq!(parse("+35987812345"), Err(NumberError::InvalidNumber));
        // One digit long.
        assert_eq!(parse("+3598781234567"), Err(NumberError::InvalidNumber));
        // Non-digit in the tail.
        assert_eq!(parse("+35987812345a"), Err(NumberError::InvalidNumber));
    }

    #[test]
    fn test_display_is_canonical_string() {
        let number = parse("0878123456").unwrap();
        assert_eq!(number.to_string(), "+359878123456");
    }
}
