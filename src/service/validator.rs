//! CPF/CNPJ check-digit validation.
//!
//! Pure modulo-11 arithmetic over normalized digit strings. Every path
//! returns a boolean verdict; malformed input is never an error.

use crate::domain::document::{CNPJ_LENGTH, CPF_LENGTH, DocumentKind};

/// Weights for the first CNPJ check digit, applied to the first 12 digits.
const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second CNPJ check digit, applied to the first 13 digits.
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Strip every character that is not a decimal digit.
#[must_use]
pub fn normalize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Validate a CPF number.
///
/// Accepts punctuation (dots, hyphens); the input must hold exactly 11
/// digits once normalized. Trivially repeated sequences ("00000000000",
/// "11111111111", ...) satisfy the arithmetic but are not real documents
/// and are rejected up front.
#[must_use]
pub fn validate_cpf(input: &str) -> bool {
    let digits = digit_values(input);
    if digits.len() != CPF_LENGTH || all_repeated(&digits) {
        return false;
    }

    cpf_check_digit(&digits[..9], 10) == digits[9]
        && cpf_check_digit(&digits[..10], 11) == digits[10]
}

/// Validate a CNPJ number.
///
/// Accepts punctuation (dots, slash, hyphen); the input must hold exactly
/// 14 digits once normalized. The repeated-digit guard applies as for CPF.
#[must_use]
pub fn validate_cnpj(input: &str) -> bool {
    let digits = digit_values(input);
    if digits.len() != CNPJ_LENGTH || all_repeated(&digits) {
        return false;
    }

    cnpj_check_digit(&digits, &CNPJ_FIRST_WEIGHTS) == digits[12]
        && cnpj_check_digit(&digits, &CNPJ_SECOND_WEIGHTS) == digits[13]
}

/// Validate a document of either kind, dispatching on digit count.
///
/// Partially entered input is tolerated: fewer than 11 digits are
/// right-padded with `'0'` to CPF length, 12 or 13 digits to CNPJ length,
/// and the padded form is what gets validated. More than 14 digits is
/// always invalid.
#[must_use]
pub fn validate_document(input: &str) -> bool {
    match effective_document(input) {
        (digits, Some(DocumentKind::Cpf)) => validate_cpf(&digits),
        (digits, Some(DocumentKind::Cnpj)) => validate_cnpj(&digits),
        (_, None) => false,
    }
}

/// Normalized digits padded toward the length `validate_document` checks,
/// plus the document kind that length selects.
///
/// The padding dispatch is a bounded two-target lookup (11, then 14), so
/// termination does not depend on recursion depth.
#[must_use]
pub fn effective_document(input: &str) -> (String, Option<DocumentKind>) {
    let digits = normalize(input);
    let len = digits.len();

    if len < CPF_LENGTH {
        return (pad_right(&digits, CPF_LENGTH), Some(DocumentKind::Cpf));
    }
    if len > CPF_LENGTH && len < CNPJ_LENGTH {
        return (pad_right(&digits, CNPJ_LENGTH), Some(DocumentKind::Cnpj));
    }

    let kind = DocumentKind::from_length(len);
    (digits, kind)
}

/// Normalize and convert to digit values.
fn digit_values(input: &str) -> Vec<u32> {
    input.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// True when every digit equals the first.
fn all_repeated(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

/// Right-pad a digit string with `'0'` up to `width`.
fn pad_right(digits: &str, width: usize) -> String {
    format!("{digits:0<width$}")
}

/// CPF check digit: descending weights from `first_weight`, sum scaled by
/// 10, reduced mod 11, remainder 10 mapped to 0.
fn cpf_check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (first_weight - i as u32))
        .sum();

    let remainder = (sum * 10) % 11;
    if remainder == 10 { 0 } else { remainder }
}

/// CNPJ check digit: weighted sum reduced mod 11, remainder below 2 mapped
/// to 0, otherwise `11 - remainder`.
fn cnpj_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();

    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}
