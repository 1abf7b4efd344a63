//! Text normalization and reusable field rules
//!
//! The regex statics are referenced from `#[validate(regex(path = ...))]`
//! attributes on the input types in [`crate::models`]; the `validate_*`
//! functions back `#[validate(custom(function = ...))]` rules.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::ValidationError;

/// Phone: optional leading `+`, then 7..=15 digits, spaces, hyphens or parentheses.
pub static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{7,15}$").expect("valid phone regex"));

/// RUC (Ecuadorian tax id): exactly 13 digits.
pub static RUC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{13}$").expect("valid ruc regex"));

/// Cédula (national id): exactly 10 digits.
pub static CEDULA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid cedula regex"));

/// Stricter supplier email shape, applied on top of the RFC check.
pub static SUPPLIER_EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

pub const MIN_PHONE_DIGITS: usize = 7;
pub const MAX_PHONE_DIGITS: usize = 15;

/// Title-case a string: a cased letter is upper-cased when it starts the
/// string or follows an uncased character, and lower-cased otherwise.
///
/// Known quirk: acronyms are folded too (`"NGK"` becomes `"Ngk"`) and
/// letters after apostrophes or digits start a new word (`"4x4"` → `"4X4"`).
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_cased = false;
    for c in input.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = c.is_lowercase() || c.is_uppercase();
    }
    out
}

/// Trim and title-case.
pub fn normalize_title(input: &str) -> String {
    title_case(input.trim())
}

/// Trim and lower-case (emails).
pub fn normalize_lower(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Trim and upper-case (codes).
pub fn normalize_upper(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Number of ASCII digits in `input`.
pub fn digit_count(input: &str) -> usize {
    input.chars().filter(|c| c.is_ascii_digit()).count()
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn is_alpha_without(input: &str, separators: &[char]) -> bool {
    let mut letters = input.chars().filter(|c| !separators.contains(c)).peekable();
    letters.peek().is_some() && letters.all(char::is_alphabetic)
}

/// Phone numbers must carry between 7 and 15 digits once separators are removed.
pub fn validate_phone_digits(phone: &str) -> Result<(), ValidationError> {
    let digits = digit_count(phone);
    if (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        Ok(())
    } else {
        Err(rule_error(
            "phone_digits",
            "El número de teléfono debe tener entre 7 y 15 dígitos.",
        ))
    }
}

/// Countries: letters, spaces and hyphens only.
pub fn validate_country(country: &str) -> Result<(), ValidationError> {
    if is_alpha_without(country, &[' ', '-']) {
        Ok(())
    } else {
        Err(rule_error(
            "country_chars",
            "El país solo puede contener letras, espacios y guiones.",
        ))
    }
}

pub fn validate_first_name(name: &str) -> Result<(), ValidationError> {
    if is_alpha_without(name, &[' ']) {
        Ok(())
    } else {
        Err(rule_error(
            "name_chars",
            "El nombre solo puede contener letras y espacios.",
        ))
    }
}

pub fn validate_last_name(name: &str) -> Result<(), ValidationError> {
    if is_alpha_without(name, &[' ']) {
        Ok(())
    } else {
        Err(rule_error(
            "name_chars",
            "El apellido solo puede contener letras y espacios.",
        ))
    }
}
