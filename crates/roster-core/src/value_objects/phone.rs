//! Phone number normalization

use regex::Regex;
use std::sync::LazyLock;

/// Accepted phone shape: optional leading `+`, then 7 to 15 digits
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d{7,15}$").expect("phone pattern is valid"));

/// Canonicalize a phone number to `+<digits>`.
///
/// Every character other than an ASCII digit or `+` is dropped, then a `+` is
/// prepended if the result does not already start with one. Repeated `+`
/// characters are left as they are.
pub fn normalize_phone(raw: &str) -> String {
    let mut phone: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if !phone.starts_with('+') {
        phone.insert(0, '+');
    }
    phone
}

/// Check a raw phone number against the accepted shape once normalized
pub fn is_valid_phone(raw: &str) -> bool {
    PHONE_PATTERN.is_match(&normalize_phone(raw))
}
