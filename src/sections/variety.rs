//! Character variety sections - uppercase, lowercase, digits, symbols.
//!
//! Classes are ASCII only. A symbol is anything outside `[A-Za-z0-9]`,
//! including whitespace and non-ASCII letters.

use super::SectionResult;

pub fn uppercase_section(password: &str) -> SectionResult {
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Add uppercase letters.");
    }
    None
}

pub fn lowercase_section(password: &str) -> SectionResult {
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Include lowercase letters.");
    }
    None
}

pub fn digit_section(password: &str) -> SectionResult {
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Include numbers.");
    }
    None
}

pub fn symbol_section(password: &str) -> SectionResult {
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return Some("Use special characters.");
    }
    None
}
