//! Input validation for language codes, access keys and text.
//!
//! These checks never fail on their own; the client maps a `false` result
//! to the matching [`Error`](super::Error) variant.

use regex::Regex;
use std::sync::LazyLock;

use super::input::TextInput;

/// Length of a Google Cloud API key.
pub const ACCESS_KEY_LEN: usize = 39;

// unwrap is safe: pattern is a compile-time constant
#[allow(clippy::unwrap_used)]
static LANGUAGE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}(-[a-z]{2})?$").unwrap());

/// Returns `true` if `code` is a two-letter code with an optional
/// two-letter region suffix (`en`, `pt-br`).
///
/// The whole string must match; `"xx1yy"` is rejected even though it
/// contains a valid code.
pub fn is_valid_language_code(code: &str) -> bool {
    LANGUAGE_CODE.is_match(code)
}

/// Returns `true` if `token` has exactly [`ACCESS_KEY_LEN`] characters.
pub fn is_valid_credential(token: &str) -> bool {
    token.chars().count() == ACCESS_KEY_LEN
}

/// Returns `false` only for an empty string or an empty sequence.
///
/// Empty elements inside a non-empty sequence are passed through to the
/// service unchanged.
pub fn is_non_empty_input(text: &TextInput) -> bool {
    match text {
        TextInput::Single(s) => !s.is_empty(),
        TextInput::Many(items) => !items.is_empty(),
    }
}
