//! Field rules for the login form.
//!
//! Everything here is a pure function of the field value (and, for the displayed variants,
//! whether the field has been touched). Nothing is stored; callers recompute on every change.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Whitespace as browsers define it for `trim()` and `\s`. Unlike Unicode `White_Space` this
/// includes U+FEFF and excludes U+0085.
const BROWSER_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

// Pragmatic UI check, deliberately not RFC 5322.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^@{BROWSER_WHITESPACE}]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("valid email regex")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
}

/// The `Display` text is exactly what the form shows under the field.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email is required.")]
    EmailRequired,
    #[error("Enter a valid email address.")]
    EmailInvalid,
    #[error("Password is required.")]
    PasswordRequired,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
}

impl ValidationError {
    pub fn field(self) -> Field {
        match self {
            Self::EmailRequired | Self::EmailInvalid => Field::Email,
            Self::PasswordRequired | Self::PasswordTooShort => Field::Password,
        }
    }
}

fn is_browser_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

/// Strips leading and trailing whitespace the way the browser form does before validating.
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(is_browser_whitespace)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Checks the raw email regardless of whether the user has interacted with it yet.
pub fn check_email(value: &str) -> Result<(), ValidationError> {
    let value = trim_input(value);
    if value.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !is_valid_email(value) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}

/// Checks the raw password. Length is counted in UTF-16 code units, as browsers report it, so
/// characters outside the BMP count twice. The value is never trimmed.
pub fn check_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if value.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Error to display under the email field. Always `None` until the field is touched.
pub fn email_error(value: &str, touched: bool) -> Option<ValidationError> {
    if !touched {
        return None;
    }
    check_email(value).err()
}

/// Error to display under the password field. Always `None` until the field is touched.
pub fn password_error(value: &str, touched: bool) -> Option<ValidationError> {
    if !touched {
        return None;
    }
    check_password(value).err()
}
