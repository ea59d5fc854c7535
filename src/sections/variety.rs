//! Character variety sections - uppercase, lowercase, digits, special chars.
//!
//! Only ASCII classes count: `É` is not an uppercase letter here and `_` is
//! not a special character.

use secrecy::{ExposeSecret, SecretString};

/// The literal set accepted by [`special_char_section`].
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

fn any_char(password: &SecretString, pred: impl Fn(char) -> bool) -> bool {
    password.expose_secret().chars().any(pred)
}

/// Checks for at least one `A-Z`.
pub fn uppercase_section(password: &SecretString) -> bool {
    any_char(password, |c| c.is_ascii_uppercase())
}

/// Checks for at least one `a-z`.
pub fn lowercase_section(password: &SecretString) -> bool {
    any_char(password, |c| c.is_ascii_lowercase())
}

/// Checks for at least one `0-9`.
pub fn digit_section(password: &SecretString) -> bool {
    any_char(password, |c| c.is_ascii_digit())
}

/// Checks for at least one char from [`SPECIAL_CHARS`].
pub fn special_char_section(password: &SecretString) -> bool {
    any_char(password, |c| SPECIAL_CHARS.contains(c))
}
