//! Length sections - minimum and extended password length.

use secrecy::{ExposeSecret, SecretString};

pub const MIN_LENGTH: usize = 8;
pub const EXTENDED_LENGTH: usize = 12;

// UTF-16 code units, the unit text fields report: "😀" counts as two.
fn text_len(password: &SecretString) -> usize {
    password.expose_secret().encode_utf16().count()
}

/// Checks that the password has at least [`MIN_LENGTH`] characters.
pub fn min_length_section(password: &SecretString) -> bool {
    text_len(password) >= MIN_LENGTH
}

/// Checks that the password has at least [`EXTENDED_LENGTH`] characters.
pub fn extended_length_section(password: &SecretString) -> bool {
    text_len(password) >= EXTENDED_LENGTH
}
