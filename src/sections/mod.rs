//! Password evaluation sections
//!
//! Each section checks a single rule of the checklist.

mod length;
mod variety;

use secrecy::SecretString;

pub use length::{EXTENDED_LENGTH, MIN_LENGTH, extended_length_section, min_length_section};
pub use variety::{
    SPECIAL_CHARS, digit_section, lowercase_section, special_char_section, uppercase_section,
};

/// Predicate run by a section.
/// - `true` - rule satisfied
/// - `false` - rule not satisfied
pub type SectionFn = fn(&SecretString) -> bool;

/// Checklist rules in display order. Scores divide by the length of this
/// slice, so appending a rule keeps them proportional.
pub const RULES: &[(&str, SectionFn)] = &[
    ("At least 8 characters", min_length_section),
    ("Contains uppercase letter", uppercase_section),
    ("Contains lowercase letter", lowercase_section),
    ("Contains number", digit_section),
    ("Contains special character", special_char_section),
    ("At least 12 characters", extended_length_section),
];
