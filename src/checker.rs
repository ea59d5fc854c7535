//! Checker state - the current input and its latest assessment.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::evaluate_password_strength;
use crate::types::Assessment;

/// Holds the typed password and the assessment derived from it.
///
/// Every input change re-runs the evaluator and replaces the stored
/// assessment wholesale; nothing is merged or cached across inputs.
pub struct PasswordChecker {
    input: SecretString,
    assessment: Assessment,
}

impl PasswordChecker {
    pub fn new() -> Self {
        Self {
            input: SecretString::new(String::new().into()),
            assessment: Assessment::empty(),
        }
    }

    /// Input-change handler.
    pub fn set_input(&mut self, value: impl Into<String>) -> &Assessment {
        let value: String = value.into();
        self.input = SecretString::new(value.into_boxed_str());
        self.assessment = evaluate_password_strength(&self.input);
        &self.assessment
    }

    pub fn clear(&mut self) -> &Assessment {
        self.set_input(String::new())
    }

    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    pub fn is_empty(&self) -> bool {
        self.input.expose_secret().is_empty()
    }
}

impl Default for PasswordChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PasswordChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChecker")
            .field("input", &"[REDACTED]")
            .field("assessment", &self.assessment)
            .finish()
    }
}
