//! Live password strength checker
//!
//! Evaluates a password against a fixed, ordered checklist of six rules and
//! derives the data a strength widget needs: a 0-100 score, a strength tier
//! and a per-rule checklist. The password never leaves the evaluation step.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation delivered over a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_checker::{evaluate_password_strength, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let assessment = evaluate_password_strength(&password);
//!
//! assert_eq!(assessment.strength(), PasswordStrength::Strong);
//! for criterion in &assessment.criteria {
//!     println!("{criterion}");
//! }
//! ```

mod checker;
mod config;
mod error;
mod evaluator;
mod sections;
mod types;
pub mod view;

// Public API
pub use checker::PasswordChecker;
pub use config::{CheckerConfig, DEFAULT_DEBOUNCE};
pub use error::EvaluationError;
pub use evaluator::evaluate_password_strength;
pub use sections::{EXTENDED_LENGTH, MIN_LENGTH, RULES, SPECIAL_CHARS, SectionFn};
pub use types::{Assessment, Criterion, MAX_SCORE, PasswordScore, PasswordStrength};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;
