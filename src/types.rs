//! Assessment types shared by the evaluator, the checker state and the view.

use std::fmt;

/// Upper bound of a [`PasswordScore`].
pub const MAX_SCORE: f64 = 100.0;

/// A single rule result as shown in the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    pub label: &'static str,
    pub met: bool,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = if self.met { '✓' } else { '✗' };
        write!(f, "{} {}", glyph, self.label)
    }
}

/// Percentage of satisfied rules, always within `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct PasswordScore(f64);

impl PasswordScore {
    /// Clamps `value` into `[0, 100]`. NaN collapses to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, MAX_SCORE))
    }

    /// Builds the score for `met` satisfied rules out of `total`.
    pub fn from_ratio(met: usize, total: usize) -> Self {
        if total == 0 {
            return Self(0.0);
        }
        Self::new(met as f64 / total as f64 * MAX_SCORE)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Score rounded to a whole percentage, e.g. for a bar width.
    pub fn percent(&self) -> u8 {
        self.0.round() as u8
    }
}

/// Strength tier mapped from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordStrength {
    NoPassword,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Tier for a non-empty password. Each threshold is the inclusive lower
    /// bound of the next tier.
    pub fn from_score(score: PasswordScore) -> Self {
        let value = score.value();
        if value < 33.0 {
            Self::Weak
        } else if value < 66.0 {
            Self::Moderate
        } else if value < 90.0 {
            Self::Strong
        } else {
            Self::VeryStrong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NoPassword => "No password",
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }

    /// Color name used for both the label and the score bar.
    pub fn color(&self) -> &'static str {
        match self {
            Self::NoPassword => "gray",
            Self::Weak => "red",
            Self::Moderate => "orange",
            Self::Strong => "blue",
            Self::VeryStrong => "green",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of evaluating one password.
///
/// `criteria` is empty only for the empty password; any other input carries
/// one entry per rule, in rule order.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub score: PasswordScore,
    pub strength: PasswordStrength,
    pub criteria: Vec<Criterion>,
}

impl Assessment {
    /// Assessment for an empty input.
    pub fn empty() -> Self {
        Self {
            score: PasswordScore::default(),
            strength: PasswordStrength::NoPassword,
            criteria: Vec::new(),
        }
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    pub fn met_count(&self) -> usize {
        self.criteria.iter().filter(|c| c.met).count()
    }
}

impl Default for Assessment {
    fn default() -> Self {
        Self::empty()
    }
}
