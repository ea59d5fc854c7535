//! Presentation projections of an [`Assessment`]: the strength summary and
//! the criteria checklist.

use crate::types::{Assessment, PasswordStrength};

/// Data behind the strength label and the score bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthSummary {
    pub label: &'static str,
    pub width_percent: u8,
    pub color: &'static str,
}

impl StrengthSummary {
    pub fn from_assessment(assessment: &Assessment) -> Self {
        Self {
            label: assessment.strength.label(),
            width_percent: assessment.score.percent(),
            color: assessment.strength.color(),
        }
    }
}

/// Summary for the panel, or `None` when there is no password and the panel
/// stays hidden.
pub fn summary(assessment: &Assessment) -> Option<StrengthSummary> {
    if assessment.strength == PasswordStrength::NoPassword {
        return None;
    }
    Some(StrengthSummary::from_assessment(assessment))
}

/// One `"✓ label"` / `"✗ label"` line per criterion, in rule order.
pub fn checklist(assessment: &Assessment) -> Vec<String> {
    assessment.criteria.iter().map(ToString::to_string).collect()
}
