//! Property-based tests for the password evaluator
//!
//! 1. **Determinism**: the same input always yields the same assessment
//! 2. **Bounds**: scores stay within 0..=100 and match the met-rule ratio
//! 3. **Monotonicity**: satisfying more rules never lowers the score
//! 4. **Special set**: only the literal special characters satisfy rule 5

use pwd_checker::{
    Assessment, PasswordStrength, RULES, SPECIAL_CHARS, evaluate_password_strength,
};
use proptest::prelude::*;
use secrecy::SecretString;

fn evaluate(s: &str) -> Assessment {
    evaluate_password_strength(&SecretString::new(s.to_string().into()))
}

fn is_superset(b: &Assessment, a: &Assessment) -> bool {
    a.criteria
        .iter()
        .zip(&b.criteria)
        .all(|(ca, cb)| !ca.met || cb.met)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_evaluate_is_deterministic(pwd in ".*") {
        prop_assert_eq!(evaluate(&pwd), evaluate(&pwd));
    }

    #[test]
    fn prop_score_matches_met_ratio(pwd in ".+") {
        let assessment = evaluate(&pwd);
        prop_assert_eq!(assessment.criteria.len(), RULES.len());

        let expected = assessment.met_count() as f64 / RULES.len() as f64 * 100.0;
        prop_assert!((assessment.score.value() - expected).abs() < 1e-9);
        prop_assert!((0.0..=100.0).contains(&assessment.score.value()));
        prop_assert_ne!(assessment.strength(), PasswordStrength::NoPassword);
    }

    #[test]
    fn prop_appending_never_lowers_score(a in ".+", b in ".*") {
        let base = evaluate(&a);
        let extended = evaluate(&format!("{a}{b}"));

        prop_assert!(is_superset(&extended, &base));
        prop_assert!(extended.score >= base.score);
    }

    #[test]
    fn prop_rule_superset_implies_higher_score(a in ".+", b in ".+") {
        let (ea, eb) = (evaluate(&a), evaluate(&b));
        if is_superset(&eb, &ea) {
            prop_assert!(eb.score >= ea.score);
        }
    }

    #[test]
    fn prop_only_literal_special_chars_count(
        pwd in "[^!@#$%^&*(),.?\":{}|<>]+",
    ) {
        prop_assert!(!evaluate(&pwd).criteria[4].met);
    }

    #[test]
    fn prop_any_literal_special_char_counts(
        prefix in "[a-z]*",
        special in prop::sample::select(SPECIAL_CHARS.chars().collect::<Vec<_>>()),
    ) {
        let pwd = format!("{prefix}{special}");
        prop_assert!(evaluate(&pwd).criteria[4].met);
    }
}
