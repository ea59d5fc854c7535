//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

#[cfg(feature = "async")]
use crate::config::CheckerConfig;
#[cfg(feature = "async")]
use crate::error::EvaluationError;

use crate::sections::RULES;
use crate::types::{Assessment, Criterion, PasswordScore, PasswordStrength};

/// Evaluates a password against every checklist rule.
///
/// The empty password short-circuits to [`PasswordStrength::NoPassword`] with
/// no criteria at all; any other input gets one [`Criterion`] per rule, in
/// rule order. Pure and total.
pub fn evaluate_password_strength(password: &SecretString) -> Assessment {
    if password.expose_secret().is_empty() {
        return Assessment::empty();
    }

    let criteria: Vec<Criterion> = RULES
        .iter()
        .map(|&(label, section_fn)| Criterion {
            label,
            met: section_fn(password),
        })
        .collect();

    let met = criteria.iter().filter(|c| c.met).count();
    let score = PasswordScore::from_ratio(met, criteria.len());
    let strength = PasswordStrength::from_score(score);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "password evaluated: {}/{} rules met, score {:.2}, {}",
        met,
        criteria.len(),
        score.value(),
        strength
    );

    Assessment {
        score,
        strength,
        criteria,
    }
}

/// Debounced evaluation that delivers the assessment via channel.
///
/// Waits `config.debounce` before evaluating. Cancelling `token` before the
/// wait is over returns [`EvaluationError::Cancelled`] right away, so a
/// superseded input never publishes a stale assessment.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    config: &CheckerConfig,
    token: CancellationToken,
    tx: mpsc::Sender<Assessment>,
) -> Result<(), EvaluationError> {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation skipped: input superseded");
            return Err(EvaluationError::Cancelled);
        }
        _ = tokio::time::sleep(config.debounce) => {}
    }

    let assessment = evaluate_password_strength(password);

    tx.send(assessment).await.map_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password assessment: {}", _e);
        EvaluationError::ChannelClosed
    })
}
