//! Errors of the async delivery path. Evaluation itself cannot fail.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Evaluation cancelled: input superseded")]
    Cancelled,
    #[error("Assessment receiver dropped")]
    ChannelClosed,
}
