//! Errors raised while validating a transition table.

use thiserror::Error;

/// A transition table that cannot become a state machine.
///
/// Each variant's message is fixed so callers can match on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("No transitions")]
    NoTransitions,

    #[error("No final transition")]
    NoFinalTransition,

    /// `state` names the first key registered twice.
    #[error("Duplicate state")]
    DuplicateState { state: String },
}
