//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::engine::{StateMachine, Transition};

/// Builder for collecting transitions with a fluent API.
///
/// Validation happens once, in [`build`](Self::build).
pub struct StateMachineBuilder<S> {
    transitions: Vec<Transition<S>>,
}

impl<S: State + 'static> StateMachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Add a transition.
    pub fn transition(mut self, transition: Transition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S>>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Build the state machine.
    pub fn build(self) -> Result<StateMachine<S>, BuildError> {
        StateMachine::new(self.transitions)
    }
}

impl<S: State + 'static> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
