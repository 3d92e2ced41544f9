//! State machine that drives a state to its final transition.

use crate::builder::BuildError;
use crate::core::State;
use crate::engine::transition::{Transition, TransitionError};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Result of applying a single transition.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult<S> {
    /// A non-final transition produced the next state to drive
    Continue(S),

    /// A final transition produced the result of the run
    Finished(S),
}

impl<S> StepResult<S> {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }

    pub fn into_state(self) -> S {
        match self {
            Self::Continue(state) | Self::Finished(state) => state,
        }
    }
}

/// Immutable table of transitions keyed by state name.
///
/// The machine holds no mutable state of its own, so one instance can be
/// run any number of times, from any number of threads.
///
/// # Example
///
/// ```rust
/// use waypoint::{StateMachine, Transition, state_enum};
///
/// state_enum! {
///     enum Order {
///         Placed,
///         Paid,
///         Shipped,
///     }
/// }
///
/// let machine = StateMachine::new([
///     Transition::new(Order::Placed, |_| Order::Paid),
///     Transition::terminal(Order::Paid, |_| Order::Shipped),
/// ])
/// .unwrap();
///
/// assert_eq!(machine.run(Order::Placed).unwrap(), Order::Shipped);
/// assert_eq!(machine.run(Order::Paid).unwrap(), Order::Shipped);
/// assert!(machine.run(Order::Shipped).is_err());
/// ```
pub struct StateMachine<S> {
    transitions: HashMap<&'static str, Transition<S>>,
}

impl<S: State + 'static> StateMachine<S> {
    /// Validate the transitions and build the lookup table.
    ///
    /// Fails if the list is empty, if no transition is final, or if two
    /// transitions share a state name.
    pub fn new<I>(transitions: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = Transition<S>>,
    {
        let transitions: Vec<Transition<S>> = transitions.into_iter().collect();

        if transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        if !transitions.iter().any(Transition::is_final) {
            return Err(BuildError::NoFinalTransition);
        }

        let mut table = HashMap::with_capacity(transitions.len());
        for transition in transitions {
            match table.entry(transition.name()) {
                Entry::Occupied(entry) => {
                    return Err(BuildError::DuplicateState {
                        state: (*entry.key()).to_string(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(transition);
                }
            }
        }

        tracing::debug!(
            transitions = table.len(),
            finals = table.values().filter(|t| t.is_final()).count(),
            "state machine constructed"
        );

        Ok(Self { transitions: table })
    }

    /// Apply the transition registered for `state`.
    ///
    /// No function runs if `state` has no transition.
    pub fn step(&self, state: S) -> Result<StepResult<S>, TransitionError> {
        let Some(transition) = self.transitions.get(state.name()) else {
            tracing::debug!(state = state.name(), "no transition registered");
            return Err(TransitionError::UnhandledState {
                state: state.name().to_string(),
            });
        };

        let next = transition.apply(state);
        tracing::trace!(
            from = transition.name(),
            to = next.name(),
            is_final = transition.is_final(),
            "applied transition"
        );

        if transition.is_final() {
            Ok(StepResult::Finished(next))
        } else {
            Ok(StepResult::Continue(next))
        }
    }

    /// Drive `state` until a final transition is taken and return what it
    /// produced.
    ///
    /// The produced state of a final transition is returned as-is, whether
    /// or not it has a transition of its own. There is no cycle detection:
    /// a table where no final transition is reachable from `state` never
    /// returns.
    pub fn run(&self, state: S) -> Result<S, TransitionError> {
        let mut current = state;
        let mut steps = 0usize;
        loop {
            steps += 1;
            match self.step(current)? {
                StepResult::Continue(next) => current = next,
                StepResult::Finished(result) => {
                    tracing::debug!(state = result.name(), steps, "reached final transition");
                    return Ok(result);
                }
            }
        }
    }

    /// Whether a transition is registered for `state`'s name.
    pub fn handles(&self, state: &S) -> bool {
        self.transitions.contains_key(state.name())
    }

    /// Transition registered for `state`'s name.
    pub fn transition(&self, state: &S) -> Option<&Transition<S>> {
        self.transitions.get(state.name())
    }

    /// Names of all registered states, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.transitions.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    // Never true for a constructed machine.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for StateMachine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("transitions", &self.transitions)
            .finish()
    }
}
