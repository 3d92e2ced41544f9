//! State transition history tracking.
//!
//! The engine itself keeps nothing between steps. When a caller wants to know
//! which path a run took, it plugs a [`HistoryRecorder`] into the observer
//! seam of each [`Transition`] and reads back an immutable [`StateHistory`].

use super::state::State;
use crate::engine::Transition;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Record of a single applied transition.
///
/// `from` is the name of the state whose transition was taken, `to` is the
/// full value the transition function produced.
///
/// # Example
///
/// ```rust
/// use waypoint::core::StateTransition;
/// use waypoint::state_enum;
/// use chrono::Utc;
///
/// state_enum! {
///     enum Job {
///         Queued,
///         Running,
///     }
/// }
///
/// let step = StateTransition {
///     from: "Queued".to_string(),
///     to: Job::Running,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(step.from, "Queued");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateTransition<S> {
    /// Name of the state the transition was registered for
    pub from: String,
    /// State returned by the transition function
    pub to: S,
    /// When the transition function returned
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition appended.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{StateHistory, StateTransition};
/// use waypoint::state_enum;
/// use chrono::Utc;
///
/// state_enum! {
///     enum Work {
///         Start,
///         Middle,
///         End,
///     }
/// }
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: "Start".to_string(),
///         to: Work::Middle,
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: "Middle".to_string(),
///         to: Work::End,
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.get_path(), vec!["Start", "Middle", "End"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<S> {
    transitions: Vec<StateTransition<S>>,
}

impl<S> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self
    where
        S: Clone,
    {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Get all transitions in the order they were applied.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl<S: State> StateHistory<S> {
    /// Names of the states traversed.
    ///
    /// The first entry is the state the first recorded transition was taken
    /// from, followed by the name of every produced state.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from.as_str());
        }
        path.extend(self.transitions.iter().map(|t| t.to.name()));
        path
    }
}

/// Shared, thread-safe sink for transition records.
///
/// Cloning a recorder yields a handle to the same history.
///
/// # Example
///
/// ```rust
/// use waypoint::core::HistoryRecorder;
/// use waypoint::{StateMachine, Transition, state_enum};
///
/// state_enum! {
///     enum Door {
///         Closed,
///         Open,
///         Locked,
///     }
/// }
///
/// let recorder = HistoryRecorder::<Door>::new();
/// let machine = StateMachine::new([
///     Transition::new(Door::Closed, |_| Door::Open).on_transition(recorder.observer()),
///     Transition::terminal(Door::Open, |_| Door::Locked).on_transition(recorder.observer()),
/// ])
/// .unwrap();
///
/// machine.run(Door::Closed).unwrap();
/// assert_eq!(recorder.snapshot().get_path(), vec!["Closed", "Open", "Locked"]);
/// ```
#[derive(Debug)]
pub struct HistoryRecorder<S> {
    history: Arc<Mutex<StateHistory<S>>>,
}

impl<S> Clone for HistoryRecorder<S> {
    fn clone(&self) -> Self {
        Self {
            history: Arc::clone(&self.history),
        }
    }
}

impl<S> Default for HistoryRecorder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> HistoryRecorder<S> {
    pub fn new() -> Self {
        Self {
            history: Arc::new(Mutex::new(StateHistory::new())),
        }
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        *self.history.lock() = StateHistory::new();
    }
}

impl<S: State + Clone + 'static> HistoryRecorder<S> {
    /// Observer that appends one record per applied transition.
    pub fn observer(&self) -> impl Fn(&Transition<S>, &S) + Send + Sync + 'static {
        let history = Arc::clone(&self.history);
        move |transition: &Transition<S>, result: &S| {
            history.lock().push(StateTransition {
                from: transition.name().to_string(),
                to: result.clone(),
                timestamp: Utc::now(),
            });
        }
    }

    /// Copy of the history recorded so far.
    pub fn snapshot(&self) -> StateHistory<S> {
        self.history.lock().clone()
    }
}
