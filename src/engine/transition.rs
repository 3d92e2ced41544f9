//! Transition definitions: one state, one function, one terminal flag.

use crate::core::State;
use std::fmt;
use std::sync::Arc;

/// Errors raised while driving a state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("Unhandled state '{state}'")]
    UnhandledState { state: String },
}

/// Function computing the next state.
///
/// Purity is not enforced; the function may capture and mutate whatever
/// it likes behind its own synchronisation.
pub type TransitionFn<S> = Arc<dyn Fn(S) -> S + Send + Sync>;

/// Callback invoked with the transition and the state it produced.
pub type TransitionObserver<S> = Arc<dyn Fn(&Transition<S>, &S) + Send + Sync>;

/// When in `state`, compute the next state via `function`.
///
/// If the transition is final, the produced state is the result of the run.
/// After the function returns, the observer is notified.
///
/// # Example
///
/// ```rust
/// use waypoint::{Transition, state_enum};
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// let transition = Transition::terminal(Light::Red, |_| Light::Green);
///
/// assert!(transition.is_final());
/// assert_eq!(transition.apply(Light::Red), Light::Green);
/// ```
pub struct Transition<S> {
    state: S,
    function: TransitionFn<S>,
    is_final: bool,
    on_transition: TransitionObserver<S>,
}

impl<S: State + 'static> Transition<S> {
    /// Create a non-final transition with a no-op observer.
    pub fn new<F>(state: S, function: F) -> Self
    where
        F: Fn(S) -> S + Send + Sync + 'static,
    {
        Self {
            state,
            function: Arc::new(function),
            is_final: false,
            on_transition: Arc::new(|_: &Transition<S>, _: &S| {}),
        }
    }

    /// Create a final transition with a no-op observer.
    pub fn terminal<F>(state: S, function: F) -> Self
    where
        F: Fn(S) -> S + Send + Sync + 'static,
    {
        Self::new(state, function).with_final(true)
    }

    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    /// Replace the observer.
    ///
    /// The observer runs after the function returns and only then. It is
    /// meant for logging, metrics or recording, not for control flow.
    pub fn on_transition<F>(mut self, observer: F) -> Self
    where
        F: Fn(&Transition<S>, &S) + Send + Sync + 'static,
    {
        self.on_transition = Arc::new(observer);
        self
    }

    /// The state value this transition was registered with.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Identity key of the registered state.
    pub fn name(&self) -> &'static str {
        self.state.name()
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Run the function on `state`, notify the observer, return the result.
    ///
    /// A panic in the function unwinds through here unchanged and the
    /// observer is not called.
    pub fn apply(&self, state: S) -> S {
        let result = (self.function)(state);
        (self.on_transition)(self, &result);
        result
    }
}

impl<S: Clone> Clone for Transition<S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            function: Arc::clone(&self.function),
            is_final: self.is_final,
            on_transition: Arc::clone(&self.on_transition),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Transition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("state", &self.state)
            .field("is_final", &self.is_final)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Clone, PartialEq, Debug)]
    enum TestState {
        Start,
        Middle(u8),
        End,
    }

    impl State for TestState {
        fn name(&self) -> &'static str {
            match self {
                Self::Start => "Start",
                Self::Middle(_) => "Middle",
                Self::End => "End",
            }
        }
    }

    #[test]
    fn new_transition_is_not_final() {
        let transition = Transition::new(TestState::Start, |_| TestState::End);

        assert!(!transition.is_final());
        assert_eq!(transition.name(), "Start");
        assert_eq!(transition.state(), &TestState::Start);
    }

    #[test]
    fn terminal_and_with_final_set_flag() {
        assert!(Transition::terminal(TestState::Start, |_| TestState::End).is_final());
        assert!(Transition::new(TestState::Start, |_| TestState::End)
            .with_final(true)
            .is_final());
        assert!(!Transition::terminal(TestState::Start, |_| TestState::End)
            .with_final(false)
            .is_final());
    }

    #[test]
    fn apply_passes_input_to_function() {
        let transition = Transition::new(TestState::Middle(0), |s| match s {
            TestState::Middle(n) => TestState::Middle(n + 1),
            other => other,
        });

        assert_eq!(transition.apply(TestState::Middle(4)), TestState::Middle(5));
    }

    #[test]
    fn apply_notifies_observer_with_result() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let transition = Transition::new(TestState::Start, |_| TestState::Middle(9))
            .on_transition(move |t: &Transition<TestState>, result: &TestState| {
                sink.lock().unwrap().push((t.name(), result.clone()));
            });

        let result = transition.apply(TestState::Start);

        assert_eq!(result, TestState::Middle(9));
        assert_eq!(*seen.lock().unwrap(), vec![("Start", TestState::Middle(9))]);
    }

    #[test]
    fn observer_runs_after_function() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let in_function = Arc::clone(&order);
        let in_observer = Arc::clone(&order);

        let transition = Transition::new(TestState::Start, move |_| {
            in_function.lock().unwrap().push("function");
            TestState::End
        })
        .on_transition(move |_: &Transition<TestState>, _: &TestState| {
            in_observer.lock().unwrap().push("observer");
        });

        transition.apply(TestState::Start);

        assert_eq!(*order.lock().unwrap(), vec!["function", "observer"]);
    }

    #[test]
    fn panicking_function_skips_observer() {
        let notified = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&notified);

        let transition = Transition::new(TestState::Start, |_| -> TestState {
            panic!("transition failed")
        })
        .on_transition(move |_: &Transition<TestState>, _: &TestState| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let result = catch_unwind(AssertUnwindSafe(|| transition.apply(TestState::Start)));

        assert!(result.is_err());
        assert_eq!(notified.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn clone_shares_function() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let transition = Transition::new(TestState::Start, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            TestState::End
        });
        let cloned = transition.clone();

        transition.apply(TestState::Start);
        cloned.apply(TestState::Start);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(cloned.name(), "Start");
    }

    #[test]
    fn unhandled_state_message_names_state() {
        let err = TransitionError::UnhandledState {
            state: "Middle".to_string(),
        };
        assert_eq!(err.to_string(), "Unhandled state 'Middle'");
    }
}
