//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder, the `state_enum!` macro and
//! shorthand constructors for transitions that always produce the same state.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;

use crate::core::State;
use crate::engine::Transition;

/// Create a non-final transition that always produces `to`.
///
/// # Example
///
/// ```
/// use waypoint::builder::simple_transition;
/// use waypoint::state_enum;
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
/// }
///
/// let transition = simple_transition(MyState::Start, MyState::End);
/// assert!(!transition.is_final());
/// assert_eq!(transition.apply(MyState::Start), MyState::End);
/// ```
pub fn simple_transition<S>(from: S, to: S) -> Transition<S>
where
    S: State + Clone + 'static,
{
    Transition::new(from, move |_| to.clone())
}

/// Create a final transition that always produces `to`.
///
/// # Example
///
/// ```
/// use waypoint::builder::final_transition;
/// use waypoint::state_enum;
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
/// }
///
/// let transition = final_transition(MyState::Start, MyState::End);
/// assert!(transition.is_final());
/// ```
pub fn final_transition<S>(from: S, to: S) -> Transition<S>
where
    S: State + Clone + 'static,
{
    simple_transition(from, to).with_final(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum TestState {
        Start,
        Middle { step: u8 },
    }

    impl State for TestState {
        fn name(&self) -> &'static str {
            match self {
                Self::Start => "Start",
                Self::Middle { .. } => "Middle",
            }
        }
    }

    #[test]
    fn simple_transition_ignores_input() {
        let transition = simple_transition(TestState::Start, TestState::Middle { step: 2 });

        assert_eq!(transition.name(), "Start");
        assert!(!transition.is_final());
        assert_eq!(
            transition.apply(TestState::Middle { step: 9 }),
            TestState::Middle { step: 2 }
        );
    }

    #[test]
    fn final_transition_is_final() {
        let transition = final_transition(TestState::Middle { step: 0 }, TestState::Start);

        assert_eq!(transition.name(), "Middle");
        assert!(transition.is_final());
    }
}
