//! Core State trait for state machine states.
//!
//! A state is an opaque marker. The engine never compares states by value;
//! it only asks a state for its name, which identifies the state's kind.

use std::fmt::Debug;

/// Trait for state machine states.
///
/// `name` is the identity key used by [`StateMachine`](crate::StateMachine)
/// to look up transitions. It must be derived from the variant tag alone:
/// two values that differ only in payload are the same state.
///
/// A closed enum is the natural shape. The [`state_enum!`](crate::state_enum)
/// macro writes the impl for you.
///
/// # Example
///
/// ```rust
/// use waypoint::core::State;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Upload {
///     Pending,
///     Sending { attempt: u32 },
///     Done,
/// }
///
/// impl State for Upload {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Sending { .. } => "Sending",
///             Self::Done => "Done",
///         }
///     }
/// }
///
/// assert_eq!(
///     Upload::Sending { attempt: 1 }.name(),
///     Upload::Sending { attempt: 7 }.name(),
/// );
/// ```
pub trait State: Debug + Send + Sync {
    /// Stable identity of this state's kind.
    fn name(&self) -> &'static str;

    /// Whether `other` is the same state for table lookup purposes.
    fn same_state(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}
