//! The execution engine.
//!
//! A [`StateMachine`] is an immutable table of [`Transition`]s keyed by
//! state name. Running it looks up the transition for the current state,
//! applies it, and keeps going until a final transition has been applied.
//!
//! Transition functions and observers are plain closures. The engine does
//! not inspect them and puts no purity constraints on them.

mod machine;
mod transition;

pub use machine::{StateMachine, StepResult};
pub use transition::{Transition, TransitionError, TransitionFn, TransitionObserver};
