//! Waypoint: a declarative finite-state execution engine
//!
//! A machine is a fixed table of transitions, one per state. Running the
//! machine on a state applies the transition registered for that state and
//! keeps applying transitions to the produced states until a transition
//! marked final has been applied. What that final transition produced is
//! the result.
//!
//! # Core Concepts
//!
//! - **State**: an identity-bearing marker, looked up by name via the `State` trait
//! - **Transition**: a function from state to state, a final flag and an observer
//! - **StateMachine**: the validated, immutable table that drives a state to completion
//!
//! # Example
//!
//! ```rust
//! use waypoint::{state_enum, StateMachine, Transition};
//!
//! state_enum! {
//!     enum Ticket {
//!         Open,
//!         Triaged { priority: u8 },
//!         Closed,
//!     }
//! }
//!
//! let machine = StateMachine::new([
//!     Transition::new(Ticket::Open, |_| Ticket::Triaged { priority: 2 }),
//!     Transition::terminal(Ticket::Triaged { priority: 0 }, |_| Ticket::Closed),
//! ])
//! .unwrap();
//!
//! assert_eq!(machine.run(Ticket::Open).unwrap(), Ticket::Closed);
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use crate::core::State;
pub use engine::{StateMachine, StepResult, Transition, TransitionError};
