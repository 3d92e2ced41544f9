//! Core state types.
//!
//! - State identity via the `State` trait
//! - Opt-in, immutable history of applied transitions

mod history;
mod state;

pub use history::{HistoryRecorder, StateHistory, StateTransition};
pub use state::State;
