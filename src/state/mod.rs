//! State management module
//!
//! This module holds the board state, the events that drive it, and the
//! transition function between them

pub mod board;
pub mod events;
pub mod update;

// Re-export commonly used state components
pub use board::{BoardOptions, BoardState, SignupForm};
pub use events::{Effect, Event, Outcome, Rejection};
pub use update::{update, Transition};
