//! Input handlers module
//!
//! Translates host input into board events

pub mod commands;

pub use commands::{parse_command, Command, HELP_TEXT};
