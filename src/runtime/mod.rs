//! Runtime module
//!
//! Drives the board: applies events, performs effects, renders.

pub mod dispatcher;

pub use dispatcher::{Dispatcher, EventSender, Renderer};
