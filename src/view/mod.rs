//! View module
//!
//! Turns board state into a view tree and serializes that tree for hosts.

pub mod html;
pub mod node;
pub mod render;
pub mod text;

pub use html::to_html;
pub use node::{ids, Element, ViewNode};
pub use render::render;
pub use text::to_text;
