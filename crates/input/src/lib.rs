//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the two movement keys and turns the event
//! stream into per-tick [`crate::types::PressedKeys`] state, including on
//! terminals without key-release events.

pub mod map;
pub mod tracker;

pub use tui_platformer_types as types;

pub use map::{move_key, should_quit, MoveKey};
pub use tracker::KeyTracker;
