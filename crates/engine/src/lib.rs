//! Frame loop for the platformer.
//!
//! The loop itself is backend-agnostic: a [`Platform`] supplies events, key
//! state and presentation, and [`GameContext`] owns everything else. The
//! terminal backend lives in `tui-platformer-term`; tests drive the loop with
//! scripted platforms.

pub mod clock;
pub mod frame_loop;

pub use tui_platformer_core as core;
pub use tui_platformer_types as types;

pub use clock::{frame_duration, Clock};
pub use frame_loop::{FrameStats, GameContext, Platform, WindowEvent};
