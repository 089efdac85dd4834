//! Terminal surface for the platformer.
//!
//! The 800x600 logical surface is rendered into a pixel canvas sized to the
//! terminal (two pixels per cell using half blocks), converted into a
//! framebuffer of styled cells and flushed with diff-based redraws.
//!
//! - [`game_view`]: pure rendering of a `GameState` into a framebuffer
//! - [`renderer`]: terminal setup/teardown and framebuffer flushing
//! - [`platform`]: the `engine::Platform` implementation tying both to input

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod platform;
pub mod renderer;

pub use tui_platformer_core as core;
pub use tui_platformer_engine as engine;
pub use tui_platformer_input as input;
pub use tui_platformer_types as types;

pub use canvas::{PixelCanvas, UPPER_HALF_BLOCK};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use platform::TerminalPlatform;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
