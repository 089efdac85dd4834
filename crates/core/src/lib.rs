//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the simulation of the platformer. It has **zero
//! dependencies** on terminals, image codecs or I/O, so every rule can be
//! exercised from plain unit tests.
//!
//! # Module Structure
//!
//! - [`player`]: position/velocity, directional input, per-tick gravity
//! - [`background`]: tile offsets covering the logical surface
//! - [`bitmap`]: owned RGBA8 buffers
//! - [`sprite`]: sprite-sheet slicing and mirrored left-facing frames
//! - [`game_state`]: the owned state driven by the frame loop
//! - [`snapshot`]: copyable view of the state for renderers and tests
//!
//! # Example
//!
//! ```
//! use tui_platformer_core::{Bitmap, GameAssets, GameState};
//! use tui_platformer_types::{GameConfig, PressedKeys};
//!
//! let assets = GameAssets::new(Bitmap::solid(64, 64, [0, 0, 255, 255]), None);
//! let mut game = GameState::new(&GameConfig::default(), assets);
//!
//! game.handle_move(PressedKeys::new(false, true));
//! game.tick();
//! assert_eq!(game.player().x(), 105);
//! ```

pub mod background;
pub mod bitmap;
pub mod game_state;
pub mod player;
pub mod snapshot;
pub mod sprite;

pub use tui_platformer_types as types;

pub use background::{tile_positions, TilePos};
pub use bitmap::{Bitmap, Rgba, TRANSPARENT};
pub use game_state::{GameAssets, GameState};
pub use player::{fall_step, Player, SheetKind};
pub use snapshot::{GameSnapshot, PlayerSnapshot};
pub use sprite::{slice_frames, SpriteFrame, SpriteSet};
