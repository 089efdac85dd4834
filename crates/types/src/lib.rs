//! Core types module - shared data structures and constants
//!
//! Everything in here is plain data with no external dependencies, so it can be
//! used from the simulation, the terminal surface and the asset loader alike.
//!
//! # Surface
//!
//! The game runs on a fixed logical surface. The terminal backend scales it to
//! whatever viewport it gets, but all simulation coordinates are expressed in
//! logical pixels:
//!
//! - **Width**: 800 pixels
//! - **Height**: 600 pixels
//! - **Origin**: top-left, y grows downwards
//!
//! # Timing and motion constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 60 | Fixed tick rate of the frame loop |
//! | `PLAYER_VEL` | 5 | Horizontal speed in pixels per tick |
//! | `GRAVITY` | 1 | Gravity constant fed into the fall-speed formula |
//! | `ANIMATION_DELAY` | 3 | Ticks per sprite frame |
//!
//! # Examples
//!
//! ```
//! use tui_platformer_types::{Direction, GameConfig, PressedKeys, FPS, HEIGHT, WIDTH};
//!
//! let config = GameConfig::default();
//! assert_eq!((config.width, config.height), (WIDTH, HEIGHT));
//! assert_eq!(config.fps, FPS);
//!
//! assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
//! assert!(PressedKeys::NONE.is_idle());
//! ```

use std::path::PathBuf;

/// Logical surface width in pixels.
pub const WIDTH: u32 = 800;

/// Logical surface height in pixels.
pub const HEIGHT: u32 = 600;

/// Fixed tick rate.
pub const FPS: u32 = 60;

/// Horizontal player speed (pixels per tick).
pub const PLAYER_VEL: i32 = 5;

/// Gravity constant used by the fall-speed formula.
pub const GRAVITY: i32 = 1;

/// Number of ticks each sprite frame stays on screen.
pub const ANIMATION_DELAY: u32 = 3;

/// Window title.
pub const TITLE: &str = "Platformer";

/// Clear color behind the background tiles.
pub const BG_COLOR: (u8, u8, u8) = (255, 255, 255);

/// Fill color of the player when no sprite set is loaded.
pub const PLAYER_COLOR: (u8, u8, u8) = (255, 0, 0);

/// Player spawn rectangle `(x, y, width, height)`.
pub const PLAYER_START: PlayerRect = PlayerRect {
    x: 100,
    y: 100,
    width: 50,
    height: 50,
};

/// Facing direction of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Instantaneous state of the movement keys for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PressedKeys {
    pub left: bool,
    pub right: bool,
}

impl PressedKeys {
    pub const NONE: Self = Self {
        left: false,
        right: false,
    };

    pub const fn new(left: bool, right: bool) -> Self {
        Self { left, right }
    }

    pub fn is_idle(&self) -> bool {
        !self.left && !self.right
    }
}

/// Axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PlayerRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the logical point `(px, py)` lies inside the rectangle.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        let (px, py) = (i64::from(px), i64::from(py));
        px >= x && py >= y && px < x + i64::from(self.width) && py < y + i64::from(self.height)
    }
}

/// Startup configuration.
///
/// Built once by the binary and handed to the game context; nothing reads
/// process-wide state after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub player_vel: i32,
    pub gravity: i32,
    pub player_start: PlayerRect,
    /// Root directory for all assets.
    pub asset_root: PathBuf,
    /// File name of the background tile under `<asset_root>/Background`.
    pub background: String,
    /// Character directory under `<asset_root>/MainCharacters`.
    ///
    /// `None` draws the player as a plain rectangle.
    pub character: Option<String>,
    /// Size of one frame inside the character's sprite strips.
    pub sprite_frame: (u32, u32),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            width: WIDTH,
            height: HEIGHT,
            fps: FPS,
            player_vel: PLAYER_VEL,
            gravity: GRAVITY,
            player_start: PLAYER_START,
            asset_root: PathBuf::from("assets"),
            background: "Blue.png".to_string(),
            character: Some("Hero".to_string()),
            sprite_frame: (32, 32),
        }
    }
}

impl GameConfig {
    pub fn background_path(&self) -> PathBuf {
        self.asset_root.join("Background").join(&self.background)
    }

    pub fn character_dir(&self) -> Option<PathBuf> {
        self.character
            .as_ref()
            .map(|name| self.asset_root.join("MainCharacters").join(name))
    }
}
