//! Player motion model.
//!
//! The player is a rectangle with an integer velocity. Input sets the
//! horizontal velocity, [`Player::tick`] feeds the fall counter into the
//! vertical velocity and then applies one [`Player::move_by`].

use crate::types::{Direction, PlayerRect, ANIMATION_DELAY};

/// Which animation strip the player should be showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetKind {
    Idle,
    Run,
    Fall,
}

impl SheetKind {
    pub const ALL: [SheetKind; 3] = [SheetKind::Idle, SheetKind::Run, SheetKind::Fall];

    /// Map a sprite file stem (`"idle"`, `"run"`, `"fall"`) to a sheet kind.
    pub fn from_stem(stem: &str) -> Option<Self> {
        match stem.to_lowercase().as_str() {
            "idle" => Some(SheetKind::Idle),
            "run" => Some(SheetKind::Run),
            "fall" => Some(SheetKind::Fall),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SheetKind::Idle => "idle",
            SheetKind::Run => "run",
            SheetKind::Fall => "fall",
        }
    }
}

/// Vertical velocity increment for one tick.
///
/// `min(1, floor(fall_count / fps * gravity))`. The cap means the increment is
/// 0 for the first `fps / gravity` ticks and exactly 1 afterwards.
pub fn fall_step(fall_count: u32, fps: u32, gravity: i32) -> i32 {
    if fps == 0 {
        return 0;
    }
    let scaled = i64::from(fall_count) * i64::from(gravity);
    scaled.div_euclid(i64::from(fps)).min(1) as i32
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    rect: PlayerRect,
    x_vel: i32,
    y_vel: i32,
    direction: Direction,
    animation_count: u32,
    fall_count: u32,
}

impl Player {
    /// Create a player at rest, facing left.
    pub fn new(rect: PlayerRect) -> Self {
        Self {
            rect,
            x_vel: 0,
            y_vel: 0,
            direction: Direction::Left,
            animation_count: 0,
            fall_count: 0,
        }
    }

    pub fn rect(&self) -> PlayerRect {
        self.rect
    }

    pub fn x(&self) -> i32 {
        self.rect.x
    }

    pub fn y(&self) -> i32 {
        self.rect.y
    }

    pub fn x_vel(&self) -> i32 {
        self.x_vel
    }

    pub fn y_vel(&self) -> i32 {
        self.y_vel
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn animation_count(&self) -> u32 {
        self.animation_count
    }

    pub fn fall_count(&self) -> u32 {
        self.fall_count
    }

    /// Translate the player. No bounds are enforced.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.rect.x = self.rect.x.saturating_add(dx);
        self.rect.y = self.rect.y.saturating_add(dy);
    }

    pub fn move_left(&mut self, vel: i32) {
        self.x_vel = -vel;
        self.face(Direction::Left);
    }

    pub fn move_right(&mut self, vel: i32) {
        self.x_vel = vel;
        self.face(Direction::Right);
    }

    /// Zero the horizontal velocity. Called before key state is applied.
    pub fn stop(&mut self) {
        self.x_vel = 0;
    }

    fn face(&mut self, direction: Direction) {
        if self.direction != direction {
            self.direction = direction;
            self.animation_count = 0;
        }
    }

    /// Advance one tick: apply gravity, move by the current velocity, count the tick.
    pub fn tick(&mut self, fps: u32, gravity: i32) {
        self.y_vel = self
            .y_vel
            .saturating_add(fall_step(self.fall_count, fps, gravity));
        self.move_by(self.x_vel, self.y_vel);
        self.fall_count = self.fall_count.saturating_add(1);
    }

    /// Animation strip for the current motion. Falling wins over running.
    pub fn sheet_kind(&self, gravity: i32) -> SheetKind {
        if self.y_vel > gravity.saturating_mul(2) {
            SheetKind::Fall
        } else if self.x_vel != 0 {
            SheetKind::Run
        } else {
            SheetKind::Idle
        }
    }

    /// Pick the frame to show out of `frames` and advance the animation counter.
    ///
    /// Returns `0` without advancing when the strip is empty.
    pub fn advance_animation(&mut self, frames: usize) -> usize {
        if frames == 0 {
            return 0;
        }
        let index = (self.animation_count / ANIMATION_DELAY) as usize % frames;
        self.animation_count = self.animation_count.wrapping_add(1);
        index
    }
}
