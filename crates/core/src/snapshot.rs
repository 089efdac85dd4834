use crate::player::Player;
use crate::sprite::SpriteFrame;
use crate::types::{Direction, PlayerRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerSnapshot {
    pub rect: PlayerRect,
    pub x_vel: i32,
    pub y_vel: i32,
    pub direction: Direction,
    pub animation_count: u32,
    pub fall_count: u32,
}

impl From<&Player> for PlayerSnapshot {
    fn from(value: &Player) -> Self {
        Self {
            rect: value.rect(),
            x_vel: value.x_vel(),
            y_vel: value.y_vel(),
            direction: value.direction(),
            animation_count: value.animation_count(),
            fall_count: value.fall_count(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub player: PlayerSnapshot,
    pub sprite: Option<SpriteFrame>,
    pub frame: u64,
}
