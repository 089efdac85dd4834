//! Game state module - owns the player, the background grid and the assets
//!
//! One call to [`GameState::tick`] is one simulation step. Key state is applied
//! separately through [`GameState::handle_move`], matching the frame loop's
//! update-then-input order.

use crate::background::{tile_positions, TilePos};
use crate::bitmap::Bitmap;
use crate::player::Player;
use crate::snapshot::{GameSnapshot, PlayerSnapshot};
use crate::sprite::{SpriteFrame, SpriteSet};
use crate::types::{GameConfig, PressedKeys};

/// Images the game needs after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameAssets {
    pub background: Bitmap,
    pub sprites: Option<SpriteSet>,
}

impl GameAssets {
    pub fn new(background: Bitmap, sprites: Option<SpriteSet>) -> Self {
        Self {
            background,
            sprites,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    player: Player,
    tiles: Vec<TilePos>,
    assets: GameAssets,
    sprite: Option<SpriteFrame>,
    width: u32,
    height: u32,
    fps: u32,
    player_vel: i32,
    gravity: i32,
    /// Number of completed ticks.
    frame: u64,
}

impl GameState {
    pub fn new(config: &GameConfig, assets: GameAssets) -> Self {
        let tiles = tile_positions(
            config.width,
            config.height,
            assets.background.width(),
            assets.background.height(),
        );

        let mut state = Self {
            player: Player::new(config.player_start),
            tiles,
            assets,
            sprite: None,
            width: config.width,
            height: config.height,
            fps: config.fps,
            player_vel: config.player_vel,
            gravity: config.gravity,
            frame: 0,
        };
        state.sprite = state.current_frame_without_advancing();
        state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn tiles(&self) -> &[TilePos] {
        &self.tiles
    }

    pub fn background(&self) -> &Bitmap {
        &self.assets.background
    }

    /// Bitmap of the current sprite frame, if a sprite set is loaded.
    pub fn sprite_bitmap(&self) -> Option<&Bitmap> {
        let frame = self.sprite?;
        self.assets.sprites.as_ref()?.frame(frame)
    }

    pub fn surface_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) {
        self.player.tick(self.fps, self.gravity);
        self.update_sprite();
        self.frame += 1;
    }

    /// Apply the movement keys for this tick.
    ///
    /// Horizontal velocity is cleared first; left is applied before right, so
    /// right wins when both are held.
    pub fn handle_move(&mut self, keys: PressedKeys) {
        self.player.stop();
        if keys.left {
            self.player.move_left(self.player_vel);
        }
        if keys.right {
            self.player.move_right(self.player_vel);
        }
    }

    fn update_sprite(&mut self) {
        let Some(sprites) = self.assets.sprites.as_ref() else {
            return;
        };
        let kind = self.player.sheet_kind(self.gravity);
        let direction = self.player.direction();
        let frames = sprites.frames(kind, direction).len();
        self.sprite = if frames == 0 {
            None
        } else {
            Some(SpriteFrame {
                kind,
                direction,
                index: self.player.advance_animation(frames),
            })
        };
    }

    fn current_frame_without_advancing(&self) -> Option<SpriteFrame> {
        let sprites = self.assets.sprites.as_ref()?;
        let kind = self.player.sheet_kind(self.gravity);
        let direction = self.player.direction();
        if sprites.frames(kind, direction).is_empty() {
            return None;
        }
        Some(SpriteFrame {
            kind,
            direction,
            index: 0,
        })
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            player: PlayerSnapshot::from(&self.player),
            sprite: self.sprite,
            frame: self.frame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::SheetKind;
    use crate::types::{Direction, PLAYER_VEL};

    fn plain_state() -> GameState {
        let assets = GameAssets::new(Bitmap::solid(256, 256, [0, 0, 255, 255]), None);
        GameState::new(&GameConfig::default(), assets)
    }

    fn sprite_state() -> GameState {
        let mut sprites = SpriteSet::new();
        let strip = Bitmap::solid(8, 2, [1, 2, 3, 255]);
        for kind in SheetKind::ALL {
            sprites.insert_strip(kind, &strip, 2, 2);
        }
        let assets = GameAssets::new(Bitmap::solid(64, 64, [0, 0, 255, 255]), Some(sprites));
        GameState::new(&GameConfig::default(), assets)
    }

    #[test]
    fn tiles_are_built_from_background_size() {
        assert_eq!(plain_state().tiles().len(), 20);
    }

    #[test]
    fn handle_move_maps_keys_to_velocity() {
        let mut s = plain_state();
        let cases = [
            (PressedKeys::new(false, false), 0),
            (PressedKeys::new(true, false), -PLAYER_VEL),
            (PressedKeys::new(false, true), PLAYER_VEL),
            (PressedKeys::new(true, true), PLAYER_VEL),
        ];
        for (keys, expected) in cases {
            s.handle_move(keys);
            assert_eq!(s.player().x_vel(), expected, "keys {:?}", keys);
        }
    }

    #[test]
    fn both_keys_leave_player_facing_right() {
        let mut s = plain_state();
        s.handle_move(PressedKeys::new(true, true));
        assert_eq!(s.player().direction(), Direction::Right);
    }

    #[test]
    fn plain_state_has_no_sprite() {
        let mut s = plain_state();
        s.tick();
        assert!(s.sprite_bitmap().is_none());
        assert_eq!(s.snapshot().sprite, None);
        assert_eq!(s.frame(), 1);
    }

    #[test]
    fn sprite_follows_motion_and_direction() {
        let mut s = sprite_state();
        assert_eq!(s.snapshot().sprite.map(|f| f.kind), Some(SheetKind::Idle));

        s.handle_move(PressedKeys::new(false, true));
        s.tick();
        let frame = s.snapshot().sprite.unwrap();
        assert_eq!(frame.kind, SheetKind::Run);
        assert_eq!(frame.direction, Direction::Right);
        assert!(s.sprite_bitmap().is_some());
    }
}
