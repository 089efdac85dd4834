//! The frame loop and the context object it drives.

use anyhow::Result;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::core::{GameAssets, GameState};
use crate::types::{GameConfig, PressedKeys};

/// Events a platform reports between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The user asked to close the game.
    Close,
    /// The output surface changed size (in platform units).
    Resize(u16, u16),
    /// Anything the loop does not act on (key presses are read through
    /// [`Platform::pressed_keys`]).
    Other,
}

/// Everything the loop needs from the outside world.
pub trait Platform {
    /// Next pending event, or `None` once the queue is drained. Never blocks.
    fn next_event(&mut self) -> Result<Option<WindowEvent>>;

    /// Movement keys held right now.
    fn pressed_keys(&mut self) -> PressedKeys;

    /// Redraw the whole surface from `state`.
    fn present(&mut self, state: &GameState) -> Result<()>;
}

/// Totals reported when the loop exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub frames: u64,
}

/// Owned game context: configuration, simulation state and clock.
#[derive(Debug)]
pub struct GameContext {
    config: GameConfig,
    state: GameState,
    clock: Clock,
    running: bool,
    frames: u64,
}

impl GameContext {
    pub fn new(config: GameConfig, assets: GameAssets) -> Self {
        let state = GameState::new(&config, assets);
        Self {
            config,
            state,
            clock: Clock::new(),
            running: true,
            frames: 0,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one full iteration: wait, drain events, tick, read keys, draw.
    ///
    /// A close event stops the draining but the iteration still completes.
    /// Returns whether the loop should keep going.
    pub fn step(&mut self, platform: &mut impl Platform) -> Result<bool> {
        self.clock.tick(self.config.fps);

        while let Some(event) = platform.next_event()? {
            match event {
                WindowEvent::Close => {
                    debug!(frame = self.frames, "close requested");
                    self.running = false;
                    break;
                }
                WindowEvent::Resize(w, h) => debug!(w, h, "surface resized"),
                WindowEvent::Other => {}
            }
        }

        self.state.tick();
        self.state.handle_move(platform.pressed_keys());
        platform.present(&self.state)?;

        self.frames += 1;
        Ok(self.running)
    }

    /// Loop until a close event is seen.
    pub fn run(&mut self, platform: &mut impl Platform) -> Result<FrameStats> {
        info!(
            title = %self.config.title,
            fps = self.config.fps,
            width = self.config.width,
            height = self.config.height,
            "frame loop started"
        );

        while self.step(platform)? {}

        let stats = FrameStats {
            frames: self.frames,
        };
        info!(frames = stats.frames, "frame loop finished");
        Ok(stats)
    }
}
