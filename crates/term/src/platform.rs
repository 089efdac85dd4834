//! Terminal backend for the frame loop.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::debug;

use crate::core::GameState;
use crate::engine::{Platform, WindowEvent};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::input::{should_quit, KeyTracker};
use crate::renderer::TerminalRenderer;
use crate::types::PressedKeys;

/// [`Platform`] backed by crossterm: events from the terminal, output to stdout.
pub struct TerminalPlatform {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    keys: KeyTracker,
    viewport: Viewport,
}

impl TerminalPlatform {
    pub fn new() -> Result<Self> {
        let (w, h) = crossterm::terminal::size()?;
        Ok(Self {
            renderer: TerminalRenderer::new(),
            view: GameView::new(),
            fb: FrameBuffer::new(w, h),
            keys: KeyTracker::new(),
            viewport: Viewport::new(w, h),
        })
    }

    pub fn enter(&mut self, title: &str) -> Result<()> {
        self.renderer.enter(title)
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl Platform for TerminalPlatform {
    fn next_event(&mut self) -> Result<Option<WindowEvent>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }

        let ev = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                WindowEvent::Close
            }
            Event::Key(key) => {
                self.keys.handle_key_event(key);
                WindowEvent::Other
            }
            Event::Resize(w, h) => {
                debug!(w, h, "terminal resized");
                self.viewport = Viewport::new(w, h);
                self.renderer.invalidate();
                WindowEvent::Resize(w, h)
            }
            _ => WindowEvent::Other,
        };
        Ok(Some(ev))
    }

    fn pressed_keys(&mut self) -> PressedKeys {
        self.keys.pressed()
    }

    fn present(&mut self, state: &GameState) -> Result<()> {
        self.view.render_into(state, self.viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
