//! Held-key tracking for terminal environments.
//!
//! The game reads key state once per tick, but terminals deliver key events.
//! Many terminals also never send releases, so a key that has gone quiet for a
//! while is treated as released. Before the OS starts auto-repeating, a held
//! key produces a single press followed by silence, so the first event gets a
//! longer window than the gaps between repeats. Once a real release event
//! arrives the timeouts are no longer needed and are switched off.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::{move_key, MoveKey};
use crate::types::PressedKeys;

// Longer than common OS auto-repeat delays (250-600 ms).
const DEFAULT_INITIAL_HOLD_MS: u64 = 600;

// Held keys expire after this long between repeats.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// A movement key believed to be down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeldKey {
    /// Time of the last press or repeat.
    last: Instant,
    /// Whether auto-repeat has started for this hold.
    repeating: bool,
}

#[derive(Debug, Clone)]
pub struct KeyTracker {
    left: Option<HeldKey>,
    right: Option<HeldKey>,
    initial_hold: Duration,
    key_release_timeout: Duration,
    release_events_seen: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            left: None,
            right: None,
            initial_hold: Duration::from_millis(DEFAULT_INITIAL_HOLD_MS),
            key_release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
            release_events_seen: false,
        }
    }

    pub fn with_key_release_timeout(mut self, timeout: Duration) -> Self {
        self.key_release_timeout = timeout;
        self
    }

    pub fn key_release_timeout(&self) -> Duration {
        self.key_release_timeout
    }

    pub fn initial_hold(&self) -> Duration {
        self.initial_hold
    }

    /// Feed one terminal key event. Returns whether it was a movement key.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_key_press(key.code),
            KeyEventKind::Release => self.handle_key_release(key.code),
        }
    }

    /// Record a press or repeat.
    ///
    /// Without keyboard enhancement, repeats arrive as further presses, so any
    /// press of a key that is already held counts as a repeat.
    pub fn handle_key_press(&mut self, code: KeyCode) -> bool {
        let Some(slot) = self.slot(code) else {
            return false;
        };
        let repeating = slot.is_some();
        *slot = Some(HeldKey {
            last: Instant::now(),
            repeating,
        });
        true
    }

    pub fn handle_key_release(&mut self, code: KeyCode) -> bool {
        self.release_events_seen = true;
        let Some(slot) = self.slot(code) else {
            return false;
        };
        *slot = None;
        true
    }

    /// Current key state, expiring keys that have gone quiet.
    pub fn pressed(&mut self) -> PressedKeys {
        if !self.release_events_seen {
            let (initial, between) = (self.initial_hold, self.key_release_timeout);
            for slot in [&mut self.left, &mut self.right] {
                let expired = slot.is_some_and(|held| {
                    let window = if held.repeating { between } else { initial };
                    held.last.elapsed() > window
                });
                if expired {
                    *slot = None;
                }
            }
        }
        PressedKeys::new(self.left.is_some(), self.right.is_some())
    }

    fn slot(&mut self, code: KeyCode) -> Option<&mut Option<HeldKey>> {
        match move_key(code)? {
            MoveKey::Left => Some(&mut self.left),
            MoveKey::Right => Some(&mut self.right),
        }
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}
