//! Key mapping from terminal events to movement keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The two keys the game binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Left,
    Right,
}

/// Map a key code to a movement key. Only the arrow keys are bound.
pub fn move_key(code: KeyCode) -> Option<MoveKey> {
    match code {
        KeyCode::Left => Some(MoveKey::Left),
        KeyCode::Right => Some(MoveKey::Right),
        _ => None,
    }
}

/// Check if key should close the game.
///
/// A terminal has no window close button, so these keys stand in for it.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
