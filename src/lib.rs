//! TUI Platformer (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so the binary, the
//! integration tests and the benchmarks share one import path.

pub use tui_platformer_assets as assets;
pub use tui_platformer_core as core;
pub use tui_platformer_engine as engine;
pub use tui_platformer_input as input;
pub use tui_platformer_term as term;
pub use tui_platformer_types as types;
