//! Terminal platformer runner (default binary).
//!
//! Loads the assets, builds the game context from the default configuration
//! and runs the fixed-rate frame loop on the terminal until the player quits
//! (q, Esc or Ctrl-C).

use anyhow::Result;
use tracing::info;

use tui_platformer::assets::load_assets;
use tui_platformer::engine::GameContext;
use tui_platformer::term::TerminalPlatform;
use tui_platformer::types::GameConfig;

fn main() -> Result<()> {
    init_logging();

    let config = GameConfig::default();
    // Asset failures abort before the terminal is touched.
    let assets = load_assets(&config)?;
    let mut ctx = GameContext::new(config, assets);

    let mut platform = TerminalPlatform::new()?;
    platform.enter(&ctx.config().title)?;

    let result = ctx.run(&mut platform);

    // Always try to restore terminal state.
    let _ = platform.exit();

    let stats = result?;
    info!(frames = stats.frames, "bye");
    Ok(())
}

/// Log to stderr, filtered by `LOG_LEVEL` (default `warn`).
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
