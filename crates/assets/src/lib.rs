//! Startup asset loading.
//!
//! Images are decoded with the `image` crate and converted into the core
//! crate's [`Bitmap`]. Loading is all-or-nothing: the first missing or broken
//! file aborts with an error naming the path.
//!
//! Layout under the asset root:
//!
//! ```text
//! assets/
//!   Background/<name>.png          repeating background tile
//!   MainCharacters/<character>/    one horizontal strip per animation
//!     idle.png  run.png  fall.png
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use tracing::{debug, info, warn};

use tui_platformer_core::{Bitmap, GameAssets, SheetKind, SpriteSet};
use tui_platformer_types::GameConfig;

/// Decode an image file into an RGBA bitmap.
pub fn load_image(path: &Path) -> Result<Bitmap> {
    let img = image::open(path)
        .with_context(|| format!("failed to load image {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    let pixels = img.pixels().map(|p| p.0).collect();
    Bitmap::from_pixels(width, height, pixels)
        .ok_or_else(|| anyhow!("pixel buffer size mismatch in {}", path.display()))
}

/// Load every `<kind>.png` strip in `dir` into a sprite set.
///
/// Files are visited in name order. Stems that are not a known animation are
/// skipped; a strip narrower than one frame is an error.
pub fn load_sprite_set(dir: &Path, frame_w: u32, frame_h: u32) -> Result<SpriteSet> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("failed to read sprite directory {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()
        .with_context(|| format!("failed to list sprite directory {}", dir.display()))?;
    paths.retain(|p| is_png(p));
    paths.sort();

    let mut set = SpriteSet::new();
    for path in paths {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        let Some(kind) = SheetKind::from_stem(stem) else {
            warn!(path = %path.display(), "skipping sprite sheet with unknown animation name");
            continue;
        };

        let strip = load_image(&path)?;
        let frames = set.insert_strip(kind, &strip, frame_w, frame_h);
        if frames == 0 {
            bail!(
                "sprite sheet {} ({}x{}) holds no {}x{} frame",
                path.display(),
                strip.width(),
                strip.height(),
                frame_w,
                frame_h
            );
        }
        debug!(path = %path.display(), kind = kind.as_str(), frames, "loaded sprite sheet");
    }

    if set.is_empty() {
        bail!("no sprite sheets found in {}", dir.display());
    }
    Ok(set)
}

/// Load everything `config` refers to.
pub fn load_assets(config: &GameConfig) -> Result<GameAssets> {
    let background_path = config.background_path();
    let background = load_image(&background_path)?;
    if background.is_empty() {
        bail!("background image {} is empty", background_path.display());
    }

    let (frame_w, frame_h) = config.sprite_frame;
    let sprites = config
        .character_dir()
        .map(|dir| load_sprite_set(&dir, frame_w, frame_h))
        .transpose()?;

    info!(
        background = %background_path.display(),
        tile_w = background.width(),
        tile_h = background.height(),
        character = config.character.as_deref().unwrap_or("<none>"),
        "assets loaded"
    );
    Ok(GameAssets::new(background, sprites))
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}
