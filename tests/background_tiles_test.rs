use std::collections::HashSet;

use tui_platformer::core::{tile_positions, TilePos};
use tui_platformer::types::{HEIGHT, WIDTH};

#[test]
fn tiles_for_256_tile_cover_surface() {
    let tiles = tile_positions(WIDTH, HEIGHT, 256, 256);
    // ceil(800/256)+1 = 5 columns, ceil(600/256)+1 = 4 rows.
    assert_eq!(tiles.len(), 20);
    assert_eq!(tiles[0], TilePos { x: 0, y: 0 });
    assert_eq!(tiles[1], TilePos { x: 0, y: 256 });
    assert_eq!(tiles[19], TilePos { x: 1024, y: 768 });
}

#[test]
fn tiles_for_shipped_64_tile() {
    let tiles = tile_positions(WIDTH, HEIGHT, 64, 64);
    // ceil(800/64)+1 = 14 columns, ceil(600/64)+1 = 11 rows.
    assert_eq!(tiles.len(), 154);
}

#[test]
fn every_surface_pixel_is_covered() {
    for (tw, th) in [(64, 64), (96, 48), (256, 256), (800, 600), (1000, 1000), (7, 13)] {
        let tiles = tile_positions(WIDTH, HEIGHT, tw, th);
        let distinct: HashSet<_> = tiles.iter().copied().collect();
        assert_eq!(distinct.len(), tiles.len(), "duplicate tile for {}x{}", tw, th);

        for (px, py) in [(0, 0), (799, 0), (0, 599), (799, 599), (400, 300)] {
            let covered = tiles.iter().any(|t| {
                (t.x..t.x + tw as i32).contains(&px) && (t.y..t.y + th as i32).contains(&py)
            });
            assert!(covered, "pixel ({}, {}) uncovered by {}x{} tiles", px, py, tw, th);
        }
    }
}

#[test]
fn zero_sized_tile_yields_no_positions() {
    assert!(tile_positions(WIDTH, HEIGHT, 0, 64).is_empty());
    assert!(tile_positions(WIDTH, HEIGHT, 64, 0).is_empty());
}
