//! Background tiling.

/// Top-left offset of one background tile, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

/// Offsets that cover a `surface_w` x `surface_h` surface with a repeating tile.
///
/// One extra column and row beyond `ceil(surface / tile)` is always produced, so
/// the grid overfills the surface. Columns are emitted outermost.
/// A zero-sized tile yields no offsets.
pub fn tile_positions(surface_w: u32, surface_h: u32, tile_w: u32, tile_h: u32) -> Vec<TilePos> {
    if tile_w == 0 || tile_h == 0 {
        return Vec::new();
    }

    let cols = surface_w.div_ceil(tile_w) + 1;
    let rows = surface_h.div_ceil(tile_h) + 1;
    let mut tiles = Vec::with_capacity((cols as usize) * (rows as usize));

    for i in 0..cols {
        for j in 0..rows {
            tiles.push(TilePos {
                x: (i * tile_w) as i32,
                y: (j * tile_h) as i32,
            });
        }
    }
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_surface_with_256_tile() {
        let tiles = tile_positions(800, 600, 256, 256);
        // ceil(800/256)+1 = 5 columns, ceil(600/256)+1 = 4 rows.
        assert_eq!(tiles.len(), 20);
        assert_eq!(tiles[0], TilePos { x: 0, y: 0 });
        assert_eq!(tiles[1], TilePos { x: 0, y: 256 });
        assert_eq!(tiles[4], TilePos { x: 256, y: 0 });
        assert_eq!(*tiles.last().unwrap(), TilePos { x: 1024, y: 768 });
    }

    #[test]
    fn exact_multiple_still_overfills() {
        let tiles = tile_positions(128, 64, 64, 64);
        assert_eq!(tiles.len(), 3 * 2);
    }

    #[test]
    fn grid_covers_every_surface_pixel() {
        let (w, h, tw, th) = (800, 600, 64, 48);
        let tiles = tile_positions(w, h, tw, th);
        for &(px, py) in &[(0, 0), (799, 599), (799, 0), (0, 599), (400, 300)] {
            assert!(tiles.iter().any(|t| {
                px >= t.x && py >= t.y && px < t.x + tw as i32 && py < t.y + th as i32
            }));
        }
    }

    #[test]
    fn zero_sized_tile_is_empty() {
        assert!(tile_positions(800, 600, 0, 64).is_empty());
        assert!(tile_positions(800, 600, 64, 0).is_empty());
    }
}
