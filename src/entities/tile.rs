use crate::geometry::Rect;
use crate::renderer::{Canvas, TextureId};

use super::Drawable;

/// Number of cell columns in a tileset image.
pub const TILESET_COLUMNS: u32 = 8;
/// Pixel size of one (square) tileset cell.
pub const TILESET_CELL: i32 = 32;

/// One map cell ready to draw: a tileset index placed at a pixel position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub index: u32,
    pub x: i32,
    pub y: i32,
    pub tileset: TextureId,
}

impl Tile {
    /// The tileset cell this tile samples: column `index % 8`, row
    /// `index / 8`, each cell 32 × 32.
    pub fn source_rect(&self) -> Rect {
        let col = (self.index % TILESET_COLUMNS) as i32;
        let row = (self.index / TILESET_COLUMNS) as i32;
        Rect::new(col * TILESET_CELL, row * TILESET_CELL, TILESET_CELL, TILESET_CELL)
    }
}

impl Drawable for Tile {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_image(self.tileset, Some(self.source_rect()), (self.x, self.y));
    }
}

/// The map's render side: the whole tileset as a backdrop at the origin,
/// then every tile in creation order.
#[derive(Clone, Debug)]
pub struct TileBoard {
    pub tileset: TextureId,
    pub tiles: Vec<Tile>,
}

impl TileBoard {
    pub fn new(tileset: TextureId, tiles: Vec<Tile>) -> Self {
        Self { tileset, tiles }
    }
}

impl Drawable for TileBoard {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_image(self.tileset, None, (0, 0));
        for tile in &self.tiles {
            tile.draw(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(index: u32) -> Tile {
        Tile { index, x: 0, y: 0, tileset: TextureId::new(0) }
    }

    #[test]
    fn index_zero_is_top_left_cell() {
        assert_eq!(tile(0).source_rect(), Rect::new(0, 0, 32, 32));
    }

    #[test]
    fn index_wraps_after_eight_columns() {
        assert_eq!(tile(7).source_rect(), Rect::new(224, 0, 32, 32));
        assert_eq!(tile(8).source_rect(), Rect::new(0, 32, 32, 32));
        assert_eq!(tile(19).source_rect(), Rect::new(96, 64, 32, 32));
    }
}
