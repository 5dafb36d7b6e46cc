// =============================================================================
// GEOMETRY.RS — Pixel-space primitives for the tile map
//
// Everything the map and the movement code share:
// - Pixel → tile conversion (truncating division, so pixels -1..-31 still
//   land on tile 0)
// - Axis-aligned rectangles (sprite frames, tileset cells)
// - Corner sampling of a bounding box
// =============================================================================

/// Convert a pixel coordinate to a tile coordinate.
///
/// Integer division truncating toward zero: pixel `-1` lands on tile `0`
/// and only pixels at or below `-tile_size` reach a negative tile.
/// `tile_size` must be positive.
#[inline]
pub fn pixel_to_tile(pixel: i32, tile_size: i32) -> i32 {
    pixel / tile_size
}

/// Axis-aligned rectangle in pixels, top-left origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// The four inclusive corner pixels of the rectangle, in the order
    /// top-left, top-right, bottom-left, bottom-right.
    ///
    /// For a `w × h` box at `(x, y)` the corners are `x` / `x + w - 1` and
    /// `y` / `y + h - 1`, i.e. the last pixels still inside the box.
    pub fn corners(&self) -> [(i32, i32); 4] {
        let x1 = self.x + self.w - 1;
        let y1 = self.y + self.h - 1;
        [(self.x, self.y), (x1, self.y), (self.x, y1), (x1, y1)]
    }
}

// =============================================================================
// TESTS
// =============================================================================
