// =============================================================================
// ENTITIES — things that live on the map
//
// Two independent capabilities instead of a type hierarchy:
// - `Drawable`: can put itself on a `Canvas`
// - `Collidable`: can answer whether a box fits at a position
// =============================================================================

pub mod sprite;
pub mod tile;

pub use sprite::{Sprite, SpriteConfig};
pub use tile::{TILESET_CELL, TILESET_COLUMNS, Tile, TileBoard};

use crate::renderer::Canvas;

/// Anything that can be drawn on screen.
pub trait Drawable {
    fn draw(&self, canvas: &mut dyn Canvas);
}

/// Anything that can be checked for collision against a bounding box.
pub trait Collidable {
    /// True if a `width × height` box with its top-left corner at `(x, y)`
    /// is free to occupy that position.
    fn can_move_to(&self, x: i32, y: i32, width: i32, height: i32) -> bool;
}

/// Plain `(x, y, width, height)` predicates are collidable too.
impl<F> Collidable for F
where
    F: Fn(i32, i32, i32, i32) -> bool,
{
    fn can_move_to(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        self(x, y, width, height)
    }
}
