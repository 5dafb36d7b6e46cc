// =============================================================================
// MOVEMENT.RS — Wall-aware movement resolution
//
// Given a requested per-axis displacement, pick the furthest legal position:
// the full move if it fits, otherwise a slide along one axis.
// =============================================================================

use crate::entities::Collidable;

/// Resolve one frame of movement for a `size` box at `pos` asking to move by
/// `delta`.
///
/// Precedence:
/// 1. the full move `(x + dx, y + dy)`;
/// 2. horizontal only `(x + dx, y)`, if `dx != 0`;
/// 3. vertical only `(x, y + dy)`, if `dy != 0`;
/// 4. stay put.
///
/// Horizontal sliding always wins over vertical sliding when both would fit.
pub fn resolve_move(
    pos: (i32, i32),
    size: (i32, i32),
    delta: (i32, i32),
    world: &dyn Collidable,
) -> (i32, i32) {
    let (x, y) = pos;
    let (w, h) = size;
    let (dx, dy) = delta;

    if world.can_move_to(x + dx, y + dy, w, h) {
        (x + dx, y + dy)
    } else if dx != 0 && world.can_move_to(x + dx, y, w, h) {
        (x + dx, y)
    } else if dy != 0 && world.can_move_to(x, y + dy, w, h) {
        (x, y + dy)
    } else {
        (x, y)
    }
}
