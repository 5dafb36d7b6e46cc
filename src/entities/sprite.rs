use crate::geometry::Rect;
use crate::input::{ActionMap, InputState, Move};
use crate::movement::resolve_move;
use crate::renderer::{Canvas, TextureId};

use super::{Collidable, Drawable};

pub const DEFAULT_SPEED: i32 = 3;
pub const DEFAULT_SIZE: i32 = 32;

/// Optional sprite settings. Anything left unset, or set to a non-positive
/// value, falls back to the defaults when the sprite is built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SpriteConfig {
    pub speed: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    /// Region of the source image to draw; defaults to the top-left
    /// `width × height` cell.
    pub frame: Option<Rect>,
}

impl SpriteConfig {
    pub fn with_speed(mut self, speed: i32) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.frame = Some(frame);
        self
    }

    /// `(speed, width, height, frame)` with defaults filled in.
    pub fn resolve(&self) -> (i32, i32, i32, Rect) {
        let pick = |v: Option<i32>, default: i32| v.filter(|v| *v > 0).unwrap_or(default);
        let speed = pick(self.speed, DEFAULT_SPEED);
        let width = pick(self.width, DEFAULT_SIZE);
        let height = pick(self.height, DEFAULT_SIZE);
        let frame = self.frame.unwrap_or(Rect::new(0, 0, width, height));
        (speed, width, height, frame)
    }
}

/// A character on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub x: i32,
    pub y: i32,
    width: i32,
    height: i32,
    speed: i32,
    image: TextureId,
    frame: Rect,
}

impl Sprite {
    pub fn new(x: i32, y: i32, image: TextureId, config: SpriteConfig) -> Self {
        let (speed, width, height, frame) = config.resolve();
        Self { x, y, width, height, speed, image, frame }
    }

    pub fn position(&self) -> (i32, i32) { (self.x, self.y) }
    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }
    pub fn speed(&self) -> i32 { self.speed }
    pub fn image(&self) -> TextureId { self.image }

    /// Move according to the held directions, without entering walls.
    pub fn update(&mut self, actions: &ActionMap<Move>, input: &InputState, world: &dyn Collidable) {
        let delta = actions.displacement(input, self.speed);
        let (x, y) = resolve_move(self.position(), (self.width, self.height), delta, world);
        self.x = x;
        self.y = y;
    }
}

impl Drawable for Sprite {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_image(self.image, Some(self.frame), (self.x, self.y));
    }
}
