use crate::geometry::Rect;

/// Handle to an image registered with the engine.
///
/// Ids are handed out in registration order by `EngineBuilder::add_image`
/// and stay valid for the lifetime of the engine. Copying one is free; the
/// pixel data itself is uploaded to the GPU once and never mutated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub(crate) u32);

impl TextureId {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Anything that can blit a region of a source image onto the screen.
pub trait Canvas {
    /// Draw `src` (or the whole image when `None`) of `texture` with its
    /// top-left corner at pixel `dest`.
    fn draw_image(&mut self, texture: TextureId, src: Option<Rect>, dest: (i32, i32));
}

/// One queued blit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DrawCommand {
    pub texture: TextureId,
    pub src: Option<Rect>,
    pub dest: (i32, i32),
}

/// Ordered list of draw commands for one frame. Later commands paint on top.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DrawList {
    fn draw_image(&mut self, texture: TextureId, src: Option<Rect>, dest: (i32, i32)) {
        self.commands.push(DrawCommand { texture, src, dest });
    }
}
