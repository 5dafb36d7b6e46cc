// =============================================================================
// SCENE.RS — The running level
//
// Owns the map, the tiles built from it and the sprite list. Each frame the
// player moves against the map's walls, then the board and the sprites are
// painted in that order.
// =============================================================================

use crate::engine::{Engine, Game};
use crate::entities::{Drawable, Sprite, TileBoard};
use crate::input::{ActionMap, InputState, Move};
use crate::map::{GameMap, MapError};
use crate::renderer::{Canvas, TextureId};

/// The running level: one map, its tiles, and the sprites standing on it.
///
/// Sprites paint in list order, so later ones end up on top. The player is
/// the only sprite driven by input; every other sprite is a static
/// decoration and never updated.
pub struct Scene {
    map: GameMap,
    board: TileBoard,
    entities: Vec<Sprite>,
    player: usize,
    actions: ActionMap<Move>,
}

impl Scene {
    /// Build the scene, creating the map's tiles against `tileset`.
    pub fn new(map: GameMap, tileset: TextureId, player: Sprite) -> Result<Self, MapError> {
        let tiles = map.create_tiles(tileset)?;
        log::debug!("scene: {} tiles over {} layers", tiles.len(), map.layers().len());
        Ok(Self {
            map,
            board: TileBoard::new(tileset, tiles),
            entities: vec![player],
            player: 0,
            actions: ActionMap::movement(),
        })
    }

    /// Append a static sprite. It draws above everything added before it,
    /// the player included.
    pub fn push_decoration(&mut self, sprite: Sprite) {
        self.entities.push(sprite);
    }

    /// Insert a static sprite at `index` in paint order. The player keeps
    /// being the player wherever it ends up in the list.
    pub fn insert_decoration(&mut self, index: usize, sprite: Sprite) {
        let index = index.min(self.entities.len());
        self.entities.insert(index, sprite);
        if index <= self.player {
            self.player += 1;
        }
    }

    pub fn map(&self) -> &GameMap { &self.map }
    pub fn board(&self) -> &TileBoard { &self.board }
    pub fn entities(&self) -> &[Sprite] { &self.entities }
    pub fn player(&self) -> &Sprite { &self.entities[self.player] }

    /// Advance one frame: move the player against the map's walls.
    pub fn update(&mut self, input: &InputState) {
        let player = &mut self.entities[self.player];
        player.update(&self.actions, input, &self.map);
    }

    /// Draw the map, then every sprite in list order.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.board.draw(canvas);
        for entity in &self.entities {
            entity.draw(canvas);
        }
    }
}

impl Game for Scene {
    fn update(&mut self, engine: &mut Engine) {
        Scene::update(self, &engine.input);
    }

    fn render(&mut self, engine: &mut Engine) {
        self.draw(engine.canvas());
    }
}
