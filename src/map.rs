// =============================================================================
// MAP.RS — Tile map loading and wall collision
//
// A map is a JSON file with a tile size, a tileset image name and one or more
// grid layers of tileset indices. The FIRST layer doubles as the collision
// layer: index 0 there is a wall, and so is everything outside its grid.
// =============================================================================

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::entities::{Collidable, Tile};
use crate::geometry::{Rect, pixel_to_tile};
use crate::renderer::TextureId;

// ── MapError ──────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum MapError {
    /// The map file could not be read.
    Io(std::io::Error),
    /// The file is not JSON of the expected shape.
    Parse(serde_json::Error),
    /// `tileWidth` or `tileHeight` is not positive.
    InvalidTileSize { width: i32, height: i32 },
    /// A layer has zero width or zero height.
    EmptyLayer { layer: String, width: u32, height: u32 },
    /// A layer's data does not hold exactly `width * height` cells.
    LayerSize { layer: String, expected: usize, actual: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Io(e) => write!(f, "cannot read map: {e}"),
            MapError::Parse(e) => write!(f, "malformed map: {e}"),
            MapError::InvalidTileSize { width, height } => {
                write!(f, "tile size must be positive, got {width}x{height}")
            }
            MapError::EmptyLayer { layer, width, height } => {
                write!(f, "layer '{layer}' must have a positive size, got {width}x{height}")
            }
            MapError::LayerSize { layer, expected, actual } => write!(
                f,
                "layer '{layer}' has {actual} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::Io(e) => Some(e),
            MapError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MapError {
    fn from(e: std::io::Error) -> Self {
        MapError::Io(e)
    }
}

impl From<serde_json::Error> for MapError {
    fn from(e: serde_json::Error) -> Self {
        MapError::Parse(e)
    }
}

// ── On-disk format ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMap {
    name: String,
    tile_width: i32,
    tile_height: i32,
    tileset: String,
    layers: Vec<RawLayer>,
}

#[derive(Deserialize)]
struct RawLayer {
    name: String,
    width: u32,
    height: u32,
    data: Vec<u32>,
}

// ── Layer ─────────────────────────────────────────────────────────────────────

/// One grid of tileset indices, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    name: String,
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl Layer {
    /// Build a layer, checking that both dimensions are positive and that
    /// `data` holds exactly `width * height` cells.
    pub fn new(name: impl Into<String>, width: u32, height: u32, data: Vec<u32>) -> Result<Self, MapError> {
        let name = name.into();
        if width == 0 || height == 0 {
            return Err(MapError::EmptyLayer { layer: name, width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(MapError::LayerSize { layer: name, expected, actual: data.len() });
        }
        Ok(Self { name, width, height, data })
    }

    /// A `width × height` layer with every cell set to `value`.
    pub fn filled(name: impl Into<String>, width: u32, height: u32, value: u32) -> Result<Self, MapError> {
        Self::new(name, width, height, vec![value; width as usize * height as usize])
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn data(&self) -> &[u32] { &self.data }

    /// The index at tile `(tx, ty)`, or `None` outside the grid.
    pub fn get(&self, tx: i32, ty: i32) -> Option<u32> {
        if tx < 0 || ty < 0 || tx as u32 >= self.width || ty as u32 >= self.height {
            return None;
        }
        self.data.get(ty as usize * self.width as usize + tx as usize).copied()
    }

    /// Overwrite the cell at `(tx, ty)` and return what it held, or `None`
    /// (layer unchanged) when the cell is outside the grid.
    pub fn set(&mut self, tx: u32, ty: u32, value: u32) -> Option<u32> {
        if tx >= self.width || ty >= self.height {
            return None;
        }
        let cell = &mut self.data[ty as usize * self.width as usize + tx as usize];
        Some(std::mem::replace(cell, value))
    }
}

// ── GameMap ───────────────────────────────────────────────────────────────────

/// A loaded tile map. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameMap {
    name: String,
    tile_width: i32,
    tile_height: i32,
    tileset: String,
    layers: Vec<Layer>,
}

impl GameMap {
    pub fn new(
        name: impl Into<String>,
        tile_width: i32,
        tile_height: i32,
        tileset: impl Into<String>,
        layers: Vec<Layer>,
    ) -> Result<Self, MapError> {
        if tile_width <= 0 || tile_height <= 0 {
            return Err(MapError::InvalidTileSize { width: tile_width, height: tile_height });
        }
        Ok(Self {
            name: name.into(),
            tile_width,
            tile_height,
            tileset: tileset.into(),
            layers,
        })
    }

    /// Read and decode a map file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Decode a map from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, MapError> {
        let raw: RawMap = serde_json::from_str(json)?;
        let layers = raw
            .layers
            .into_iter()
            .map(|l| Layer::new(l.name, l.width, l.height, l.data))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(raw.name, raw.tile_width, raw.tile_height, raw.tileset, layers)
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn tile_width(&self) -> i32 { self.tile_width }
    pub fn tile_height(&self) -> i32 { self.tile_height }
    /// Tileset image file name, relative to the tiles asset directory.
    pub fn tileset(&self) -> &str { &self.tileset }
    pub fn layers(&self) -> &[Layer] { &self.layers }

    /// The layer walls are read from.
    pub fn collision_layer(&self) -> Option<&Layer> {
        self.layers.first()
    }

    /// Whether the pixel `(x, y)` lies on a wall.
    ///
    /// Walls are cells of the first layer holding 0, plus every tile outside
    /// that layer's grid (negative tiles included). Pixel coordinates are
    /// divided toward zero, so `-1` still reads tile 0. Other layers are never
    /// consulted. A map without layers has no walls.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        let tx = pixel_to_tile(x, self.tile_width);
        let ty = pixel_to_tile(y, self.tile_height);
        match self.collision_layer() {
            Some(layer) => layer.get(tx, ty).is_none_or(|index| index == 0),
            None => false,
        }
    }

    /// Whether a `width × height` box at `(x, y)` touches no wall.
    ///
    /// Only the four corner pixels are sampled, so a wall that sits strictly
    /// between them (possible when the box is wider than a tile) goes
    /// unnoticed.
    pub fn can_move_to(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        Rect::new(x, y, width, height)
            .corners()
            .iter()
            .all(|&(cx, cy)| !self.is_wall(cx, cy))
    }

    /// Render records for every cell of every layer, layer by layer in
    /// declaration order and row-major within a layer.
    ///
    /// Index 0 is drawn like any other index.
    pub fn create_tiles(&self, tileset: TextureId) -> Result<Vec<Tile>, MapError> {
        let total = self.layers.iter().map(|l| l.data.len()).sum();
        let mut tiles = Vec::with_capacity(total);
        for layer in &self.layers {
            for ty in 0..layer.height {
                for tx in 0..layer.width {
                    let index = layer.get(tx as i32, ty as i32).ok_or_else(|| MapError::LayerSize {
                        layer: layer.name.clone(),
                        expected: layer.width as usize * layer.height as usize,
                        actual: layer.data.len(),
                    })?;
                    tiles.push(Tile {
                        index,
                        x: tx as i32 * self.tile_width,
                        y: ty as i32 * self.tile_height,
                        tileset,
                    });
                }
            }
        }
        Ok(tiles)
    }
}

impl Collidable for GameMap {
    fn can_move_to(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        GameMap::can_move_to(self, x, y, width, height)
    }
}
