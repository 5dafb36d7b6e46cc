// =============================================================================
// CONFIG.RS — Startup settings
//
// Asset locations, window size, tick rate and the player's sprite settings.
// Paths are relative to the working directory.
// =============================================================================

use std::path::PathBuf;

use crate::entities::SpriteConfig;
use crate::geometry::Rect;
use crate::map::GameMap;

/// Where the game finds its files and how it sets itself up.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub title: String,
    /// Window size, also the fixed logical resolution.
    pub width: u32,
    pub height: u32,
    pub updates_per_second: u32,
    pub map_path: PathBuf,
    pub assets_dir: PathBuf,
    /// Tileset directory, relative to `assets_dir`. The map's `tileset`
    /// field is resolved against it.
    pub tiles_dir: PathBuf,
    /// Player sprite sheet, relative to `assets_dir`.
    pub sprite_sheet: PathBuf,
    pub player: SpriteConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Office Rogue".into(),
            width: 640,
            height: 480,
            updates_per_second: 60,
            map_path: "sample_map.json".into(),
            assets_dir: "assets".into(),
            tiles_dir: "tiles".into(),
            sprite_sheet: "sprites/spritesheet_characters.png".into(),
            player: SpriteConfig::default()
                .with_speed(3)
                .with_size(32, 32)
                .with_frame(Rect::new(0, 0, 32, 32)),
        }
    }
}

impl GameConfig {
    pub fn tileset_path(&self, map: &GameMap) -> PathBuf {
        self.assets_dir.join(&self.tiles_dir).join(map.tileset())
    }

    pub fn sprite_sheet_path(&self) -> PathBuf {
        self.assets_dir.join(&self.sprite_sheet)
    }

    /// Top-left corner that centres the player on screen.
    pub fn player_spawn(&self) -> (i32, i32) {
        let (_, w, h, _) = self.player.resolve();
        (self.width as i32 / 2 - w / 2, self.height as i32 / 2 - h / 2)
    }
}
