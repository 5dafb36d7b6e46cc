use office_rogue::config::GameConfig;
use office_rogue::entities::{Drawable, Sprite, SpriteConfig, Tile, TileBoard};
use office_rogue::geometry::Rect;
use office_rogue::input::{InputState, KeyCode};
use office_rogue::map::{GameMap, Layer};
use office_rogue::renderer::{DrawCommand, DrawList, TextureId};
use office_rogue::scene::Scene;

const TILESET: TextureId = TextureId::new(0);
const SHEET: TextureId = TextureId::new(1);

// ── Helpers ───────────────────────────────────────────────────────────────

fn two_layer_map() -> GameMap {
    GameMap::new(
        "office",
        32,
        32,
        "office.png",
        vec![
            Layer::new("floor", 2, 2, vec![1, 2, 3, 4]).unwrap(),
            Layer::new("decor", 2, 2, vec![0, 9, 0, 0]).unwrap(),
        ],
    )
    .unwrap()
}

fn sprite(x: i32, y: i32) -> Sprite {
    Sprite::new(x, y, SHEET, SpriteConfig::default())
}

fn holding(key: KeyCode) -> InputState {
    let mut input = InputState::new();
    input.press(key);
    input
}

fn drawn(scene: &Scene) -> Vec<DrawCommand> {
    let mut list = DrawList::new();
    scene.draw(&mut list);
    list.commands().to_vec()
}

// ── Drawing ───────────────────────────────────────────────────────────────

#[test]
fn backdrop_comes_first_then_tiles_then_sprites() {
    let scene = Scene::new(two_layer_map(), TILESET, sprite(5, 6)).unwrap();
    let cmds = drawn(&scene);

    // 1 backdrop + 8 tiles + 1 player.
    assert_eq!(cmds.len(), 10);
    assert_eq!(cmds[0], DrawCommand { texture: TILESET, src: None, dest: (0, 0) });

    let tile_indices: Vec<i32> = cmds[1..9].iter().map(|c| c.src.unwrap().x / 32 + c.src.unwrap().y / 32 * 8).collect();
    assert_eq!(tile_indices, vec![1, 2, 3, 4, 0, 9, 0, 0]);

    let tile_dests: Vec<(i32, i32)> = cmds[1..5].iter().map(|c| c.dest).collect();
    assert_eq!(tile_dests, vec![(0, 0), (32, 0), (0, 32), (32, 32)]);

    assert_eq!(cmds[9], DrawCommand { texture: SHEET, src: Some(Rect::new(0, 0, 32, 32)), dest: (5, 6) });
}

#[test]
fn index_zero_tiles_are_drawn() {
    let map = GameMap::new("walls", 32, 32, "t.png", vec![Layer::filled("ground", 2, 1, 0).unwrap()]).unwrap();
    let scene = Scene::new(map, TILESET, sprite(0, 0)).unwrap();
    let cmds = drawn(&scene);
    assert_eq!(cmds[1].src, Some(Rect::new(0, 0, 32, 32)));
    assert_eq!(cmds[2].src, Some(Rect::new(0, 0, 32, 32)));
    assert_eq!(cmds[2].dest, (32, 0));
}

#[test]
fn sprites_paint_in_list_order() {
    let mut scene = Scene::new(two_layer_map(), TILESET, sprite(1, 1)).unwrap();
    scene.push_decoration(sprite(2, 2));
    scene.insert_decoration(0, sprite(3, 3));

    let dests: Vec<(i32, i32)> = drawn(&scene).iter().rev().take(3).map(|c| c.dest).collect();
    // Reversed: last painted first.
    assert_eq!(dests, vec![(2, 2), (1, 1), (3, 3)]);
}

#[test]
fn board_draws_like_the_scene_map() {
    let board = TileBoard::new(TILESET, vec![Tile { index: 10, x: 64, y: 0, tileset: TILESET }]);
    let mut list = DrawList::new();
    board.draw(&mut list);
    assert_eq!(list.len(), 2);
    assert_eq!(list.commands()[1].src, Some(Rect::new(64, 32, 32, 32)));
    assert_eq!(list.commands()[1].dest, (64, 0));
}

// ── Updating ──────────────────────────────────────────────────────────────

#[test]
fn only_the_player_moves() {
    let map = GameMap::new("open", 32, 32, "t.png", vec![Layer::filled("ground", 20, 20, 1).unwrap()]).unwrap();
    let mut scene = Scene::new(map, TILESET, sprite(100, 100)).unwrap();
    scene.insert_decoration(0, sprite(200, 200));
    scene.push_decoration(sprite(300, 300));

    scene.update(&holding(KeyCode::ArrowRight));

    assert_eq!(scene.player().position(), (103, 100));
    let positions: Vec<(i32, i32)> = scene.entities().iter().map(|s| s.position()).collect();
    assert_eq!(positions, vec![(200, 200), (103, 100), (300, 300)]);
}

#[test]
fn player_collides_with_scene_map() {
    // 2x2 map: the player fills tile (0, 0) and tile (1, 0) is a wall.
    let map = GameMap::new("tight", 32, 32, "t.png", vec![Layer::new("ground", 2, 2, vec![1, 0, 1, 1]).unwrap()]).unwrap();
    let mut scene = Scene::new(map, TILESET, sprite(0, 0)).unwrap();

    scene.update(&holding(KeyCode::KeyD));
    assert_eq!(scene.player().position(), (0, 0));

    scene.update(&holding(KeyCode::KeyS));
    assert_eq!(scene.player().position(), (0, 3));
}

#[test]
fn default_config_spawns_player_centred() {
    let config = GameConfig::default();
    assert_eq!(config.player_spawn(), (304, 224));

    let map = GameMap::new("open", 32, 32, "t.png", vec![Layer::filled("ground", 20, 20, 1).unwrap()]).unwrap();
    let (x, y) = config.player_spawn();
    let mut scene = Scene::new(map, TILESET, Sprite::new(x, y, SHEET, config.player)).unwrap();
    scene.update(&holding(KeyCode::ArrowRight));
    assert_eq!(scene.player().position(), (307, 224));
}

#[test]
fn config_resolves_asset_paths() {
    let config = GameConfig::default();
    let map = GameMap::new("m", 32, 32, "office.png", vec![]).unwrap();
    assert_eq!(config.tileset_path(&map), std::path::Path::new("assets/tiles/office.png"));
    assert_eq!(
        config.sprite_sheet_path(),
        std::path::Path::new("assets/sprites/spritesheet_characters.png")
    );
}
