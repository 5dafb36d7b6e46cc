use std::error::Error;

use office_rogue::config::GameConfig;
use office_rogue::engine::Engine;
use office_rogue::entities::Sprite;
use office_rogue::map::GameMap;
use office_rogue::renderer::ImageData;
use office_rogue::scene::Scene;

fn run(config: GameConfig) -> Result<(), Box<dyn Error>> {
    let map = GameMap::load(&config.map_path)?;
    log::info!("loaded map '{}' ({} layers)", map.name(), map.layers().len());

    let mut builder = Engine::builder()
        .with_title(&config.title)
        .with_size(config.width, config.height)
        .with_ups(config.updates_per_second);

    let tileset = builder.add_image(ImageData::open(config.tileset_path(&map))?);
    let sheet = builder.add_image(ImageData::open(config.sprite_sheet_path())?);

    let (x, y) = config.player_spawn();
    let player = Sprite::new(x, y, sheet, config.player);
    let scene = Scene::new(map, tileset, player)?;

    builder.run(scene)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(GameConfig::default()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
