use rand::SeedableRng;
use rand_pcg::Pcg32;

use coiner::assets::SpriteSizes;
use coiner::clock::FrameClock;
use coiner::config::DEFAULT_CONFIG_PATH;
use coiner::platform::{SdlEvents, SdlSurface, TextureStore};
use coiner::{Game, GameConfig, GameError, GameSession};

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::load_or_default(DEFAULT_CONFIG_PATH)?;

    let sdl_context = sdl2::init().map_err(GameError::Platform)?;
    let video_subsystem = sdl_context.video().map_err(GameError::Platform)?;
    let _image_context =
        sdl2::image::init(sdl2::image::InitFlag::PNG).map_err(GameError::Platform)?;

    let window = video_subsystem
        .window(&config.window_title, config.window_width, config.window_height)
        .position_centered()
        .build()
        .map_err(|e| GameError::Platform(e.to_string()))?;

    let canvas = window
        .into_canvas()
        .build()
        .map_err(|e| GameError::Platform(e.to_string()))?;
    let texture_creator = canvas.texture_creator();
    let event_pump = sdl_context.event_pump().map_err(GameError::Platform)?;

    let mut textures = TextureStore::new(&texture_creator);
    let sprites = SpriteSizes::load(&mut textures, &config.assets)?;

    // Same seed, same coin and ghost positions
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("Starting Coiner with seed {}", seed);

    let session = GameSession::new(&config, sprites, Pcg32::seed_from_u64(seed))?;
    let mut game = Game::new(session);

    let mut surface = SdlSurface::new(canvas, textures);
    let mut events = SdlEvents::new(event_pump);
    let mut clock = FrameClock::new(config.frame_rate);

    game.run(&mut events, &mut surface, &mut clock)?;

    Ok(())
}
