use log::{debug, error, info};

mod assets;
mod config;
mod frame_limiter;
mod game_state;
mod gui;
mod input_system;
mod material;
mod text;

use assets::{load_material_icons, TextureAtlas};
use config::{BACKGROUND_COLOR, MATERIAL_IMAGE_SIZE, TARGET_FPS, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use frame_limiter::FrameLimiter;
use game_state::{GameState, Selection};
use gui::{render_selection_under_cursor, MaterialMenu};
use input_system::{InputAction, InputSystem};
use material::OrbType;

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting {} v{}", WINDOW_TITLE, env!("CARGO_PKG_VERSION"));

    let sdl_context = sdl2::init()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    // Icons are decoded before the window opens, so a missing asset exits
    // without ever showing a frame.
    let icon_surfaces = load_material_icons(MATERIAL_IMAGE_SIZE).map_err(|e| {
        error!("{}", e);
        String::from(e)
    })?;

    let mut game_state = GameState::new()?;
    info!("Loaded {} materials", game_state.materials.len());
    for orb in OrbType::ALL {
        if let Some(material) = game_state.materials.get(orb) {
            debug!(
                "{} ({}): {:?} x{} - {}",
                material.name,
                orb.id(),
                material.rarity,
                material.amount,
                material.description
            );
        }
    }

    let video_subsystem = sdl_context.video()?;
    let window = video_subsystem
        .window(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    // Surfaces are consumed here; only textures outlive startup
    let mut atlas = TextureAtlas::upload(&texture_creator, icon_surfaces, MATERIAL_IMAGE_SIZE)?;

    let input_system = InputSystem::new();
    let material_menu = MaterialMenu::new();
    let mut frame_limiter = FrameLimiter::new(TARGET_FPS);

    info!(
        "Window {}x{} @ {} fps, {} material boxes",
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        TARGET_FPS,
        material_menu.cells().len()
    );

    'running: loop {
        canvas.set_draw_color(BACKGROUND_COLOR);
        canvas.clear();

        // [1] Input handling
        for action in input_system.poll_events(&mut event_pump) {
            if action == InputAction::Quit {
                break 'running;
            }
            game_state.handle_action(action, &material_menu);
        }

        // [2] Rendering
        material_menu.render(&mut canvas, &mut atlas, &game_state.materials)?;

        if let Selection::Holding(orb) = game_state.selection {
            let mouse = event_pump.mouse_state();
            render_selection_under_cursor(&mut canvas, &atlas, orb, mouse.x(), mouse.y())?;
        }

        canvas.present();
        frame_limiter.wait();
    }

    info!("Window closed, shutting down");

    Ok(())
}
