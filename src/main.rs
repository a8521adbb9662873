use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use raylib::prelude::*;

use kinetic_slider::constants::*;
use kinetic_slider::engine::Surface;
use kinetic_slider::nav::NavBar;
use kinetic_slider::render::KineticSurface;
use kinetic_slider::state::Direction;
use kinetic_slider::texture_loader::load_sorted_image_paths;
use kinetic_slider::{FrameInput, Slider, SliderConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Kinetic image and text slider")]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial window width
    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    width: i32,

    /// Initial window height
    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    height: i32,

    /// Directory of images, used when the configuration lists none
    image_dir: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<SliderConfig> {
    let mut config = match &args.config {
        Some(path) => SliderConfig::load(path)?,
        None => SliderConfig::default(),
    };
    if config.slide_images.is_empty() {
        if let Some(dir) = &args.image_dir {
            config.slide_images = load_sorted_image_paths(dir)
                .with_context(|| format!("no slides configured, scanning {}", dir.display()))?;
        }
    }
    if config.slide_images.is_empty() {
        bail!("no slide images: pass an image directory or a config listing slideImages");
    }
    Ok(config)
}

fn window_size(rl: &RaylibHandle) -> Vector2 {
    Vector2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32)
}

fn run<S: Surface>(rl: &mut RaylibHandle, thread: &RaylibThread, config: SliderConfig) -> Result<()> {
    let mut slider = Slider::new(config, window_size(rl));
    let mut surface = S::load(rl, thread, slider.config(), slider.metrics())?;
    let mut nav = NavBar::new(window_size(rl));
    let mut pointing = false;

    slider.start();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let viewport = window_size(rl);
        let pointer = rl.is_cursor_on_screen().then(|| rl.get_mouse_position());
        let show_nav = slider.config().nav;

        if rl.is_window_resized() {
            nav.relayout(viewport);
        }

        // --- Input ---
        let mouse = rl.get_mouse_position();
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let on_nav = show_nav && nav.click(mouse, &mut slider);
            if !on_nav {
                slider.pointer_down(mouse);
            }
        } else if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            slider.pointer_move(mouse);
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) && slider.phase().is_swiping() {
            slider.pointer_up();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            nav.press(Direction::Prev, &mut slider);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            nav.press(Direction::Next, &mut slider);
        }

        if slider.config().button_mode {
            let over_title = pointer
                .zip(surface.title_bounds(slider.scene(), slider.current_index()))
                .is_some_and(|(p, bounds)| bounds.check_collision_point_rec(slider.view().to_stage(p)));
            if over_title != pointing {
                pointing = over_title;
                rl.set_mouse_cursor(if pointing {
                    MouseCursor::MOUSE_CURSOR_POINTING_HAND
                } else {
                    MouseCursor::MOUSE_CURSOR_DEFAULT
                });
            }
        }

        // --- Update ---
        let metrics = *slider.metrics();
        slider.update(FrameInput { dt, pointer, viewport });
        if *slider.metrics() != metrics {
            surface.relayout(slider.metrics());
        }

        // --- Render ---
        let mut d = rl.begin_drawing(thread);
        surface.render(&mut d, thread, slider.scene(), slider.view());
        if show_nav {
            nav.draw(&mut d, pointer);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    info!("starting with {} slides", config.slide_count());

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Kinetic Slider")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    run::<KineticSurface>(&mut rl, &thread, config)
}
