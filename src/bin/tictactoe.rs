use anyhow::Result;
use log::info;
use raylib::prelude::*;

use kinetic_slider::constants::FPS;
use kinetic_slider::tictactoe::{Game, Outcome, Sign, StarField};

const WINDOW_WIDTH: i32 = 600;
const WINDOW_HEIGHT: i32 = 720;
const CELL: f32 = 150.0;
const MESSAGE_SIZE: i32 = 32;
const SIGN_SIZE: i32 = 96;

/// Top-left corner of the 3x3 grid, centred horizontally.
fn grid_origin(window: Vector2) -> Vector2 {
    Vector2::new((window.x - CELL * 3.0) / 2.0, 120.0)
}

fn cell_rect(origin: Vector2, index: usize) -> Rectangle {
    let (row, col) = (index / 3, index % 3);
    Rectangle::new(origin.x + col as f32 * CELL, origin.y + row as f32 * CELL, CELL, CELL)
}

fn restart_rect(window: Vector2) -> Rectangle {
    let origin = grid_origin(window);
    Rectangle::new(window.x / 2.0 - 90.0, origin.y + CELL * 3.0 + 40.0, 180.0, 50.0)
}

fn draw_centred(d: &mut RaylibDrawHandle, text: &str, centre: Vector2, size: i32, color: Color) {
    let width = d.measure_text(text, size);
    d.draw_text(text, centre.x as i32 - width / 2, centre.y as i32 - size / 2, size, color);
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Tic-Tac-Toe")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut game = Game::new();
    let mut stars = StarField::new();

    while !rl.window_should_close() {
        let window = Vector2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        let origin = grid_origin(window);

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mouse = rl.get_mouse_position();
            if game.is_over() {
                if restart_rect(window).check_collision_point_rec(mouse) {
                    game.reset();
                    stars.clear();
                    info!("game restarted");
                }
            } else if let Some(index) = (0..9).find(|&i| cell_rect(origin, i).check_collision_point_rec(mouse)) {
                if let Some(outcome) = game.play(index) {
                    match outcome {
                        Outcome::Won(sign) => {
                            info!("player {} won", sign);
                            stars.spawn(window);
                        }
                        Outcome::Draw => info!("draw"),
                        Outcome::Next(_) => {}
                    }
                }
            }
        }

        stars.update(window.y);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::new(0x1e, 0x1e, 0x2e, 0xff));
        stars.draw(&mut d);

        let message_color = match game.outcome() {
            Outcome::Won(_) => Color::GOLD,
            _ => Color::RAYWHITE,
        };
        draw_centred(&mut d, &game.message(), Vector2::new(window.x / 2.0, 60.0), MESSAGE_SIZE, message_color);

        for index in 0..9 {
            let cell = cell_rect(origin, index);
            d.draw_rectangle_lines_ex(cell, 2.0, Color::RAYWHITE);
            let centre = Vector2::new(cell.x + cell.width / 2.0, cell.y + cell.height / 2.0);
            match game.board().get(index) {
                Some(Sign::X) => draw_centred(&mut d, "X", centre, SIGN_SIZE, Color::SKYBLUE),
                Some(Sign::O) => draw_centred(&mut d, "O", centre, SIGN_SIZE, Color::PINK),
                None => {}
            }
        }

        if game.is_over() {
            let button = restart_rect(window);
            d.draw_rectangle_rec(button, Color::RAYWHITE);
            draw_centred(
                &mut d,
                "Restart",
                Vector2::new(button.x + button.width / 2.0, button.y + button.height / 2.0),
                24,
                Color::BLACK,
            );
        }
    }
    Ok(())
}
