use macroquad::prelude::next_frame;
use virion_app::app_loop::{AppEvent, AppState};
use virion_app::frame_input::capture_frame_input;
use virion_app::seed::{generate_runtime_seed, resolve_seed_from_args};
use virion_app::ui_render::draw;
use virion_app::window_config::build_window_conf;
use virion_core::Game;

#[macroquad::main(build_window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed_choice = match resolve_seed_from_args(&args, generate_runtime_seed()) {
        Ok(choice) => choice,
        Err(reason) => {
            eprintln!("virion: {reason}");
            std::process::exit(2);
        }
    };

    // The first run honors the CLI seed; later menu starts reroll.
    let mut next_seed = Some(seed_choice.value());
    let mut game = Game::new(seed_choice.value());
    let mut app = AppState::new();

    loop {
        let keys = capture_frame_input();
        match app.tick(&mut game, &keys) {
            AppEvent::Quit => break,
            AppEvent::StartRun => {
                let seed = next_seed.take().unwrap_or_else(generate_runtime_seed);
                game = Game::new(seed);
            }
            AppEvent::None => {}
        }
        draw(&game, app.screen);
        next_frame().await;
    }
}
