/// Entry point and application loop.

mod config;
mod domain;
mod scene;
mod ui;

use config::GameConfig;
use domain::tilebuf::TileBuffer;
use scene::GameState;
use ui::input::{self, InputEvent};
use ui::renderer::Renderer;

fn main() {
    let config = GameConfig::load();
    let mut game = GameState::new(&config);

    let mut renderer = Renderer::new();
    if let Err(e) = renderer.init() {
        eprintln!("Terminal init failed: {e}");
        return;
    }

    let result = game_loop(&mut game, &mut renderer);

    if let Err(e) = renderer.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }

    if let Err(e) = result {
        eprintln!("Game error: {e}");
    }

    println!();
    println!("Thanks for playing Fortress!");
}

/// Draw the active scene, block for the next batch of input events,
/// dispatch each to the active scene, and honor any transition request
/// immediately. Quit ends the loop; that is the only way out.
fn game_loop(
    game: &mut GameState,
    renderer: &mut Renderer,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut frame = TileBuffer::new();

    loop {
        game.active_scene().draw(&mut frame);
        renderer.present(&frame)?;

        for event in input::wait_events()? {
            match event {
                InputEvent::Quit => return Ok(()),
                InputEvent::Key(key) => {
                    if let Some(transition) = game.active_scene_mut().process_input(key) {
                        game.apply(transition);
                    }
                }
            }
        }
    }
}
