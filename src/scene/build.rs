/// Scene factories. Each function builds one of the four fixed scenes
/// from scratch; `GameState::new` calls them once at startup.
///
/// The main menu reproduces the original 16×16 title layout: a tee-edged
/// double-line frame around the console, the FORTRESS banner, and an
/// inner frame holding the PLAY box and the CREDIT label.

use crate::config::GameConfig;
use crate::domain::menu::{MenuController, Selector};
use crate::domain::sprite::Sprite;
use crate::domain::tilebuf::{TileBuffer, WallStyle, GRID_H, GRID_W};

use super::{Scene, SceneKind};

pub fn main_menu() -> Scene {
    let mut background = TileBuffer::new();
    background.draw_wall(0, 0, GRID_W, GRID_H, WallStyle::Thick);
    background.print(4, 2, "FORTRESS");
    background.draw_wall(4, 4, 8, 8, WallStyle::Thick);

    let mut menu = MenuController::new();

    // PLAY: a thin-framed 6×3 box with the label centered.
    let mut play = TileBuffer::with_size(6, 3);
    play.draw_wall(0, 0, 6, 3, WallStyle::Thin);
    play.print(1, 1, "PLAY");
    menu.add_cell(Selector::new(5, 5, play));

    // CREDIT: a bare one-row label.
    let mut credit = TileBuffer::with_size(6, 1);
    credit.print(0, 0, "CREDIT");
    menu.add_cell(Selector::new(5, 9, credit));

    Scene {
        kind: SceneKind::MainMenu,
        background,
        menu,
        sprites: Vec::new(),
        spawns: Vec::new(),
    }
}

pub fn credits() -> Scene {
    let mut background = TileBuffer::new();
    background.draw_wall(0, 0, GRID_W, GRID_H, WallStyle::Thick);
    background.print(4, 2, "CREDITS");
    background.print(2, 6, "A GAME ABOUT");
    background.print(2, 7, "ONE  SMALL");
    background.print(2, 8, "FORTRESS");
    background.print(1, 13, "ESC TO RETURN");

    Scene {
        kind: SceneKind::Credits,
        background,
        menu: MenuController::new(),
        sprites: Vec::new(),
        spawns: Vec::new(),
    }
}

/// The arena: a hollow walled grid with the enemy and the player.
/// Sprite order matters — the player is listed last, so it is the
/// last mover and wins contested cells.
pub fn arena(config: &GameConfig) -> Scene {
    let mut background = TileBuffer::new();
    background.draw_wall(0, 0, GRID_W, GRID_H, WallStyle::Thick);

    let (ex, ey) = config.arena.enemy_spawn;
    let (px, py) = config.arena.player_spawn;
    let spawns = vec![
        Sprite::new(ex, ey, config.sprites.enemy_glyph, config.sprites.enemy_color),
        Sprite::new(px, py, config.sprites.player_glyph, config.sprites.player_color),
    ];

    Scene {
        kind: SceneKind::Arena,
        background,
        menu: MenuController::new(),
        sprites: spawns.clone(),
        spawns,
    }
}

pub fn win() -> Scene {
    let mut background = TileBuffer::new();
    background.draw_wall(0, 0, GRID_W, GRID_H, WallStyle::Thick);
    background.print(4, 7, "VICTORY!");
    background.print(1, 13, "ESC TO RETURN");

    Scene {
        kind: SceneKind::Win,
        background,
        menu: MenuController::new(),
        sprites: Vec::new(),
        spawns: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_menu_matches_title_layout() {
        let scene = main_menu();
        let mut frame = TileBuffer::new();
        scene.draw(&mut frame);

        // Outer frame corners
        assert_eq!(frame.char_at(0, 0), '╔');
        assert_eq!(frame.char_at(GRID_W - 1, GRID_H - 1), '╝');
        // Banner
        assert_eq!(frame.char_at(4, 2), 'F');
        assert_eq!(frame.char_at(11, 2), 'S');
        // Inner frame
        assert_eq!(frame.char_at(4, 4), '╔');
        assert_eq!(frame.char_at(11, 11), '╝');
        // PLAY box (thin frame inside the inner frame)
        assert_eq!(frame.char_at(5, 5), '┌');
        assert_eq!(frame.char_at(10, 7), '┘');
        assert_eq!(frame.char_at(6, 6), 'P');
        // CREDIT label
        assert_eq!(frame.char_at(5, 9), 'C');
        assert_eq!(frame.char_at(10, 9), 'T');
    }

    #[test]
    fn arena_spawns_enemy_then_player_inside_walls() {
        let config = GameConfig::default();
        let scene = arena(&config);
        assert_eq!(scene.sprites.len(), 2);

        let enemy = &scene.sprites[0];
        let player = &scene.sprites[1];
        assert_eq!((enemy.x, enemy.y), (7, 1));
        assert_eq!((player.x, player.y), (8, 14));

        // Spawns land on blank interior, never on the border
        for s in &scene.sprites {
            assert_eq!(scene.background.char_at(s.x, s.y), ' ');
        }
    }

    #[test]
    fn every_scene_has_a_full_border() {
        let config = GameConfig::default();
        for scene in [main_menu(), credits(), arena(&config), win()] {
            for x in 0..GRID_W {
                assert_ne!(scene.background.char_at(x, 0), ' ');
                assert_ne!(scene.background.char_at(x, GRID_H - 1), ' ');
            }
            for y in 0..GRID_H {
                assert_ne!(scene.background.char_at(0, y), ' ');
                assert_ne!(scene.background.char_at(GRID_W - 1, y), ' ');
            }
        }
    }
}
