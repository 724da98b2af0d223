/// Arena movement and collision resolution.
///
/// One directional input drives every sprite: each slides in the input
/// direction until the next cell's background glyph is not blank space
/// (slide-until-wall, not single-step). Collisions are resolved from a
/// snapshot after all sprites have moved — the last-listed occupant of a
/// contested cell keeps it, every other occupant takes a hit and is
/// removed at zero health in one atomic pass. No list mutation happens
/// while positions are still being scanned.

use crate::domain::tilebuf::TileBuffer;

use super::{Scene, Transition};

/// Is (x, y) enterable? Only blank background cells are; anything drawn
/// (the wall border included) blocks, and out-of-grid counts as wall.
fn passable(background: &TileBuffer, x: i32, y: i32) -> bool {
    if x < 0 || y < 0 || x as usize >= background.width() || y as usize >= background.height() {
        return false;
    }
    background.char_at(x as usize, y as usize) == ' '
}

/// Apply one unit-velocity input to the whole arena.
/// Returns `Transition::Win` when the dust settles on a single sprite;
/// the arena is reset to its spawn configuration before returning it.
pub fn resolve_movement(scene: &mut Scene, dx: i32, dy: i32) -> Option<Transition> {
    // Phase 1: slide every sprite, in list order.
    for sprite in &mut scene.sprites {
        let (mut x, mut y) = (sprite.x as i32, sprite.y as i32);
        while passable(&scene.background, x + dx, y + dy) {
            x += dx;
            y += dy;
        }
        sprite.x = x as usize;
        sprite.y = y as usize;
    }

    // Phase 2: find the losers of every contested cell from the settled
    // positions. A sprite loses if any later-listed sprite shares its cell.
    let positions: Vec<(usize, usize)> = scene.sprites.iter().map(|s| (s.x, s.y)).collect();
    let mut eliminated: Vec<usize> = Vec::new();
    for (i, pos) in positions.iter().enumerate() {
        if positions[i + 1..].contains(pos) && scene.sprites[i].hit() {
            eliminated.push(i);
        }
    }

    // Phase 3: apply removals back-to-front so indices stay valid.
    for &i in eliminated.iter().rev() {
        scene.sprites.remove(i);
    }

    if scene.sprites.len() == 1 {
        scene.reset_sprites();
        return Some(Transition::Win);
    }
    None
}
