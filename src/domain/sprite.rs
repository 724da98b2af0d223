/// Sprites: single-cell movable entities on the arena grid.

use super::tilebuf::{Cell, Rgba};

#[derive(Clone, Debug)]
pub struct Sprite {
    pub x: usize,
    pub y: usize,
    pub glyph: Cell,
    pub health: i32,
}

impl Sprite {
    pub fn new(x: usize, y: usize, ch: char, color: Rgba) -> Self {
        Sprite {
            x,
            y,
            glyph: Cell::new(ch, color, Rgba::BLACK),
            health: 1,
        }
    }

    /// Take one hit. Returns true if the sprite is out of health.
    pub fn hit(&mut self) -> bool {
        self.health -= 1;
        self.health <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_drains_health() {
        let mut s = Sprite::new(3, 4, '@', Rgba::GREEN);
        assert_eq!(s.health, 1);
        assert!(s.hit());
        assert_eq!(s.health, 0);
    }
}
