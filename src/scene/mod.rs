/// Scenes and the application state machine.
///
/// Each scene couples a static background buffer, a (possibly empty)
/// menu, and a sprite list, and owns its input-handling rule. Input
/// handlers return a `Transition` *request*; only `GameState` interprets
/// that request and swaps the active scene. Scene kinds and transitions
/// are closed enums so every dispatch is an exhaustive match.

pub mod arena;
pub mod build;

use crate::config::GameConfig;
use crate::domain::menu::{MenuController, MenuDir};
use crate::domain::sprite::Sprite;
use crate::domain::tilebuf::TileBuffer;

/// Named keys the scenes understand. The input layer translates raw
/// terminal events into these.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameKey {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
}

/// A request to make another scene active.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    Main,
    Credits,
    Play,
    Win,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SceneKind {
    MainMenu,
    Credits,
    Arena,
    Win,
}

pub struct Scene {
    pub kind: SceneKind,
    pub background: TileBuffer,
    pub menu: MenuController,
    pub sprites: Vec<Sprite>,
    /// Pristine sprite set, cloned back in on arena reset.
    pub spawns: Vec<Sprite>,
}

impl Scene {
    /// Composite this scene into a frame buffer: background first, then
    /// menu cells at their offsets, then sprites. Later writes overwrite
    /// earlier ones cell by cell.
    pub fn draw(&self, frame: &mut TileBuffer) {
        frame.clone_from(&self.background);
        for cell in self.menu.cells() {
            frame.blit(cell.buffer(), cell.x, cell.y);
        }
        for sprite in &self.sprites {
            frame.set(sprite.x, sprite.y, sprite.glyph);
        }
    }

    /// Per-scene input rule. Returns a transition request, or None.
    pub fn process_input(&mut self, key: GameKey) -> Option<Transition> {
        match self.kind {
            SceneKind::MainMenu => match key {
                GameKey::Up => {
                    self.menu.process_input(MenuDir::Previous);
                    None
                }
                GameKey::Down => {
                    self.menu.process_input(MenuDir::Next);
                    None
                }
                GameKey::Enter => {
                    if self.menu.selected_index() == 0 {
                        Some(Transition::Play)
                    } else {
                        Some(Transition::Credits)
                    }
                }
                _ => None,
            },
            SceneKind::Credits | SceneKind::Win => match key {
                GameKey::Esc => Some(Transition::Main),
                _ => None,
            },
            SceneKind::Arena => match key {
                GameKey::Esc => Some(Transition::Main),
                GameKey::Up => arena::resolve_movement(self, 0, -1),
                GameKey::Down => arena::resolve_movement(self, 0, 1),
                GameKey::Left => arena::resolve_movement(self, -1, 0),
                GameKey::Right => arena::resolve_movement(self, 1, 0),
                GameKey::Enter => None,
            },
        }
    }

    /// Replace the sprite list with the pristine spawn set.
    pub fn reset_sprites(&mut self) {
        self.sprites = self.spawns.clone();
    }
}

/// The four fixed scenes plus the active one. Built once at startup and
/// owned by the loop in `main` — no process-wide singletons.
pub struct GameState {
    main_menu: Scene,
    credits: Scene,
    arena: Scene,
    win: Scene,
    active: SceneKind,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        GameState {
            main_menu: build::main_menu(),
            credits: build::credits(),
            arena: build::arena(config),
            win: build::win(),
            active: SceneKind::MainMenu,
        }
    }

    pub fn active_scene(&self) -> &Scene {
        match self.active {
            SceneKind::MainMenu => &self.main_menu,
            SceneKind::Credits => &self.credits,
            SceneKind::Arena => &self.arena,
            SceneKind::Win => &self.win,
        }
    }

    pub fn active_scene_mut(&mut self) -> &mut Scene {
        match self.active {
            SceneKind::MainMenu => &mut self.main_menu,
            SceneKind::Credits => &mut self.credits,
            SceneKind::Arena => &mut self.arena,
            SceneKind::Win => &mut self.win,
        }
    }

    /// Honor a transition request from the active scene.
    pub fn apply(&mut self, transition: Transition) {
        self.active = match transition {
            Transition::Main => SceneKind::MainMenu,
            Transition::Credits => SceneKind::Credits,
            Transition::Play => SceneKind::Arena,
            Transition::Win => SceneKind::Win,
        };
    }
}
