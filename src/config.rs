/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory (or CWD).
/// Falls back to sensible defaults if the file is missing or incomplete.
/// Configurable: sprite appearance and arena spawn coordinates.

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::tilebuf::{Rgba, GRID_H, GRID_W};

// ── Public Config Struct ──

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub sprites: SpriteConfig,
    pub arena: ArenaConfig,
}

#[derive(Clone, Debug)]
pub struct SpriteConfig {
    pub player_glyph: char,
    pub player_color: Rgba,
    pub enemy_glyph: char,
    pub enemy_color: Rgba,
}

#[derive(Clone, Debug)]
pub struct ArenaConfig {
    pub player_spawn: (usize, usize),
    pub enemy_spawn: (usize, usize),
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            sprites: SpriteConfig {
                player_glyph: '@',
                player_color: Rgba::new(64, 255, 64, 255),
                enemy_glyph: 'g',
                enemy_color: Rgba::new(255, 64, 64, 255),
            },
            arena: ArenaConfig {
                player_spawn: (8, 14),
                enemy_spawn: (7, 1),
            },
        }
    }
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    sprites: TomlSprites,
    #[serde(default)]
    arena: TomlArena,
}

#[derive(Deserialize, Debug)]
struct TomlSprites {
    #[serde(default = "default_player_glyph")]
    player_glyph: String,
    #[serde(default = "default_player_color")]
    player_color: [u8; 4],
    #[serde(default = "default_enemy_glyph")]
    enemy_glyph: String,
    #[serde(default = "default_enemy_color")]
    enemy_color: [u8; 4],
}

#[derive(Deserialize, Debug)]
struct TomlArena {
    #[serde(default = "default_player_spawn")]
    player_spawn: [usize; 2],
    #[serde(default = "default_enemy_spawn")]
    enemy_spawn: [usize; 2],
}

// ── Defaults ──

fn default_player_glyph() -> String { "@".into() }
fn default_player_color() -> [u8; 4] { [64, 255, 64, 255] }
fn default_enemy_glyph() -> String { "g".into() }
fn default_enemy_color() -> [u8; 4] { [255, 64, 64, 255] }
fn default_player_spawn() -> [usize; 2] { [8, 14] }
fn default_enemy_spawn() -> [usize; 2] { [7, 1] }

impl Default for TomlSprites {
    fn default() -> Self {
        TomlSprites {
            player_glyph: default_player_glyph(),
            player_color: default_player_color(),
            enemy_glyph: default_enemy_glyph(),
            enemy_color: default_enemy_color(),
        }
    }
}

impl Default for TomlArena {
    fn default() -> Self {
        TomlArena {
            player_spawn: default_player_spawn(),
            enemy_spawn: default_enemy_spawn(),
        }
    }
}

// ── Loading ──

impl GameConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys gracefully fall back to defaults.
    pub fn load() -> Self {
        let toml_cfg = load_toml(&candidate_dirs());
        GameConfig::from_toml(toml_cfg)
    }

    fn from_toml(toml_cfg: TomlConfig) -> Self {
        let defaults = GameConfig::default();
        GameConfig {
            sprites: SpriteConfig {
                player_glyph: glyph_or(&toml_cfg.sprites.player_glyph, defaults.sprites.player_glyph),
                player_color: rgba(toml_cfg.sprites.player_color),
                enemy_glyph: glyph_or(&toml_cfg.sprites.enemy_glyph, defaults.sprites.enemy_glyph),
                enemy_color: rgba(toml_cfg.sprites.enemy_color),
            },
            arena: ArenaConfig {
                player_spawn: spawn_or(toml_cfg.arena.player_spawn, defaults.arena.player_spawn),
                enemy_spawn: spawn_or(toml_cfg.arena.enemy_spawn, defaults.arena.enemy_spawn),
            },
        }
    }
}

fn rgba(c: [u8; 4]) -> Rgba {
    Rgba::new(c[0], c[1], c[2], c[3])
}

/// First char of the configured glyph string, or the default when empty.
fn glyph_or(s: &str, fallback: char) -> char {
    s.chars().next().unwrap_or(fallback)
}

/// A spawn must land inside the wall border; out-of-range coordinates
/// fall back to the default with a warning.
fn spawn_or(raw: [usize; 2], fallback: (usize, usize)) -> (usize, usize) {
    let [x, y] = raw;
    if (1..GRID_W - 1).contains(&x) && (1..GRID_H - 1).contains(&y) {
        (x, y)
    } else {
        eprintln!("Warning: spawn ({x}, {y}) is outside the arena interior; using default");
        fallback
    }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

/// Search for config.toml in candidate directories.
fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                    Ok(cfg) => return cfg,
                    Err(e) => {
                        eprintln!("Warning: config.toml parse error: {e}");
                        eprintln!("Using default settings.");
                        return TomlConfig::default();
                    }
                },
                Err(e) => {
                    eprintln!("Warning: could not read {}: {e}", path.display());
                }
            }
        }
    }
    TomlConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_full_defaults() {
        let cfg = GameConfig::from_toml(toml::from_str("").unwrap());
        assert_eq!(cfg.sprites.player_glyph, '@');
        assert_eq!(cfg.sprites.enemy_glyph, 'g');
        assert_eq!(cfg.arena.player_spawn, (8, 14));
        assert_eq!(cfg.arena.enemy_spawn, (7, 1));
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_keys() {
        let text = r#"
            [sprites]
            player_glyph = "P"
        "#;
        let cfg = GameConfig::from_toml(toml::from_str(text).unwrap());
        assert_eq!(cfg.sprites.player_glyph, 'P');
        assert_eq!(cfg.sprites.enemy_glyph, 'g');
        assert_eq!(cfg.arena.enemy_spawn, (7, 1));
    }

    #[test]
    fn colors_map_to_rgba() {
        let text = r#"
            [sprites]
            enemy_color = [1, 2, 3, 4]
        "#;
        let cfg = GameConfig::from_toml(toml::from_str(text).unwrap());
        assert_eq!(cfg.sprites.enemy_color, Rgba::new(1, 2, 3, 4));
    }

    #[test]
    fn out_of_range_spawn_falls_back() {
        let text = r#"
            [arena]
            player_spawn = [0, 5]
            enemy_spawn = [15, 15]
        "#;
        let cfg = GameConfig::from_toml(toml::from_str(text).unwrap());
        assert_eq!(cfg.arena.player_spawn, (8, 14));
        assert_eq!(cfg.arena.enemy_spawn, (7, 1));
    }
}
