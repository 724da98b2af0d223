/// Input event source.
///
/// The application loop blocks on the next terminal event and then
/// drains everything else already pending, yielding one batch per
/// iteration. Raw crossterm events are translated into the named keys
/// the scenes understand; everything else is dropped here.
///
/// Quit is a first-class event: Ctrl+C or `q`, the terminal stand-ins
/// for a window-close request.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::scene::GameKey;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputEvent {
    Key(GameKey),
    Quit,
}

/// Block until at least one event arrives, then drain the rest of the
/// pending queue without blocking. Call once per loop iteration.
pub fn wait_events() -> io::Result<Vec<InputEvent>> {
    let mut batch = Vec::new();

    collect(event::read()?, &mut batch);
    while event::poll(Duration::ZERO)? {
        collect(event::read()?, &mut batch);
    }

    Ok(batch)
}

fn collect(event: Event, batch: &mut Vec<InputEvent>) {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if let Some(ev) = translate(key) {
            batch.push(ev);
        }
    }
}

/// Map a key-down event to a game event. Unbound keys yield None.
fn translate(key: KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return Some(InputEvent::Quit);
    }

    match key.code {
        KeyCode::Up => Some(InputEvent::Key(GameKey::Up)),
        KeyCode::Down => Some(InputEvent::Key(GameKey::Down)),
        KeyCode::Left => Some(InputEvent::Key(GameKey::Left)),
        KeyCode::Right => Some(InputEvent::Key(GameKey::Right)),
        KeyCode::Enter => Some(InputEvent::Key(GameKey::Enter)),
        KeyCode::Esc => Some(InputEvent::Key(GameKey::Esc)),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn named_keys_translate() {
        assert_eq!(translate(key(KeyCode::Up)), Some(InputEvent::Key(GameKey::Up)));
        assert_eq!(translate(key(KeyCode::Enter)), Some(InputEvent::Key(GameKey::Enter)));
        assert_eq!(translate(key(KeyCode::Esc)), Some(InputEvent::Key(GameKey::Esc)));
    }

    #[test]
    fn quit_keys_translate() {
        assert_eq!(translate(key(KeyCode::Char('q'))), Some(InputEvent::Quit));
        assert_eq!(
            translate(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn unbound_keys_are_dropped() {
        assert_eq!(translate(key(KeyCode::Char('x'))), None);
        assert_eq!(translate(key(KeyCode::Tab)), None);
    }
}
