//! Key mapping from terminal events to input intents.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a keyboard event to an intent.
///
/// Key releases are ignored; auto-repeat presses type again like a plain tty.
pub fn map_key_event(key: KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(Intent::Quit);
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Backspace | KeyCode::Delete => Some(Intent::Backspace),
        KeyCode::Enter => Some(Intent::Submit),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Intent::from_char(c),
        _ => None,
    }
}

/// Esc or Ctrl-C leave the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
