//! Key-capture symbol naming.
//!
//! Responsibilities:
//! - Turn a captured key press into the symbol the daemon grammar uses:
//!   a printable character when available, otherwise a symbolic lowercase
//!   name.
//!
//! Does NOT handle:
//! - Arming or disarming the capture; the front-end routes exactly one key
//!   press here and then resumes normal input handling (single-shot).

use crossterm::event::{KeyCode, KeyEvent};

/// Symbol for a captured key press, or `None` for events that do not map to
/// a key the emitted grammar can name (e.g. bare modifier reports).
pub fn key_symbol(key: &KeyEvent) -> Option<String> {
    let symbol = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("f{n}"),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "escape".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "tab".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::CapsLock => "capslock".to_string(),
        KeyCode::NumLock => "numlock".to_string(),
        KeyCode::ScrollLock => "scrolllock".to_string(),
        KeyCode::PrintScreen => "print".to_string(),
        KeyCode::Pause => "pause".to_string(),
        KeyCode::Menu => "menu".to_string(),
        _ => return None,
    };
    Some(symbol)
}
