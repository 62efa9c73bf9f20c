//! Translation from crossterm events to the normalized core event types.
//!
//! Only key presses and resizes survive translation; releases, repeats
//! reported as distinct kinds, mouse traffic, and focus changes are
//! dropped here so the core never sees transport details.

use core_events::{Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::event as ct;

pub fn translate(event: ct::Event) -> Option<Event> {
    match event {
        ct::Event::Key(key) if key.kind == ct::KeyEventKind::Press => {
            translate_key(key).map(Event::Key)
        }
        ct::Event::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
        _ => None,
    }
}

fn translate_key(key: ct::KeyEvent) -> Option<KeyEvent> {
    let code = match key.code {
        ct::KeyCode::Char(c) => KeyCode::Char(c),
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Esc => KeyCode::Esc,
        ct::KeyCode::Backspace => KeyCode::Backspace,
        ct::KeyCode::Tab => KeyCode::Tab,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Left => KeyCode::Left,
        ct::KeyCode::Right => KeyCode::Right,
        ct::KeyCode::Home => KeyCode::Home,
        ct::KeyCode::End => KeyCode::End,
        ct::KeyCode::PageUp => KeyCode::PageUp,
        ct::KeyCode::PageDown => KeyCode::PageDown,
        _ => return None,
    };
    let mut mods = KeyModifiers::empty();
    if key.modifiers.contains(ct::KeyModifiers::CONTROL) {
        mods |= KeyModifiers::CTRL;
    }
    if key.modifiers.contains(ct::KeyModifiers::ALT) {
        mods |= KeyModifiers::ALT;
    }
    if key.modifiers.contains(ct::KeyModifiers::SHIFT) {
        mods |= KeyModifiers::SHIFT;
    }
    Some(KeyEvent::with_mods(code, mods))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: ct::KeyCode, mods: ct::KeyModifiers) -> ct::Event {
        ct::Event::Key(ct::KeyEvent::new(code, mods))
    }

    #[test]
    fn plain_char_press_translates() {
        let ev = translate(press(ct::KeyCode::Char('a'), ct::KeyModifiers::NONE));
        assert_eq!(ev, Some(Event::Key(KeyEvent::new(KeyCode::Char('a')))));
    }

    #[test]
    fn ctrl_modifier_carries_over() {
        let ev = translate(press(ct::KeyCode::Char('q'), ct::KeyModifiers::CONTROL));
        assert_eq!(ev, Some(Event::Key(KeyEvent::ctrl('q'))));
    }

    #[test]
    fn release_events_are_dropped() {
        let mut key = ct::KeyEvent::new(ct::KeyCode::Char('a'), ct::KeyModifiers::NONE);
        key.kind = ct::KeyEventKind::Release;
        assert_eq!(translate(ct::Event::Key(key)), None);
    }

    #[test]
    fn resize_passes_through() {
        assert_eq!(
            translate(ct::Event::Resize(80, 24)),
            Some(Event::Resize(80, 24))
        );
    }

    #[test]
    fn function_keys_are_ignored() {
        assert_eq!(
            translate(press(ct::KeyCode::F(5), ct::KeyModifiers::NONE)),
            None
        );
    }
}
