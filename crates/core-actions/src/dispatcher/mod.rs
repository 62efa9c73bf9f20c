//! Central key dispatch.
//!
//! Routes a key event to the motion or edit sub-dispatch and reports
//! whether the state changed. Every branch leaves the cursor clamped to a
//! valid position, so callers can hand the state straight to the renderer.

use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::EditorState;

pub(crate) mod edit;
pub(crate) mod motion;

/// Whether a dispatched key changed anything a renderer would care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub changed: bool,
}

impl DispatchResult {
    pub fn changed() -> Self {
        Self { changed: true }
    }
    pub fn unchanged() -> Self {
        Self { changed: false }
    }
}

/// Apply one key event to the session.
pub fn dispatch_key(state: &mut EditorState, key: KeyEvent) -> DispatchResult {
    match key.code {
        KeyCode::Left
        | KeyCode::Right
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Home
        | KeyCode::End
        | KeyCode::PageUp
        | KeyCode::PageDown => motion::handle_motion(state, key),
        KeyCode::Char(ch) if !key.mods.contains(KeyModifiers::CTRL) && !ch.is_control() => {
            edit::insert_char(state, ch)
        }
        KeyCode::Tab => edit::insert_char(state, '\t'),
        KeyCode::Enter => edit::insert_newline(state),
        KeyCode::Backspace => edit::backspace(state),
        _ => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_state::TextBuffer;
    use core_text::Position;

    fn state_of(content: &str) -> EditorState {
        EditorState::new(TextBuffer::from_str(content, 8))
    }

    #[test]
    fn down_down_right_clamps_to_short_row() {
        let mut state = state_of("ab\n\nc\td\n");
        for key in [
            KeyEvent::new(KeyCode::Down),
            KeyEvent::new(KeyCode::Down),
            KeyEvent::new(KeyCode::Right),
        ] {
            dispatch_key(&mut state, key);
        }
        assert_eq!(state.cursor, Position::new(2, 1));
    }

    #[test]
    fn printable_chars_insert_and_mark_dirty() {
        let mut state = state_of("");
        let res = dispatch_key(&mut state, KeyEvent::new(KeyCode::Char('q')));
        assert!(res.changed);
        assert!(state.dirty);
        assert_eq!(state.buffer.row(0).unwrap().raw(), "q");
    }

    #[test]
    fn ctrl_chords_fall_through_untouched() {
        let mut state = state_of("abc\n");
        let res = dispatch_key(&mut state, KeyEvent::ctrl('s'));
        assert!(!res.changed);
        assert!(!state.dirty);
        assert_eq!(state.buffer.serialize(), "abc\n");
    }

    #[test]
    fn tab_key_inserts_a_literal_tab() {
        let mut state = state_of("");
        dispatch_key(&mut state, KeyEvent::new(KeyCode::Tab));
        assert_eq!(state.buffer.row(0).unwrap().raw(), "\t");
        assert_eq!(state.buffer.row(0).unwrap().rendered(), "        ");
    }

    #[test]
    fn escape_is_a_noop() {
        let mut state = state_of("x\n");
        let res = dispatch_key(&mut state, KeyEvent::new(KeyCode::Esc));
        assert!(!res.changed);
    }
}
