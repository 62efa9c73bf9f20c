//! Motion sub-dispatch (cursor movement).
//!
//! Pure cursor arithmetic: no buffer mutation, no side effects beyond the
//! cursor itself. Every motion ends with a clamp of the column to the
//! target row's length, so moving from a long row onto a short one lands
//! on the short row's end rather than in thin air.
//!
//! Horizontal motions stay inside the row; only the Shift "extend"
//! modifier carries Left/Right across a row boundary (to the previous
//! row's end / the next row's start). Vertical motions may rest on the
//! virtual empty row just past the last line, where appends happen.

use super::DispatchResult;
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::EditorState;

pub(crate) fn handle_motion(state: &mut EditorState, key: KeyEvent) -> DispatchResult {
    let before = state.cursor;
    let extend = key.mods.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Left => move_left(state, extend),
        KeyCode::Right => move_right(state, extend),
        KeyCode::Up => {
            if state.cursor.row > 0 {
                state.cursor.row -= 1;
            }
        }
        KeyCode::Down => {
            if state.cursor.row < state.buffer.row_count() {
                state.cursor.row += 1;
            }
        }
        KeyCode::PageUp => {
            let jump = state.last_text_height.max(1);
            state.cursor.row = state.cursor.row.saturating_sub(jump);
        }
        KeyCode::PageDown => {
            let jump = state.last_text_height.max(1);
            state.cursor.row = (state.cursor.row + jump).min(state.buffer.row_count());
        }
        KeyCode::Home => state.cursor.col = 0,
        KeyCode::End => state.cursor.col = state.cursor_row_len(),
        _ => {}
    }
    state.clamp_cursor();
    if before != state.cursor {
        tracing::trace!(
            target: "actions.dispatch",
            key = %key,
            from_row = before.row,
            from_col = before.col,
            to_row = state.cursor.row,
            to_col = state.cursor.col,
            "motion"
        );
        DispatchResult::changed()
    } else {
        DispatchResult::unchanged()
    }
}

fn move_left(state: &mut EditorState, extend: bool) {
    if state.cursor.col > 0 {
        state.cursor.col -= 1;
    } else if extend && state.cursor.row > 0 {
        state.cursor.row -= 1;
        state.cursor.col = state.cursor_row_len();
    }
}

fn move_right(state: &mut EditorState, extend: bool) {
    if state.cursor.col < state.cursor_row_len() {
        state.cursor.col += 1;
    } else if extend && state.cursor.row < state.buffer.row_count() {
        state.cursor.row += 1;
        state.cursor.col = 0;
    }
}
