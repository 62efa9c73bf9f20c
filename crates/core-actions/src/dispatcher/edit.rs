//! Edit sub-dispatch (insert, newline, backspace).
//!
//! These are the only paths that mutate buffer content during a session;
//! each one raises the dirty flag and leaves the cursor on the byte the
//! user expects. Backspace at column 0 is a line join, and at the very
//! start of the document it does nothing.

use super::DispatchResult;
use core_state::EditorState;

pub(crate) fn insert_char(state: &mut EditorState, ch: char) -> DispatchResult {
    let row = state.cursor.row;
    let col = state.cursor.col.min(state.buffer.row_len(row));
    state.buffer.insert_char(row, col, ch);
    state.cursor.col = col + 1;
    state.dirty = true;
    tracing::trace!(target: "actions.dispatch", op = "insert_char", row, col, "edit");
    DispatchResult::changed()
}

pub(crate) fn insert_newline(state: &mut EditorState) -> DispatchResult {
    let row = state.cursor.row;
    if row < state.buffer.row_count() {
        state.buffer.split_row(row, state.cursor.col);
    } else {
        // Enter on the virtual append row materializes an empty line.
        state.buffer.insert_row(row, "");
    }
    state.cursor.row += 1;
    state.cursor.col = 0;
    state.dirty = true;
    tracing::trace!(target: "actions.dispatch", op = "insert_newline", row, "edit");
    DispatchResult::changed()
}

pub(crate) fn backspace(state: &mut EditorState) -> DispatchResult {
    let row = state.cursor.row;
    let col = state.cursor.col;
    if col > 0 {
        if state.buffer.delete_char(row, col - 1) {
            state.cursor.col = col - 1;
            state.dirty = true;
            tracing::trace!(target: "actions.dispatch", op = "backspace", row, col, "edit");
            return DispatchResult::changed();
        }
        return DispatchResult::unchanged();
    }
    if row == 0 {
        // Document start: nothing to the left.
        return DispatchResult::unchanged();
    }
    if row == state.buffer.row_count() {
        // Virtual append row has no content; just step onto the real last row.
        state.cursor.row = row - 1;
        state.cursor.col = state.cursor_row_len();
        return DispatchResult::changed();
    }
    let join_col = state.buffer.join_row(row);
    state.cursor.row = row - 1;
    state.cursor.col = join_col;
    state.dirty = true;
    tracing::trace!(target: "actions.dispatch", op = "join", row, join_col, "edit");
    DispatchResult::changed()
}
