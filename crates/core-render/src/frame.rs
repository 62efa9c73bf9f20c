//! Frame composition: the visible row slices, cursor screen position, and
//! status line, bundled into one plain value the writer can draw.
//!
//! Building a frame is the refresh step: it recomputes the viewport scroll
//! first, so callers only ever see frames whose cursor is inside the
//! window. Rows past the buffer end render as `~`, which is also how an
//! empty document shows a single virtual blank line.

use crate::status::{build_status, StatusContext};
use crate::viewport::Viewport;
use core_state::EditorState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// One string per text row, already sliced to the visible columns.
    pub lines: Vec<String>,
    /// Cursor position relative to the top-left of the text area.
    pub cursor_col: u16,
    pub cursor_row: u16,
    pub status: String,
}

pub fn build_frame(state: &mut EditorState, viewport: &mut Viewport) -> Frame {
    let rx = viewport.scroll_to_cursor(&state.buffer, state.cursor);
    state.last_text_height = viewport.text_rows;

    let mut lines = Vec::with_capacity(viewport.text_rows);
    for y in 0..viewport.text_rows {
        let file_row = y + viewport.row_offset;
        match state.buffer.row(file_row) {
            Some(row) => {
                let rendered = row.rendered();
                let start = viewport.col_offset.min(rendered.len());
                let end = (viewport.col_offset + viewport.text_cols).min(rendered.len());
                lines.push(rendered[start..end].to_string());
            }
            None => lines.push("~".to_string()),
        }
    }

    let mut status = build_status(&StatusContext {
        file_name: state.file_name.as_deref(),
        dirty: state.dirty,
        row_count: state.buffer.row_count(),
        cursor_row: state.cursor.row,
        cursor_col: rx,
        message: state.status_message.as_deref(),
    });
    if status.len() > viewport.text_cols {
        status = status.chars().take(viewport.text_cols).collect();
    }

    Frame {
        lines,
        cursor_col: (rx - viewport.col_offset) as u16,
        cursor_row: (state.cursor.row - viewport.row_offset) as u16,
        status,
    }
}
