//! Forward literal search over rendered text.
//!
//! One case-sensitive pass from row 0; the first hit wins and the cursor
//! lands on the raw byte addressed by the match's rendered offset. Because
//! the scan runs over the tab-expanded text, a hit whose rendered offset
//! falls inside a tab's expansion snaps to the tab itself — the documented
//! behavior of `core_text::rendered_to_raw`.

use core_state::{EditorState, TextBuffer};
use core_text::Position;

/// Find the first occurrence of `query`, scanning rows from the top.
/// Returns the raw position of the match, or `None` (including for an
/// empty query, which matches nothing rather than everything).
pub fn find_forward(buffer: &TextBuffer, query: &str) -> Option<Position> {
    if query.is_empty() {
        return None;
    }
    for (i, row) in buffer.rows().iter().enumerate() {
        if let Some(offset) = row.rendered().find(query) {
            let col = core_text::rendered_to_raw(row, offset, buffer.tab_width());
            return Some(Position::new(i, col));
        }
    }
    None
}

/// Run a search and move the cursor to the hit. A miss leaves the cursor
/// unchanged; returns whether anything was found.
pub fn find(state: &mut EditorState, query: &str) -> bool {
    match find_forward(&state.buffer, query) {
        Some(pos) => {
            tracing::debug!(target: "actions.search", row = pos.row, col = pos.col, "match");
            state.cursor = pos;
            true
        }
        None => {
            tracing::debug!(target: "actions.search", "no_match");
            false
        }
    }
}
