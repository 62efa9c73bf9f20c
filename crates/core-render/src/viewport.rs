//! Scroll offsets keeping the cursor inside the visible window.
//!
//! The clamp is directional, not an absolute recentre: scrolling only moves
//! as far as needed to bring the cursor back inside the window, matching a
//! typical pager. Given the same cursor, terminal size, and previous
//! offsets the result is deterministic.

use core_state::TextBuffer;
use core_text::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Topmost visible document row.
    pub row_offset: usize,
    /// Leftmost visible rendered column.
    pub col_offset: usize,
    /// Rows available for text (terminal rows minus the status line).
    pub text_rows: usize,
    pub text_cols: usize,
}

impl Viewport {
    pub fn new(text_cols: usize, text_rows: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            text_rows,
            text_cols,
        }
    }

    /// Build from raw terminal dimensions, reserving the status line.
    pub fn from_terminal(cols: u16, rows: u16) -> Self {
        Self::new(cols as usize, rows.saturating_sub(crate::STATUS_ROWS) as usize)
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.text_cols = cols as usize;
        self.text_rows = rows.saturating_sub(crate::STATUS_ROWS) as usize;
    }

    /// Recompute offsets so the cursor is visible; returns the cursor's
    /// rendered column. A cursor resting on the virtual row past the last
    /// line scrolls like a zero-length row at column 0.
    ///
    /// Post-condition (with non-zero dimensions):
    /// `row_offset <= cursor.row < row_offset + text_rows` and
    /// `col_offset <= rx < col_offset + text_cols`.
    pub fn scroll_to_cursor(&mut self, buffer: &TextBuffer, cursor: Position) -> usize {
        let rx = buffer.rendered_col(cursor);
        let before = (self.row_offset, self.col_offset);

        if cursor.row < self.row_offset {
            self.row_offset = cursor.row;
        }
        if self.text_rows > 0 && cursor.row >= self.row_offset + self.text_rows {
            self.row_offset = cursor.row - self.text_rows + 1;
        }

        if rx < self.col_offset {
            self.col_offset = rx;
        }
        if self.text_cols > 0 && rx >= self.col_offset + self.text_cols {
            self.col_offset = rx - self.text_cols + 1;
        }

        if before != (self.row_offset, self.col_offset) {
            tracing::trace!(
                target: "render.scroll",
                row_offset = self.row_offset,
                col_offset = self.col_offset,
                "viewport_scrolled"
            );
        }

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_state::TextBuffer;

    fn ten_rows() -> TextBuffer {
        TextBuffer::from_str("0\n1\n2\n3\n4\n5\n6\n7\n8\n9\n", 8)
    }

    #[test]
    fn no_scroll_while_cursor_visible() {
        let buf = ten_rows();
        let mut vp = Viewport::new(80, 5);
        vp.scroll_to_cursor(&buf, Position::new(4, 0));
        assert_eq!(vp.row_offset, 0);
    }

    #[test]
    fn scrolls_down_minimally() {
        let buf = ten_rows();
        let mut vp = Viewport::new(80, 5);
        vp.scroll_to_cursor(&buf, Position::new(5, 0));
        assert_eq!(vp.row_offset, 1);
        vp.scroll_to_cursor(&buf, Position::new(9, 0));
        assert_eq!(vp.row_offset, 5);
    }

    #[test]
    fn scrolls_up_to_cursor_row() {
        let buf = ten_rows();
        let mut vp = Viewport::new(80, 5);
        vp.row_offset = 6;
        vp.scroll_to_cursor(&buf, Position::new(3, 0));
        assert_eq!(vp.row_offset, 3);
    }

    #[test]
    fn horizontal_clamp_tracks_rendered_column() {
        let buf = TextBuffer::from_str("\tabcdefghij\n", 8);
        let mut vp = Viewport::new(10, 5);
        // Cursor after the tab and 6 letters: rx = 8 + 6 = 14, beyond 10 cols.
        let rx = vp.scroll_to_cursor(&buf, Position::new(0, 7));
        assert_eq!(rx, 14);
        assert_eq!(vp.col_offset, 5);
        // Back to the start scrolls fully left.
        vp.scroll_to_cursor(&buf, Position::new(0, 0));
        assert_eq!(vp.col_offset, 0);
    }

    #[test]
    fn virtual_row_scrolls_at_column_zero() {
        let buf = ten_rows();
        let mut vp = Viewport::new(80, 4);
        vp.col_offset = 20;
        let rx = vp.scroll_to_cursor(&buf, Position::new(10, 0));
        assert_eq!(rx, 0);
        assert_eq!(vp.col_offset, 0);
        assert_eq!(vp.row_offset, 7);
    }
}
