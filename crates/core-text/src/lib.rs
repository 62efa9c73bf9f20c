//! Row storage and tab-aware column mapping.
//!
//! A `Row` is one document line held twice: the literal bytes the user edits
//! (`raw`) and the tab-expanded form the renderer draws (`rendered`). The
//! rendered form is a pure function of the raw bytes and the tab width, and
//! every mutating method rebuilds it before returning, so callers can never
//! observe a stale rendering.
//!
//! Quill operates on single-byte characters; columns throughout this crate
//! are byte indices. Wide-character and grapheme handling is out of scope.

pub mod column;

pub use column::{raw_to_rendered, rendered_to_raw};

/// Tab stop width used when no configuration overrides it.
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// A position inside a buffer expressed as (row index, raw column).
///
/// `row` may equal the buffer's row count: that addresses the virtual empty
/// row past the last line, where appends land. `col` is a byte offset into
/// the addressed row's raw content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Clamp this position against a buffer described by its row count and a
    /// per-row length lookup. `row` is allowed to rest on the virtual row at
    /// `row_count` (length 0).
    pub fn clamp_to<F>(&mut self, row_count: usize, mut row_len_fn: F)
    where
        F: FnMut(usize) -> usize,
    {
        if self.row > row_count {
            self.row = row_count;
        }
        let max_col = if self.row < row_count {
            row_len_fn(self.row)
        } else {
            0
        };
        if self.col > max_col {
            self.col = max_col;
        }
    }
}

/// One document line: raw content plus its tab-expanded rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    raw: String,
    rendered: String,
}

impl Row {
    /// Construct a row from line content (no trailing newline).
    pub fn new(content: impl Into<String>, tab_width: usize) -> Self {
        let mut row = Self {
            raw: content.into(),
            rendered: String::new(),
        };
        row.rebuild(tab_width);
        row
    }

    pub fn empty() -> Self {
        Self {
            raw: String::new(),
            rendered: String::new(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Raw byte length.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn rendered_len(&self) -> usize {
        self.rendered.len()
    }

    /// Insert one character at `at` (clamped to the row length).
    pub fn insert_char(&mut self, at: usize, ch: char, tab_width: usize) {
        let at = at.min(self.raw.len());
        self.raw.insert(at, ch);
        self.rebuild(tab_width);
    }

    /// Delete the character at `at`. Returns false when `at` is out of range.
    pub fn delete_char(&mut self, at: usize, tab_width: usize) -> bool {
        if at >= self.raw.len() {
            return false;
        }
        self.raw.remove(at);
        self.rebuild(tab_width);
        true
    }

    /// Append another row's content onto this one (line join).
    pub fn push_str(&mut self, tail: &str, tab_width: usize) {
        self.raw.push_str(tail);
        self.rebuild(tab_width);
    }

    /// Split this row at `at` (clamped), keeping the head and returning the
    /// tail as a new row. Both sides are rebuilt.
    pub fn split_off(&mut self, at: usize, tab_width: usize) -> Row {
        let at = at.min(self.raw.len());
        let tail = self.raw.split_off(at);
        self.rebuild(tab_width);
        Row::new(tail, tab_width)
    }

    /// Recompute the rendered form: each tab becomes spaces up to the next
    /// multiple of `tab_width`, everything else is copied through.
    fn rebuild(&mut self, tab_width: usize) {
        debug_assert!(tab_width >= 1, "tab width must be positive");
        let tabs = self.raw.bytes().filter(|&b| b == b'\t').count();
        let mut out = String::with_capacity(self.raw.len() + tabs * (tab_width - 1));
        for ch in self.raw.chars() {
            if ch == '\t' {
                out.push(' ');
                while out.len() % tab_width != 0 {
                    out.push(' ');
                }
            } else {
                out.push(ch);
            }
        }
        self.rendered = out;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_tracks_raw_mutations() {
        let mut row = Row::new("ab", 8);
        assert_eq!(row.rendered(), "ab");
        row.insert_char(1, 'x', 8);
        assert_eq!(row.raw(), "axb");
        assert_eq!(row.rendered(), "axb");
        assert!(row.delete_char(0, 8));
        assert_eq!(row.rendered(), "xb");
    }

    #[test]
    fn tab_expands_to_next_stop() {
        // "c\td" at width 4: the tab fills columns 1..4, so 'd' lands at 4.
        let row = Row::new("c\td", 4);
        assert_eq!(row.rendered(), "c   d");
    }

    #[test]
    fn leading_tab_expands_to_full_width() {
        let row = Row::new("\tab", 4);
        assert_eq!(row.rendered(), "    ab");
        assert_eq!(row.rendered_len(), row.len() + 1 * (4 - 1));
    }

    #[test]
    fn consecutive_tabs_each_reach_a_stop() {
        let row = Row::new("\t\tx", 8);
        assert_eq!(row.rendered_len(), 17);
        assert!(row.rendered().starts_with("                "));
    }

    #[test]
    fn delete_out_of_range_is_refused() {
        let mut row = Row::new("hi", 8);
        assert!(!row.delete_char(2, 8));
        assert_eq!(row.raw(), "hi");
    }

    #[test]
    fn split_off_keeps_both_renderings_fresh() {
        let mut row = Row::new("ab\tcd", 4);
        let tail = row.split_off(3, 4);
        assert_eq!(row.raw(), "ab\t");
        assert_eq!(row.rendered(), "ab  ");
        assert_eq!(tail.raw(), "cd");
        assert_eq!(tail.rendered(), "cd");
    }

    #[test]
    fn split_then_join_restores_content() {
        let original = "one\ttwo three";
        for at in 0..=original.len() {
            let mut head = Row::new(original, 8);
            let tail = head.split_off(at, 8);
            head.push_str(tail.raw(), 8);
            assert_eq!(head.raw(), original);
        }
    }

    #[test]
    fn insert_past_end_clamps_to_append() {
        let mut row = Row::new("ab", 8);
        row.insert_char(99, 'c', 8);
        assert_eq!(row.raw(), "abc");
    }

    #[test]
    fn position_clamps_to_virtual_row() {
        let mut pos = Position::new(7, 3);
        pos.clamp_to(5, |_| 10);
        assert_eq!(pos, Position::new(5, 0));

        let mut pos = Position::new(2, 9);
        pos.clamp_to(5, |r| if r == 2 { 4 } else { 10 });
        assert_eq!(pos, Position::new(2, 4));
    }
}
