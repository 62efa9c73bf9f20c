//! Editor state: the row buffer, structural edit operations, and session
//! metadata (cursor, file name, dirty flag, ephemeral status message).
//!
//! `TextBuffer` owns the document as an ordered `Vec<Row>` addressed by
//! index. Callers never hold a `Row` reference across a structural call;
//! they re-fetch by index after any insert/delete/split/join. Out-of-range
//! indices clamp (or no-op) rather than erroring — the only hard contracts
//! are the explicit assertions on `split_row` and `join_row`, which are
//! caller bugs rather than recoverable conditions.
//!
//! The dirty flag lives on `EditorState` and is raised by the dispatcher's
//! edit operations; loading a file produces a clean buffer because it
//! reflects on-disk state.

use core_text::{Position, Row};
use std::path::PathBuf;

/// Ordered collection of rows; insertion order is document order.
///
/// An empty buffer is valid and represents an empty document (the renderer
/// shows it as a single `~` filler line, not the buffer).
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rows: Vec<Row>,
    tab_width: usize,
}

impl TextBuffer {
    pub fn new(tab_width: usize) -> Self {
        Self {
            rows: Vec::new(),
            tab_width: tab_width.max(1),
        }
    }

    /// Build a buffer from file content, one row per line. Trailing `\n`
    /// and `\r\n` are both stripped; the buffer stores bare line content.
    pub fn from_str(content: &str, tab_width: usize) -> Self {
        let mut buf = Self::new(tab_width);
        for line in content.lines() {
            let row = Row::new(line, buf.tab_width);
            buf.rows.push(row);
        }
        tracing::debug!(target: "state", rows = buf.rows.len(), "buffer_loaded");
        buf
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Raw byte length of a row; 0 for any index past the end (including
    /// the virtual append row).
    pub fn row_len(&self, idx: usize) -> usize {
        self.rows.get(idx).map_or(0, Row::len)
    }

    /// Rendered column for a position, 0 when the position rests on the
    /// virtual row past the end.
    pub fn rendered_col(&self, pos: Position) -> usize {
        match self.rows.get(pos.row) {
            Some(row) => core_text::raw_to_rendered(row, pos.col.min(row.len()), self.tab_width),
            None => 0,
        }
    }

    /// Insert a new row at `at` (clamped to `[0, row_count]`).
    pub fn insert_row(&mut self, at: usize, content: &str) {
        let at = at.min(self.rows.len());
        self.rows.insert(at, Row::new(content, self.tab_width));
    }

    /// Remove the row at `at`. Out-of-range is a no-op; returns whether a
    /// row was removed.
    pub fn delete_row(&mut self, at: usize) -> bool {
        if at >= self.rows.len() {
            return false;
        }
        self.rows.remove(at);
        true
    }

    /// Split the row at `(row, col)`: the tail becomes a new row inserted
    /// immediately after, the original is truncated to `col`.
    pub fn split_row(&mut self, row: usize, col: usize) {
        assert!(row < self.rows.len(), "split_row: row {row} out of range");
        let tail = self.rows[row].split_off(col, self.tab_width);
        self.rows.insert(row + 1, tail);
    }

    /// Join row `row` onto the previous row and delete it. Returns the
    /// previous row's former length — the natural cursor landing column.
    pub fn join_row(&mut self, row: usize) -> usize {
        assert!(row >= 1, "join_row: cannot join the first row upward");
        assert!(row < self.rows.len(), "join_row: row {row} out of range");
        let tail = self.rows.remove(row);
        let target = &mut self.rows[row - 1];
        let join_col = target.len();
        target.push_str(tail.raw(), self.tab_width);
        join_col
    }

    /// Insert one character at `(row, col)`. A cursor resting on the
    /// virtual row past the end materializes a fresh empty row first; `col`
    /// clamps to the row length.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) {
        if row == self.rows.len() {
            self.rows.push(Row::empty());
        }
        assert!(row < self.rows.len(), "insert_char: row {row} out of range");
        self.rows[row].insert_char(col, ch, self.tab_width);
    }

    /// Delete the character at `(row, col)`; false when out of range.
    pub fn delete_char(&mut self, row: usize, col: usize) -> bool {
        match self.rows.get_mut(row) {
            Some(r) => r.delete_char(col, self.tab_width),
            None => false,
        }
    }

    /// The exact on-disk representation: every row's raw bytes followed by
    /// a single `\n`. Total length is the sum of row lengths plus the row
    /// count.
    pub fn serialize(&self) -> String {
        let total: usize = self.rows.iter().map(Row::len).sum();
        let mut out = String::with_capacity(total + self.rows.len());
        for row in &self.rows {
            out.push_str(row.raw());
            out.push('\n');
        }
        out
    }
}

/// The one editor session: buffer, cursor, and bookkeeping the dispatcher
/// and renderer share. Owned exclusively for the process lifetime.
#[derive(Debug)]
pub struct EditorState {
    pub buffer: TextBuffer,
    pub cursor: Position,
    pub file_name: Option<PathBuf>,
    /// Whether the buffer differs from the last successful save.
    pub dirty: bool,
    /// One-shot message shown on the status line until the next key.
    pub status_message: Option<String>,
    /// Text rows available at the last render; page motions jump by this.
    pub last_text_height: usize,
}

impl EditorState {
    pub fn new(buffer: TextBuffer) -> Self {
        Self {
            buffer,
            cursor: Position::origin(),
            file_name: None,
            dirty: false,
            status_message: None,
            last_text_height: 0,
        }
    }

    pub fn with_file(buffer: TextBuffer, file_name: PathBuf) -> Self {
        let mut state = Self::new(buffer);
        state.file_name = Some(file_name);
        state
    }

    /// Re-clamp the cursor after any operation that may have shortened the
    /// addressed row or removed rows.
    pub fn clamp_cursor(&mut self) {
        let count = self.buffer.row_count();
        let buffer = &self.buffer;
        self.cursor.clamp_to(count, |r| buffer.row_len(r));
    }

    /// Length of the row under the cursor (0 on the virtual append row).
    pub fn cursor_row_len(&self) -> usize {
        self.buffer.row_len(self.cursor.row)
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }
}
