//! Status line composition.
//!
//! Format: `<name>[*] <n>L <row>,<col> (<percent>%)` — base file name (or
//! `[No Name]`), a dirty marker, total line count, 1-based cursor
//! row/rendered-column, and how far through the document the cursor sits.
//! An ephemeral message, when present, is appended after two spaces and
//! cleared by the session on the next keypress.

use std::path::Path;

/// Everything the status line needs, decoupled from editor internals.
pub struct StatusContext<'a> {
    pub file_name: Option<&'a Path>,
    pub dirty: bool,
    pub row_count: usize,
    /// 0-based cursor row.
    pub cursor_row: usize,
    /// 0-based cursor rendered column.
    pub cursor_col: usize,
    pub message: Option<&'a str>,
}

pub fn build_status(ctx: &StatusContext<'_>) -> String {
    let name = ctx
        .file_name
        .and_then(|p| p.file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("[No Name]");
    let marker = if ctx.dirty { "*" } else { "" };
    let percent = if ctx.row_count == 0 {
        0.0
    } else {
        100.0 * ctx.cursor_row as f64 / ctx.row_count as f64
    };
    let mut s = format!(
        "{}{} {}L {},{} ({:.1}%)",
        name,
        marker,
        ctx.row_count,
        ctx.cursor_row + 1,
        ctx.cursor_col + 1,
        percent
    );
    if let Some(msg) = ctx.message {
        s.push_str("  ");
        s.push_str(msg);
    }
    s
}
