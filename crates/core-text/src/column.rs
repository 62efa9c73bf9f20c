//! Raw-column ↔ rendered-column conversions for a single row.
//!
//! Both walks accumulate rendered width the same way the row rebuild does:
//! a tab advances the accumulator to the next multiple of the tab width,
//! any other byte advances it by one. Keeping the three in lockstep is the
//! invariant everything else (scrolling, cursor placement, search) rests on.

use crate::Row;

/// Rendered column of the caret sitting before `raw_col`.
///
/// `raw_col` must be within `0..=row.len()`; callers clamp before calling.
/// Monotonically non-decreasing in `raw_col`.
pub fn raw_to_rendered(row: &Row, raw_col: usize, tab_width: usize) -> usize {
    debug_assert!(raw_col <= row.len(), "raw_col out of range");
    let mut rx = 0;
    for &b in row.raw().as_bytes().iter().take(raw_col) {
        if b == b'\t' {
            rx += (tab_width - 1) - (rx % tab_width);
        }
        rx += 1;
    }
    rx
}

/// Raw index addressed by a rendered column.
///
/// Returns the raw index at which the accumulated rendered width first
/// exceeds `rendered_col`, or `row.len()` when the target lies beyond the
/// rendered end of the row.
///
/// This is not a strict inverse of [`raw_to_rendered`]: a rendered column
/// that falls inside a tab's expansion snaps to the tab's own raw index.
/// Search hits and horizontal placement depend on that snap, so it is
/// intentional behavior rather than a rounding bug.
pub fn rendered_to_raw(row: &Row, rendered_col: usize, tab_width: usize) -> usize {
    let mut rx = 0;
    for (i, &b) in row.raw().as_bytes().iter().enumerate() {
        if b == b'\t' {
            rx += (tab_width - 1) - (rx % tab_width);
        }
        rx += 1;
        if rx > rendered_col {
            return i;
        }
    }
    row.len()
}
