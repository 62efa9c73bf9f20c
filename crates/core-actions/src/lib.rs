//! Editing commands: key dispatch, literal search, and file persistence.
//!
//! The dispatcher is the only writer of editor state during a session. It
//! consumes one normalized key event at a time, fully applies its effect,
//! and reports whether anything changed so the caller knows a redraw is
//! worthwhile. Session-level chords (save, quit, find prompt) are the
//! binary's business; everything that touches buffer or cursor lives here.

pub mod dispatcher;
pub mod io_ops;
pub mod search;

pub use dispatcher::{dispatch_key, DispatchResult};
