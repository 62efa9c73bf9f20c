//! Viewport computation and frame rendering.
//!
//! The pipeline is split so everything up to the terminal write is pure
//! and testable: `viewport` keeps the cursor visible with minimal-movement
//! scrolling, `frame` composes the visible row slices plus the status line
//! into a `Frame` value, and `writer` queues that frame to any
//! `io::Write` using crossterm commands.

pub mod frame;
pub mod status;
pub mod viewport;
pub mod writer;

pub use frame::{build_frame, Frame};
pub use status::{build_status, StatusContext};
pub use viewport::Viewport;
pub use writer::draw_frame;

/// Screen rows reserved below the text area.
pub const STATUS_ROWS: u16 = 1;
