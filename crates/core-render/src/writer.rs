//! Queue a composed frame to a terminal-shaped `io::Write`.
//!
//! Writes are batched with `crossterm::queue!` and flushed once per frame.
//! Nothing here inspects editor state; tests drive it with a `Vec<u8>` and
//! assert on the emitted byte stream.

use crate::frame::Frame;
use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    terminal::{Clear, ClearType},
};
use std::io::Write;

pub fn draw_frame<W: Write>(out: &mut W, frame: &Frame) -> Result<()> {
    queue!(out, Hide, MoveTo(0, 0))?;
    for line in &frame.lines {
        queue!(out, Clear(ClearType::UntilNewLine))?;
        out.write_all(line.as_bytes())?;
        out.write_all(b"\r\n")?;
    }
    queue!(out, Clear(ClearType::UntilNewLine))?;
    out.write_all(frame.status.as_bytes())?;
    queue!(out, MoveTo(frame.cursor_col, frame.cursor_row), Show)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame {
            lines: vec!["alpha".into(), "~".into()],
            cursor_col: 2,
            cursor_row: 0,
            status: "f 2L 1,3 (0.0%)".into(),
        }
    }

    #[test]
    fn emits_lines_and_status_in_order() {
        let mut out = Vec::new();
        draw_frame(&mut out, &frame()).unwrap();
        let text = String::from_utf8_lossy(&out);
        let alpha = text.find("alpha").unwrap();
        let filler = text.find('~').unwrap();
        let status = text.find("(0.0%)").unwrap();
        assert!(alpha < filler && filler < status);
    }

    #[test]
    fn lines_are_crlf_separated() {
        let mut out = Vec::new();
        draw_frame(&mut out, &frame()).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("alpha\r\n"));
    }
}
