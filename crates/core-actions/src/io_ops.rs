//! File open/save helpers.
//!
//! Synchronous and minimal: the session treats a load or save as atomic.
//! A failed write must leave the in-memory buffer and the dirty flag
//! exactly as they were so the user can retry or pick another path, which
//! is why these return structured results instead of bubbling `io::Error`
//! through the dispatcher.

use core_state::{EditorState, TextBuffer};
use std::path::{Path, PathBuf};

/// Result of attempting to open a file.
#[derive(Debug)]
pub enum OpenFileResult {
    Success(OpenSuccess),
    Error,
}

#[derive(Debug)]
pub struct OpenSuccess {
    pub buffer: TextBuffer,
    pub file_name: PathBuf,
}

/// Read a file into a fresh buffer, one row per line (`\n` and `\r\n`
/// both stripped). The result is clean: it reflects on-disk state.
pub fn open_file(path: &Path, tab_width: usize) -> OpenFileResult {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let buffer = TextBuffer::from_str(&content, tab_width);
            tracing::debug!(
                target: "io",
                file = %path.display(),
                size_bytes = content.len(),
                rows = buffer.row_count(),
                "file_read_ok"
            );
            OpenFileResult::Success(OpenSuccess {
                buffer,
                file_name: path.to_path_buf(),
            })
        }
        Err(e) => {
            tracing::error!(target: "io", ?e, file = %path.display(), "file_open_error");
            OpenFileResult::Error
        }
    }
}

/// Result of a write attempt.
#[derive(Debug)]
pub enum WriteFileResult {
    Success { bytes: usize },
    NoFilename,
    Error,
}

/// Serialize the buffer to the session's file in full-replace fashion.
/// Success clears the dirty flag; failure touches nothing.
pub fn write_file(state: &mut EditorState) -> WriteFileResult {
    let Some(path) = state.file_name.clone() else {
        return WriteFileResult::NoFilename;
    };
    let content = state.buffer.serialize();
    match std::fs::write(&path, content.as_bytes()) {
        Ok(()) => {
            state.dirty = false;
            tracing::debug!(target: "io", file = %path.display(), bytes = content.len(), "file_write_ok");
            WriteFileResult::Success {
                bytes: content.len(),
            }
        }
        Err(e) => {
            tracing::error!(target: "io", ?e, file = %path.display(), "file_write_error");
            WriteFileResult::Error
        }
    }
}
