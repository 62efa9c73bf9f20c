//! Quill entrypoint: CLI arguments, logging, terminal session, and the
//! synchronous event loop.
//!
//! The loop is deliberately simple: draw a frame, block for one event,
//! apply it fully (including the scroll recompute the next frame
//! performs), repeat. One event at a time is the whole concurrency model.

use anyhow::Result;
use clap::Parser;
use core_actions::io_ops::{open_file, write_file, OpenFileResult, WriteFileResult};
use core_actions::{dispatch_key, search};
use core_events::{Event, KeyCode, KeyModifiers};
use core_render::{build_frame, draw_frame, Viewport};
use core_state::{EditorState, TextBuffer};
use core_terminal::{terminal_size, CrosstermBackend, TerminalBackend};
use std::io::{stdout, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

mod input;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "Quill text editor")]
struct Args {
    /// Optional path to open at startup. If omitted an empty buffer is used.
    pub path: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `quill.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let file_appender = tracing_appender::rolling::never(log_dir, "quill.log");
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(()) => Some(guard),
        // A subscriber is already installed (tests); drop the guard so the
        // writer shuts down.
        Err(_) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn load_state(args: &Args, tab_width: usize) -> EditorState {
    match args.path.as_ref() {
        Some(path) => match open_file(path, tab_width) {
            OpenFileResult::Success(opened) => {
                EditorState::with_file(opened.buffer, opened.file_name)
            }
            OpenFileResult::Error => {
                let mut state = EditorState::new(TextBuffer::new(tab_width));
                state.file_name = Some(path.clone());
                state.set_status(format!("could not open {}", path.display()));
                state
            }
        },
        None => EditorState::new(TextBuffer::new(tab_width)),
    }
}

fn main() -> Result<()> {
    let _log_guard = configure_logging();
    install_panic_hook();
    let args = Args::parse();

    let config = core_config::load_from(args.config.clone())?;
    let tab_width = config.tab_width();
    info!(target: "runtime", tab_width, "startup");

    let mut state = load_state(&args, tab_width);

    let mut backend = CrosstermBackend::new();
    backend.set_title("quill")?;
    let _guard = backend.enter_guard()?;

    let (cols, rows) = terminal_size()?;
    let mut viewport = Viewport::from_terminal(cols, rows);

    run_loop(&mut state, &mut viewport)?;
    info!(target: "runtime", "shutdown");
    Ok(())
}

fn run_loop(state: &mut EditorState, viewport: &mut Viewport) -> Result<()> {
    let mut out = stdout();
    let mut quit_pending = false;
    loop {
        let frame = build_frame(state, viewport);
        draw_frame(&mut out, &frame)?;

        let Some(event) = input::translate(crossterm::event::read()?) else {
            continue;
        };
        // Status messages are one-shot: they survive exactly one refresh.
        state.status_message = None;

        match event {
            Event::Resize(cols, rows) => viewport.resize(cols, rows),
            Event::Key(key) => {
                if key.mods.contains(KeyModifiers::CTRL) {
                    match key.code {
                        KeyCode::Char('q') => {
                            if state.dirty && !quit_pending {
                                quit_pending = true;
                                state.set_status(
                                    "unsaved changes: press Ctrl-Q again to discard and quit",
                                );
                                continue;
                            }
                            return Ok(());
                        }
                        KeyCode::Char('s') => save(state),
                        KeyCode::Char('f') => find_prompt(state, viewport, &mut out)?,
                        _ => {}
                    }
                    quit_pending = false;
                    continue;
                }
                quit_pending = false;
                dispatch_key(state, key);
            }
        }
    }
}

fn save(state: &mut EditorState) {
    match write_file(state) {
        WriteFileResult::Success { bytes } => {
            state.set_status(format!("{bytes} bytes written to disk"));
        }
        WriteFileResult::NoFilename => {
            state.set_status("no file name associated with this buffer");
        }
        WriteFileResult::Error => {
            state.set_status("save failed; buffer left untouched");
        }
    }
}

/// Collect a search string on the status line. Enter runs the search,
/// Esc cancels; a miss reports on the status line and leaves the cursor
/// where it was.
fn find_prompt<W: Write>(
    state: &mut EditorState,
    viewport: &mut Viewport,
    out: &mut W,
) -> Result<()> {
    let mut query = String::new();
    loop {
        state.set_status(format!("search: {query}"));
        let frame = build_frame(state, viewport);
        draw_frame(out, &frame)?;
        state.status_message = None;

        let Some(event) = input::translate(crossterm::event::read()?) else {
            continue;
        };
        let key = match event {
            Event::Resize(cols, rows) => {
                viewport.resize(cols, rows);
                continue;
            }
            Event::Key(key) => key,
        };
        match key.code {
            KeyCode::Enter => {
                if !search::find(state, &query) {
                    state.set_status(format!("not found: {query}"));
                }
                return Ok(());
            }
            KeyCode::Esc => return Ok(()),
            KeyCode::Backspace => {
                query.pop();
            }
            KeyCode::Char(ch) if !key.mods.contains(KeyModifiers::CTRL) && !ch.is_control() => {
                query.push(ch);
            }
            _ => {}
        }
    }
}
