//! Logging init: append to a file under the XDG state dir, or to stderr.

use anyhow::Result;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,thumbgrab_core=debug,thumbgrab_cli=debug";

/// One handle per event: a clone of the log file, or stderr if cloning fails.
enum LogSink {
    File(File),
    Stderr(io::Stderr),
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr(e) => e.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr(e) => e.flush(),
        }
    }
}

/// Hands out a `LogSink` per event from one open log file.
struct LogSinkFactory(File);

impl<'a> MakeWriter<'a> for LogSinkFactory {
    type Writer = LogSink;

    fn make_writer(&'a self) -> LogSink {
        match self.0.try_clone() {
            Ok(f) => LogSink::File(f),
            Err(_) => LogSink::Stderr(io::stderr()),
        }
    }
}

/// Path of the log file, creating its directory: `~/.local/state/thumbgrab/thumbgrab.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("thumbgrab")?;
    Ok(xdg_dirs.place_state_file("thumbgrab.log")?)
}

fn install(writer: BoxMakeWriter) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
}

/// Log to the XDG state file. Errors (no home, unwritable dir) are returned
/// before any subscriber is installed, so the caller can still use stderr.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    install(BoxMakeWriter::new(LogSinkFactory(file)));
    tracing::info!("thumbgrab logging initialized at {}", path.display());
    Ok(())
}

/// Log to stderr only.
pub fn init_logging_stderr() {
    install(BoxMakeWriter::new(io::stderr));
}
