//! Log output setup.
//!
//! Full-screen views own the terminal, so they log to a file or not at all.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::QuizError;

/// Where log lines should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Off,
}

/// Pick the target for a command: an explicit log file always wins, and
/// without one only commands that do not draw on the terminal log to stderr.
pub fn target(log_file: Option<&Path>, full_screen: bool) -> LogTarget<'_> {
    match (log_file, full_screen) {
        (Some(path), _) => LogTarget::File(path),
        (None, false) => LogTarget::Stderr,
        (None, true) => LogTarget::Off,
    }
}

/// `RUST_LOG` wins over the `-v` count.
fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::new(level)
    })
}

pub fn init(verbosity: u8, target: LogTarget<'_>) -> Result<(), QuizError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_target(false);

    let installed = match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::Off => return Ok(()),
    };

    installed.map_err(|err| QuizError::Logging(err.to_string()))
}
