use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a Python-style level name to a tracing filter directive.
///
/// Unrecognised names are passed through lowercased so `EnvFilter` can
/// still accept directives such as `"laps_data=trace"`.
pub fn level_directive(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.to_lowercase(),
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Events go to stderr so stdout stays clean for the summary and JSON
/// views. When `log_file` is given the same events are appended there
/// without ANSI colours. Falls back to `"info"` if the level string is not
/// a valid filter.
pub fn setup_logging(log_level: &str, log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(level_directive(log_level)).unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(io::stderr);

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    Ok(())
}

// ── Input-path resolution ──────────────────────────────────────────────────────

/// Return `given`, or ask for a path on the terminal when it is `None`.
pub fn resolve_path(given: Option<PathBuf>, prompt: &str) -> anyhow::Result<PathBuf> {
    match given {
        Some(path) => Ok(path),
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            prompt_path(&mut stdin.lock(), &mut stdout, prompt)
                .with_context(|| format!("Failed to read input for \"{}\"", prompt.trim()))
        }
    }
}

/// Write `prompt` to `output` and read one path line from `input`.
///
/// Surrounding whitespace is trimmed. End of input yields an empty path,
/// which the loader then reports as a missing file.
pub fn prompt_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<PathBuf> {
    output.write_all(prompt.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
