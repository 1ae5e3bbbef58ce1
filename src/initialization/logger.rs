//! Logger initialization.
//!
//! Log lines go to stderr so they never interleave with the prompts and tables on
//! stdout. Targets inside this crate are shown relative to it (`session::run`).

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter, Record};

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// # Arguments
///
/// * `level` - Minimum log level to display (overrides `RUST_LOG` if set)
/// * `format` - Log format (Plain or Json)
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Trace every request and state transition
/// ip_report --log-level debug
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=ip_report=debug,reqwest=info ip_report
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    // reqwest's HTTP and TLS stack is chatty at debug
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("rustls", LevelFilter::Warn);
    builder.filter_module(CRATE_NAME, level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    json_line(record, chrono::Utc::now().timestamp_millis())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| writeln!(buf, "{}", plain_line(record)));
        }
    }

    // try_init() so a second initialization (tests) is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

const CRATE_NAME: &str = "ip_report";

/// Module path relative to this crate, e.g. `session::run`.
///
/// Targets from other crates are returned unchanged.
fn short_target(target: &str) -> &str {
    target
        .strip_prefix(CRATE_NAME)
        .and_then(|rest| rest.strip_prefix("::"))
        .unwrap_or(target)
}

/// One structured log line: `ts` (epoch millis), `level`, `module`, `msg`.
fn json_line(record: &Record, ts: i64) -> String {
    serde_json::json!({
        "ts": ts,
        "level": record.level().as_str(),
        "module": short_target(record.target()),
        "msg": record.args().to_string(),
    })
    .to_string()
}

/// One human-readable log line, written to stderr below the session's own output.
fn plain_line(record: &Record) -> String {
    let level = record.level();
    let colored_level = match level {
        Level::Error => level.as_str().red(),
        Level::Warn => level.as_str().yellow(),
        Level::Info => level.as_str().green(),
        Level::Debug => level.as_str().blue(),
        Level::Trace => level.as_str().purple(),
    };

    let emoji = match level {
        Level::Error => "❌",
        Level::Warn => "⚠️",
        Level::Info => "✔️",
        Level::Debug => "🔍",
        Level::Trace => "🔬",
    };

    format!(
        "{} {} {} [{}] {}",
        chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
        emoji,
        short_target(record.target()).cyan(),
        colored_level,
        record.args()
    )
}
