//! Logging infrastructure for TileCache.
//!
//! Provides structured logging with file output and optional console output:
//! - Writes to the configured log file (cleared on session start)
//! - Optionally mirrors to stdout for CLI tailing
//! - Configurable via RUST_LOG environment variable

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Options for [`init_logging`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingOptions {
    /// Mirror log output to stdout.
    pub stdout: bool,
    /// Default to `debug` level instead of `info` when RUST_LOG is unset.
    pub debug: bool,
}

/// Initialize the global tracing subscriber.
///
/// Creates the log directory if needed and truncates the previous log file.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the log file
/// cannot be cleared.
pub fn init_logging(log_file: &Path, options: LoggingOptions) -> Result<LoggingGuard, io::Error> {
    let (log_dir, file_name) = split_log_path(log_file)?;

    fs::create_dir_all(log_dir)?;
    fs::write(log_file, "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(true);

    let stdout_layer = options.stdout.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .with_ansi(true)
            .with_target(false)
    });

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(options.debug)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Filter directive used when RUST_LOG is not set.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

fn split_log_path(log_file: &Path) -> Result<(&Path, &std::ffi::OsStr), io::Error> {
    let file_name = log_file.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("log path has no file name: {}", log_file.display()),
        )
    })?;
    let log_dir = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok((log_dir, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "info");
        assert_eq!(default_filter(true), "debug");
    }

    #[test]
    fn test_split_log_path() {
        let path = PathBuf::from("/var/log/tilecache/tilecache.log");
        let (dir, name) = split_log_path(&path).unwrap();
        assert_eq!(dir, Path::new("/var/log/tilecache"));
        assert_eq!(name, "tilecache.log");
    }

    #[test]
    fn test_split_bare_file_name_uses_current_dir() {
        let path = PathBuf::from("tilecache.log");
        let (dir, name) = split_log_path(&path).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "tilecache.log");
    }

    #[test]
    fn test_split_rejects_directory_like_path() {
        assert!(split_log_path(Path::new("/")).is_err());
    }
}
