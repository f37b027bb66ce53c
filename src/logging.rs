use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default file name used when the log path has none.
const DEFAULT_LOG_FILE: &str = "rosterql.log";

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
///
/// Fails if the log file directory cannot be created or written.
pub fn init(verbose: bool, log_file: Option<PathBuf>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    if let Some(log_path) = log_file {
        let file_layer = fmt::layer()
            .with_writer(file_appender(&log_path)?)
            .with_ansi(false)
            .json();

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }
    Ok(())
}

/// Builds a daily-rolling appender for `log_path`, creating its directory.
pub fn file_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let (dir, file_name) = split_log_path(log_path);
    std::fs::create_dir_all(&dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(&dir)?;
    Ok(appender)
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("rosterql={}", level)
}

/// Splits a log path into the rolling appender's directory and file prefix.
fn split_log_path(log_path: &Path) -> (PathBuf, PathBuf) {
    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = log_path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    (dir, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "rosterql=info");
        assert_eq!(default_directive(true), "rosterql=debug");
    }

    #[test]
    fn test_split_log_path_with_dir() {
        let (dir, file) = split_log_path(Path::new("logs/app.log"));
        assert_eq!(dir, PathBuf::from("logs"));
        assert_eq!(file, PathBuf::from("app.log"));
    }

    #[test]
    fn test_split_log_path_bare_file() {
        let (dir, file) = split_log_path(Path::new("app.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(file, PathBuf::from("app.log"));
    }

    #[test]
    fn test_split_log_path_without_file_name() {
        let (_, file) = split_log_path(Path::new("/"));
        assert_eq!(file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_file_appender_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("app.log");

        assert!(file_appender(&log_path).is_ok());
        assert!(temp_dir.path().join("logs").is_dir());
    }

    #[test]
    fn test_file_appender_unwritable_dir_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();

        let result = file_appender(&blocker.join("app.log"));
        assert!(result.is_err());
    }
}
