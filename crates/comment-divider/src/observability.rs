//! Logging setup for the binary.
//!
//! Human-readable events go to stderr. When a log file or directory is
//! configured, the same events are also appended to it as JSON lines.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_PATH_ENV: &str = "COMMENT_DIVIDER_LOG_PATH";
const LOG_DIR_ENV: &str = "COMMENT_DIVIDER_LOG_DIR";
const LOG_FILE_NAME: &str = "comment-divider.jsonl";

/// Where log files should be written, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    log_path: Option<PathBuf>,
    log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `COMMENT_DIVIDER_LOG_PATH` and `COMMENT_DIVIDER_LOG_DIR`, falling
    /// back to the configured directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let var = |name: &str| std::env::var_os(name).filter(|v| !v.is_empty()).map(PathBuf::from);
        Self {
            log_path: var(LOG_PATH_ENV),
            log_dir: var(LOG_DIR_ENV).or(config_log_dir),
        }
    }

    /// The JSONL file to append to. An explicit path wins over a directory.
    fn log_file(&self) -> Option<PathBuf> {
        self.log_path
            .clone()
            .or_else(|| self.log_dir.as_ref().map(|dir| dir.join(LOG_FILE_NAME)))
    }
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` forces errors only, each
/// `-v` raises verbosity one step, and the configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for
/// the duration of `main`.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match config.log_file() {
        Some(path) => {
            let (dir, name) = split_log_path(&path)?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn split_log_path(path: &Path) -> anyhow::Result<(PathBuf, PathBuf)> {
    let name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, PathBuf::from(name)))
}
