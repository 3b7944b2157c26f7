//! Command implementations.

use std::io::Write;
use std::num::NonZeroUsize;

use anyhow::Context;
use camino::Utf8Path;
use clap::Args;
use owo_colors::{OwoColorize, Stream};

use comment_divider_core::config::{Config, DividerConfig};
use comment_divider_core::report::Notifier;

pub mod budget;
pub mod check;
pub mod errors;
pub mod info;

/// Divider settings that can be overridden per invocation.
#[derive(Args, Debug, Default, Clone)]
pub struct DividerArgs {
    /// Use the delimiters configured for this language id.
    #[arg(short, long)]
    pub language: Option<String>,

    /// Total divider width (overrides config).
    #[arg(long)]
    pub line_len: Option<NonZeroUsize>,

    /// Count existing indentation against the width.
    #[arg(long)]
    pub fix_len: bool,
}

impl DividerArgs {
    /// Merge these overrides onto the loaded configuration.
    pub fn resolve(&self, config: &Config) -> DividerConfig {
        let mut divider = config.divider(self.language.as_deref());
        if let Some(line_len) = self.line_len {
            divider.line_len = line_len.get();
        }
        divider.fix_len |= self.fix_len;
        divider
    }
}

/// Writes notifications to a terminal stream.
///
/// Highlighting follows `--color` and whether `stream` is a terminal.
#[derive(Debug)]
pub struct TerminalNotifier<W: Write> {
    out: W,
    stream: Stream,
}

impl TerminalNotifier<std::io::Stderr> {
    /// Notifier printing to stderr.
    pub fn stderr() -> Self {
        Self {
            out: std::io::stderr(),
            stream: Stream::Stderr,
        }
    }
}

impl TerminalNotifier<std::io::Stdout> {
    /// Notifier printing to stdout.
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
            stream: Stream::Stdout,
        }
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn show_information(&mut self, message: &str) {
        let message = message.if_supports_color(self.stream, |text| text.yellow());
        if let Err(err) = writeln!(self.out, "{message}") {
            tracing::warn!(error = %err, "failed to write notification");
        }
    }
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}
