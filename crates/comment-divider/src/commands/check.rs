//! Check command — validate a candidate line against the divider rules.
//!
//! Stands in for the editor: it gathers a selection and the line under it,
//! either from the command line or from a line range of a file, runs the
//! validators in order, and hands a failure to the notifier.

use std::num::NonZeroUsize;
use std::process::ExitCode;

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use comment_divider_core::config::{Config, DividerConfig};
use comment_divider_core::line::char_len;
use comment_divider_core::{
    Budget, Candidate, Selection, TextLine, ValidationError, report, validate_candidate,
};

use super::{DividerArgs, TerminalNotifier, read_input_file};

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Text to check. Leading whitespace counts as indentation.
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub text: Option<String>,

    /// Take the candidate from this file instead.
    #[arg(long, requires = "line")]
    pub file: Option<Utf8PathBuf>,

    /// Line of `--file` to check (1-based).
    #[arg(long, requires = "file")]
    pub line: Option<NonZeroUsize>,

    /// Last selected line of `--file`; a range over several lines is rejected.
    #[arg(long, requires = "line")]
    pub end_line: Option<NonZeroUsize>,

    /// Filler symbol (overrides config).
    #[arg(long)]
    pub filler: Option<String>,

    /// Divider settings.
    #[command(flatten)]
    pub divider: DividerArgs,
}

/// Outcome of a check, as emitted with `--json`.
#[derive(Debug, Serialize)]
struct CheckReport {
    valid: bool,
    text: String,
    text_len: usize,
    indent_len: usize,
    max_allowed_len: i64,
    /// Characters left over; absent when the text does not fit.
    #[serde(skip_serializing_if = "Option::is_none")]
    remaining: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// Build the candidate the editor would have handed over.
fn gather(args: &CheckArgs, filler: String, max_input: Option<usize>) -> anyhow::Result<Candidate> {
    if let (Some(file), Some(line)) = (&args.file, args.line) {
        let content = read_input_file(file, max_input)?;
        let first = line.get() - 1;
        let last = args.end_line.map_or(first, |end| end.get() - 1);
        let Some(text) = content.lines().nth(first) else {
            bail!(
                "{file} has {} lines, cannot select line {line}",
                content.lines().count()
            );
        };
        return Ok(Candidate::new(Selection::lines(first, last), TextLine::new(text), filler));
    }

    let text = args.text.as_deref().unwrap_or_default();
    // Text passed with embedded newlines behaves like a selection over those lines.
    let span = text.lines().count().max(1);
    let first_line = text.lines().next().unwrap_or_default();
    Ok(Candidate::new(
        Selection::lines(0, span - 1),
        TextLine::new(first_line),
        filler,
    ))
}

fn run(candidate: &Candidate, divider: &DividerConfig) -> (CheckReport, Result<(), ValidationError>) {
    let indent_len = candidate.line.indent_len();
    let budget = Budget::compute(divider, indent_len);
    let result = validate_candidate(candidate, divider);
    let text_len = char_len(candidate.text());
    let report = CheckReport {
        valid: result.is_ok(),
        text: candidate.text().to_string(),
        text_len,
        indent_len,
        max_allowed_len: budget.max_allowed_len,
        remaining: budget.remaining(text_len),
        error: result.err().map(|e| e.code()),
        message: result.err().map(|e| report::notification(&e)),
    };
    (report, result)
}

/// Validate a line and report the first violated rule.
#[instrument(name = "cmd_check", skip_all, fields(file = ?args.file, line = ?args.line))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<ExitCode> {
    debug!(language = ?args.divider.language, "executing check command");

    let divider = args.divider.resolve(config);
    let filler = args.filler.clone().unwrap_or_else(|| config.filler.clone());
    let candidate = gather(&args, filler, max_input_bytes)?;
    let (summary, result) = run(&candidate, &divider);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        match result {
            Ok(()) => println!(
                "{} {}/{} characters ({} to spare)",
                "PASS:".if_supports_color(Stream::Stdout, |t| t.green()),
                summary.text_len,
                summary.max_allowed_len,
                summary.remaining.unwrap_or_default(),
            ),
            Err(err) => report::report(&mut TerminalNotifier::stderr(), &err),
        }
    }

    Ok(if summary.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use comment_divider_core::Limiters;

    fn args(text: &str) -> CheckArgs {
        CheckArgs {
            text: Some(text.to_string()),
            file: None,
            line: None,
            end_line: None,
            filler: None,
            divider: DividerArgs::default(),
        }
    }

    #[test]
    fn gather_single_line_text() {
        let candidate = gather(&args("  Title"), "-".to_string(), None).unwrap();
        assert!(candidate.selection.is_single_line());
        assert_eq!(candidate.line.indent_len(), 2);
        assert_eq!(candidate.text(), "Title");
    }

    #[test]
    fn gather_multi_line_text_spans_lines() {
        let candidate = gather(&args("one\ntwo"), "-".to_string(), None).unwrap();
        assert_eq!(candidate.selection.line_span(), 2);
    }

    #[test]
    fn gather_from_file_line() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "fn main() {\n    Setup\n}\n").unwrap();
        let check = CheckArgs {
            text: None,
            file: Some(Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap()),
            line: NonZeroUsize::new(2),
            end_line: None,
            filler: None,
            divider: DividerArgs::default(),
        };
        let candidate = gather(&check, "-".to_string(), None).unwrap();
        assert_eq!(candidate.text(), "Setup");
        assert_eq!(candidate.line.indent_len(), 4);
        assert!(candidate.selection.is_single_line());
    }

    #[test]
    fn gather_rejects_line_past_end() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "only\n").unwrap();
        let check = CheckArgs {
            text: None,
            file: Some(Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap()),
            line: NonZeroUsize::new(5),
            end_line: None,
            filler: None,
            divider: DividerArgs::default(),
        };
        let err = gather(&check, "-".to_string(), None).unwrap_err();
        assert!(err.to_string().contains("cannot select line 5"));
    }

    #[test]
    fn run_reports_long_text() {
        let divider = DividerConfig::new(20, Limiters::line("//"), false);
        let candidate = gather(&args(&"a".repeat(13)), "-".to_string(), None).unwrap();
        let (summary, result) = run(&candidate, &divider);
        assert_eq!(result, Err(ValidationError::LongText));
        assert!(!summary.valid);
        assert_eq!(summary.error, Some("LONG_TEXT"));
        assert_eq!(summary.max_allowed_len, 12);
        assert_eq!(summary.remaining, None);
    }

    #[test]
    fn run_accepts_exact_fit() {
        let divider = DividerConfig::new(20, Limiters::line("//"), false);
        let candidate = gather(&args(&"a".repeat(12)), "-".to_string(), None).unwrap();
        let (summary, result) = run(&candidate, &divider);
        assert_eq!(result, Ok(()));
        assert!(summary.valid);
        assert!(summary.message.is_none());
        assert_eq!(summary.remaining, Some(0));
    }

    #[test]
    fn run_counts_spare_room() {
        let divider = DividerConfig::new(20, Limiters::line("//"), false);
        let candidate = gather(&args("Setup"), "-".to_string(), None).unwrap();
        let (summary, _) = run(&candidate, &divider);
        assert_eq!(summary.text_len, 5);
        assert_eq!(summary.remaining, Some(7));
    }
}
