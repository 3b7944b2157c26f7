//! Errors command — list error codes or render the notification for one.

use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::{debug, instrument};

use comment_divider_core::{ValidationError, report};

use super::TerminalNotifier;

/// Arguments for the `errors` subcommand.
#[derive(Args, Debug, Default)]
pub struct ErrorsArgs {
    /// Show the notification for this code only. Unknown codes print nothing.
    pub code: Option<String>,
}

#[derive(Serialize)]
struct ErrorEntry {
    code: &'static str,
    message: String,
    notification: String,
}

impl ErrorEntry {
    fn new(kind: ValidationError) -> Self {
        Self {
            code: kind.code(),
            message: kind.message(),
            notification: report::notification(&kind),
        }
    }
}

/// List every error kind, or report a single code.
#[instrument(name = "cmd_errors", skip_all, fields(code = ?args.code))]
pub fn cmd_errors(args: ErrorsArgs, global_json: bool) -> anyhow::Result<()> {
    debug!("executing errors command");

    if let Some(ref code) = args.code {
        if global_json {
            let entry = code.parse::<ValidationError>().ok().map(ErrorEntry::new);
            println!("{}", serde_json::to_string_pretty(&entry)?);
        } else {
            report::report_code(&mut TerminalNotifier::stdout(), code);
        }
        return Ok(());
    }

    let entries: Vec<ErrorEntry> = ValidationError::ALL.into_iter().map(ErrorEntry::new).collect();
    if global_json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!(
                "{:<14} {}",
                entry.code.if_supports_color(Stream::Stdout, |c| c.bold()),
                entry.message
            );
        }
    }

    Ok(())
}
