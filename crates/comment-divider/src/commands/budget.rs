//! Budget command — show how much text fits in a divider.

use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use comment_divider_core::config::Config;
use comment_divider_core::{Budget, GAPS_COUNT, MIN_FILLER_COUNT};

use super::DividerArgs;

/// Arguments for the `budget` subcommand.
#[derive(Args, Debug, Default)]
pub struct BudgetArgs {
    /// Indentation already present before the divider.
    #[arg(long, default_value_t = 0)]
    pub indent: usize,

    /// Divider settings.
    #[command(flatten)]
    pub divider: DividerArgs,
}

/// Print the maximum text length for the resolved divider settings.
#[instrument(name = "cmd_budget", skip_all, fields(indent = args.indent))]
pub fn cmd_budget(args: BudgetArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(language = ?args.divider.language, "executing budget command");

    let divider = args.divider.resolve(config);
    let budget = Budget::compute(&divider, args.indent);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&budget)?);
        return Ok(());
    }

    if budget.max_allowed_len > 0 {
        println!("{}", budget.max_allowed_len);
    } else {
        println!(
            "{} {} (delimiters leave no room for text)",
            budget.max_allowed_len.if_supports_color(Stream::Stdout, |n| n.red()),
            "WARN:".if_supports_color(Stream::Stdout, |t| t.yellow())
        );
    }
    let counted_indent = if budget.fix_len { budget.indent_len } else { 0 };
    debug!(
        line_len = budget.line_len,
        limiters_len = budget.limiters_len,
        gaps = GAPS_COUNT,
        min_filler = MIN_FILLER_COUNT,
        indent_len = counted_indent,
        "budget breakdown"
    );

    Ok(())
}
