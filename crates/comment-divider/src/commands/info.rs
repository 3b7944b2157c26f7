//! Info command implementation

use std::fmt::Display;

use clap::Args;
use comment_divider_core::config::{Config, ConfigSources, Limiters};
use owo_colors::{OwoColorize, Stream::Stdout, Style};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    line_len: usize,
    limiters: Limiters,
    fix_len: bool,
    filler: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    languages: Vec<String>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            line_len: config.line_len,
            limiters: config.limiters.clone(),
            fix_len: config.fix_len,
            filler: config.filler.clone(),
            languages: config.languages.keys().cloned().collect(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let pkg = &full_info.package;
    println!(
        "{} {}",
        pkg.name.if_supports_color(Stdout, |t| t.bold()),
        pkg.version.if_supports_color(Stdout, |t| t.green())
    );
    if !pkg.description.is_empty() {
        println!("{}", pkg.description);
    }
    if !pkg.license.is_empty() {
        row("License", pkg.license);
    }
    if !pkg.repository.is_empty() {
        row(
            "Repository",
            pkg.repository.if_supports_color(Stdout, |t| t.cyan()),
        );
    }

    println!();
    heading("Configuration");
    let cfg = &full_info.config;
    match cfg.config_file {
        Some(ref path) => row(
            "Config file",
            path.if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => row(
            "Config file",
            "none loaded".if_supports_color(Stdout, |t| t.yellow()),
        ),
    }
    row("Log level", &cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        row("Log directory", dir);
    }

    println!();
    heading("Divider");
    row("Line length", cfg.line_len);
    row(
        "Limiters",
        format!("{:?} {:?}", cfg.limiters.left, cfg.limiters.right),
    );
    row("Fixed length", cfg.fix_len);
    row("Filler", format!("{:?}", cfg.filler));
    if !cfg.languages.is_empty() {
        row("Languages", cfg.languages.join(", "));
    }

    Ok(())
}

fn heading(title: &str) {
    let style = Style::new().bold().underline();
    println!("{}", title.if_supports_color(Stdout, |t| t.style(style)));
}

fn row(label: &str, value: impl Display) {
    println!(
        "{}: {value}",
        label.if_supports_color(Stdout, |t| t.dimmed())
    );
}
