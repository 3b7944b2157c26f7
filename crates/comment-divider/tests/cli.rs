//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Runs from an empty directory with colors off so no project config or
/// escape codes leak into assertions.
#[allow(deprecated)]
fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(["--color", "never"]);
    cmd
}

fn json_of(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn version_flag_shows_version() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let tmp = TempDir::new().unwrap();
    let output = cmd(&tmp).args(["info", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json = json_of(&output);
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["config"]["line_len"], 80);
    assert_eq!(json["config"]["limiters"]["left"], "//");
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_and_verbose_flags_accepted() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp).args(["-q", "info"]).assert().success();
    cmd(&tmp).args(["-vv", "info"]).assert().success();
}

// =============================================================================
// Check Command
// =============================================================================

#[test]
fn check_exact_fit_passes() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["check", "--line-len", "20", "abcdefghijkl"])
        .assert()
        .success()
        .stdout(predicate::str::diff("PASS: 12/12 characters (0 to spare)\n"));
}

#[test]
fn check_reports_spare_room() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["check", "--line-len", "20", "Setup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5/12 characters (7 to spare)"));

    let output = cmd(&tmp)
        .args(["check", "--json", "--line-len", "20", "Setup"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(json_of(&output)["remaining"], 7);
}

#[test]
fn color_never_keeps_output_plain() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["check", "Title"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
    cmd(&tmp)
        .args(["check", "--filler=ab", "Title"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\u{1b}[").not());
    cmd(&tmp)
        .arg("errors")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
#[allow(deprecated)]
fn color_always_highlights_pass() {
    let tmp = TempDir::new().unwrap();
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .current_dir(tmp.path())
        .env_remove("RUST_LOG")
        .args(["--color", "always", "check", "Title"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}

#[test]
fn check_one_over_budget_fails() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["check", "--line-len", "20", "abcdefghijklm"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Comment Divider: Too many characters!",
        ));
}

#[test]
fn check_long_text_json() {
    let tmp = TempDir::new().unwrap();
    let output = cmd(&tmp)
        .args(["check", "--json", "--line-len", "20", "abcdefghijklm"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json = json_of(&output);
    assert_eq!(json["valid"], false);
    assert_eq!(json["error"], "LONG_TEXT");
    assert_eq!(json["max_allowed_len"], 12);
    assert_eq!(json["text_len"], 13);
}

#[test]
fn check_bad_filler_fails() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["check", "--filler=--", "Title"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect filler symbol!"));
    cmd(&tmp)
        .args(["check", "--filler=-", "Title"])
        .assert()
        .success();
}

#[test]
fn check_comment_chars_fails() {
    let tmp = TempDir::new().unwrap();
    fs_write(&tmp, "comment-divider.toml", "[limiters]\nleft = \"/*\"\nright = \"*/\"\n");
    cmd(&tmp)
        .args(["check", "contains /* marker"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Line contains comment characters!"));
    cmd(&tmp).args(["check", "clean text"]).assert().success();
}

#[test]
fn check_blank_text_fails() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["check", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Line should contain at least one character!",
        ));
}

#[test]
fn check_multi_line_text_fails() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["check", "first\nsecond"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Selection should be on single line!"));
}

#[test]
fn check_file_line_range() {
    let tmp = TempDir::new().unwrap();
    fs_write(&tmp, "src.rs", "fn main() {\n        Setup phase\n}\n");

    cmd(&tmp)
        .args(["check", "--file", "src.rs", "--line", "2"])
        .assert()
        .success();
    cmd(&tmp)
        .args(["check", "--file", "src.rs", "--line", "1", "--end-line", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("single line"));
    cmd(&tmp)
        .args(["check", "--file", "src.rs", "--line", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot select line 9"));
}

#[test]
fn check_fix_len_counts_indentation() {
    let tmp = TempDir::new().unwrap();
    // Budget is 12; four spaces of indent leave 8 in fixed-length mode.
    fs_write(&tmp, "src.rs", "    abcdefghij\n");

    cmd(&tmp)
        .args(["check", "--line-len", "20", "--file", "src.rs", "--line", "1"])
        .assert()
        .success();
    cmd(&tmp)
        .args([
            "check",
            "--line-len",
            "20",
            "--fix-len",
            "--file",
            "src.rs",
            "--line",
            "1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Too many characters!"));
}

#[test]
fn check_requires_text_or_file() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp).arg("check").assert().failure();
}

#[test]
fn check_missing_file_reports_error() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["check", "--file", "nope.rs", "--line", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Budget Command
// =============================================================================

#[test]
fn budget_line_comment() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["budget", "--line-len", "20"])
        .assert()
        .success()
        .stdout(predicate::str::diff("12\n"));
}

#[test]
fn budget_indent_only_with_fix_len() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["budget", "--line-len", "20", "--indent", "4"])
        .assert()
        .success()
        .stdout(predicate::str::diff("12\n"));
    cmd(&tmp)
        .args(["budget", "--line-len", "20", "--indent", "4", "--fix-len"])
        .assert()
        .success()
        .stdout(predicate::str::diff("8\n"));
}

#[test]
fn budget_huge_indent_in_fixed_mode() {
    let tmp = TempDir::new().unwrap();
    let output = cmd(&tmp)
        .args([
            "budget",
            "--json",
            "--line-len",
            "1",
            "--fix-len",
            "--indent",
            &usize::MAX.to_string(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(json_of(&output)["max_allowed_len"], i64::MIN);
}

#[test]
fn budget_json_uses_language_limiters() {
    let tmp = TempDir::new().unwrap();
    fs_write(
        &tmp,
        "comment-divider.yaml",
        "languages:\n  css:\n    left: \"/*\"\n    right: \"*/\"\n",
    );
    let output = cmd(&tmp)
        .args(["budget", "--json", "--language", "css"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_of(&output);
    assert_eq!(json["limiters_len"], 4);
    assert_eq!(json["max_allowed_len"], 70);
}

#[test]
fn budget_negative_is_reported() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["budget", "--line-len", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-4"))
        .stdout(predicate::str::contains("no room for text"));
}

#[test]
fn budget_rejects_zero_line_len() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["budget", "--line-len", "0"])
        .assert()
        .failure();
}

// =============================================================================
// Errors Command
// =============================================================================

#[test]
fn errors_lists_every_code() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .arg("errors")
        .assert()
        .success()
        .stdout(predicate::str::contains("EMPTY_LINE"))
        .stdout(predicate::str::contains("MULTI_LINE"))
        .stdout(predicate::str::contains("LONG_TEXT"))
        .stdout(predicate::str::contains("COMMENT_CHARS"))
        .stdout(predicate::str::contains("FILLER_LEN"));
}

#[test]
fn errors_known_code_prints_notification() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["errors", "FILLER_LEN"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "Comment Divider: Incorrect filler symbol!\n",
        ));
}

#[test]
fn errors_unknown_code_prints_nothing() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp)
        .args(["errors", "OUT_OF_CHEESE"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn errors_json_lists_five() {
    let tmp = TempDir::new().unwrap();
    let output = cmd(&tmp).args(["errors", "--json"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(json_of(&output).as_array().map(Vec::len), Some(5));
}

fn fs_write(dir: &TempDir, name: &str, contents: &str) {
    std::fs::write(dir.path().join(name), contents).unwrap();
}
