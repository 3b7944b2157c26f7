//! Preconditions a line must meet before it can become a divider.
//!
//! Every check is a pure predicate over its arguments: it returns `Ok(())`
//! or fails with the one [`ValidationError`] it owns. Checks do not depend
//! on each other, so callers may run any subset in any order.

use crate::budget::max_allowed_len;
use crate::config::{DividerConfig, Limiters};
use crate::error::{ValidationError, ValidationResult};
use crate::line::{Selection, TextLine, char_len};

/// Fails with [`ValidationError::MultiLine`] when the selection spans lines.
pub fn check_multi_line_selection(selection: &Selection) -> ValidationResult {
    if selection.is_single_line() {
        Ok(())
    } else {
        Err(ValidationError::MultiLine)
    }
}

/// Fails with [`ValidationError::EmptyLine`] for blank lines.
pub fn check_empty_line(line: &TextLine) -> ValidationResult {
    if line.is_empty_or_whitespace() {
        Err(ValidationError::EmptyLine)
    } else {
        Ok(())
    }
}

/// Fails with [`ValidationError::CommentChars`] when `text` already holds a
/// delimiter.
///
/// This is a plain substring search. An empty delimiter never matches.
pub fn check_comment_chars(text: &str, limiters: &Limiters) -> ValidationResult {
    let contains = |delim: &str| !delim.is_empty() && text.contains(delim);

    if contains(&limiters.left) || contains(&limiters.right) {
        Err(ValidationError::CommentChars)
    } else {
        Ok(())
    }
}

/// Fails with [`ValidationError::LongText`] when `text` exceeds the budget.
///
/// Text exactly as long as the budget passes.
pub fn check_long_text(text: &str, config: &DividerConfig, indent_len: usize) -> ValidationResult {
    let max = max_allowed_len(config, indent_len);
    let len = i64::try_from(char_len(text)).unwrap_or(i64::MAX);

    if len > max {
        tracing::trace!(len, max, "text exceeds divider budget");
        Err(ValidationError::LongText)
    } else {
        Ok(())
    }
}

/// Fails with [`ValidationError::FillerLen`] unless `filler` is exactly one
/// character.
pub fn check_filler_len(filler: &str) -> ValidationResult {
    if char_len(filler) == 1 {
        Ok(())
    } else {
        Err(ValidationError::FillerLen)
    }
}

/// Everything the editor layer gathers for one divider request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The user's selection.
    pub selection: Selection,
    /// The line under the selection.
    pub line: TextLine,
    /// Filler symbol to pad with.
    pub filler: String,
}

impl Candidate {
    /// Bundle a candidate.
    pub fn new(selection: Selection, line: TextLine, filler: impl Into<String>) -> Self {
        Self {
            selection,
            line,
            filler: filler.into(),
        }
    }

    /// The text that would go inside the divider.
    pub fn text(&self) -> &str {
        self.line.content()
    }
}

/// Run every check in the order the editor layer applies them.
///
/// Returns the first failure. The delimiter and length checks see the
/// line's trimmed content; the indentation comes from the raw line.
#[tracing::instrument(level = "debug", skip_all, fields(line_len = config.line_len))]
pub fn validate_candidate(candidate: &Candidate, config: &DividerConfig) -> ValidationResult {
    check_multi_line_selection(&candidate.selection)?;
    check_empty_line(&candidate.line)?;
    check_comment_chars(candidate.text(), &config.limiters)?;
    check_long_text(candidate.text(), config, candidate.line.indent_len())?;
    check_filler_len(&candidate.filler)?;
    Ok(())
}
