//! Width budget for the text inside a divider.
//!
//! A divider line is laid out as
//!
//! ```text
//! <left> <filler...> <text> <filler...> <right>
//! ```
//!
//! so besides the delimiters it always needs four single-space gaps and at
//! least one filler character on each side of the text. Whatever is left of
//! `line_len` is the budget for the text itself.

use serde::Serialize;

use crate::config::DividerConfig;
use crate::line::char_len;

/// Single-space gaps around the delimiters and the text.
pub const GAPS_COUNT: i64 = 4;

/// Filler characters that must appear, one on each side of the text.
pub const MIN_FILLER_COUNT: i64 = 2;

/// Maximum number of characters the text may occupy.
///
/// The result is not clamped at zero: delimiters wider than `line_len` yield
/// a zero or negative budget, which no non-empty text can satisfy.
/// `indent_len` is only subtracted in fixed-length mode. Results below
/// `i64::MIN` (an indentation near `usize::MAX`) saturate there.
pub fn max_allowed_len(config: &DividerConfig, indent_len: usize) -> i64 {
    let limiters_len =
        wide(char_len(&config.limiters.left)) + wide(char_len(&config.limiters.right));
    let indent = if config.fix_len { wide(indent_len) } else { 0 };

    let budget = wide(config.line_len)
        - limiters_len
        - i128::from(GAPS_COUNT)
        - i128::from(MIN_FILLER_COUNT)
        - indent;
    i64::try_from(budget).unwrap_or(if budget < 0 { i64::MIN } else { i64::MAX })
}

fn wide(n: usize) -> i128 {
    i128::try_from(n).unwrap_or(i128::MAX)
}

/// A computed budget together with the inputs it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Budget {
    /// Configured total width.
    pub line_len: usize,
    /// Combined width of both delimiters.
    pub limiters_len: usize,
    /// Indentation that was offered to the calculation.
    pub indent_len: usize,
    /// Whether `indent_len` was subtracted.
    pub fix_len: bool,
    /// Characters available for the text.
    pub max_allowed_len: i64,
}

impl Budget {
    /// Compute the budget for `config` at the given indentation.
    #[tracing::instrument(level = "trace", skip(config), fields(line_len = config.line_len))]
    pub fn compute(config: &DividerConfig, indent_len: usize) -> Self {
        Self {
            line_len: config.line_len,
            limiters_len: char_len(&config.limiters.left) + char_len(&config.limiters.right),
            indent_len,
            fix_len: config.fix_len,
            max_allowed_len: max_allowed_len(config, indent_len),
        }
    }

    /// Characters still free after placing `text_len` characters, if it fits.
    pub fn remaining(&self, text_len: usize) -> Option<usize> {
        let text_len = i64::try_from(text_len).ok()?;
        self.max_allowed_len
            .checked_sub(text_len)
            .and_then(|free| usize::try_from(free).ok())
    }
}
