//! Candidate state handed over by the editor layer.
//!
//! These types mirror what an editor knows about the cursor and the line
//! under it. They carry no behavior beyond the derived facts the
//! validators need.

use serde::{Deserialize, Serialize};

/// Length of a string as the divider counts it: one per Unicode scalar value.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// A zero-based location in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Line index.
    pub line: usize,
    /// Character offset within the line.
    pub character: usize,
}

impl Position {
    /// Create a position.
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// A span between two positions, in either direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Where the selection was started.
    pub anchor: Position,
    /// Where the cursor currently is.
    pub active: Position,
}

impl Selection {
    /// Create a selection from anchor to active position.
    pub const fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// An empty selection (a bare cursor) at `pos`.
    pub const fn cursor(pos: Position) -> Self {
        Self {
            anchor: pos,
            active: pos,
        }
    }

    /// Selection covering whole lines `first..=last`.
    pub const fn lines(first: usize, last: usize) -> Self {
        Self {
            anchor: Position::new(first, 0),
            active: Position::new(last, 0),
        }
    }

    /// Whether both ends sit on the same line.
    pub const fn is_single_line(&self) -> bool {
        self.anchor.line == self.active.line
    }

    /// Number of lines the selection touches (at least one).
    pub const fn line_span(&self) -> usize {
        self.anchor.line.abs_diff(self.active.line) + 1
    }
}

/// One line of document text, without its line terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLine {
    text: String,
}

impl TextLine {
    /// Wrap raw line text. A trailing `\n` or `\r\n` is stripped.
    pub fn new(text: impl Into<String>) -> Self {
        let mut text = text.into();
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Self { text }
    }

    /// The full line, indentation included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The line with surrounding whitespace removed.
    pub fn content(&self) -> &str {
        self.text.trim()
    }

    /// True when the line has no non-whitespace character.
    pub fn is_empty_or_whitespace(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }

    /// Number of leading whitespace characters.
    pub fn indent_len(&self) -> usize {
        self.text.chars().take_while(|c| c.is_whitespace()).count()
    }
}

impl From<&str> for TextLine {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextLine {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
