//! Error types for comment-divider-core.

use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// A field deserialized but holds a value the divider cannot use.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        /// Name of the offending configuration key.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reasons a candidate line cannot be turned into a divider.
///
/// The set is closed: every validator fails with exactly one variant, and
/// each variant renders as exactly one user-facing message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The line is empty or holds only whitespace.
    #[error("Line should contain at least one character!")]
    EmptyLine,

    /// The selection covers more than one line.
    #[error("Selection should be on single line!")]
    MultiLine,

    /// The text does not fit inside the configured line width.
    #[error("Too many characters! Increase divider length in settings or use less characters.")]
    LongText,

    /// The text already contains one of the configured delimiters.
    #[error("Line contains comment characters!")]
    CommentChars,

    /// The filler symbol is not exactly one character.
    #[error("Incorrect filler symbol!")]
    FillerLen,
}

impl ValidationError {
    /// Every error kind, in the order the validators run.
    pub const ALL: [Self; 5] = [
        Self::MultiLine,
        Self::EmptyLine,
        Self::CommentChars,
        Self::LongText,
        Self::FillerLen,
    ];

    /// Stable identifier, suitable for scripting and JSON output.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyLine => "EMPTY_LINE",
            Self::MultiLine => "MULTI_LINE",
            Self::LongText => "LONG_TEXT",
            Self::CommentChars => "COMMENT_CHARS",
            Self::FillerLen => "FILLER_LEN",
        }
    }

    /// The human-readable description of the violated rule.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Returned when a string is not one of the known error codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown error code: {0}")]
pub struct UnknownCode(pub String);

impl FromStr for ValidationError {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| UnknownCode(s.to_string()))
    }
}

/// Result type alias using [`ValidationError`].
pub type ValidationResult<T = ()> = Result<T, ValidationError>;
