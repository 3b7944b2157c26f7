//! Core library for comment-divider.
//!
//! A divider comment is a single line of text framed by comment delimiters
//! and padded with a filler symbol to a fixed width, e.g.
//! `// ------------ Section ------------`. This crate decides whether a line
//! can become one and how much room its text may take.
//!
//! # Modules
//!
//! - [`validate`] - The individual checks and the full candidate pipeline
//! - [`budget`] - Width budget arithmetic
//! - [`report`] - Mapping failures to user notifications
//! - [`line`] - Selection and line types handed over by an editor
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use comment_divider_core::{Candidate, DividerConfig, Limiters, Position, Selection};
//! use comment_divider_core::{max_allowed_len, report, validate_candidate};
//!
//! let config = DividerConfig::new(20, Limiters::line("//"), false);
//! assert_eq!(max_allowed_len(&config, 0), 12);
//!
//! let candidate = Candidate::new(Selection::cursor(Position::new(0, 0)), "Setup".into(), "-");
//! assert!(validate_candidate(&candidate, &config).is_ok());
//!
//! let too_long = Candidate::new(Selection::cursor(Position::new(0, 0)), "a".repeat(13).into(), "-");
//! let err = validate_candidate(&too_long, &config).unwrap_err();
//! assert_eq!(err.code(), "LONG_TEXT");
//!
//! let mut shown: Vec<String> = Vec::new();
//! report::report(&mut shown, &err);
//! assert_eq!(shown.len(), 1);
//! ```
#![deny(unsafe_code)]

pub mod budget;
pub mod config;
pub mod error;
pub mod line;
pub mod report;
pub mod validate;

pub use budget::{Budget, GAPS_COUNT, MIN_FILLER_COUNT, max_allowed_len};
pub use config::{Config, ConfigLoader, ConfigSources, DividerConfig, Limiters, LogLevel};
pub use error::{ConfigError, ConfigResult, ValidationError, ValidationResult};
pub use line::{Position, Selection, TextLine};
pub use report::{Notifier, TOOL_NAME};
pub use validate::{
    Candidate, check_comment_chars, check_empty_line, check_filler_len, check_long_text,
    check_multi_line_selection, validate_candidate,
};

/// Default maximum input size when reading a file (1 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;
