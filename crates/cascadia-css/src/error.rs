//! Error types for parsing and loading stylesheets.
//!
//! Every parser production returns `Result<T, ParseError>`. A production that
//! fails with [`ParseError::Syntax`] or [`ParseError::EndOfInput`] has had its
//! token source restored to where it started, so the caller can try an
//! alternative. [`ParseError::Unrecoverable`] is only produced at the top
//! level, after the forward-compatible core grammar could not skip a
//! statement either.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::stylesheet::StyleSheet;
use crate::tokenizer::SourceLocation;

/// Errors produced while tokenizing, parsing or loading a stylesheet.
#[derive(Debug, Error)]
pub enum ParseError {
    /// An API was called with an argument it cannot accept.
    #[error("bad parameter: {0}")]
    BadParameter(String),

    /// The input does not match the production being tried.
    #[error("syntax error at {location}: {message}")]
    Syntax {
        /// What was expected or found.
        message: String,
        /// Where the offending token starts.
        location: SourceLocation,
    },

    /// The input ended inside a production.
    #[error("unexpected end of input at {location}")]
    EndOfInput {
        /// The end of the source.
        location: SourceLocation,
    },

    /// Neither the CSS2 grammar nor the core grammar could consume a
    /// top-level statement. Parsing stopped here.
    #[error("unrecoverable parse error at {location}: {message}")]
    Unrecoverable {
        /// Why the statement could not be skipped.
        message: String,
        /// Where the statement starts.
        location: SourceLocation,
        /// The statements completed before the failure, when the caller
        /// asked for a stylesheet.
        partial: Option<Box<StyleSheet>>,
    },

    /// A stylesheet file could not be read.
    #[error("failed to read stylesheet '{}': {source}", path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// Build a syntax error.
    #[must_use]
    pub fn syntax(message: impl Into<String>, location: SourceLocation) -> Self {
        Self::Syntax {
            message: message.into(),
            location,
        }
    }

    /// The status code for this error.
    #[must_use]
    pub const fn status(&self) -> ErrorStatus {
        match self {
            Self::BadParameter(_) => ErrorStatus::BadParameter,
            Self::Syntax { .. } => ErrorStatus::Syntax,
            Self::EndOfInput { .. } => ErrorStatus::EndOfInput,
            Self::Unrecoverable { .. } => ErrorStatus::Unrecoverable,
            Self::Io { .. } => ErrorStatus::Io,
        }
    }

    /// Source location, for errors that have one.
    #[must_use]
    pub const fn location(&self) -> Option<SourceLocation> {
        match self {
            Self::Syntax { location, .. }
            | Self::EndOfInput { location }
            | Self::Unrecoverable { location, .. } => Some(*location),
            Self::BadParameter(_) | Self::Io { .. } => None,
        }
    }

    /// The description without the location prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::BadParameter(message)
            | Self::Syntax { message, .. }
            | Self::Unrecoverable { message, .. } => message.clone(),
            Self::EndOfInput { .. } => "unexpected end of input".to_string(),
            Self::Io { .. } => self.to_string(),
        }
    }

    /// Take the partially built stylesheet out of an
    /// [`Unrecoverable`](Self::Unrecoverable) error.
    #[must_use]
    pub fn into_partial(self) -> Option<StyleSheet> {
        match self {
            Self::Unrecoverable { partial, .. } => partial.map(|sheet| *sheet),
            _ => None,
        }
    }
}

/// Coarse classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorStatus {
    /// See [`ParseError::BadParameter`].
    BadParameter,
    /// See [`ParseError::Syntax`].
    Syntax,
    /// See [`ParseError::EndOfInput`].
    EndOfInput,
    /// See [`ParseError::Unrecoverable`].
    Unrecoverable,
    /// See [`ParseError::Io`].
    Io,
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BadParameter => "bad parameter",
            Self::Syntax => "syntax error",
            Self::EndOfInput => "end of input",
            Self::Unrecoverable => "unrecoverable",
            Self::Io => "i/o error",
        };
        f.write_str(name)
    }
}

/// One entry of the parser's diagnostic stack.
///
/// Diagnostics are pushed when a production fails and the parser falls back
/// to another alternative; they are cleared once a top-level statement has
/// been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human readable description.
    pub message: String,
    /// Error class.
    pub status: ErrorStatus,
    /// Where it happened.
    pub location: SourceLocation,
}

impl Diagnostic {
    /// Record `error` as a diagnostic, using `fallback` when the error has
    /// no location of its own.
    #[must_use]
    pub fn from_error(error: &ParseError, fallback: SourceLocation) -> Self {
        Self {
            message: error.message(),
            status: error.status(),
            location: error.location().unwrap_or(fallback),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.location, self.status, self.message)
    }
}
