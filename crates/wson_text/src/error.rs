use alloc::string::String;

use thiserror::Error;
use wson_connect::{ConnectError, LookupError};

// -----------------------------------------------------------------------------
// Escape

/// A backquote is not followed by a known escape code.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("bad escape at {pos}")]
pub struct EscapeError {
    /// Byte offset of the offending character.
    pub pos: usize,
}

// -----------------------------------------------------------------------------
// Stringify

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StringifyError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Connect(#[from] ConnectError),

    #[error("value nested deeper than {max_depth} levels")]
    TooDeep { max_depth: usize },
}

// -----------------------------------------------------------------------------
// Parse

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("unexpected char '{0}'")]
    UnexpectedChar(char),

    #[error("unexpected end")]
    UnexpectedEnd,

    #[error("unexpected literal '{0}'")]
    UnexpectedLiteral(String),

    #[error("bad escape")]
    BadEscape,

    #[error("back-references are not supported")]
    Backref,

    #[error("no connector for '{0}'")]
    NoConnector(String),

    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),

    #[error(transparent)]
    Connect(ConnectError),
}

/// Parsing failed at byte offset `pos` of the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind} at {pos}")]
pub struct ParseError {
    pub pos: usize,
    #[source]
    pub kind: ParseErrorKind,
}

impl ParseError {
    #[cold]
    pub(crate) const fn new(pos: usize, kind: ParseErrorKind) -> Self {
        Self { pos, kind }
    }
}
