use thiserror::Error;
use wson_connect::{BuildError, LookupError};
use wson_text::{EscapeError, ParseError, StringifyError};

/// Any failure of a [`Wson`](crate::Wson) operation.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum WsonError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Stringify(#[from] StringifyError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Escape(#[from] EscapeError),
}
