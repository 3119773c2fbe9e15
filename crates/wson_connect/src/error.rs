use alloc::string::String;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Construction

/// A connector description is missing a mandatory part.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("connector is missing its cname")]
    MissingCname,

    #[error("connector cname must not be empty")]
    EmptyCname,

    #[error("connector `{cname}` is missing its `by` type")]
    MissingBy { cname: String },
}

/// Two connectors of one registry share a cname.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("duplicate connector `{cname}` at positions {first} and {second}")]
pub struct DuplicateConnectorError {
    pub cname: String,
    pub first: usize,
    pub second: usize,
}

/// Building a registry from connector descriptions failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    #[error("malformed connector at position {index}: {source}")]
    Config {
        index: usize,
        #[source]
        source: ConfigError,
    },

    #[error(transparent)]
    Duplicate(#[from] DuplicateConnectorError),
}

// -----------------------------------------------------------------------------
// Resolution

/// A resolution query found no connector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LookupError {
    #[error("no connector for cname `{cname}`")]
    UnknownCname { cname: String },

    #[error("no connector for value of type `{kind}`")]
    UnknownValue { kind: &'static str },
}

// -----------------------------------------------------------------------------
// Hooks

/// Failure reported by a connector's split or create function.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HookError {
    #[error("expected {expected} arguments, found {found}")]
    Count { expected: usize, found: usize },

    #[error("argument {index}: expected {expected}, found {found}")]
    Type {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("expected a `{expected}` value, found `{found}`")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("{0}")]
    Invalid(String),
}

/// A connector could not split or create a value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConnectError {
    #[error("connector `{cname}` has no split function")]
    NoSplit { cname: String },

    #[error("connector `{cname}` has no create function")]
    NoCreate { cname: String },

    #[error("connector `{cname}` failed: {source}")]
    Hook {
        cname: String,
        #[source]
        source: HookError,
    },
}
