#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

//! The WSON text format.
//!
//! # Overview
//!
//! | value                  | text                 |
//! |------------------------|----------------------|
//! | `"abc"`                | `abc`                |
//! | `""`                   | `#`                  |
//! | undefined / null       | `#u` / `#n`          |
//! | `false` / `true`       | `#f` / `#t`          |
//! | `42` / `0.5`           | `#42` / `#0.5`       |
//! | date (ms)              | `#d1400000000000`    |
//! | `[a, b]`               | `[a\|b]`             |
//! | `{a: 1, b: true}`      | `{a:#1\|b}`          |
//! | `Point(1, 2)`          | `[:Point\|#1\|#2]`   |
//!
//! The characters ``{ } [ ] : # | ` `` are escaped inside text with a
//! backquote, see [`escape`].
//!
//! Custom values are written through the connector that
//! [`connector_of_value`](wson_connect::ConnectorRegistry::connector_of_value)
//! resolves, and read back through
//! [`connector_of_cname`](wson_connect::ConnectorRegistry::connector_of_cname).
//! Plain objects are offered to the registry as well, so shape or predicate
//! connectors can claim them.
//!
//! Back-references (`|n` in value position) are not supported and
//! rejected by the parser.

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod escape;
mod parse;
mod partial;
mod settings;
mod source;
mod stringify;

// -----------------------------------------------------------------------------
// Exports

pub use error::{EscapeError, ParseError, ParseErrorKind, StringifyError};
pub use escape::{escape, escape_into, unescape};
pub use parse::{parse, parse_with};
pub use partial::{How, Partial, PartialParser};
pub use settings::CodecSettings;
pub use stringify::{stringify, stringify_with};
