#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

//! Connectors and the registry that resolves them.
//!
//! A [`Connector`] binds a canonical name (its *cname*) to a Rust type (its
//! *by* handle) and knows how to recognise, split and re-create instances of
//! that type. A [`ConnectorRegistry`] answers the two resolution queries:
//!
//! - [`connector_of_cname`](ConnectorRegistry::connector_of_cname): exact name
//!   lookup, used when a tagged value is parsed.
//! - [`connector_of_value`](ConnectorRegistry::connector_of_value): the first
//!   connector, in configuration order, whose [`Matcher`] accepts a value,
//!   used when a value is stringified.
//!
//! ## Menu
//!
//! - [`Connector`], [`ConnectorBuilder`], [`Matcher`], [`Args`]
//! - [`ConnectorRegistry`]
//! - [`builtins`]: the constant set of connectors shipped with the crate.
//! - Errors: [`ConfigError`], [`BuildError`], [`DuplicateConnectorError`],
//!   [`LookupError`], [`ConnectError`], [`HookError`].

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod args;
mod builder;
mod connector;
mod error;
mod matcher;
mod registry;

pub mod builtins;

// -----------------------------------------------------------------------------
// Exports

pub use args::Args;
pub use builder::ConnectorBuilder;
pub use connector::{Connector, CreateFn, SplitFn};
pub use error::{BuildError, ConfigError, DuplicateConnectorError};
pub use error::{ConnectError, HookError, LookupError};
pub use matcher::Matcher;
pub use registry::ConnectorRegistry;

pub use wson_value::{Custom, CustomValue, Map, TypeHandle, Value};
