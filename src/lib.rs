#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod engine;
mod error;
mod factory;
mod options;

#[cfg(feature = "std")]
mod shared;

// -----------------------------------------------------------------------------
// Exports

pub use wson_connect as connect;
pub use wson_text as text;
pub use wson_utils as utils;
pub use wson_value as value;

pub use engine::Wson;
pub use error::WsonError;
pub use factory::{build_registry, factory};
pub use options::{WsonOptions, WsonSettings};

#[cfg(feature = "std")]
pub use shared::SharedWson;

pub use wson_connect::{Connector, ConnectorBuilder, ConnectorRegistry, Matcher};
pub use wson_text::{How, Partial, PartialParser};
pub use wson_value::{Custom, CustomValue, Map, TypeHandle, Value};
