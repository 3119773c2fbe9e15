#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

//! The dynamic value tree encoded by WSON.
//!
//! ## Menu
//!
//! - [`Value`]: a WSON value, either a builtin shape or a [`CustomValue`].
//! - [`CustomValue`]: a shared instance of a user type, recognised by connectors.
//! - [`Custom`]: the object-safe capability a user type needs to be stored in a [`Value`].
//! - [`TypeHandle`]: the identity token of a type, used as a connector's `by`.

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod custom;
mod handle;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use custom::{Custom, CustomValue};
pub use handle::TypeHandle;
pub use value::{Map, Value};
