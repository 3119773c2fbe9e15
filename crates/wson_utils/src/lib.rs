#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

//! Small container utilities shared by the wson crates.

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
