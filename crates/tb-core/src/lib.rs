//! tb-core: shared error type and configuration.
//!
//! This crate is the foundational dependency for the other tb-* crates.

pub mod config;
pub mod error;

pub use error::{Error, Result};
