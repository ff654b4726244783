//! tb-db: database access and persistence layer.
//!
//! This crate owns the single SQLite file backing teamboard: a pooled
//! storage handle, the idempotent schema bootstrap, the three primitive
//! statement helpers, typed models, and the user/team query modules.

pub mod models;
pub mod pool;
pub mod queries;
pub mod schema;
pub mod store;
