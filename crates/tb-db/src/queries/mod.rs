//! Database query modules.

pub mod teams;
pub mod users;
