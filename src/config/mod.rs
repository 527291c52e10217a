//! Configuration module for titlewave
//!
//! Provides types and loading for `titlewave.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
