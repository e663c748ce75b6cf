//! core
//!
//! Domain logic: the version-line grammar, header skipping, and project
//! configuration.

pub mod config;
pub mod header;
