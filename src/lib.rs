//! Newsworthy - A Rust-native CLI for maintaining NEWS files
//!
//! Newsworthy keeps a project's human-edited changelog ("NEWS file") honest
//! during releases: it parses the leading version entry, classifies it as
//! pending or released, stamps release dates while collecting the release
//! notes, and opens fresh pending entries for the next development cycle.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to news)
//! - [`news`] - Changelog entry operations (query, release, add-pending)
//! - [`core`] - Version-line grammar, header skipping, and configuration
//! - [`tree`] - Single interface for reading and writing the NEWS file
//! - [`ui`] - User interaction utilities
//!
//! # Correctness Invariants
//!
//! Newsworthy maintains the following invariants:
//!
//! 1. Only the leading version entry is ever inspected or rewritten
//! 2. A rewritten header line reproduces the original separator layout
//! 3. Pending/released status is derived from the document, never stored
//! 4. Writes happen only after every precondition has passed

pub mod cli;
pub mod core;
pub mod news;
pub mod tree;
pub mod ui;
