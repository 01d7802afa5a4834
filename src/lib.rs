//! vtexctl library
//!
//! Companion tooling for the VTEX IO CLI: session state readers, a tolerant
//! workspace-list parser, a per-account TTL cache, and manifest dependency
//! diagrams.

pub mod cli;
pub mod core;
pub mod store;
pub mod vtex;
