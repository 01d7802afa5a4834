//! CLI command implementations
//!
//! Each command is implemented in its own module.

pub mod account;
pub mod apps;
pub mod cache;
pub mod diagram;
pub mod status;
pub mod workspace;
