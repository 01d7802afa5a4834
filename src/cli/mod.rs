//! CLI layer
//!
//! Command-line interface using clap.

pub mod commands;
pub mod output;
pub mod progress;

pub use output::Output;
pub use progress::{ConsoleReporter, Reporter};
