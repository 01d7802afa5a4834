//! Progress and notification capability
//!
//! The command layer reports progress and user-facing notices through this
//! trait; core modules (parser, cache, session) never touch it. Tests swap
//! in the silent implementation.

use indicatif::ProgressBar;

use crate::cli::output::Output;

/// Progress/notification sink for long-running command flows.
pub trait Reporter {
    /// Report progress as a fraction in `0.0..=1.0` with a short message.
    fn report(&self, fraction: f32, message: &str);

    /// Surface a one-line notice to the user.
    fn notify(&self, message: &str);
}

/// Spinner-backed reporter for interactive terminal use.
pub struct ConsoleReporter {
    bar: ProgressBar,
}

impl ConsoleReporter {
    pub fn new(title: &str) -> Self {
        Self {
            bar: Output::spinner(title),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, fraction: f32, message: &str) {
        let percent = (fraction.clamp(0.0, 1.0) * 100.0).round() as u32;
        self.bar.set_message(format!("{} ({}%)", message, percent));
    }

    fn notify(&self, message: &str) {
        self.bar.println(message.to_string());
    }
}

impl Drop for ConsoleReporter {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Reporter that discards everything, for tests and scripted runs.
#[derive(Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _fraction: f32, _message: &str) {}

    fn notify(&self, _message: &str) {}
}
