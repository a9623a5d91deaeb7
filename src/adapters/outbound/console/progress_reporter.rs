use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with a report written to stdout.
/// Warnings and errors are coloured unless `NO_COLOR` is set.
pub struct StderrProgressReporter {
    colored: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            colored: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Reporter that never emits ANSI escapes
    pub fn plain() -> Self {
        Self { colored: false }
    }

    fn paint_error(&self, message: &str) -> String {
        if !self.colored {
            return message.to_string();
        }
        if message.contains("Warning") {
            message.yellow().to_string()
        } else {
            message.red().to_string()
        }
    }

    fn paint_completion(&self, message: &str) -> String {
        if self.colored {
            message.green().to_string()
        } else {
            message.to_string()
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", self.paint_error(message));
    }

    fn report_completion(&self, message: &str) {
        eprintln!();
        eprintln!("{}", self.paint_completion(message));
    }
}
