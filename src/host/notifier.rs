// User-facing notices
//
// Informational notices (no project, terminal not ready) and error notices
// (dispatch failed) go through here instead of being returned as errors.

use tracing::debug;

/// Where notices end up
pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Prints notices to stderr, keeping stdout free for shell code
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Drop informational notices, still print errors
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn info(&self, message: &str) {
        debug!(notice = message, "info notice");
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn error(&self, message: &str) {
        debug!(notice = message, "error notice");
        eprintln!("✗ {}", message);
    }
}
