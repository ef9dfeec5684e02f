// Writes alias definitions into a terminal
//
// POSIX shells get every alias in one statement. cmd and PowerShell have no
// batched form, so they get one line per alias.

use crate::core::AliasEntry;
use crate::error::{AliasError, Result};
use crate::shell::ShellTarget;
use std::io;
use tracing::{debug, warn};

/// Anything that can receive text typed into a terminal
pub trait TextSink {
    /// Send one line of text, submitted as if Enter was pressed
    fn send_text(&mut self, text: &str) -> io::Result<()>;
}

/// Renders and sends alias definitions
pub struct ShellDispatcher {
    clear: bool,
}

impl Default for ShellDispatcher {
    fn default() -> Self {
        Self { clear: true }
    }
}

impl ShellDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to clear the screen once the aliases are in
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Render the lines that define `aliases` in `target`
    ///
    /// Each returned string is one write to the sink.
    pub fn render(&self, target: ShellTarget, aliases: &[AliasEntry]) -> Vec<String> {
        match target {
            ShellTarget::PosixShell => {
                let definitions = aliases
                    .iter()
                    .map(|entry| {
                        format!(
                            "{}={}",
                            entry.alias_name,
                            posix_quote(&entry.full_command)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(" ");

                let mut line = format!("alias {}", definitions);
                if self.clear {
                    line.push_str(" && ");
                    line.push_str(target.clear_command());
                }
                vec![line]
            }
            ShellTarget::WindowsCmd => self.with_clear_line(
                target,
                aliases
                    .iter()
                    .map(|entry| format!("doskey {}={} $*", entry.alias_name, entry.full_command))
                    .collect(),
            ),
            ShellTarget::WindowsPowerShell => self.with_clear_line(
                target,
                aliases
                    .iter()
                    .map(|entry| {
                        format!(
                            "function {} {{ & {} $args }}",
                            entry.alias_name, entry.full_command
                        )
                    })
                    .collect(),
            ),
        }
    }

    /// Write the alias definitions for `target` into `sink`
    ///
    /// For line-per-alias shells a failed write doesn't stop the run; the
    /// remaining lines are still sent and the first failure is reported.
    pub fn dispatch<S: TextSink + ?Sized>(
        &self,
        target: ShellTarget,
        aliases: &[AliasEntry],
        sink: &mut S,
    ) -> Result<()> {
        let lines = self.render(target, aliases);
        let mut first_failure: Option<io::Error> = None;
        let mut failed = 0usize;

        for line in &lines {
            if let Err(e) = sink.send_text(line) {
                warn!(%target, error = %e, "terminal rejected alias text");
                failed += 1;
                first_failure.get_or_insert(e);
            }
        }

        match first_failure {
            None => {
                debug!(%target, writes = lines.len(), "aliases dispatched");
                Ok(())
            }
            Some(e) => {
                debug!(%target, failed, total = lines.len(), "dispatch incomplete");
                Err(AliasError::Dispatch(e.to_string()))
            }
        }
    }

    fn with_clear_line(&self, target: ShellTarget, mut lines: Vec<String>) -> Vec<String> {
        if self.clear {
            lines.push(target.clear_command().to_string());
        }
        lines
    }
}

// Single-quote for sh; embedded quotes become '\''
fn posix_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
