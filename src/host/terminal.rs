/// Terminal abstraction
///
/// The host owns real terminals; the applier only needs to write text into
/// one and to know when its process is up.

use crate::shell::{Platform, ShellDetector, TextSink};
use async_trait::async_trait;
use std::io::{self, Write};

/// A live terminal session supplied by the host
#[async_trait]
pub trait Terminal: TextSink + Send + Sync {
    /// Display name, used in notices and logs
    fn name(&self) -> &str;

    /// Path of the shell running in this terminal, when the host knows it
    fn shell_path(&self) -> Option<String>;

    /// Resolves once the backing process exists
    ///
    /// `None` means the process went away before it was ready.
    async fn process_id(&self) -> Option<u32>;
}

/// Terminal backed by a byte stream, ready immediately
///
/// The CLI uses this over stdout so the shell can evaluate what gets written.
pub struct StreamTerminal<W> {
    name: String,
    shell_path: Option<String>,
    out: W,
}

impl StreamTerminal<io::Stdout> {
    /// The current process's stdout, with the shell taken from the environment
    pub fn stdout(platform: Platform) -> Self {
        Self::new("stdout", ShellDetector::current_shell_path(platform), io::stdout())
    }
}

impl<W: Write + Send + Sync> StreamTerminal<W> {
    pub fn new(name: impl Into<String>, shell_path: Option<String>, out: W) -> Self {
        Self {
            name: name.into(),
            shell_path,
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send + Sync> TextSink for StreamTerminal<W> {
    fn send_text(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }
}

#[async_trait]
impl<W: Write + Send + Sync> Terminal for StreamTerminal<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn shell_path(&self) -> Option<String> {
        self.shell_path.clone()
    }

    async fn process_id(&self) -> Option<u32> {
        Some(std::process::id())
    }
}
