// Applies the alias table to terminals
//
// detect project -> build table -> wait for the terminal -> dispatch.
// Each terminal is handled on its own; nothing is shared between runs except
// the read-only config.

use crate::config::Config;
use crate::core::{AliasEntry, AliasTableBuilder, ProjectDetector};
use crate::error::Result;
use crate::host::{Notifier, Terminal};
use crate::shell::{Platform, ShellDetector, ShellDispatcher, ShellTarget};
use futures::future::join_all;
use std::path::PathBuf;
use tokio::time::timeout;
use tracing::{debug, info, warn};

const NOT_A_PROJECT_NOTICE: &str = "No Laravel project found in this workspace";

/// What happened to one terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Aliases were written
    Applied { target: ShellTarget, count: usize },
    /// No workspace root holds the marker file
    NotAProject,
    /// The terminal never became ready; nothing was written
    Abandoned,
    /// Something went wrong; carries the notice shown to the user
    Failed(String),
}

pub struct AliasApplier {
    config: Config,
    roots: Vec<PathBuf>,
    platform: Platform,
    target_override: Option<ShellTarget>,
}

impl AliasApplier {
    pub fn new(config: Config, roots: Vec<PathBuf>, platform: Platform) -> Self {
        Self {
            config,
            roots,
            platform,
            target_override: None,
        }
    }

    /// Use `target` for every terminal instead of selecting one
    pub fn with_target(mut self, target: ShellTarget) -> Self {
        self.target_override = Some(target);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn is_project(&self) -> bool {
        ProjectDetector::is_project_root(&self.roots)
    }

    /// The alias table for the configured primary alias
    pub fn list_aliases(&self) -> Result<Vec<AliasEntry>> {
        AliasTableBuilder::build(self.config.primary_alias())
    }

    /// Syntax to use for this terminal
    pub fn target_for(&self, terminal: &dyn Terminal) -> ShellTarget {
        if let Some(target) = self.target_override {
            return target;
        }

        let shell = terminal
            .shell_path()
            .or_else(|| self.config.windows_shell.clone());
        ShellDetector::select(self.platform, shell.as_deref())
    }

    /// Apply the aliases to one terminal
    pub async fn apply(
        &self,
        terminal: &mut dyn Terminal,
        notifier: &dyn Notifier,
    ) -> ApplyOutcome {
        if !self.is_project() {
            notifier.info(NOT_A_PROJECT_NOTICE);
            return ApplyOutcome::NotAProject;
        }

        self.apply_in_project(terminal, notifier).await
    }

    /// Apply the aliases to every given terminal
    ///
    /// Runs concurrently; outcomes come back in input order.
    pub async fn apply_all(
        &self,
        terminals: Vec<&mut dyn Terminal>,
        notifier: &dyn Notifier,
    ) -> Vec<ApplyOutcome> {
        // One notice for the whole batch, not one per terminal
        if !self.is_project() {
            notifier.info(NOT_A_PROJECT_NOTICE);
            return vec![ApplyOutcome::NotAProject; terminals.len()];
        }

        let runs = terminals
            .into_iter()
            .map(|terminal| self.apply_in_project(terminal, notifier));
        join_all(runs).await
    }

    /// Apply the aliases, then run `<primary> serve` in the terminal
    pub async fn start_server(
        &self,
        terminal: &mut dyn Terminal,
        notifier: &dyn Notifier,
    ) -> ApplyOutcome {
        let outcome = self.apply(terminal, notifier).await;
        if !matches!(outcome, ApplyOutcome::Applied { .. }) {
            return outcome;
        }

        let command = format!("{} serve", self.config.primary_alias());
        match terminal.send_text(&command) {
            Ok(()) => {
                info!(terminal = terminal.name(), %command, "started development server");
                outcome
            }
            Err(e) => {
                let message = format!("Failed to start the development server: {}", e);
                notifier.error(&message);
                ApplyOutcome::Failed(message)
            }
        }
    }

    async fn apply_in_project(
        &self,
        terminal: &mut dyn Terminal,
        notifier: &dyn Notifier,
    ) -> ApplyOutcome {
        let aliases = match self.list_aliases() {
            Ok(aliases) => aliases,
            Err(e) => {
                let message = e.user_message();
                notifier.error(&message);
                return ApplyOutcome::Failed(message);
            }
        };

        let grace = self.config.readiness_timeout();
        match timeout(grace, terminal.process_id()).await {
            Ok(Some(pid)) => debug!(terminal = terminal.name(), pid, "terminal ready"),
            Ok(None) | Err(_) => {
                warn!(terminal = terminal.name(), ?grace, "terminal not ready, skipping");
                notifier.info(&format!(
                    "Terminal '{}' was not ready; aliases were not applied",
                    terminal.name()
                ));
                return ApplyOutcome::Abandoned;
            }
        }

        let target = self.target_for(terminal);
        let dispatcher = ShellDispatcher::new().with_clear(self.config.clear_after_apply);

        match dispatcher.dispatch(target, &aliases, &mut *terminal) {
            Ok(()) => {
                info!(
                    terminal = terminal.name(),
                    %target,
                    count = aliases.len(),
                    "aliases applied"
                );
                ApplyOutcome::Applied {
                    target,
                    count: aliases.len(),
                }
            }
            Err(e) => {
                let message = e.user_message();
                notifier.error(&message);
                ApplyOutcome::Failed(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::project_detector::MARKER_FILE;
    use crate::host::StreamTerminal;
    use crate::shell::TextSink;
    use async_trait::async_trait;
    use std::fs;
    use std::io;
    use std::sync::Mutex;
    use std::time::Duration;
    use tempfile::TempDir;

    struct FakeTerminal {
        name: String,
        shell: Option<String>,
        ready_after: Option<Duration>,
        broken: bool,
        writes: Vec<String>,
    }

    impl FakeTerminal {
        fn ready(name: &str) -> Self {
            Self {
                name: name.to_string(),
                shell: None,
                ready_after: Some(Duration::ZERO),
                broken: false,
                writes: Vec::new(),
            }
        }
    }

    impl TextSink for FakeTerminal {
        fn send_text(&mut self, text: &str) -> io::Result<()> {
            if self.broken {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "process exited"));
            }
            self.writes.push(text.to_string());
            Ok(())
        }
    }

    #[async_trait]
    impl Terminal for FakeTerminal {
        fn name(&self) -> &str {
            &self.name
        }

        fn shell_path(&self) -> Option<String> {
            self.shell.clone()
        }

        async fn process_id(&self) -> Option<u32> {
            match self.ready_after {
                Some(delay) => {
                    tokio::time::sleep(delay).await;
                    Some(4242)
                }
                None => std::future::pending::<Option<u32>>().await,
            }
        }
    }

    #[derive(Default)]
    struct Notices {
        info: Mutex<Vec<String>>,
        error: Mutex<Vec<String>>,
    }

    impl Notifier for Notices {
        fn info(&self, message: &str) {
            self.info.lock().unwrap().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.error.lock().unwrap().push(message.to_string());
        }
    }

    fn laravel_root() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(MARKER_FILE), "").unwrap();
        temp
    }

    fn applier(root: &TempDir, platform: Platform) -> AliasApplier {
        let config = Config {
            readiness_timeout_ms: 50,
            ..Config::default()
        };
        AliasApplier::new(config, vec![root.path().to_path_buf()], platform)
    }

    #[tokio::test]
    async fn test_not_a_project() {
        let root = TempDir::new().unwrap();
        let applier = applier(&root, Platform::Posix);
        let mut terminal = FakeTerminal::ready("t1");
        let notices = Notices::default();

        let outcome = applier.apply(&mut terminal, &notices).await;

        assert_eq!(outcome, ApplyOutcome::NotAProject);
        assert!(terminal.writes.is_empty());
        assert_eq!(notices.info.lock().unwrap().len(), 1);
        assert!(notices.error.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_posix_apply() {
        let root = laravel_root();
        let applier = applier(&root, Platform::Posix);
        let mut terminal = FakeTerminal::ready("t1");
        let notices = Notices::default();

        let outcome = applier.apply(&mut terminal, &notices).await;

        assert_eq!(
            outcome,
            ApplyOutcome::Applied {
                target: ShellTarget::PosixShell,
                count: AliasTableBuilder::table_len(),
            }
        );
        assert_eq!(terminal.writes.len(), 1);
        assert!(terminal.writes[0].contains("art='php artisan'"));
    }

    #[test]
    fn test_windows_stdout_uses_configured_shell() {
        // COMSPEC points at cmd.exe even inside PowerShell
        std::env::set_var("COMSPEC", r"C:\Windows\System32\cmd.exe");
        let root = laravel_root();
        let config = Config {
            windows_shell: Some("pwsh.exe".to_string()),
            ..Config::default()
        };
        let applier = AliasApplier::new(config, vec![root.path().to_path_buf()], Platform::Windows);
        let terminal = StreamTerminal::stdout(Platform::Windows);

        assert_eq!(applier.target_for(&terminal), ShellTarget::WindowsPowerShell);
    }

    #[test]
    fn test_windows_without_configured_shell_is_cmd() {
        let root = TempDir::new().unwrap();
        let applier = applier(&root, Platform::Windows);
        let terminal = StreamTerminal::stdout(Platform::Windows);

        assert_eq!(applier.target_for(&terminal), ShellTarget::WindowsCmd);
    }

    #[tokio::test]
    async fn test_windows_uses_terminal_shell() {
        let root = laravel_root();
        let applier = applier(&root, Platform::Windows);
        let mut terminal = FakeTerminal::ready("pwsh");
        terminal.shell = Some(r"C:\Program Files\PowerShell\7\pwsh.exe".to_string());
        let notices = Notices::default();

        applier.apply(&mut terminal, &notices).await;

        assert!(terminal
            .writes
            .contains(&"function art { & php artisan $args }".to_string()));
    }

    #[tokio::test]
    async fn test_windows_falls_back_to_configured_shell() {
        let root = laravel_root();
        let config = Config {
            windows_shell: Some("powershell.exe".to_string()),
            ..Config::default()
        };
        let applier = AliasApplier::new(config, vec![root.path().to_path_buf()], Platform::Windows);
        let terminal = FakeTerminal::ready("t1");

        assert_eq!(applier.target_for(&terminal), ShellTarget::WindowsPowerShell);
    }

    #[tokio::test]
    async fn test_target_override() {
        let root = laravel_root();
        let applier = applier(&root, Platform::Posix).with_target(ShellTarget::WindowsCmd);
        let terminal = FakeTerminal::ready("t1");

        assert_eq!(applier.target_for(&terminal), ShellTarget::WindowsCmd);
    }

    #[tokio::test]
    async fn test_waits_for_late_readiness() {
        let root = laravel_root();
        let applier = applier(&root, Platform::Posix);
        let mut terminal = FakeTerminal::ready("slow");
        terminal.ready_after = Some(Duration::from_millis(10));
        let notices = Notices::default();

        let outcome = applier.apply(&mut terminal, &notices).await;

        assert!(matches!(outcome, ApplyOutcome::Applied { .. }));
    }

    #[tokio::test]
    async fn test_never_ready_is_abandoned() {
        let root = laravel_root();
        let applier = applier(&root, Platform::Posix);
        let mut terminal = FakeTerminal::ready("stuck");
        terminal.ready_after = None;
        let notices = Notices::default();

        let outcome = applier.apply(&mut terminal, &notices).await;

        assert_eq!(outcome, ApplyOutcome::Abandoned);
        assert!(terminal.writes.is_empty());
        assert_eq!(notices.info.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_failure_is_reported() {
        let root = laravel_root();
        let applier = applier(&root, Platform::Posix);
        let mut terminal = FakeTerminal::ready("dead");
        terminal.broken = true;
        let notices = Notices::default();

        let outcome = applier.apply(&mut terminal, &notices).await;

        let expected = "Failed to set aliases: process exited".to_string();
        assert_eq!(outcome, ApplyOutcome::Failed(expected.clone()));
        assert_eq!(*notices.error.lock().unwrap(), vec![expected]);
    }

    #[tokio::test]
    async fn test_colliding_alias_is_reported() {
        let root = laravel_root();
        let config = Config {
            alias: "migrate".to_string(),
            ..Config::default()
        };
        let applier = AliasApplier::new(config, vec![root.path().to_path_buf()], Platform::Posix);
        let mut terminal = FakeTerminal::ready("t1");
        let notices = Notices::default();

        let outcome = applier.apply(&mut terminal, &notices).await;

        assert!(matches!(outcome, ApplyOutcome::Failed(_)));
        assert!(terminal.writes.is_empty());
    }

    #[tokio::test]
    async fn test_apply_all_independent() {
        let root = laravel_root();
        let applier = applier(&root, Platform::Posix);
        let mut ok = FakeTerminal::ready("ok");
        let mut stuck = FakeTerminal::ready("stuck");
        stuck.ready_after = None;
        let mut dead = FakeTerminal::ready("dead");
        dead.broken = true;
        let notices = Notices::default();

        let outcomes = applier
            .apply_all(
                vec![
                    &mut ok as &mut dyn Terminal,
                    &mut stuck as &mut dyn Terminal,
                    &mut dead as &mut dyn Terminal,
                ],
                &notices,
            )
            .await;

        assert!(matches!(outcomes[0], ApplyOutcome::Applied { .. }));
        assert_eq!(outcomes[1], ApplyOutcome::Abandoned);
        assert!(matches!(outcomes[2], ApplyOutcome::Failed(_)));
        assert_eq!(ok.writes.len(), 1);
    }

    #[tokio::test]
    async fn test_apply_all_outside_project_notifies_once() {
        let root = TempDir::new().unwrap();
        let applier = applier(&root, Platform::Posix);
        let mut a = FakeTerminal::ready("a");
        let mut b = FakeTerminal::ready("b");
        let notices = Notices::default();

        let outcomes = applier
            .apply_all(
                vec![&mut a as &mut dyn Terminal, &mut b as &mut dyn Terminal],
                &notices,
            )
            .await;

        assert_eq!(outcomes, vec![ApplyOutcome::NotAProject; 2]);
        assert_eq!(notices.info.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_start_server() {
        let root = laravel_root();
        let applier = applier(&root, Platform::Posix);
        let mut terminal = FakeTerminal::ready("server");
        let notices = Notices::default();

        let outcome = applier.start_server(&mut terminal, &notices).await;

        assert!(matches!(outcome, ApplyOutcome::Applied { .. }));
        assert_eq!(terminal.writes.last().unwrap(), "art serve");
    }
}
