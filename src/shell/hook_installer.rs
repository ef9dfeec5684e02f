/// Hook installer
///
/// Adds (and removes) the startup-file line that applies the aliases to every
/// new terminal session.

use crate::error::{AliasError, Result};
use crate::shell::{Shell, ShellDetector};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Comment placed above the hook line so uninstall can find it
const HOOK_MARKER: &str = "# artisan-alias hook (auto-generated)";

/// Hook installer
pub struct HookInstaller {
    home: PathBuf,
}

impl HookInstaller {
    /// Create a new hook installer
    ///
    /// # Returns
    /// * `Ok(HookInstaller)` - New installer instance
    /// * `Err(AliasError)` - If home directory cannot be determined
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| AliasError::Config("Could not determine home directory".to_string()))?;

        Ok(Self { home })
    }

    /// Installer rooted at an explicit home directory
    pub fn with_home<P: Into<PathBuf>>(home: P) -> Self {
        Self { home: home.into() }
    }

    /// Install the hook for the detected shell
    ///
    /// # Returns
    /// * `Ok(Shell)` - The shell that was configured
    /// * `Err(AliasError)` - If installation fails
    pub fn install_auto(&self) -> Result<Shell> {
        let shell = ShellDetector::detect()?;
        self.install(shell)?;
        Ok(shell)
    }

    /// Install the hook for a specific shell
    ///
    /// Running it twice leaves a single hook line.
    pub fn install(&self, shell: Shell) -> Result<()> {
        let rc_path = shell.rc_file_path(&self.home);

        if let Some(parent) = rc_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content = if rc_path.exists() {
            fs::read_to_string(&rc_path)?
        } else {
            String::new()
        };

        let hook = shell.hook_command();
        if content.contains(&hook) {
            debug!(%shell, "hook already installed");
            return Ok(());
        }

        if !content.ends_with('\n') && !content.is_empty() {
            content.push('\n');
        }

        content.push('\n');
        content.push_str(HOOK_MARKER);
        content.push('\n');
        content.push_str(&hook);
        content.push('\n');

        fs::write(&rc_path, content)?;
        info!(%shell, path = %rc_path.display(), "installed alias hook");

        Ok(())
    }

    /// Remove the hook for a specific shell
    pub fn uninstall(&self, shell: Shell) -> Result<()> {
        let rc_path = shell.rc_file_path(&self.home);
        if !rc_path.exists() {
            return Ok(());
        }

        let content = fs::read_to_string(&rc_path)?;
        let hook = shell.hook_command();

        let mut new_content: String = content
            .lines()
            .filter(|line| *line != hook && *line != HOOK_MARKER)
            .collect::<Vec<_>>()
            .join("\n");
        if content.ends_with('\n') {
            new_content.push('\n');
        }

        fs::write(&rc_path, new_content)?;
        info!(%shell, path = %rc_path.display(), "removed alias hook");

        Ok(())
    }

    /// Check if the hook is installed for a shell
    pub fn is_installed(&self, shell: Shell) -> bool {
        fs::read_to_string(shell.rc_file_path(&self.home))
            .map(|content| content.contains(&shell.hook_command()))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_installer() -> (HookInstaller, TempDir) {
        let temp = TempDir::new().unwrap();
        let installer = HookInstaller::with_home(temp.path());
        (installer, temp)
    }

    #[test]
    fn test_is_installed() {
        let (installer, _temp) = create_test_installer();

        // Should not be installed initially
        assert!(!installer.is_installed(Shell::Bash));
    }

    #[test]
    fn test_install_creates_rc_file() {
        let (installer, temp) = create_test_installer();

        installer.install(Shell::Zsh).unwrap();

        let content = fs::read_to_string(temp.path().join(".zshrc")).unwrap();
        assert!(content.contains(HOOK_MARKER));
        assert!(content.contains("artisan-alias init"));
        assert!(installer.is_installed(Shell::Zsh));
        assert!(!installer.is_installed(Shell::Bash));
    }

    #[test]
    fn test_install_is_idempotent() {
        let (installer, temp) = create_test_installer();

        installer.install(Shell::Bash).unwrap();
        installer.install(Shell::Bash).unwrap();

        let content = fs::read_to_string(temp.path().join(".bashrc")).unwrap();
        assert_eq!(content.matches(HOOK_MARKER).count(), 1);
    }

    #[test]
    fn test_uninstall_keeps_other_lines() {
        let (installer, temp) = create_test_installer();
        let rc = temp.path().join(".bashrc");
        fs::write(&rc, "export PATH=\"$HOME/bin:$PATH\"\n").unwrap();

        installer.install(Shell::Bash).unwrap();
        installer.uninstall(Shell::Bash).unwrap();

        let content = fs::read_to_string(&rc).unwrap();
        assert!(content.contains("export PATH"));
        assert!(!content.contains("artisan-alias"));
        assert!(!installer.is_installed(Shell::Bash));
    }

    #[test]
    fn test_uninstall_without_rc_file() {
        let (installer, _temp) = create_test_installer();
        assert!(installer.uninstall(Shell::PowerShell).is_ok());
    }

    #[test]
    fn test_powershell_profile_directory_created() {
        let (installer, temp) = create_test_installer();

        installer.install(Shell::PowerShell).unwrap();

        assert!(temp.path().join("Documents/PowerShell").is_dir());
        assert!(installer.is_installed(Shell::PowerShell));
    }
}
