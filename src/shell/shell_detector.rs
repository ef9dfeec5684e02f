/// Shell target selection
///
/// Decides which alias syntax a terminal needs from the host platform and the
/// terminal's shell path.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::error::{AliasError, Result};

/// Operating system family of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    /// Platform this binary was built for
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }
}

/// Alias syntax family a terminal understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellTarget {
    PosixShell,
    WindowsCmd,
    WindowsPowerShell,
}

impl ShellTarget {
    /// Get the target name as a string
    pub fn name(&self) -> &str {
        match self {
            ShellTarget::PosixShell => "posix",
            ShellTarget::WindowsCmd => "cmd",
            ShellTarget::WindowsPowerShell => "powershell",
        }
    }

    /// Command that clears the screen in this shell
    pub fn clear_command(&self) -> &str {
        match self {
            ShellTarget::PosixShell => "clear",
            ShellTarget::WindowsCmd => "cls",
            ShellTarget::WindowsPowerShell => "Clear-Host",
        }
    }
}

impl fmt::Display for ShellTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ShellTarget {
    type Err = AliasError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "posix" | "sh" | "bash" | "zsh" => Ok(ShellTarget::PosixShell),
            "cmd" => Ok(ShellTarget::WindowsCmd),
            "powershell" | "pwsh" => Ok(ShellTarget::WindowsPowerShell),
            other => Err(AliasError::UnsupportedShell(other.to_string())),
        }
    }
}

/// Interactive shells whose startup file can carry the alias hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    PowerShell,
}

impl Shell {
    pub const ALL: [Shell; 3] = [Shell::Bash, Shell::Zsh, Shell::PowerShell];

    /// Get the shell name as a string
    pub fn name(&self) -> &str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::PowerShell => "powershell",
        }
    }

    /// Alias syntax this shell takes
    pub fn target(&self) -> ShellTarget {
        match self {
            Shell::Bash | Shell::Zsh => ShellTarget::PosixShell,
            Shell::PowerShell => ShellTarget::WindowsPowerShell,
        }
    }

    /// Startup file under `home` that gets the hook line
    pub fn rc_file_path(&self, home: &Path) -> PathBuf {
        match self {
            Shell::Bash => home.join(".bashrc"),
            Shell::Zsh => home.join(".zshrc"),
            Shell::PowerShell => {
                home.join("Documents/PowerShell/Microsoft.PowerShell_profile.ps1")
            }
        }
    }

    /// Line that makes each new session evaluate `artisan-alias init`
    pub fn hook_command(&self) -> String {
        match self {
            Shell::Bash | Shell::Zsh => {
                "command -v artisan-alias >/dev/null 2>&1 && eval \"$(artisan-alias init --shell posix --no-clear --quiet)\"".to_string()
            }
            Shell::PowerShell => {
                "if (Get-Command artisan-alias -ErrorAction SilentlyContinue) { artisan-alias init --shell powershell --no-clear --quiet | Out-String | Invoke-Expression }".to_string()
            }
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Shell {
    type Err = AliasError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "powershell" | "pwsh" => Ok(Shell::PowerShell),
            other => Err(AliasError::UnsupportedShell(other.to_string())),
        }
    }
}

/// Shell detector
pub struct ShellDetector;

impl ShellDetector {
    /// Pick the alias syntax for a terminal
    ///
    /// On Windows the shell path decides between PowerShell (path mentions
    /// `powershell` or `pwsh`, any case) and cmd. Every other platform gets
    /// POSIX aliases without looking at the shell. Shells like fish that
    /// treat `alias` differently are not special-cased.
    pub fn select(platform: Platform, shell_path: Option<&str>) -> ShellTarget {
        let target = match platform {
            Platform::Posix => ShellTarget::PosixShell,
            Platform::Windows => {
                let shell = shell_path.unwrap_or("").to_lowercase();
                if shell.contains("powershell") || shell.contains("pwsh") {
                    ShellTarget::WindowsPowerShell
                } else {
                    ShellTarget::WindowsCmd
                }
            }
        };

        debug!(?platform, shell_path, %target, "selected shell target");
        target
    }

    /// Shell path of the current process, from the environment
    ///
    /// Uses `SHELL` on POSIX systems. Always `None` on Windows: `COMSPEC`
    /// names cmd.exe even inside PowerShell, so the configured Windows shell
    /// decides there instead.
    pub fn current_shell_path(platform: Platform) -> Option<String> {
        match platform {
            Platform::Posix => env::var("SHELL").ok().filter(|path| !path.trim().is_empty()),
            Platform::Windows => None,
        }
    }

    /// Detect the user's interactive shell
    ///
    /// Reads `SHELL` first, then falls back to PowerShell when its module
    /// path is set.
    pub fn detect() -> Result<Shell> {
        if let Ok(shell_path) = env::var("SHELL") {
            let shell_name = Path::new(&shell_path)
                .file_stem()
                .and_then(|name| name.to_str())
                .unwrap_or("")
                .to_lowercase();

            return shell_name.parse();
        }

        if env::var("PSModulePath").is_ok() {
            return Ok(Shell::PowerShell);
        }

        Err(AliasError::Config(
            "Could not detect shell. Please set $SHELL environment variable.".to_string(),
        ))
    }
}
