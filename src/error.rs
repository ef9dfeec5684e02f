/// Error types for artisan-alias
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for artisan-alias operations
#[derive(Error, Debug)]
pub enum AliasError {
    /// I/O errors (file operations, terminal writes, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Alias name the shells can't take
    #[error("Invalid alias name: {0}")]
    InvalidAlias(String),

    /// Two entries in one table share a name
    #[error("Alias '{0}' is defined more than once")]
    AliasCollision(String),

    /// Writing to the terminal sink failed
    #[error("Dispatch error: {0}")]
    Dispatch(String),

    /// Shell has no support for the requested operation
    #[error("Unsupported shell: {0}")]
    UnsupportedShell(String),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for artisan-alias operations
pub type Result<T> = std::result::Result<T, AliasError>;

/// Convert AliasError to a user-friendly error message
impl AliasError {
    pub fn user_message(&self) -> String {
        match self {
            AliasError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            AliasError::ConfigParse(e) => {
                format!("Config file is not valid TOML. Details: {}", e)
            }
            AliasError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            AliasError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            AliasError::InvalidAlias(name) => {
                format!("'{}' can't be used as a shell alias name", name)
            }
            AliasError::AliasCollision(name) => {
                format!(
                    "Alias '{}' clashes with a built-in alias. Pick another name.",
                    name
                )
            }
            AliasError::Dispatch(msg) if msg.trim().is_empty() => {
                "Failed to set aliases due to an unknown error".to_string()
            }
            AliasError::Dispatch(msg) => {
                format!("Failed to set aliases: {}", msg)
            }
            AliasError::UnsupportedShell(shell) => {
                format!("{} is not supported for this operation", shell)
            }
            AliasError::Generic(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = AliasError::AliasCollision("migrate".to_string());
        assert!(err.user_message().contains("migrate"));

        let err = AliasError::InvalidAlias("a b".to_string());
        assert!(err.user_message().contains("a b"));
    }

    #[test]
    fn test_dispatch_message_keeps_description() {
        let err = AliasError::Dispatch("terminal closed".to_string());
        assert_eq!(err.user_message(), "Failed to set aliases: terminal closed");
    }

    #[test]
    fn test_dispatch_message_without_description() {
        let err = AliasError::Dispatch(String::new());
        assert_eq!(
            err.user_message(),
            "Failed to set aliases due to an unknown error"
        );
    }

    #[test]
    fn test_error_display() {
        let err = AliasError::Config("bad timeout".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Configuration error"));
    }
}
