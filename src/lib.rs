/// artisan-alias library
///
/// Short shell aliases for `php artisan`, injected into terminals opened in a
/// Laravel workspace.

pub mod config;
pub mod core;
pub mod error;
pub mod host;
pub mod shell;

// Re-exports for convenience
pub use config::Config;
pub use error::{AliasError, Result};
