/// Shell integration module
///
/// Handles shell detection, alias rendering and startup-file hooks.

pub mod dispatcher;
pub mod hook_installer;
pub mod shell_detector;

pub use dispatcher::{ShellDispatcher, TextSink};
pub use hook_installer::HookInstaller;
pub use shell_detector::{Platform, Shell, ShellDetector, ShellTarget};
