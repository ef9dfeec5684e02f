/// Laravel project detection
///
/// A workspace root counts as a Laravel project when the `artisan` script sits
/// at its top level. Only the top level is probed; parents and children are
/// not walked.

use std::path::{Path, PathBuf};
use tracing::debug;

/// File whose presence marks a Laravel project root
pub const MARKER_FILE: &str = "artisan";

/// Handles project root detection
pub struct ProjectDetector;

impl ProjectDetector {
    /// Check whether any of the given roots is a Laravel project
    ///
    /// Returns `true` on the first root holding the marker file and `false`
    /// for an empty list or when no root has it. Probe failures (permission
    /// denied and the like) count as "not found" for that root.
    ///
    /// # Examples
    /// ```no_run
    /// use artisan_alias_lib::core::ProjectDetector;
    /// use std::env;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let cwd = env::current_dir()?;
    /// if ProjectDetector::is_project_root(&[cwd]) {
    ///     println!("Laravel project");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn is_project_root<P: AsRef<Path>>(roots: &[P]) -> bool {
        Self::find_project_root(roots).is_some()
    }

    /// Return the first root holding the marker file
    pub fn find_project_root<P: AsRef<Path>>(roots: &[P]) -> Option<PathBuf> {
        roots
            .iter()
            .map(|root| root.as_ref())
            .find(|root| Self::has_marker(root))
            .map(Path::to_path_buf)
    }

    /// Check a single root for the marker file
    pub fn has_marker<P: AsRef<Path>>(root: P) -> bool {
        let marker = root.as_ref().join(MARKER_FILE);

        // Errors from the probe itself are treated as absence
        let found = marker.try_exists().unwrap_or(false) && marker.is_file();
        debug!(root = %root.as_ref().display(), found, "probed workspace root");

        found
    }

    /// Get the project name from the root path
    ///
    /// Uses the directory name as the project name.
    pub fn get_project_name<P: AsRef<Path>>(project_root: P) -> Option<String> {
        project_root
            .as_ref()
            .file_name()
            .and_then(|name| name.to_str())
            .map(|s| s.to_string())
    }
}
