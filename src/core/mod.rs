/// Core functionality modules
///
/// Contains the main business logic: project detection, alias table
/// construction, searching, and applying aliases to terminals.

pub mod alias_table;
pub mod applier;
pub mod project_detector;
pub mod rules;
pub mod searcher;

pub use alias_table::{
    validate_alias_name, AliasCategory, AliasEntry, AliasTableBuilder, BASE_COMMAND,
};
pub use applier::{AliasApplier, ApplyOutcome};
pub use project_detector::{ProjectDetector, MARKER_FILE};
pub use searcher::AliasSearcher;
