/// Alias table construction
///
/// Builds the ordered list of aliases from the static rule sets plus the one
/// configurable name, the primary alias.

use crate::core::rules::RULE_SETS;
use crate::error::{AliasError, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

/// The command every alias expands to
pub const BASE_COMMAND: &str = "php artisan";

// Words that survive alias, doskey and function definitions alike
const ALIAS_NAME_PATTERN: &str = r"^[A-Za-z0-9_][A-Za-z0-9_.:-]*$";

/// Grouping shown on the help surface, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasCategory {
    Main,
    MakeCommands,
    DirectCommands,
    DatabaseCommands,
    MigrationCommands,
    EnvironmentCommands,
    MixedCommands,
}

impl AliasCategory {
    pub const ALL: [AliasCategory; 7] = [
        AliasCategory::Main,
        AliasCategory::MakeCommands,
        AliasCategory::DirectCommands,
        AliasCategory::DatabaseCommands,
        AliasCategory::MigrationCommands,
        AliasCategory::EnvironmentCommands,
        AliasCategory::MixedCommands,
    ];

    /// Heading used when listing aliases
    pub fn label(&self) -> &str {
        match self {
            AliasCategory::Main => "Main",
            AliasCategory::MakeCommands => "Make Commands",
            AliasCategory::DirectCommands => "Direct Commands",
            AliasCategory::DatabaseCommands => "Database Commands",
            AliasCategory::MigrationCommands => "Migration Commands",
            AliasCategory::EnvironmentCommands => "Environment Commands",
            AliasCategory::MixedCommands => "Mixed Commands",
        }
    }
}

impl fmt::Display for AliasCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One alias: what the user types and what it runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasEntry {
    pub alias_name: String,
    pub full_command: String,
    pub description: String,
    pub category: AliasCategory,
}

impl AliasEntry {
    fn new(
        alias_name: String,
        subcommand: Option<&str>,
        description: &str,
        category: AliasCategory,
    ) -> Self {
        let full_command = match subcommand {
            Some(sub) => format!("{} {}", BASE_COMMAND, sub),
            None => BASE_COMMAND.to_string(),
        };

        Self {
            alias_name,
            full_command,
            description: description.to_string(),
            category,
        }
    }
}

/// Check that a name can be defined as an alias in every supported shell
pub fn validate_alias_name(name: &str) -> Result<()> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(ALIAS_NAME_PATTERN).expect("alias name pattern is valid")
    });

    if pattern.is_match(name) {
        Ok(())
    } else {
        Err(AliasError::InvalidAlias(name.to_string()))
    }
}

/// Builds alias tables
pub struct AliasTableBuilder;

impl AliasTableBuilder {
    /// Build the full table for the given primary alias
    ///
    /// The primary alias comes first, followed by every rule set in
    /// declaration order. The length never depends on `primary`.
    ///
    /// # Returns
    /// * `Ok(Vec<AliasEntry>)` - The ordered table
    /// * `Err(AliasError::InvalidAlias)` - If `primary` isn't a usable name
    /// * `Err(AliasError::AliasCollision)` - If `primary` shadows a built-in alias
    pub fn build(primary: &str) -> Result<Vec<AliasEntry>> {
        validate_alias_name(primary)?;

        let mut entries = vec![AliasEntry::new(
            primary.to_string(),
            None,
            "Run php artisan",
            AliasCategory::Main,
        )];
        entries.extend(Self::static_entries());

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.alias_name.as_str()) {
                return Err(AliasError::AliasCollision(entry.alias_name.clone()));
            }
        }

        debug!(primary, count = entries.len(), "built alias table");
        Ok(entries)
    }

    /// Every entry produced by the static rule sets, without the primary alias
    pub fn static_entries() -> Vec<AliasEntry> {
        RULE_SETS
            .iter()
            .flat_map(|set| {
                set.expand()
                    .into_iter()
                    .map(move |(alias, sub, desc)| {
                        AliasEntry::new(alias, Some(sub.as_str()), desc, set.category)
                    })
            })
            .collect()
    }

    /// Number of entries every build produces
    pub fn table_len() -> usize {
        Self::static_entries().len() + 1
    }
}
