/// Alias searcher with fuzzy matching
///
/// Backs the alias listing: narrows the table down to what the user typed.

use crate::core::AliasEntry;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Handles alias searching with fuzzy matching
pub struct AliasSearcher {
    matcher: SkimMatcherV2,
}

impl Default for AliasSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl AliasSearcher {
    /// Create a new searcher instance
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Search aliases with fuzzy matching
    ///
    /// Matches against the alias name, the full command and the description,
    /// keeping the best of the three scores.
    ///
    /// # Arguments
    /// * `entries` - Alias table to search
    /// * `query` - Search query; blank returns everything in table order
    /// * `limit` - Maximum results to return
    pub fn search<'a>(
        &self,
        entries: &'a [AliasEntry],
        query: &str,
        limit: usize,
    ) -> Vec<&'a AliasEntry> {
        let query = query.trim();
        if query.is_empty() {
            return entries.iter().take(limit).collect();
        }

        let mut results: Vec<(i64, &AliasEntry)> = entries
            .iter()
            .filter_map(|entry| self.score(entry, query).map(|score| (score, entry)))
            .collect();

        // Stable sort keeps table order for equal scores
        results.sort_by(|a, b| b.0.cmp(&a.0));
        results.truncate(limit);

        results.into_iter().map(|(_, entry)| entry).collect()
    }

    fn score(&self, entry: &AliasEntry, query: &str) -> Option<i64> {
        [
            entry.alias_name.as_str(),
            entry.full_command.as_str(),
            entry.description.as_str(),
        ]
        .iter()
        .filter_map(|field| self.matcher.fuzzy_match(field, query))
        .max()
    }
}
