use crate::error::EngineError;
use hashbrown::HashMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::ops::AddAssign;
use std::path::PathBuf;

/// Line counts for one language (or one file).
///
/// `code_lines + blank_lines == total_lines` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeStats {
    pub total_lines: usize,
    pub code_lines: usize,
    pub blank_lines: usize,
}

impl AddAssign for CodeStats {
    fn add_assign(&mut self, rhs: Self) {
        self.total_lines += rhs.total_lines;
        self.code_lines += rhs.code_lines;
        self.blank_lines += rhs.blank_lines;
    }
}

/// Per-language tallies in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageStats {
    entries: Vec<(String, CodeStats)>,
    index: HashMap<String, usize>,
}

impl LanguageStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `stats` to `language`, creating the entry on first use.
    pub fn record(&mut self, language: &str, stats: CodeStats) {
        if let Some(&i) = self.index.get(language) {
            self.entries[i].1 += stats;
        } else {
            self.index.insert(language.to_string(), self.entries.len());
            self.entries.push((language.to_string(), stats));
        }
    }

    #[must_use]
    pub fn get(&self, language: &str) -> Option<&CodeStats> {
        self.index.get(language).map(|&i| &self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CodeStats)> {
        self.entries.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    /// Sum over all languages.
    #[must_use]
    pub fn total(&self) -> CodeStats {
        let mut total = CodeStats::default();
        for (_, stats) in &self.entries {
            total += *stats;
        }
        total
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for LanguageStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (language, stats) in &self.entries {
            map.serialize_entry(language, stats)?;
        }
        map.end()
    }
}

/// Outcome of a run.
///
/// Files that could not be read are kept in `errors` and left out of `stats`.
#[derive(Debug, Default)]
pub struct RunResult {
    pub stats: LanguageStats,
    pub files_counted: usize,
    pub errors: Vec<(PathBuf, EngineError)>,
}
