use crate::stats::{CodeStats, LanguageStats};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Final summary of a run, ready for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub include_dirs: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub languages: LanguageStats,
    pub total: CodeStats,
}

impl Report {
    #[must_use]
    pub fn new(
        languages: LanguageStats,
        include_dirs: &[PathBuf],
        exclude_patterns: &[String],
    ) -> Self {
        Self {
            include_dirs: include_dirs
                .iter()
                .map(|d| d.display().to_string())
                .collect(),
            exclude_patterns: exclude_patterns.to_vec(),
            total: languages.total(),
            languages,
        }
    }
}

fn write_counts(f: &mut fmt::Formatter<'_>, stats: &CodeStats) -> fmt::Result {
    writeln!(f, "  Total lines: {}", stats.total_lines)?;
    writeln!(f, "  Code lines: {}", stats.code_lines)?;
    writeln!(f, "  Blank lines: {}", stats.blank_lines)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Code line count results:")?;
        writeln!(f)?;

        writeln!(f, "Included directories:")?;
        for dir in &self.include_dirs {
            writeln!(f, "  - {dir}")?;
        }
        writeln!(f)?;

        writeln!(f, "Excluded patterns:")?;
        for pattern in &self.exclude_patterns {
            writeln!(f, "  - {pattern}")?;
        }
        writeln!(f)?;

        for (language, stats) in self.languages.iter() {
            writeln!(f, "{language}:")?;
            write_counts(f, stats)?;
            writeln!(f)?;
        }

        writeln!(f, "Total:")?;
        write_counts(f, &self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_layout() {
        let mut languages = LanguageStats::new();
        languages.record(
            "Python",
            CodeStats {
                total_lines: 3,
                code_lines: 2,
                blank_lines: 1,
            },
        );
        languages.record(
            "Rust",
            CodeStats {
                total_lines: 10,
                code_lines: 8,
                blank_lines: 2,
            },
        );

        let report = Report::new(
            languages,
            &[PathBuf::from("/p/src")],
            &["**/*.test.py".to_string()],
        );

        let expected = "\
Code line count results:

Included directories:
  - /p/src

Excluded patterns:
  - **/*.test.py

Python:
  Total lines: 3
  Code lines: 2
  Blank lines: 1

Rust:
  Total lines: 10
  Code lines: 8
  Blank lines: 2

Total:
  Total lines: 13
  Code lines: 10
  Blank lines: 3
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_empty_run_still_has_total() {
        let report = Report::new(LanguageStats::new(), &[], &[]);
        let text = report.to_string();
        assert!(text.ends_with("Total:\n  Total lines: 0\n  Code lines: 0\n  Blank lines: 0\n"));
    }
}
