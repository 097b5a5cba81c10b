use crate::error::{EngineError, Result};
use crate::stats::CodeStats;
use std::path::Path;

/// Count lines of `content`.
///
/// Lines are the segments between `\n` characters, so a trailing newline
/// yields a final empty segment that counts as blank, and empty content is
/// one blank line. A line is code when it has anything besides whitespace.
#[must_use]
pub fn count_content(content: &str) -> CodeStats {
    let mut stats = CodeStats::default();
    for line in content.split('\n') {
        stats.total_lines += 1;
        if !is_blank(line) {
            stats.code_lines += 1;
        }
    }
    stats.blank_lines = stats.total_lines - stats.code_lines;
    stats
}

fn is_blank(line: &str) -> bool {
    // BOM counts as whitespace here, NEL does not
    line.trim_matches(|c: char| (c.is_whitespace() && c != '\u{0085}') || c == '\u{feff}')
        .is_empty()
}

/// Read a file as UTF-8 text and count its lines.
///
/// # Errors
/// Returns `EngineError::FileRead` if the file cannot be read or is not valid UTF-8.
pub fn process_file(path: &Path) -> Result<CodeStats> {
    let content = std::fs::read_to_string(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(count_content(&content))
}
