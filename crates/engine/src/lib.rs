// crates/engine/src/lib.rs
use std::path::Path;
use tracing::{debug, info, warn};

pub mod config;
pub mod error;
pub mod filesystem;
pub mod language;
pub mod processor;
pub mod report;
pub mod settings;
pub mod stats;

use crate::config::{RunConfig, dedup_paths};
use crate::error::Result;
use crate::filesystem::ExcludeSet;
use crate::stats::RunResult;

/// Tally every include directory of `config`, one after another.
///
/// Unreadable files are logged, collected in `RunResult::errors` and left out
/// of the counts.
///
/// # Errors
///
/// Returns an error only when the exclude patterns do not compile.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    let excludes = ExcludeSet::new(&config.exclude_patterns)?;
    let mut result = RunResult::default();

    for dir in dedup_paths(config.include_dirs.iter().cloned()) {
        info!(dir = %dir.display(), "counting directory");
        count_directory(&dir, &excludes, config, &mut result);
    }

    info!(
        files = result.files_counted,
        languages = result.stats.len(),
        skipped = result.errors.len(),
        "run complete"
    );
    Ok(result)
}

/// Tally one directory into `result`.
pub fn count_directory(
    dir: &Path,
    excludes: &ExcludeSet,
    config: &RunConfig,
    result: &mut RunResult,
) {
    for item in filesystem::walk_files(dir, &config.walk, excludes) {
        let relative = match item {
            Ok(relative) => relative,
            Err(e) => {
                let path = e.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
                warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                result.errors.push((path, e));
                continue;
            }
        };

        let Some(language) = config.table.classify_path(&relative) else {
            continue;
        };

        let path = dir.join(&relative);
        match processor::process_file(&path) {
            Ok(stats) => {
                debug!(path = %path.display(), language, lines = stats.total_lines, "counted");
                result.stats.record(language, stats);
                result.files_counted += 1;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping file");
                result.errors.push((path, e));
            }
        }
    }
}
