use crate::config::WalkOptions;
use crate::error::{EngineError, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Compiled exclude patterns.
///
/// Patterns match root-relative paths. `*` stays within one path segment and
/// `**` spans any number of them. A pattern ending in `/**` also prunes the
/// directory it names, so nothing below it is visited.
#[derive(Debug, Clone)]
pub struct ExcludeSet {
    files: GlobSet,
    dirs: GlobSet,
}

impl ExcludeSet {
    /// # Errors
    /// Returns `EngineError::Glob` for the first pattern that fails to compile.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut files = GlobSetBuilder::new();
        let mut dirs = GlobSetBuilder::new();

        for raw in patterns {
            let pattern = raw.trim();
            let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
            if pattern.is_empty() {
                continue;
            }
            files.add(compile(pattern)?);
            if let Some(dir) = pattern.strip_suffix("/**")
                && !dir.is_empty()
            {
                dirs.add(compile(dir)?);
            }
        }

        Ok(Self {
            files: files.build().map_err(|e| glob_error("<set>", e))?,
            dirs: dirs.build().map_err(|e| glob_error("<set>", e))?,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn excludes_file(&self, relative: &Path) -> bool {
        self.files.is_match(relative)
    }

    #[must_use]
    pub fn prunes_dir(&self, relative: &Path) -> bool {
        self.dirs.is_match(relative)
    }
}

fn compile(pattern: &str) -> Result<globset::Glob> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| glob_error(pattern, e))
}

fn glob_error(pattern: &str, source: globset::Error) -> EngineError {
    EngineError::Glob {
        pattern: pattern.to_string(),
        source,
    }
}

/// Recursive walk over `root` yielding regular files relative to `root`.
///
/// The walk is lazy and visits entries in file-name order. Entries the walker
/// cannot read come through as `Err` so the caller can log and move on.
pub fn walk_files(
    root: &Path,
    options: &WalkOptions,
    excludes: &ExcludeSet,
) -> impl Iterator<Item = Result<PathBuf>> + use<> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(!options.hidden)
        .git_ignore(options.git_ignore)
        .git_global(options.git_ignore)
        .git_exclude(options.git_ignore)
        .ignore(options.git_ignore)
        .parents(options.git_ignore)
        .require_git(false)
        .follow_links(options.follow_links)
        .sort_by_file_name(|a, b| a.cmp(b));

    if !excludes.is_empty() {
        let filter_root = root.to_path_buf();
        let excludes = excludes.clone();
        builder.filter_entry(move |entry| {
            let Ok(relative) = entry.path().strip_prefix(&filter_root) else {
                return true;
            };
            if relative.as_os_str().is_empty() {
                return true;
            }
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                !excludes.prunes_dir(relative)
            } else {
                !excludes.excludes_file(relative)
            }
        });
    }

    let root = root.to_path_buf();
    builder.build().filter_map(move |entry| match entry {
        Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => Some(Ok(entry
            .path()
            .strip_prefix(&root)
            .map_or_else(|_| entry.path().to_path_buf(), Path::to_path_buf))),
        Ok(_) => None,
        Err(e) => Some(Err(EngineError::Walk(e))),
    })
}
