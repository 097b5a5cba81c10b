use crate::error::{EngineError, Result};
use crate::language::ExtensionTable;
use derive_builder::Builder;
use hashbrown::HashSet;
use std::path::{Path, PathBuf};

/// Conventional source directory used when nothing else is configured.
pub const DEFAULT_SOURCE_DIR: &str = "src";

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    /// Descend into dotfiles and dot-directories.
    #[builder(default)]
    pub hidden: bool,
    /// Honour `.gitignore`, `.ignore` and git exclude files.
    #[builder(default)]
    pub git_ignore: bool,
    #[builder(default)]
    pub follow_links: bool,
}

/// Everything a single run needs.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct RunConfig {
    #[builder(default)]
    pub include_dirs: Vec<PathBuf>,
    #[builder(default)]
    pub exclude_patterns: Vec<String>,
    #[builder(default)]
    pub table: ExtensionTable,
    #[builder(default)]
    pub walk: WalkOptions,
}

/// Check that `root` is an existing directory and return its canonical form.
///
/// # Errors
/// Returns `EngineError::NoProjectRoot` when `root` is missing or not a directory.
pub fn ensure_project_root(root: &Path) -> Result<PathBuf> {
    if !root.is_dir() {
        return Err(EngineError::NoProjectRoot(root.to_path_buf()));
    }
    root.canonicalize()
        .map_err(|_| EngineError::NoProjectRoot(root.to_path_buf()))
}

/// Combine caller-supplied and configured include directories.
///
/// Requested directories come first, duplicates are dropped keeping the first
/// occurrence. When both lists are empty, `<root>/src` is used if it exists.
#[must_use]
pub fn resolve_include_dirs(
    project_root: &Path,
    requested: &[PathBuf],
    configured: &[String],
) -> Vec<PathBuf> {
    let dirs = dedup_paths(
        requested
            .iter()
            .cloned()
            .chain(configured.iter().map(PathBuf::from)),
    );
    if !dirs.is_empty() {
        return dirs;
    }

    let default_src = project_root.join(DEFAULT_SOURCE_DIR);
    if default_src.is_dir() {
        vec![default_src]
    } else {
        Vec::new()
    }
}

/// Make `dir` absolute by anchoring relative paths at `project_root`.
#[must_use]
pub fn absolutize(project_root: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        project_root.join(dir)
    }
}

/// Drop repeated paths, keeping first occurrences in order.
pub fn dedup_paths<I>(paths: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|p| seen.insert(p.clone()))
        .collect()
}

/// Split a comma separated answer into trimmed, non-empty items.
#[must_use]
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
