// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use crate::prompt::Prompter;
use code_tally_engine::config::{
    RunConfig, RunConfigBuilder, WalkOptions, WalkOptionsBuilder, absolutize, dedup_paths,
    ensure_project_root, resolve_include_dirs, split_list,
};
use code_tally_engine::error::EngineError;
use code_tally_engine::language::ExtensionTable;
use code_tally_engine::settings::{Settings, SettingsFile};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const INCLUDE_QUESTION: &str = "Directories to include (comma separated)";
const EXCLUDE_QUESTION: &str = "Patterns to exclude (comma separated)";

/// Load the project settings for `args`.
///
/// # Errors
/// Fails when the project root is missing or the settings file is malformed.
pub fn load_settings(args: &Args) -> Result<(PathBuf, SettingsFile, Settings)> {
    let root = ensure_project_root(&args.scope.root)?;
    let store = SettingsFile::in_project(&root);
    let settings = store.load()?;
    debug!(path = %store.path().display(), "loaded settings");
    Ok((root, store, settings))
}

/// Language table for `args`: built-ins merged with the project's overrides.
///
/// # Errors
/// Same as [`load_settings`].
pub fn load_table(args: &Args) -> Result<ExtensionTable> {
    let (_, _, settings) = load_settings(args)?;
    Ok(ExtensionTable::with_overrides(&settings.language_extensions))
}

/// Resolve the run configuration from settings, flags and prompts.
///
/// The include/exclude lists are written back to the settings file before
/// returning, unless `--no-save` is given.
///
/// # Errors
/// Fails when the project root is missing, the settings cannot be read or
/// written, or no include directory is left after defaults and prompts.
pub fn prepare(args: &Args, prompter: Option<&mut dyn Prompter>) -> Result<RunConfig> {
    let (root, store, mut settings) = load_settings(args)?;

    let requested = args
        .paths
        .iter()
        .map(std::path::absolute)
        .collect::<std::io::Result<Vec<_>>>()?;

    let mut include_dirs: Vec<String> =
        resolve_include_dirs(&root, &requested, &settings.include_dirs)
            .iter()
            .map(|d| d.display().to_string())
            .collect();
    let mut exclude_patterns = settings.exclude_patterns.clone();

    if let Some(list) = &args.scope.include {
        include_dirs = normalize(list);
    }
    if let Some(list) = &args.scope.exclude {
        exclude_patterns = normalize(list);
    }

    if let Some(prompter) = prompter {
        if let Some(answer) = ask(prompter, INCLUDE_QUESTION, &include_dirs)? {
            include_dirs = answer;
        }
        if let Some(answer) = ask(prompter, EXCLUDE_QUESTION, &exclude_patterns)? {
            exclude_patterns = answer;
        }
    }

    if !args.scope.no_save {
        settings.include_dirs.clone_from(&include_dirs);
        settings.exclude_patterns.clone_from(&exclude_patterns);
        store.save(&settings)?;
        info!(path = %store.path().display(), "saved settings");
    }

    if include_dirs.is_empty() {
        return Err(EngineError::NoIncludeDirs.into());
    }

    build_run_config(&root, &include_dirs, exclude_patterns, &settings, args)
}

fn build_run_config(
    root: &Path,
    include_dirs: &[String],
    exclude_patterns: Vec<String>,
    settings: &Settings,
    args: &Args,
) -> Result<RunConfig> {
    let include_dirs = dedup_paths(
        include_dirs
            .iter()
            .map(|d| absolutize(root, Path::new(d))),
    );

    RunConfigBuilder::default()
        .include_dirs(include_dirs)
        .exclude_patterns(exclude_patterns)
        .table(ExtensionTable::with_overrides(&settings.language_extensions))
        .walk(walk_options_from_args(args)?)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

fn walk_options_from_args(args: &Args) -> Result<WalkOptions> {
    WalkOptionsBuilder::default()
        .hidden(args.scan.hidden)
        .git_ignore(args.scan.gitignore)
        .follow_links(args.scan.follow)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Prompt with the current list; an empty answer or cancel keeps it.
fn ask(
    prompter: &mut dyn Prompter,
    question: &str,
    current: &[String],
) -> Result<Option<Vec<String>>> {
    let answer = prompter.ask(question, &current.join(", "))?;
    Ok(answer
        .filter(|a| !a.trim().is_empty())
        .map(|a| split_list(&a)))
}

fn normalize(list: &[String]) -> Vec<String> {
    list.iter().flat_map(|item| split_list(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::VecDeque;
    use std::fs;
    use tempfile::tempdir;

    struct Scripted(VecDeque<Option<&'static str>>);

    impl Prompter for Scripted {
        fn ask(&mut self, _question: &str, _current: &str) -> std::io::Result<Option<String>> {
            Ok(self.0.pop_front().flatten().map(String::from))
        }
    }

    fn args(root: &Path, extra: &[&str]) -> Args {
        let root = root.display().to_string();
        let mut argv = vec!["code_tally", "--root", root.as_str()];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_defaults_to_src_and_saves() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("src")).unwrap();
        let args = args(tmp.path(), &[]);

        let config = prepare(&args, None).unwrap();
        let root = tmp.path().canonicalize().unwrap();
        assert_eq!(config.include_dirs, [root.join("src")]);

        let (_, _, saved) = load_settings(&args).unwrap();
        assert_eq!(saved.include_dirs, [root.join("src").display().to_string()]);
        assert!(saved.exclude_patterns.is_empty());
    }

    #[test]
    fn test_no_include_dirs_is_fatal() {
        let tmp = tempdir().unwrap();
        let err = prepare(&args(tmp.path(), &[]), None).unwrap_err();
        assert!(matches!(err, AppError::Engine(EngineError::NoIncludeDirs)));
        // lists are still written back
        assert!(tmp.path().join(".code_tally.json").exists());
    }

    #[test]
    fn test_flags_replace_configured_lists() {
        let tmp = tempdir().unwrap();
        fs::write(
            tmp.path().join(".code_tally.json"),
            r#"{"includeDirs": ["old"], "excludePatterns": ["**/*.min.js"]}"#,
        )
        .unwrap();

        let args = args(tmp.path(), &["--include", "lib, app", "--exclude", "", "--no-save"]);
        let config = prepare(&args, None).unwrap();

        let root = tmp.path().canonicalize().unwrap();
        assert_eq!(config.include_dirs, [root.join("lib"), root.join("app")]);
        assert!(config.exclude_patterns.is_empty());

        let (_, _, saved) = load_settings(&args).unwrap();
        assert_eq!(saved.include_dirs, ["old"]);
    }

    #[test]
    fn test_prompt_answers_override_and_blank_keeps() {
        let tmp = tempdir().unwrap();
        fs::write(
            tmp.path().join(".code_tally.json"),
            r#"{"includeDirs": ["src"], "excludePatterns": ["dist/**"]}"#,
        )
        .unwrap();

        let mut prompter = Scripted(VecDeque::from([Some(" pkg ,tools "), Some("  ")]));
        let config = prepare(&args(tmp.path(), &[]), Some(&mut prompter)).unwrap();

        let root = tmp.path().canonicalize().unwrap();
        assert_eq!(config.include_dirs, [root.join("pkg"), root.join("tools")]);
        assert_eq!(config.exclude_patterns, ["dist/**"]);
    }

    #[test]
    fn test_cancelled_prompt_keeps_current() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("src")).unwrap();

        let mut prompter = Scripted(VecDeque::from([None, None]));
        let config = prepare(&args(tmp.path(), &[]), Some(&mut prompter)).unwrap();
        assert_eq!(config.include_dirs.len(), 1);
    }

    #[test]
    fn test_language_overrides_reach_table() {
        let tmp = tempdir().unwrap();
        fs::write(
            tmp.path().join(".code_tally.json"),
            r#"{"includeDirs": ["."], "languageExtensions": {"Svelte": [".svelte"]}}"#,
        )
        .unwrap();

        let config = prepare(&args(tmp.path(), &["--no-save"]), None).unwrap();
        assert_eq!(config.table.classify(".svelte"), Some("Svelte"));
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let tmp = tempdir().unwrap();
        let err = prepare(&args(&tmp.path().join("gone"), &[]), None).unwrap_err();
        assert!(matches!(err, AppError::Engine(EngineError::NoProjectRoot(_))));
    }
}
