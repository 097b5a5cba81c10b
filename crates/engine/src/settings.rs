//! Project-scoped persisted settings.
//!
//! Settings live in a JSON file at the project root. Keys that this tool does
//! not know about are preserved across a load/save cycle.

use crate::error::{EngineError, Result};
use crate::language::LanguageMap;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name of the settings file inside the project root.
pub const SETTINGS_FILE_NAME: &str = ".code_tally.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub include_dirs: Vec<String>,
    pub exclude_patterns: Vec<String>,
    #[serde(skip_serializing_if = "LanguageMap::is_empty")]
    pub language_extensions: LanguageMap,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// JSON settings file.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file for the project rooted at `root`.
    #[must_use]
    pub fn in_project(root: &Path) -> Self {
        Self::new(root.join(SETTINGS_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings. A missing file yields empty settings.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Settings> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Settings::default());
            }
            Err(e) => {
                return Err(EngineError::SettingsIo {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };
        serde_json::from_slice(&bytes).map_err(|e| EngineError::SettingsFormat {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Write settings atomically.
    ///
    /// # Errors
    /// Returns an error when the file cannot be written.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        let mut data =
            serde_json::to_vec_pretty(settings).map_err(|e| EngineError::SettingsFormat {
                path: self.path.clone(),
                source: e,
            })?;
        data.push(b'\n');
        atomic_write(&self.path, &data).map_err(|e| EngineError::SettingsIo {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Write `data` to `path` via a temp file in the same directory and a rename.
fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| std::io::Error::other("path has no parent"))?;

    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

    let file = File::create(&tmp)?;
    let mut w = BufWriter::new(file);
    w.write_all(data)?;
    w.flush()?;
    let _ = w.get_ref().sync_all();

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let tmp = tempdir().unwrap();
        let settings = SettingsFile::in_project(tmp.path()).load().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_roundtrip_keeps_unknown_keys() {
        let tmp = tempdir().unwrap();
        let file = SettingsFile::in_project(tmp.path());
        fs::write(
            file.path(),
            r#"{
                "includeDirs": ["src"],
                "languageExtensions": {"Python": [".pyw"], "Svelte": [".svelte"]},
                "editor.tabSize": 4
            }"#,
        )
        .unwrap();

        let mut settings = file.load().unwrap();
        assert_eq!(settings.include_dirs, ["src"]);
        assert!(settings.exclude_patterns.is_empty());
        assert_eq!(settings.language_extensions.len(), 2);

        settings.exclude_patterns = vec!["**/*.test.py".to_string()];
        file.save(&settings).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(raw["editor.tabSize"], 4);
        assert_eq!(raw["excludePatterns"][0], "**/*.test.py");
        assert_eq!(raw["languageExtensions"]["Svelte"][0], ".svelte");

        assert_eq!(file.load().unwrap(), settings);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let tmp = tempdir().unwrap();
        let file = SettingsFile::in_project(tmp.path());
        fs::write(file.path(), "{ not json").unwrap();

        let err = file.load().unwrap_err();
        assert!(matches!(err, EngineError::SettingsFormat { .. }));
    }
}
