use super::defaults::DEFAULT_LANGUAGES;
use hashbrown::HashMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;

/// Ordered mapping from language name to its extension list.
///
/// Serializes as a JSON object and keeps key order on the way in and out.
/// Inserting an existing key replaces its list in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageMap {
    entries: Vec<(String, Vec<String>)>,
}

impl LanguageMap {
    /// The built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        DEFAULT_LANGUAGES
            .iter()
            .map(|(name, exts)| {
                (
                    (*name).to_string(),
                    exts.iter().map(|e| (*e).to_string()).collect(),
                )
            })
            .collect()
    }

    pub fn insert(&mut self, language: impl Into<String>, extensions: Vec<String>) {
        let language = language.into();
        match self.entries.iter_mut().find(|(name, _)| *name == language) {
            Some((_, existing)) => *existing = extensions,
            None => self.entries.push((language, extensions)),
        }
    }

    #[must_use]
    pub fn get(&self, language: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, exts)| exts.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, exts)| (name.as_str(), exts.as_slice()))
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

impl<S: Into<String>> FromIterator<(S, Vec<String>)> for LanguageMap {
    fn from_iter<I: IntoIterator<Item = (S, Vec<String>)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (language, extensions) in iter {
            map.insert(language, extensions);
        }
        map
    }
}

impl Serialize for LanguageMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (language, extensions) in &self.entries {
            map.serialize_entry(language, extensions)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LanguageMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LanguageMapVisitor;

        impl<'de> Visitor<'de> for LanguageMapVisitor {
            type Value = LanguageMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of language names to extension lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = LanguageMap::default();
                while let Some((language, extensions)) =
                    access.next_entry::<String, Vec<String>>()?
                {
                    map.insert(language, extensions);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(LanguageMapVisitor)
    }
}

/// Merge user overrides into a base table.
///
/// An override for an existing language replaces that language's whole list
/// and keeps its position. Overrides for new languages are appended in order.
#[must_use]
pub fn merge(base: &LanguageMap, overrides: &LanguageMap) -> LanguageMap {
    let mut merged = base.clone();
    for (language, extensions) in overrides.iter() {
        merged.insert(language, extensions.to_vec());
    }
    merged
}

/// Resolved language table with a precomputed extension lookup.
#[derive(Debug, Clone)]
pub struct ExtensionTable {
    languages: LanguageMap,
    lookup: HashMap<String, usize>,
}

impl ExtensionTable {
    #[must_use]
    pub fn new(languages: LanguageMap) -> Self {
        let mut lookup = HashMap::new();
        for (index, (_, extensions)) in languages.iter().enumerate() {
            for ext in extensions {
                // first language to claim an extension keeps it
                lookup.entry(ext.clone()).or_insert(index);
            }
        }
        Self { languages, lookup }
    }

    /// Built-in table merged with `overrides`.
    #[must_use]
    pub fn with_overrides(overrides: &LanguageMap) -> Self {
        Self::new(merge(&LanguageMap::builtin(), overrides))
    }

    /// Language for a dotted extension such as `.rs`. Case-insensitive.
    #[must_use]
    pub fn classify(&self, ext: &str) -> Option<&str> {
        let ext = ext.to_lowercase();
        let index = *self.lookup.get(ext.as_str())?;
        self.languages.entries.get(index).map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn classify_path(&self, path: &Path) -> Option<&str> {
        extension_of(path).and_then(|ext| self.classify(&ext))
    }

    #[must_use]
    pub fn languages(&self) -> &LanguageMap {
        &self.languages
    }
}

impl Default for ExtensionTable {
    fn default() -> Self {
        Self::new(LanguageMap::builtin())
    }
}

/// Final dot-segment of the file name, lower-cased, dot included.
///
/// A single leading dot is part of the name, so `.gitignore` has no extension
/// while `.eslintrc.json` has `.json` and `..foo` has `.foo`.
#[must_use]
pub fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let start = usize::from(name.starts_with('.'));
    let dot = name[start..].rfind('.')? + start;
    Some(name[dot..].to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_builtin_lookup() {
        let table = ExtensionTable::default();
        assert_eq!(table.classify(".rs"), Some("Rust"));
        assert_eq!(table.classify(".PY"), Some("Python"));
        assert_eq!(table.classify(".ts"), Some("TypeScript"));
        assert_eq!(table.classify(".nope"), None);
    }

    fn first_claimant(ext: &str) -> Option<&'static str> {
        DEFAULT_LANGUAGES
            .iter()
            .find(|(_, list)| list.iter().any(|e| *e == ext))
            .map(|(name, _)| *name)
    }

    #[test]
    fn test_every_builtin_entry_resolves_to_first_claimant() {
        let table = ExtensionTable::default();
        for (language, list) in DEFAULT_LANGUAGES {
            for ext in *list {
                let file = format!("f{ext}");
                let got = table.classify_path(Path::new(&file));
                let single_segment = !ext[1..].contains('.');
                let lower_case = *ext == ext.to_lowercase();

                if single_segment && lower_case {
                    assert_eq!(got, first_claimant(ext), "{language} {ext}");
                    assert_eq!(
                        table.classify_path(Path::new(&file.to_uppercase())),
                        got,
                        "{language} {ext} upper-cased"
                    );
                } else {
                    // only the lower-cased final segment is looked up
                    let tail = extension_of(Path::new(&file)).unwrap();
                    assert_eq!(got, first_claimant(&tail), "{language} {ext}");
                    if got == Some(*language) {
                        assert!(list.iter().any(|e| *e == tail), "{language} {ext}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_first_language_wins_on_overlap() {
        let table = ExtensionTable::default();
        // .m is listed under MATLAB, Mercury and MUMPS
        assert_eq!(table.classify(".m"), Some("MATLAB"));
        // .d is listed under D before dtrace
        assert_eq!(table.classify(".d"), Some("D"));
        // .pl: Mojolicious precedes Perl and Prolog
        assert_eq!(table.classify(".pl"), Some("Mojolicious"));
        // .s: Assembly precedes S and S-Plus
        assert_eq!(table.classify(".s"), Some("Assembly"));
        assert_eq!(table.classify(".jsx"), Some("JavaScript"));
    }

    #[test]
    fn test_uppercase_entries_never_match() {
        let table = ExtensionTable::default();
        // C++ lists ".C" but the lower-cased ".c" belongs to C
        assert_eq!(table.classify(".C"), Some("C"));
        assert_eq!(table.classify(".HC"), None);
    }

    #[test]
    fn test_override_replaces_whole_list() {
        let mut overrides = LanguageMap::default();
        overrides.insert("Python", exts(&[".pyw"]));
        let table = ExtensionTable::with_overrides(&overrides);

        assert_eq!(table.classify(".pyw"), Some("Python"));
        assert_eq!(table.classify(".py"), None);
        assert_eq!(
            table.languages().get("Python"),
            Some(exts(&[".pyw"]).as_slice())
        );
    }

    #[test]
    fn test_override_keeps_position_and_appends_new() {
        let mut base = LanguageMap::default();
        base.insert("A", exts(&[".a"]));
        base.insert("B", exts(&[".b"]));
        let mut overrides = LanguageMap::default();
        overrides.insert("New", exts(&[".a", ".n"]));
        overrides.insert("A", exts(&[".x"]));

        let merged = merge(&base, &overrides);
        let names: Vec<_> = merged.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["A", "B", "New"]);

        let table = ExtensionTable::new(merged);
        assert_eq!(table.classify(".x"), Some("A"));
        assert_eq!(table.classify(".a"), Some("New"));
        assert_eq!(table.classify(".n"), Some("New"));
        // inputs are untouched
        assert_eq!(base.get("A"), Some(exts(&[".a"]).as_slice()));
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("src/main.RS")).as_deref(), Some(".rs"));
        assert_eq!(extension_of(Path::new("types.d.ts")).as_deref(), Some(".ts"));
        assert_eq!(extension_of(Path::new(".gitignore")), None);
        assert_eq!(extension_of(Path::new(".eslintrc.json")).as_deref(), Some(".json"));
        assert_eq!(extension_of(Path::new("Makefile")), None);
        assert_eq!(extension_of(Path::new("trailing.")).as_deref(), Some("."));
    }

    #[test]
    fn test_extension_of_repeated_leading_dots() {
        assert_eq!(extension_of(Path::new("..foo")).as_deref(), Some(".foo"));
        assert_eq!(extension_of(Path::new("...py")).as_deref(), Some(".py"));
        assert_eq!(extension_of(Path::new("...")).as_deref(), Some("."));
        let table = ExtensionTable::default();
        assert_eq!(table.classify_path(Path::new("..hidden.py")), Some("Python"));
    }

    #[test]
    fn test_multi_part_entries_are_not_suffix_matched() {
        let table = ExtensionTable::default();
        // "Blade" lists ".blade.php", but only the final segment is looked up
        assert_eq!(table.classify_path(Path::new("view.blade.php")), Some("PHP"));
        assert_eq!(table.classify_path(Path::new("README")), None);
    }

    #[test]
    fn test_language_map_json_keeps_order() {
        let json = r#"{"Zed": [".zed"], "Alpha": [".al"], "Zed": [".z2"]}"#;
        let map: LanguageMap = serde_json::from_str(json).unwrap();
        let names: Vec<_> = map.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Zed", "Alpha"]);
        assert_eq!(map.get("Zed"), Some(exts(&[".z2"]).as_slice()));

        let back = serde_json::to_string(&map).unwrap();
        assert_eq!(back, r#"{"Zed":[".z2"],"Alpha":[".al"]}"#);
    }
}
