//! Java-style properties file reading
//!
//! The Android build reads signing overrides from a `key.properties`
//! file next to the Gradle project. The file is optional: a missing file
//! means "no overrides" and loads as an empty set, while a file that
//! exists but cannot be read is a real error.
//!
//! The supported syntax is the subset the build actually uses: one
//! `key=value` (or `key: value`) pair per line, `#`/`!` comment lines,
//! and blank lines. Escape sequences and line continuations are not
//! processed. A key repeated later in the file replaces the earlier
//! value, matching `java.util.Properties`.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// An immutable set of string properties read from a `key=value` file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    entries: BTreeMap<String, String>,
    path: Option<PathBuf>,
    present: bool,
}

impl PropertySet {
    /// Load properties from `path`.
    ///
    /// A missing file is not an error: it yields an empty set with
    /// [`was_present`](Self::was_present) reporting `false`. A file that
    /// exists but cannot be read or is not valid UTF-8 is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "properties file absent, using empty set");
            return Ok(Self {
                entries: BTreeMap::new(),
                path: Some(path.to_path_buf()),
                present: false,
            });
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::properties_unreadable(path).with_source(e))?;

        let mut set = Self::parse(&content);
        set.path = Some(path.to_path_buf());
        tracing::debug!(
            path = %path.display(),
            entries = set.entries.len(),
            "loaded properties file"
        );
        Ok(set)
    }

    /// Parse properties from in-memory text.
    ///
    /// Parsing never fails: lines without a separator are treated as a
    /// key with an empty value, as `java.util.Properties` does.
    pub fn parse(content: &str) -> Self {
        let mut entries = BTreeMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let (key, value) = match line.find(['=', ':']) {
                Some(idx) => (&line[..idx], &line[idx + 1..]),
                None => (line, ""),
            };

            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            entries.insert(key.to_string(), value.trim().to_string());
        }

        Self {
            entries,
            path: None,
            present: true,
        }
    }

    /// Look up a property value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the backing file existed when loaded
    pub fn was_present(&self) -> bool {
        self.present
    }

    /// The path this set was loaded from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_basic_pairs() {
        let props = PropertySet::parse("keyAlias=upload\nstorePassword=secret\n");
        assert_eq!(props.get("keyAlias"), Some("upload"));
        assert_eq!(props.get("storePassword"), Some("secret"));
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_parse_colon_separator() {
        let props = PropertySet::parse("keyAlias: upload");
        assert_eq!(props.get("keyAlias"), Some("upload"));
    }

    #[test]
    fn test_parse_comments_and_blanks() {
        let content = "# signing overrides\n\n! legacy comment\nkeyAlias=upload\n";
        let props = PropertySet::parse(content);
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_parse_value_containing_separator() {
        // Only the first separator splits; passwords may contain '='.
        let props = PropertySet::parse("keyPassword=a=b:c");
        assert_eq!(props.get("keyPassword"), Some("a=b:c"));
    }

    #[test]
    fn test_parse_later_duplicate_wins() {
        let props = PropertySet::parse("keyAlias=first\nkeyAlias=second\n");
        assert_eq!(props.get("keyAlias"), Some("second"));
    }

    #[test]
    fn test_parse_whitespace_trimmed() {
        let props = PropertySet::parse("  storeFile =  upload-keystore.jks  ");
        assert_eq!(props.get("storeFile"), Some("upload-keystore.jks"));
    }

    #[test]
    fn test_parse_line_without_separator() {
        let props = PropertySet::parse("standalone");
        assert_eq!(props.get("standalone"), Some(""));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.properties");

        let props = PropertySet::load(&path).unwrap();
        assert!(props.is_empty());
        assert!(!props.was_present());
    }

    #[test]
    fn test_load_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.properties");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "keyAlias=upload").unwrap();
        writeln!(file, "keyPassword=hunter2").unwrap();

        let props = PropertySet::load(&path).unwrap();
        assert!(props.was_present());
        assert_eq!(props.get("keyAlias"), Some("upload"));
        assert_eq!(props.get("keyPassword"), Some("hunter2"));
        assert_eq!(props.path(), Some(path.as_path()));
    }

    proptest::proptest! {
        #[test]
        fn parse_never_panics(content in "\\PC*") {
            let _ = PropertySet::parse(&content);
        }

        #[test]
        fn parse_preserves_simple_values(
            key in "[a-zA-Z][a-zA-Z0-9]{0,16}",
            value in "[a-zA-Z0-9/._-]{0,32}",
        ) {
            let props = PropertySet::parse(&format!("{key}={value}"));
            proptest::prop_assert_eq!(props.get(&key), Some(value.trim()));
        }
    }
}
