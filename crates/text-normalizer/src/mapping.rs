//! Key/value mapping tables and word sets loaded from text files.
//!
//! Mapping lines have the form `key#value`. Blank lines and lines starting
//! with `#` are ignored; keys and values are trimmed.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use vinorm_core::{NormError, NormResult};

const SEPARATOR: char = '#';

/// Immutable `key -> expansion` table.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: HashMap<String, String>,
    shorthand: bool,
}

impl MappingTable {
    /// Parse a table from file contents.
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with(SEPARATOR))
            .filter_map(|line| {
                let (key, value) = line.split_once(SEPARATOR)?;
                let key = key.trim();
                (!key.is_empty()).then(|| (key.to_string(), value.trim().to_string()))
            })
            .collect();

        Self {
            entries,
            shorthand: false,
        }
    }

    /// Load a table from a file.
    pub fn load(path: impl AsRef<Path>) -> NormResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| NormError::load(path, e))?;
        Ok(Self::parse(&content))
    }

    /// Mark this table as a shorthand (teencode) table.
    ///
    /// Shorthand tables never match a fully upper-case candidate through the
    /// lower-case fallback, so "ACC" is not read as the slang "acc".
    pub fn into_shorthand(mut self) -> Self {
        self.shorthand = true;
        self
    }

    /// Look up `key` exactly, then in lower case.
    pub fn get(&self, key: &str) -> Option<&str> {
        if let Some(value) = self.entries.get(key) {
            return Some(value);
        }
        if self.shorthand && is_upper_word(key) {
            return None;
        }
        let lower = key.to_lowercase();
        if lower == key {
            return None;
        }
        self.entries.get(&lower).map(String::as_str)
    }

    /// Look up `key` without case folding.
    pub fn get_exact(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` resolves.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Look up a single character.
    pub fn get_char(&self, c: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.get(c.encode_utf8(&mut buf))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Set of known words.
///
/// Accepts one word per line, or mapping-style lines whose key is kept.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with(SEPARATOR))
            .map(|line| {
                line.split_once(SEPARATOR)
                    .map_or(line, |(key, _)| key.trim())
                    .to_string()
            })
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    pub fn load(path: impl AsRef<Path>) -> NormResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| NormError::load(path, e))?;
        Ok(Self::parse(&content))
    }

    /// Exact match, then lower-case match.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word) || self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// True when `word` has at least one cased letter and no lower-case ones.
pub fn is_upper_word(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_mapping() {
        let table = MappingTable::parse("# comment\nkm#kí lô mét\n\n  cm # xen ti mét \nbroken line\n");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("km"), Some("kí lô mét"));
        assert_eq!(table.get("cm"), Some("xen ti mét"));
        assert_eq!(table.get("broken line"), None);
    }

    #[test]
    fn test_lowercase_fallback() {
        let table = MappingTable::parse("ubnd#ủy ban nhân dân\nVP#văn phòng\n");
        assert_eq!(table.get("UBND"), Some("ủy ban nhân dân"));
        assert_eq!(table.get("VP"), Some("văn phòng"));
        assert_eq!(table.get("vp"), None);
        assert_eq!(table.get_exact("UBND"), None);
    }

    #[test]
    fn test_shorthand_refuses_upper_case() {
        let table = MappingTable::parse("ko#không\n").into_shorthand();
        assert_eq!(table.get("ko"), Some("không"));
        assert_eq!(table.get("Ko"), Some("không"));
        assert_eq!(table.get("KO"), None);
    }

    #[test]
    fn test_get_char() {
        let table = MappingTable::parse("%#phần trăm\n");
        assert_eq!(table.get_char('%'), Some("phần trăm"));
        assert_eq!(table.get_char('&'), None);
    }

    #[test]
    fn test_word_set() {
        let words = WordSet::parse("anh\nem#ignored\n\n# note\n");
        assert_eq!(words.len(), 2);
        assert!(words.contains("anh"));
        assert!(words.contains("EM"));
        assert!(!words.contains("note"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "$#đô la").unwrap();

        let table = MappingTable::load(file.path()).unwrap();
        assert_eq!(table.get("$"), Some("đô la"));

        let err = MappingTable::load("/nonexistent/table.txt").unwrap_err();
        assert!(matches!(err, NormError::Load { .. }));
    }

    #[test]
    fn test_is_upper_word() {
        assert!(is_upper_word("HCM"));
        assert!(is_upper_word("A1"));
        assert!(!is_upper_word("Hcm"));
        assert!(!is_upper_word("123"));
    }
}
