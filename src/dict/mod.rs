pub mod ignore;

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default typo table compiled into the binary, used when no dictionary
/// file is configured.
const BUILTIN_TYPOS: &str = include_str!("typos.txt");

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("dictionary {path} contains no entries")]
    Empty { path: String },
}

/// Immutable mapping from a lowercase misspelling to its ordered
/// corrections.
///
/// When an entry holds two or more values, the final value is a free-text
/// caveat explaining why a fix may not always apply, not a correction.
/// Loaded once per process and shared by reference; never mutated after
/// construction, so concurrent readers need no locking.
#[derive(Debug)]
pub struct Dictionary {
    entries: HashMap<String, Vec<String>>,
}

impl Dictionary {
    /// Load a dictionary file. Failure here is fatal to the process: there
    /// is nothing useful to scan for without a dictionary.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let content = fs::read_to_string(path).map_err(|source| DictionaryError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let dictionary = Self::parse(&content);
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty {
                path: path.display().to_string(),
            });
        }
        Ok(dictionary)
    }

    /// The typo table compiled into the binary.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_TYPOS)
    }

    /// Parse dictionary text: one `typo->correction1,correction2,...` entry
    /// per line; lines without `->` (blank lines, comments) are skipped.
    /// Entries are assumed to already be lowercase in the source text.
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();

        for line in content.lines() {
            let Some((typo, rest)) = line.split_once("->") else {
                continue;
            };
            let corrections: Vec<String> = rest
                .split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect();
            if corrections.is_empty() {
                continue;
            }
            entries.insert(typo.trim().to_string(), corrections);
        }

        Self { entries }
    }

    /// Exact lookup; callers lowercase the word first.
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_entries() {
        let dict = Dictionary::parse("teh->the\nrecieve->receive,recive\n");
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.lookup("teh"), Some(&["the".to_string()][..]));
        assert_eq!(
            dict.lookup("recieve"),
            Some(&["receive".to_string(), "recive".to_string()][..])
        );
    }

    #[test]
    fn test_lines_without_separator_are_skipped() {
        let dict = Dictionary::parse("# comment\n\nteh->the\nnot an entry\n");
        assert_eq!(dict.len(), 1);
        assert!(dict.lookup("teh").is_some());
    }

    #[test]
    fn test_caveat_entry_preserved_in_order() {
        let dict = Dictionary::parse("wasnt->wasn't,contraction - may be intentional\n");
        let corrections = dict.lookup("wasnt").unwrap();
        assert_eq!(corrections.len(), 2);
        assert_eq!(corrections[0], "wasn't");
        assert_eq!(corrections[1], "contraction - may be intentional");
    }

    #[test]
    fn test_lookup_is_exact_after_caller_lowercases() {
        let dict = Dictionary::parse("teh->the\n");
        for variant in ["teh", "Teh", "TEH", "tEh"] {
            assert_eq!(
                dict.lookup(&variant.to_lowercase()),
                Some(&["the".to_string()][..])
            );
        }
        assert!(dict.lookup("Teh").is_none());
    }

    #[test]
    fn test_empty_corrections_are_skipped() {
        let dict = Dictionary::parse("teh->\nbarr->bar\n");
        assert_eq!(dict.len(), 1);
        assert!(dict.lookup("teh").is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "barr->bar").unwrap();

        let dict = Dictionary::load(file.path()).unwrap();
        assert_eq!(dict.lookup("barr"), Some(&["bar".to_string()][..]));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = Dictionary::load(Path::new("/nonexistent/typos.txt")).unwrap_err();
        assert!(matches!(err, DictionaryError::Read { .. }));
    }

    #[test]
    fn test_load_empty_file_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = Dictionary::load(file.path()).unwrap_err();
        assert!(matches!(err, DictionaryError::Empty { .. }));
    }

    #[test]
    fn test_builtin_dictionary() {
        let dict = Dictionary::builtin();
        assert!(!dict.is_empty());
        assert!(dict.lookup("teh").is_some());
        assert!(dict.lookup("recieve").is_some());
    }
}
