use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Words that are never reported even when the dictionary knows them.
///
/// File format: one word per line, case-insensitive; blank lines and lines
/// starting with `#` are skipped.
#[derive(Debug, Default)]
pub struct IgnoreList {
    words: HashSet<String>,
}

impl IgnoreList {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read ignore list: {}", path.display()))?;

        let mut words = HashSet::new();
        for line in content.lines() {
            let word = line.trim();
            if !word.is_empty() && !word.starts_with('#') {
                words.insert(word.to_lowercase());
            }
        }

        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# header comment").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "teh").unwrap();
        writeln!(file, "  wasnt  ").unwrap();

        let list = IgnoreList::load(file.path()).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("teh"));
        assert!(list.contains("wasnt"));
        assert!(!list.contains("recieve"));
    }

    #[test]
    fn test_membership_is_case_insensitive() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Teh").unwrap();

        let list = IgnoreList::load(file.path()).unwrap();
        assert!(list.contains("teh"));
        assert!(list.contains("TEH"));
    }

    #[test]
    fn test_default_is_empty() {
        let list = IgnoreList::default();
        assert!(list.is_empty());
        assert!(!list.contains("anything"));
    }
}
