use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 3+ alphanumeric characters, optionally a contraction tail ("wasn't")
    static ref WORD: Regex = Regex::new(r"(?i)[a-z0-9]{3,}(?:'[a-z]+)?").unwrap();
}

/// Candidate words in free-form text (string contents, comments, inline
/// markup), with the byte offset of each match. Returns a fresh iterator
/// per call.
pub fn extract_words(text: &str) -> impl Iterator<Item = (&str, usize)> {
    WORD.find_iter(text).map(|m| (m.as_str(), m.start()))
}

/// Split a compound identifier into its natural-language segments.
///
/// Lowercase runs, capitalized words and acronyms are all segments; the
/// final capital of an acronym run belongs to a following capitalized word
/// (`parseHTMLFile` -> `parse`, `HTML`, `File`; `XMLParser` -> `XML`,
/// `Parser`). Underscores, digits and any other non-letter bytes separate
/// segments.
pub fn identifier_parts(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut parts = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_lowercase() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_lowercase() {
                i += 1;
            }
            parts.push(&text[start..i]);
        } else if b.is_ascii_uppercase() {
            let start = i;
            i += 1;
            if i < bytes.len() && bytes[i].is_ascii_lowercase() {
                while i < bytes.len() && bytes[i].is_ascii_lowercase() {
                    i += 1;
                }
                parts.push(&text[start..i]);
            } else {
                while i < bytes.len() && bytes[i].is_ascii_uppercase() {
                    i += 1;
                }
                // cede the last capital to a following capitalized word
                if i < bytes.len() && bytes[i].is_ascii_lowercase() && i - start > 1 {
                    i -= 1;
                }
                parts.push(&text[start..i]);
            }
        } else {
            i += 1;
        }
    }

    parts
}

/// True when a word extracted from free text looks like code: it carries an
/// underscore or mixes upper- and lowercase letters. Such words get a
/// second chance through identifier decomposition.
pub fn looks_like_identifier(word: &str) -> bool {
    word.contains('_')
        || (word.chars().any(|c| c.is_ascii_lowercase())
            && word.chars().any(|c| c.is_ascii_uppercase()))
}
