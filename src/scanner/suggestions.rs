//! Reshapes a dictionary entry's correction list for the context a typo was
//! found in, and renders the user-facing suggestion message.

/// Drop corrections that cannot replace a word inside an identifier, and
/// suppress the finding entirely (`None`) when nothing usable remains.
///
/// The trailing entry of a list with two or more values is a free-text
/// caveat, never a correction, and is never filtered on validity; it is
/// re-appended only when at least one real correction survives.
pub fn filter(suggestions: &[String], context_is_identifier: bool) -> Option<Vec<String>> {
    if !context_is_identifier {
        return Some(suggestions.to_vec());
    }

    let (real, caveat) = split_caveat(suggestions);
    let mut kept: Vec<String> = real
        .iter()
        .filter(|s| valid_in_identifier(s))
        .cloned()
        .collect();

    if kept.is_empty() {
        return None;
    }
    if let Some(caveat) = caveat {
        kept.push(caveat.clone());
    }
    Some(kept)
}

/// Render the `Did you mean ...?` message for a finding, re-casing each
/// correction to match the shape of the original word.
pub fn format_suggestion_text(suggestions: &[String], original: &str) -> String {
    let (real, caveat) = split_caveat(suggestions);

    let quoted: Vec<String> = real
        .iter()
        .map(|s| format!("'{}'", recase(s, original)))
        .collect();
    let mut text = format!("Did you mean {}?", quoted.join(" or "));

    if let Some(caveat) = caveat {
        text.push_str(" : not always fixable: ");
        text.push_str(caveat);
    }
    text
}

/// Re-case `correction` after the original word: an all-caps original
/// uppercases the correction, a leading capital capitalizes it, anything
/// else is left as the dictionary wrote it.
pub fn recase(correction: &str, original: &str) -> String {
    let mut letters = original.chars().filter(|c| c.is_alphabetic());
    let has_letters = letters.next().is_some();

    if has_letters
        && original
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| c.is_uppercase())
    {
        return correction.to_uppercase();
    }

    if original.chars().next().is_some_and(|c| c.is_uppercase()) {
        let mut chars = correction.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        };
    }

    correction.to_string()
}

fn split_caveat(suggestions: &[String]) -> (&[String], Option<&String>) {
    if suggestions.len() >= 2 {
        (&suggestions[..suggestions.len() - 1], suggestions.last())
    } else {
        (suggestions, None)
    }
}

/// True when every character could appear in a bare identifier word.
fn valid_in_identifier(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b >= 0x7F)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_filter_passthrough_outside_identifiers() {
        let suggestions = list(&["wasn't", "contraction"]);
        assert_eq!(filter(&suggestions, false), Some(suggestions.clone()));
    }

    #[test]
    fn test_filter_suppresses_when_only_caveat_remains() {
        let suggestions = list(&["wasn't", "contraction reason text"]);
        assert_eq!(filter(&suggestions, true), None);
    }

    #[test]
    fn test_filter_keeps_valid_corrections_and_caveat() {
        let suggestions = list(&["can't", "cannot", "may be intentional"]);
        assert_eq!(
            filter(&suggestions, true),
            Some(list(&["cannot", "may be intentional"]))
        );
    }

    #[test]
    fn test_filter_single_valid_correction() {
        let suggestions = list(&["the"]);
        assert_eq!(filter(&suggestions, true), Some(list(&["the"])));
    }

    #[test]
    fn test_filter_single_invalid_correction() {
        let suggestions = list(&["o'clock"]);
        assert_eq!(filter(&suggestions, true), None);
    }

    #[test]
    fn test_recase_shapes() {
        assert_eq!(recase("the", "TEH"), "THE");
        assert_eq!(recase("the", "Teh"), "The");
        assert_eq!(recase("the", "teh"), "the");
        assert_eq!(recase("receive", "Recieve"), "Receive");
    }

    #[test]
    fn test_format_single_suggestion() {
        assert_eq!(
            format_suggestion_text(&list(&["the"]), "Teh"),
            "Did you mean 'The'?"
        );
    }

    #[test]
    fn test_format_multiple_suggestions() {
        assert_eq!(
            format_suggestion_text(&list(&["recall", "recoil", "sometimes a name"]), "recal"),
            "Did you mean 'recall' or 'recoil'? : not always fixable: sometimes a name"
        );
    }

    #[test]
    fn test_format_uppercases_for_all_caps_original() {
        assert_eq!(
            format_suggestion_text(&list(&["the"]), "TEH"),
            "Did you mean 'THE'?"
        );
    }
}
