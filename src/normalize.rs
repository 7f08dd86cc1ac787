//! @ai:module:intent Clean free-text and list input into bounded ordered lists
//! @ai:module:layer domain
//! @ai:module:public_api normalize_list, strip_terminators, natural_join, natural_join_with, coerce_list, truncate_selections
//! @ai:module:stateless true

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// A run of terminators that ends a sentence: followed by whitespace or the end of text.
static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+(\s+|$)").expect("Invalid regex"));

/// @ai:intent Split comma-separated text into trimmed, lower-cased items
///
/// A sentence break inside the text separates items like a comma does.
/// @ai:post no item is empty; at most max_items items; original order kept
/// @ai:post no item contains a sentence break
/// @ai:example ("Sharing, , Reading ", 3) -> ["sharing", "reading"]
/// @ai:example ("reading. writing!", 3) -> ["reading", "writing"]
/// @ai:effects pure
pub fn normalize_list(text: &str, max_items: usize) -> Vec<String> {
    SENTENCE_BREAK
        .replace_all(text, ",")
        .split(',')
        .map(|item| strip_terminators(item).to_lowercase())
        .filter(|item| !item.is_empty())
        .take(max_items)
        .collect()
}

/// @ai:intent Remove everything in an item that would end a sentence early
/// @ai:post no '!' or '?'; '.' only survives inside a word, as in "I.Q"
/// @ai:example ("drawing!") -> "drawing"
/// @ai:example ("  I.Q. ") -> "I.Q"
/// @ai:effects pure
pub fn strip_terminators(item: &str) -> String {
    SENTENCE_BREAK
        .replace_all(item, " ")
        .replace(['!', '?'], "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// @ai:intent Join items as prose with "and"
/// @ai:example ([]) -> ""
/// @ai:example (["A", "B"]) -> "A and B"
/// @ai:example (["A", "B", "C"]) -> "A, B, and C"
/// @ai:effects pure
pub fn natural_join<S: AsRef<str>>(items: &[S]) -> String {
    natural_join_with(items, "and")
}

/// @ai:intent Join items as prose with commas and a final conjunction
/// @ai:effects pure
pub fn natural_join_with<S: AsRef<str>>(items: &[S], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} {} {}", first.as_ref(), conjunction, second.as_ref()),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(|s| s.as_ref()).collect();
            format!("{}, {} {}", head.join(", "), conjunction, last.as_ref())
        }
    }
}

/// @ai:intent Coerce a loosely typed value into a list of strings
/// @ai:post non-array values yield an empty list
/// @ai:effects pure
pub fn coerce_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// @ai:intent Clean caller selections and keep the first `max_items`
///
/// Selections arrive in the order the teacher ticked them, so earlier ones
/// win when truncating.
/// @ai:effects pure
pub fn truncate_selections<S: AsRef<str>>(selections: &[S], max_items: usize) -> Vec<String> {
    selections
        .iter()
        .map(|s| strip_terminators(s.as_ref()))
        .filter(|s| !s.is_empty())
        .take(max_items)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_natural_join_exact() {
        let empty: [&str; 0] = [];
        assert_eq!(natural_join(&empty), "");
        assert_eq!(natural_join(&["A"]), "A");
        assert_eq!(natural_join(&["A", "B"]), "A and B");
        assert_eq!(natural_join(&["A", "B", "C"]), "A, B, and C");
        assert_eq!(natural_join(&["A", "B", "C", "D", "E"]), "A, B, C, D, and E");
    }

    #[test]
    fn test_natural_join_custom_conjunction() {
        assert_eq!(natural_join_with(&["red", "blue"], "or"), "red or blue");
        assert_eq!(natural_join_with(&["x", "y", "z"], "or"), "x, y, or z");
    }

    #[test]
    fn test_normalize_list() {
        assert_eq!(
            normalize_list("Sharing, , Reading ,DRAWING", 3),
            vec!["sharing", "reading", "drawing"]
        );
        assert_eq!(normalize_list("a,b,c,d,e", 2), vec!["a", "b"]);
        assert!(normalize_list("", 4).is_empty());
        assert!(normalize_list(" , ,", 4).is_empty());
        assert!(normalize_list("a", 0).is_empty());
    }

    #[test]
    fn test_coerce_list() {
        assert_eq!(coerce_list(&json!(["a", " b ", "", 3])), vec!["a", "b", "3"]);
        assert!(coerce_list(&json!("a, b")).is_empty());
        assert!(coerce_list(&json!(null)).is_empty());
        assert!(coerce_list(&json!({"a": 1})).is_empty());
    }

    #[test]
    fn test_normalize_list_splits_on_sentence_breaks() {
        assert_eq!(normalize_list("reading. writing", 4), vec!["reading", "writing"]);
        assert_eq!(
            normalize_list("helping friends, drawing!", 4),
            vec!["helping friends", "drawing"]
        );
        assert_eq!(normalize_list("Why? Because!", 4), vec!["why", "because"]);
        assert!(normalize_list("...!?", 4).is_empty());
    }

    #[test]
    fn test_strip_terminators() {
        assert_eq!(strip_terminators("drawing!"), "drawing");
        assert_eq!(strip_terminators("  I.Q. "), "I.Q");
        assert_eq!(strip_terminators("counting. to ten?"), "counting to ten");
        assert_eq!(strip_terminators("wow!!really"), "wowreally");
        assert_eq!(strip_terminators("?"), "");
    }

    #[test]
    fn test_truncate_selections_strips_terminators() {
        let subjects = ["Phonics.", "!", "I.Q", "Art? "];
        assert_eq!(truncate_selections(&subjects, 5), vec!["Phonics", "I.Q", "Art"]);
    }

    #[test]
    fn test_truncate_selections_prefers_first() {
        let topics = ["counting to 10", " ", "shapes", "colors"];
        assert_eq!(truncate_selections(&topics, 2), vec!["counting to 10", "shapes"]);
    }
}
