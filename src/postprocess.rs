//! @ai:module:intent Clean assembled prose: capitalization, spacing, punctuation, name usage
//! @ai:module:layer application
//! @ai:module:public_api improve_grammar, ensure_name_usage, ensure_terminal_punctuation, collapse_whitespace
//! @ai:module:stateless true

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Names that mean "no real name was given".
const PLACEHOLDER_NAMES: &[&str] = &["the student", "this student"];

static PRONOUN_AFTER_STOP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([.!?])\s+(he|she|his|her|him|their|they|them)\b").expect("Invalid regex")
});
static LOWER_SENTENCE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.!?]\s+)([a-z])").expect("Invalid regex"));
static DEFINITE_STUDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[Tt]he student\b").expect("Invalid regex"));
static INDEFINITE_STUDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[Aa]\s+student\b").expect("Invalid regex"));

/// @ai:intent Fix capitalization, spacing and terminal punctuation
/// @ai:post no run of whitespace longer than one space
/// @ai:post non-empty result ends with '.', '!' or '?'
/// @ai:example ("hello. she did well.") -> "Hello. She did well."
/// @ai:example ("well done,") -> "Well done."
/// @ai:effects pure
pub fn improve_grammar(text: &str) -> String {
    let text = collapse_whitespace(text);

    let text = PRONOUN_AFTER_STOP.replace_all(&text, |caps: &Captures| {
        format!("{} {}", &caps[1], capitalize_ascii(&caps[2]))
    });

    let text = LOWER_SENTENCE_START.replace_all(&text, |caps: &Captures| {
        format!("{}{}", &caps[1], caps[2].to_uppercase())
    });

    let text = capitalize_ascii(&text);
    ensure_terminal_punctuation(&text)
}

/// @ai:intent Replace every run of whitespace with one space and trim the ends
/// @ai:effects pure
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// @ai:intent Append a period unless the text already ends a sentence
///
/// A trailing `,`, `;` or `:` is dropped before the period is added.
/// @ai:example ("Great work") -> "Great work."
/// @ai:example ("Great work;") -> "Great work."
/// @ai:example ("Great work!") -> "Great work!"
/// @ai:effects pure
pub fn ensure_terminal_punctuation(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.ends_with(['.', '!', '?']) {
        return trimmed.to_string();
    }

    let stripped = trimmed.trim_end_matches([',', ';', ':']).trim_end();
    format!("{}.", stripped)
}

/// @ai:intent Replace generic "the student" / "a student" references with the real name
/// @ai:post no-op when name is empty or itself a placeholder
/// @ai:example ("The student shares.", "Mia") -> "Mia shares."
/// @ai:effects pure
pub fn ensure_name_usage(text: &str, name: &str) -> String {
    let name = name.trim();
    if name.is_empty() || is_placeholder_name(name) {
        return text.to_string();
    }

    let text = DEFINITE_STUDENT.replace_all(text, regex::NoExpand(name));
    INDEFINITE_STUDENT
        .replace_all(&text, regex::NoExpand(name))
        .into_owned()
}

/// @ai:intent Check whether a name is one of the generic stand-ins
/// @ai:effects pure
pub fn is_placeholder_name(name: &str) -> bool {
    let lower = name.trim().to_lowercase();
    PLACEHOLDER_NAMES.contains(&lower.as_str())
}

fn capitalize_ascii(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            let mut out = String::with_capacity(text.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        _ => text.to_string(),
    }
}
