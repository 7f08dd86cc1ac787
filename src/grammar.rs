//! @ai:module:intent Resolve pronoun sets and subject-name capitalization
//! @ai:module:layer domain
//! @ai:module:public_api PronounSet, resolve_pronouns, pronouns_for, capitalize_subject_name, capitalize_subjects
//! @ai:module:depends_on student
//! @ai:module:stateless true

use crate::student::Gender;
use serde::Serialize;

/// @ai:intent Internally consistent pronoun and agreement forms for one gender
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PronounSet {
    pub subject: &'static str,
    pub subject_lower: &'static str,
    pub object: &'static str,
    pub possessive: &'static str,
    pub possessive_capitalized: &'static str,
    /// "has" or "have"
    pub verb_form: &'static str,
    /// "is" or "are"
    pub copula: &'static str,
    pub reflexive: &'static str,
}

const HE: PronounSet = PronounSet {
    subject: "He",
    subject_lower: "he",
    object: "him",
    possessive: "his",
    possessive_capitalized: "His",
    verb_form: "has",
    copula: "is",
    reflexive: "himself",
};

const SHE: PronounSet = PronounSet {
    subject: "She",
    subject_lower: "she",
    object: "her",
    possessive: "her",
    possessive_capitalized: "Her",
    verb_form: "has",
    copula: "is",
    reflexive: "herself",
};

const THEY: PronounSet = PronounSet {
    subject: "They",
    subject_lower: "they",
    object: "them",
    possessive: "their",
    possessive_capitalized: "Their",
    verb_form: "have",
    copula: "are",
    reflexive: "themselves",
};

/// Subject names whose capitalization is not simply "first letter upper".
const SUBJECT_CAPITALIZATION: &[(&str, &str)] = &[
    ("english", "English"),
    ("mathematics", "Mathematics"),
    ("math", "Math"),
    ("phonics", "Phonics"),
    ("science", "Science"),
    ("social studies", "Social Studies"),
    ("i.q", "I.Q"),
    ("physical education", "Physical Education"),
    ("arabic", "Arabic"),
    ("french", "French"),
];

/// @ai:intent Resolve a free-text gender tag to its pronoun set
/// @ai:post unknown tags resolve to the "they" set
/// @ai:example ("she") -> SHE
/// @ai:example ("xyz") -> THEY
/// @ai:effects pure
pub fn resolve_pronouns(gender: &str) -> PronounSet {
    pronouns_for(Gender::parse(gender))
}

/// @ai:intent Pronoun set for an already-parsed gender
/// @ai:effects pure
pub fn pronouns_for(gender: Gender) -> PronounSet {
    match gender {
        Gender::He => HE,
        Gender::She => SHE,
        Gender::They => THEY,
    }
}

/// @ai:intent Capitalize a subject name, honouring the exception table
/// @ai:example ("english") -> "English"
/// @ai:example ("I.q") -> "I.Q"
/// @ai:example ("art and craft") -> "Art and craft"
/// @ai:example ("arabic conversation") -> "Arabic conversation"
/// @ai:effects pure
pub fn capitalize_subject_name(name: &str) -> String {
    let trimmed = name.trim();
    let lower = trimmed.to_lowercase();

    if let Some((_, proper)) = SUBJECT_CAPITALIZATION.iter().find(|(key, _)| *key == lower) {
        return (*proper).to_string();
    }

    // Everything else, "conversation" subjects included, keeps the caller's
    // casing past the first letter.
    capitalize_first(trimmed)
}

/// @ai:intent Capitalize every subject in a list, preserving order
/// @ai:effects pure
pub fn capitalize_subjects<S: AsRef<str>>(subjects: &[S]) -> Vec<String> {
    subjects
        .iter()
        .map(|s| capitalize_subject_name(s.as_ref()))
        .collect()
}

/// @ai:intent Upper-case the first character, leaving the rest untouched
/// @ai:effects pure
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
