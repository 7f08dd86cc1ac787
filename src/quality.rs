//! @ai:module:intent Score generated comments and flag incomplete input
//! @ai:module:layer application
//! @ai:module:public_api QualityReport, validate_generated_comment, validate_input, word_count
//! @ai:module:depends_on config, student, normalize
//! @ai:module:stateless true

use crate::config::GeneratorConfig;
use crate::normalize::normalize_list;
use crate::student::StudentAttributes;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static LOWER_AFTER_STOP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+[a-z]").expect("Invalid regex"));
static REPEATED_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("Invalid regex"));

/// @ai:intent Advisory quality diagnostics for one comment
///
/// Never blocks output; callers log it, show it, or ignore it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QualityReport {
    /// 0..=100
    pub score: u8,
    pub issues: Vec<String>,
    pub word_count: usize,
    pub name_mentions: usize,
}

impl QualityReport {
    /// @ai:intent True when no issue was found
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// @ai:intent Check the score against a pass threshold
    pub fn passed(&self, pass_score: u8) -> bool {
        self.score >= pass_score
    }
}

/// @ai:intent Count whitespace-separated words
/// @ai:example ("Mia reads  well.") -> 3
/// @ai:effects pure
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// @ai:intent Score a comment against completeness heuristics
/// @ai:post score <= 100
/// @ai:effects pure
pub fn validate_generated_comment(
    comment: &str,
    attributes: &StudentAttributes,
    config: &GeneratorConfig,
) -> QualityReport {
    let thresholds = &config.validation;
    let mut report = QualityReport::default();
    let mut score: u32 = 0;

    // Grammar
    if comment.trim().ends_with(['.', '!', '?']) {
        score += 10;
    } else {
        report.issues.push("Missing proper ending punctuation".to_string());
    }

    if LOWER_AFTER_STOP.is_match(comment) {
        report.issues.push("Capitalization error after punctuation".to_string());
    } else {
        score += 10;
    }

    if REPEATED_SPACE.is_match(comment) {
        report.issues.push("Multiple consecutive spaces found".to_string());
    } else {
        score += 10;
    }

    // Name usage
    if comment.contains("The student") || comment.contains("the student") {
        report.issues.push("Generic 'The student' reference found".to_string());
    } else {
        score += 15;
    }

    let name = attributes.display_name(config.defaults.fallback_name());
    report.name_mentions = count_mentions(comment, name);
    if report.name_mentions >= thresholds.good_name_mentions {
        score += 15;
    } else if report.name_mentions >= 1 {
        score += 5;
    } else {
        report.issues.push("Student name not used enough".to_string());
    }

    // Data integration
    let prefix_chars = thresholds.match_prefix_chars;
    let lowered = comment.to_lowercase();

    if references_any(&lowered, &attributes.strengths, prefix_chars) {
        score += 10;
    } else {
        report.issues.push("Student strengths not clearly referenced".to_string());
    }

    if references_any(&lowered, &attributes.weaknesses, prefix_chars) {
        score += 10;
    } else {
        report.issues.push("Growth areas not clearly referenced".to_string());
    }

    // Length
    report.word_count = word_count(comment);
    if report.word_count >= thresholds.min_words {
        score += 20;
    } else if report.word_count >= thresholds.acceptable_words {
        score += 10;
    } else {
        report.issues.push(format!(
            "Comment too short: {} words (minimum {} recommended)",
            report.word_count, thresholds.min_words
        ));
    }

    report.score = score.min(100) as u8;
    report
}

/// @ai:intent List what is missing from the teacher's input before generating
/// @ai:post each warning names a field that will fall back to a default
/// @ai:effects pure
pub fn validate_input<S: AsRef<str>>(
    attributes: &StudentAttributes,
    topics: &[S],
    subjects: &[S],
) -> Vec<String> {
    let mut warnings = Vec::new();

    if !attributes.has_name() {
        warnings.push("Student name is missing or generic - will use fallback".to_string());
    }
    if attributes.strengths.trim().is_empty() {
        warnings.push("No strengths provided - will use defaults".to_string());
    }
    if attributes.weaknesses.trim().is_empty() {
        warnings.push("No growth areas provided - will use defaults".to_string());
    }
    if topics.iter().all(|t| t.as_ref().trim().is_empty()) {
        warnings.push("No specific topics selected - will use general topics".to_string());
    }
    if subjects.iter().all(|s| s.as_ref().trim().is_empty()) {
        warnings.push("No subjects selected - will use general subjects".to_string());
    }

    warnings
}

/// Case-insensitive occurrences of `name` in `text`.
fn count_mentions(text: &str, name: &str) -> usize {
    if name.is_empty() {
        return 0;
    }
    let pattern = format!("(?i){}", regex::escape(name));
    match Regex::new(&pattern) {
        Ok(re) => re.find_iter(text).count(),
        Err(_) => 0,
    }
}

/// True when any listed item's leading characters appear in `lowered`.
/// Nothing listed counts as referenced: the generator substituted defaults.
fn references_any(lowered: &str, items: &str, prefix_chars: usize) -> bool {
    let items = normalize_list(items, usize::MAX);
    if items.is_empty() {
        return true;
    }
    items.iter().any(|item| {
        let prefix: String = item.chars().take(prefix_chars.max(1)).collect();
        lowered.contains(&prefix)
    })
}
