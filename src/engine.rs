//! @ai:module:intent Assemble narrative comments from templates and student data
//! @ai:module:layer application
//! @ai:module:public_api CommentGenerator, GeneratedComment, Sentence, PlaceholderContext, TemplateTracker, select_template, substitute_placeholders, assemble_comment, generate_variations
//! @ai:module:depends_on templates, performance, grammar, normalize, postprocess, quality, config, student
//! @ai:module:stateless true

use crate::config::{DefaultPhrases, GeneratorConfig};
use crate::grammar::{capitalize_subjects, pronouns_for};
use crate::normalize::{natural_join, normalize_list, truncate_selections};
use crate::performance::descriptor_for;
use crate::postprocess::{ensure_name_usage, improve_grammar};
use crate::quality::{validate_generated_comment, validate_input, word_count, QualityReport};
use crate::student::{StudentAttributes, Variant};
use crate::templates::{templates_for, Category, TemplateStyle};
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::{Captures, Regex};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^}]+)\}").expect("Invalid regex"));

/// @ai:intent One rendered sentence and the slot it fills
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Sentence {
    pub category: Category,
    pub text: String,
}

/// @ai:intent A finished comment plus what the presentation layer needs to show it
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedComment {
    pub variant: Variant,
    pub style: TemplateStyle,
    pub sentences: Vec<Sentence>,
    pub text: String,
    pub word_count: usize,
    pub quality: QualityReport,
    /// Fields that fell back to defaults.
    pub input_warnings: Vec<String>,
}

/// @ai:intent Remembers which templates a single generation already used, per category
///
/// Built fresh for every comment so nothing leaks between calls.
#[derive(Debug, Default)]
pub struct TemplateTracker {
    used: HashMap<Category, HashSet<usize>>,
}

impl TemplateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Mutable set of used indices for one category
    pub fn used_mut(&mut self, category: Category) -> &mut HashSet<usize> {
        self.used.entry(category).or_default()
    }

    /// @ai:intent Number of templates already used in a category
    pub fn used_count(&self, category: Category) -> usize {
        self.used.get(&category).map_or(0, HashSet::len)
    }
}

/// @ai:intent Values substituted for `{key}` placeholders
#[derive(Debug, Clone, Default)]
pub struct PlaceholderContext {
    values: HashMap<String, String>,
    /// The name is a stand-in and reads lower-case mid-sentence.
    fallback_name: bool,
}

impl PlaceholderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// @ai:intent Copy of this context with one extra key
    pub fn with(&self, key: &str, value: impl Into<String>) -> Self {
        let mut ctx = self.clone();
        ctx.insert(key, value);
        ctx
    }
}

/// @ai:intent Pick a template, preferring ones not used yet in this generation
/// @ai:post the chosen index is recorded in `used`
/// @ai:post when every template was used, any template may repeat
/// @ai:edge_cases empty template list -> None
/// @ai:effects random
pub fn select_template<'a, R: Rng + ?Sized>(
    templates: &[&'a str],
    used: &mut HashSet<usize>,
    rng: &mut R,
) -> Option<&'a str> {
    if templates.is_empty() {
        return None;
    }

    let unused: Vec<usize> = (0..templates.len()).filter(|i| !used.contains(i)).collect();
    let index = match unused.choose(rng) {
        Some(&index) => index,
        None => rng.gen_range(0..templates.len()),
    };

    used.insert(index);
    Some(templates[index])
}

/// @ai:intent Replace `{key}` placeholders from the context
/// @ai:post unknown keys are left verbatim
/// @ai:example ("Hi {name} {x}", {name: "Mia"}) -> "Hi Mia {x}"
/// @ai:effects pure
pub fn substitute_placeholders(template: &str, ctx: &PlaceholderContext) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            match ctx.get(key) {
                Some(value) if key == "name" && ctx.fallback_name && starts_mid_sentence(caps) => {
                    lowercase_first(value)
                }
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// @ai:intent Build one comment: one sentence per category, in fixed order
/// @ai:pre templates exist for every category of the variant's style
/// @ai:post result.sentences.len() == 8, one per Category::ORDER entry
/// @ai:post empty input lists are replaced by the configured defaults
/// @ai:effects random
pub fn assemble_comment<S: AsRef<str>, R: Rng + ?Sized>(
    attributes: &StudentAttributes,
    topics: &[S],
    subjects: &[S],
    variant: Variant,
    config: &GeneratorConfig,
    rng: &mut R,
) -> GeneratedComment {
    let limits = &config.limits;
    let defaults = &config.defaults;
    let builtin = DefaultPhrases::default();
    let name = attributes.display_name(defaults.fallback_name()).to_string();
    let style = TemplateStyle::for_variant(variant);
    let input_warnings = validate_input(attributes, topics, subjects);

    let strengths = or_defaults(
        normalize_list(&attributes.strengths, limits.strengths_parsed.max(1)),
        &defaults.strengths,
        &builtin.strengths,
    );
    let weaknesses = or_defaults(
        normalize_list(&attributes.weaknesses, limits.weaknesses_parsed.max(1)),
        &defaults.weaknesses,
        &builtin.weaknesses,
    );
    let topics: Vec<String> = or_defaults(
        truncate_selections(topics, limits.topics_kept.max(1)),
        &defaults.topics,
        &builtin.topics,
    )
    .iter()
    .map(|t| t.to_lowercase())
    .collect();
    let subjects = capitalize_subjects(&or_defaults(
        truncate_selections(subjects, limits.subjects_shown.max(1)),
        &defaults.subjects,
        &builtin.subjects,
    ));

    let base = base_context(attributes, &name);
    let mut tracker = TemplateTracker::new();
    let mut sentences = Vec::with_capacity(Category::ORDER.len());

    for category in Category::ORDER {
        let ctx = match category {
            Category::Strengths => {
                base.with("strengths", join_first(&strengths, limits.strengths_shown))
            }
            Category::Topics => base.with("topics", join_first(&topics, limits.topics_shown)),
            Category::Subjects => {
                base.with("subjects", join_first(&subjects, limits.subjects_shown))
            }
            Category::Weaknesses => {
                base.with("weaknesses", join_first(&weaknesses, limits.weaknesses_shown))
            }
            _ => base.clone(),
        };

        let templates = templates_for(style, category);
        let Some(template) = select_template(templates, tracker.used_mut(category), rng) else {
            continue;
        };
        tracing::debug!("{} variant {}: selected {} template", style, variant, category);

        let rendered = substitute_placeholders(template, &ctx);
        let text = improve_grammar(&ensure_name_usage(&rendered, &name));
        sentences.push(Sentence { category, text });
    }

    let joined = sentences
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let text = ensure_name_usage(&improve_grammar(&joined), &name);

    let quality = validate_generated_comment(&text, attributes, config);
    if quality.is_valid() {
        tracing::debug!("Comment quality score: {}/100", quality.score);
    } else {
        tracing::warn!(
            "Generated comment issues (score {}/100): {}",
            quality.score,
            quality.issues.join("; ")
        );
    }

    GeneratedComment {
        variant,
        style,
        word_count: word_count(&text),
        sentences,
        text,
        quality,
        input_warnings,
    }
}

/// @ai:intent Generate `count` comments, variant i for the i-th, each with its own tracker
/// @ai:effects random
pub fn generate_variations<S: AsRef<str>, R: Rng + ?Sized>(
    attributes: &StudentAttributes,
    topics: &[S],
    subjects: &[S],
    count: u32,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<GeneratedComment> {
    (1..=count)
        .map(|i| assemble_comment(attributes, topics, subjects, Variant(i), config, &mut *rng))
        .collect()
}

/// @ai:intent Configured entry point for callers that do not manage randomness
#[derive(Debug, Clone, Default)]
pub struct CommentGenerator {
    config: GeneratorConfig,
}

impl CommentGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// @ai:intent Generate one comment using the thread-local random source
    /// @ai:effects random, log
    pub fn generate<S: AsRef<str>>(
        &self,
        attributes: &StudentAttributes,
        topics: &[S],
        subjects: &[S],
        variant: Variant,
    ) -> GeneratedComment {
        self.generate_with_rng(attributes, topics, subjects, variant, &mut rand::thread_rng())
    }

    /// @ai:intent Generate one comment drawing template choices from `rng`
    /// @ai:effects random, log
    pub fn generate_with_rng<S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        attributes: &StudentAttributes,
        topics: &[S],
        subjects: &[S],
        variant: Variant,
        rng: &mut R,
    ) -> GeneratedComment {
        self.log_input_warnings(attributes, topics, subjects);
        assemble_comment(attributes, topics, subjects, variant, &self.config, rng)
    }

    /// @ai:intent Generate the two stylistically distinct comments a teacher chooses from
    /// @ai:effects random, log
    pub fn generate_pair<S: AsRef<str>>(
        &self,
        attributes: &StudentAttributes,
        topics: &[S],
        subjects: &[S],
    ) -> Vec<GeneratedComment> {
        self.generate_variations_with_rng(attributes, topics, subjects, 2, &mut rand::thread_rng())
    }

    /// @ai:intent Generate `count` variants drawing template choices from `rng`
    /// @ai:effects random, log
    pub fn generate_variations_with_rng<S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        attributes: &StudentAttributes,
        topics: &[S],
        subjects: &[S],
        count: u32,
        rng: &mut R,
    ) -> Vec<GeneratedComment> {
        self.log_input_warnings(attributes, topics, subjects);
        generate_variations(attributes, topics, subjects, count, &self.config, rng)
    }

    fn log_input_warnings<S: AsRef<str>>(
        &self,
        attributes: &StudentAttributes,
        topics: &[S],
        subjects: &[S],
    ) {
        for warning in validate_input(attributes, topics, subjects) {
            tracing::warn!("Input validation: {}", warning);
        }
    }
}

fn base_context(attributes: &StudentAttributes, name: &str) -> PlaceholderContext {
    let perf = descriptor_for(attributes.rating);
    let pronouns = pronouns_for(attributes.gender);

    let mut ctx = PlaceholderContext::new();
    ctx.fallback_name = !attributes.has_name();
    ctx.insert("name", name);
    ctx.insert("level", perf.level);
    ctx.insert("achievement", perf.achievement);
    ctx.insert("attitude", perf.attitude);
    ctx.insert("descriptor", perf.descriptor);
    ctx.insert("pronoun_subject", pronouns.subject);
    ctx.insert("pronoun_subject_lower", pronouns.subject_lower);
    ctx.insert("pronoun_object", pronouns.object);
    ctx.insert("pronoun_possessive", pronouns.possessive);
    ctx.insert("pronoun_possessive_cap", pronouns.possessive_capitalized);
    ctx.insert("pronoun_verb", pronouns.verb_form);
    ctx.insert("pronoun_isAre", pronouns.copula);
    ctx.insert("pronoun_reflexive", pronouns.reflexive);

    tracing::debug!(
        "Context for {}: rating {} ({}), pronouns {}",
        name,
        attributes.rating,
        perf.level,
        attributes.gender
    );
    ctx
}

/// Parsed items, else the configured defaults, else the built-in defaults.
fn or_defaults(items: Vec<String>, configured: &[String], builtin: &[String]) -> Vec<String> {
    if !items.is_empty() {
        return items;
    }
    let configured = truncate_selections(configured, configured.len());
    if configured.is_empty() {
        builtin.to_vec()
    } else {
        configured
    }
}

fn join_first(items: &[String], max: usize) -> String {
    natural_join(&items[..items.len().min(max.max(1))])
}

fn starts_mid_sentence(caps: &Captures) -> bool {
    caps.get(0).map_or(false, |m| m.start() > 0)
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::{Gender, Rating};
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn mia() -> StudentAttributes {
        StudentAttributes::new("Mia")
            .with_gender(Gender::She)
            .with_strengths("sharing, reading")
            .with_weaknesses("counting")
            .with_rating(Rating::new(9))
    }

    #[test]
    fn test_select_template_prefers_unused() {
        let templates = ["a", "b", "c"];
        let mut used = HashSet::new();
        let mut rng = StdRng::seed_from_u64(7);

        let mut picked: Vec<&str> = (0..3)
            .filter_map(|_| select_template(&templates, &mut used, &mut rng))
            .collect();
        picked.sort_unstable();

        assert_eq!(picked, vec!["a", "b", "c"]);
        assert_eq!(used.len(), 3);
    }

    #[test]
    fn test_select_template_repeats_when_exhausted() {
        let templates = ["a", "b"];
        let mut used: HashSet<usize> = [0, 1].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..10 {
            let picked = select_template(&templates, &mut used, &mut rng).unwrap();
            assert!(templates.contains(&picked));
        }
    }

    #[test]
    fn test_select_template_empty() {
        let templates: [&str; 0] = [];
        let mut rng = StepRng::new(0, 1);
        assert!(select_template(&templates, &mut HashSet::new(), &mut rng).is_none());
    }

    #[test]
    fn test_substitute_leaves_unknown_placeholders() {
        let mut ctx = PlaceholderContext::new();
        ctx.insert("name", "Mia");
        assert_eq!(
            substitute_placeholders("{name} likes {mystery}.", &ctx),
            "Mia likes {mystery}."
        );
    }

    #[test]
    fn test_fallback_name_lowercased_mid_sentence() {
        let mut ctx = PlaceholderContext::new();
        ctx.insert("name", "This student");
        ctx.fallback_name = true;
        assert_eq!(
            substitute_placeholders("{name} smiles at {name}.", &ctx),
            "This student smiles at this student."
        );
    }

    #[test]
    fn test_assemble_emits_every_category_in_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let comment = assemble_comment(
            &mia(),
            &["letter recognition"],
            &["Phonics"],
            Variant(1),
            &GeneratorConfig::default(),
            &mut rng,
        );

        let categories: Vec<Category> = comment.sentences.iter().map(|s| s.category).collect();
        assert_eq!(categories, Category::ORDER.to_vec());
        assert_eq!(comment.style, TemplateStyle::Structured);
        assert_eq!(comment.word_count, word_count(&comment.text));
    }

    #[test]
    fn test_assemble_with_empty_input_uses_defaults() {
        let empty: [&str; 0] = [];
        let mut rng = StdRng::seed_from_u64(3);
        let comment = assemble_comment(
            &StudentAttributes::default(),
            &empty,
            &empty,
            Variant(2),
            &GeneratorConfig::default(),
            &mut rng,
        );

        assert_eq!(comment.sentences.len(), 8);
        assert_eq!(comment.input_warnings.len(), 5);
        assert!(comment.text.starts_with(|c: char| c.is_ascii_uppercase()));
        assert!(!comment.text.contains('{'));
        assert!(comment.text.to_lowercase().contains("this student"));
        for phrase in [
            "classroom engagement and positive attitude",
            "foundational skills",
            "General learning",
            "continued skill development",
        ] {
            assert!(comment.text.contains(phrase), "missing {phrase}: {}", comment.text);
        }
    }

    #[test]
    fn test_blank_configured_defaults_fall_back_to_builtin() {
        let mut config = GeneratorConfig::default();
        config.defaults.name = String::new();
        config.defaults.strengths = Vec::new();
        config.defaults.subjects = vec!["  ".to_string()];
        let empty: [&str; 0] = [];

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let comment = assemble_comment(
                &StudentAttributes::default(),
                &empty,
                &empty,
                Variant(1),
                &config,
                &mut rng,
            );

            assert!(comment.text.to_lowercase().contains("this student"), "{}", comment.text);
            assert!(!comment.text.contains(" , "), "{}", comment.text);
            assert!(!comment.text.contains(" in ,"), "{}", comment.text);
            assert!(comment.text.contains("classroom engagement"), "{}", comment.text);
            assert!(comment.text.contains("General learning"), "{}", comment.text);
        }
    }

    #[test]
    fn test_zero_parse_limit_keeps_typed_strengths() {
        let mut config = GeneratorConfig::default();
        config.limits.strengths_parsed = 0;
        let attrs = StudentAttributes::new("Leo").with_strengths("painting");
        let mut rng = StdRng::seed_from_u64(1);

        let comment = assemble_comment(&attrs, &["shapes"], &["Art"], Variant(1), &config, &mut rng);
        assert!(comment.text.contains("painting"), "{}", comment.text);
    }

    #[test]
    fn test_same_seed_same_text() {
        let config = GeneratorConfig::default();
        let generate = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            assemble_comment(&mia(), &["shapes"], &["Mathematics"], Variant(2), &config, &mut rng)
        };
        let (a, b) = (generate(9), generate(9));
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn test_they_pronouns_agree() {
        let attrs = StudentAttributes::new("Sam").with_gender(Gender::They);
        let config = GeneratorConfig::default();
        for seed in 0..30u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let variant = Variant(1 + (seed % 2) as u32);
            let comment = assemble_comment(&attrs, &["shapes"], &["Art"], variant, &config, &mut rng);
            assert!(!comment.text.contains("They has"), "{}", comment.text);
            assert!(!comment.text.contains("They is"), "{}", comment.text);
        }
    }

    #[test]
    fn test_variations_alternate_styles() {
        let comments = generate_variations(
            &mia(),
            &["shapes"],
            &["Science"],
            3,
            &GeneratorConfig::default(),
            &mut StdRng::seed_from_u64(5),
        );
        let styles: Vec<_> = comments.iter().map(|c| c.style).collect();
        assert_eq!(
            styles,
            vec![TemplateStyle::Structured, TemplateStyle::Warm, TemplateStyle::Structured]
        );
    }

    #[test]
    fn test_tracker_is_per_category() {
        let mut tracker = TemplateTracker::new();
        tracker.used_mut(Category::Opening).insert(0);
        assert_eq!(tracker.used_count(Category::Opening), 1);
        assert_eq!(tracker.used_count(Category::Social), 0);
    }
}
