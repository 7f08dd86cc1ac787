//! @ai:module:intent Template-based kindergarten report comment generator
//! @ai:module:layer infrastructure
//! @ai:module:public_api engine, templates, performance, grammar, normalize, postprocess, quality, student, config, output, batch, error
//! @ai:module:stateless true
//!
//! # Kinder Comments
//!
//! Turns a teacher's structured notes about a student (name, gender,
//! strengths, growth areas, topic and subject selections, overall rating)
//! into two differently-voiced narrative report comments.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kinder_comments::{CommentGenerator, Gender, Rating, StudentAttributes};
//!
//! let student = StudentAttributes::new("Mia")
//!     .with_gender(Gender::She)
//!     .with_strengths("sharing, reading")
//!     .with_weaknesses("counting")
//!     .with_rating(Rating::new(9));
//!
//! let generator = CommentGenerator::default();
//! for comment in generator.generate_pair(&student, &["letter recognition"], &["Phonics"]) {
//!     println!("{} ({} words)", comment.text, comment.word_count);
//! }
//! ```

pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod grammar;
pub mod normalize;
pub mod output;
pub mod performance;
pub mod postprocess;
pub mod quality;
pub mod student;
pub mod templates;

pub use batch::{generate_directory, generate_file, BatchEntry, BatchFailure, BatchResult};
pub use config::{DefaultPhrases, GeneratorConfig, ListLimits, ValidationThresholds};
pub use engine::{
    assemble_comment, generate_variations, select_template, substitute_placeholders,
    CommentGenerator, GeneratedComment, PlaceholderContext, Sentence, TemplateTracker,
};
pub use error::{Error, Result};
pub use grammar::{capitalize_subject_name, capitalize_subjects, resolve_pronouns, PronounSet};
pub use normalize::{
    coerce_list, natural_join, natural_join_with, normalize_list, strip_terminators,
};
pub use output::{
    format_batch_result, format_export_report, format_generation, format_quality_report,
    OutputFormat,
};
pub use performance::{resolve_performance, PerformanceDescriptor};
pub use postprocess::{ensure_name_usage, ensure_terminal_punctuation, improve_grammar};
pub use quality::{validate_generated_comment, validate_input, word_count, QualityReport};
pub use student::{Gender, Rating, StudentAttributes, StudentRecord, Variant};
pub use templates::{Category, TemplateStyle};
