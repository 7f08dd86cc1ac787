//! @ai:module:intent Format generated comments, diagnostics and export reports
//! @ai:module:layer infrastructure
//! @ai:module:public_api OutputFormat, format_generation, format_quality_report, format_batch_result, format_export_report, export_file_name
//! @ai:module:depends_on engine, quality, batch, student
//! @ai:module:stateless true

use crate::batch::BatchResult;
use crate::engine::GeneratedComment;
use crate::quality::QualityReport;
use crate::student::StudentAttributes;
use colored::Colorize;

/// @ai:intent Output format options
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonPretty,
}

/// @ai:intent Format generated comments as a string
/// @ai:effects pure
pub fn format_generation(
    comments: &[GeneratedComment],
    format: OutputFormat,
    show_diagnostics: bool,
) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(comments).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(comments).unwrap_or_default(),
        OutputFormat::Text => format_generation_text(comments, show_diagnostics),
    }
}

/// @ai:intent Format generated comments as human-readable text
/// @ai:effects pure
fn format_generation_text(comments: &[GeneratedComment], show_diagnostics: bool) -> String {
    let mut output = String::new();

    for comment in comments {
        output.push_str(&format!(
            "{} {} {}\n",
            format!("Comment {}", comment.variant).bold(),
            format!("({} style)", comment.style).dimmed(),
            format!("({} words)", comment.word_count).cyan()
        ));
        output.push_str(&comment.text);
        output.push_str("\n\n");

        if show_diagnostics {
            for warning in &comment.input_warnings {
                output.push_str(&format!("  {} {}\n", "input:".dimmed(), warning));
            }
            output.push_str(&format_quality_text(&comment.quality));
            output.push('\n');
        }
    }

    output
}

/// @ai:intent Format a quality report as a string
/// @ai:effects pure
pub fn format_quality_report(report: &QualityReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(report).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(report).unwrap_or_default(),
        OutputFormat::Text => format_quality_text(report),
    }
}

fn format_quality_text(report: &QualityReport) -> String {
    let mut output = String::new();

    let score = format!("{}/100", report.score);
    let score = if report.score >= 80 {
        score.green().bold()
    } else if report.score >= 50 {
        score.yellow().bold()
    } else {
        score.red().bold()
    };

    output.push_str(&format!(
        "  quality: {} ({} words, name used {} times)\n",
        score, report.word_count, report.name_mentions
    ));

    for issue in &report.issues {
        output.push_str(&format!("  {} {}\n", "issue:".yellow(), issue));
    }

    output
}

/// @ai:intent Format batch results as a string
/// @ai:effects pure
pub fn format_batch_result(result: &BatchResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(result).unwrap_or_default(),
        OutputFormat::JsonPretty => serde_json::to_string_pretty(result).unwrap_or_default(),
        OutputFormat::Text => format_batch_result_text(result),
    }
}

/// @ai:intent Format batch results as human-readable text
/// @ai:effects pure
fn format_batch_result_text(result: &BatchResult) -> String {
    let mut output = String::new();

    for entry in &result.entries {
        output.push_str(&format!(
            "{} {}\n",
            entry.student.bold(),
            entry.path.display().to_string().dimmed()
        ));
        output.push_str(&format_generation_text(&entry.comments, true));
    }

    for failure in &result.failures {
        output.push_str(&format!(
            "{} {} - {}\n",
            "ERROR".red().bold(),
            failure.path.display().to_string().dimmed(),
            failure.message
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "Processed {} files, {} comments, mean score {:.1}\n",
        result.files_processed,
        result.comment_count(),
        result.mean_score()
    ));

    if result.failures.is_empty() {
        output.push_str(&format!("{} All records generated\n", "OK".green().bold()));
    } else {
        output.push_str(&format!(
            "{} records failed\n",
            result.failures.len().to_string().red().bold()
        ));
    }

    output
}

/// @ai:intent Render the plain-text report document a teacher downloads
/// @ai:post missing fields read "N/A"
/// @ai:effects pure
pub fn format_export_report(attributes: &StudentAttributes, comment: &str, date: &str) -> String {
    let name = if attributes.has_name() {
        attributes.name.trim()
    } else {
        "N/A"
    };

    format!(
        "KINDERGARTEN REPORT\n\
         \n\
         Student Name: {}\n\
         Gender: {}\n\
         Overall Rating: {}/10\n\
         \n\
         Strengths: {}\n\
         Areas for Improvement: {}\n\
         \n\
         TEACHER COMMENT:\n\
         {}\n\
         \n\
         Generated on: {}",
        name,
        attributes.gender,
        attributes.rating,
        or_na(&attributes.strengths),
        or_na(&attributes.weaknesses),
        comment.trim(),
        date
    )
}

/// @ai:intent Default file name for an exported report
/// @ai:example (name "Mia") -> "Mia_Report.txt"
/// @ai:example (no name) -> "Student_Report.txt"
/// @ai:effects pure
pub fn export_file_name(attributes: &StudentAttributes) -> String {
    let stem: String = if attributes.has_name() {
        attributes
            .name
            .trim()
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
            .collect()
    } else {
        "Student".to_string()
    };
    format!("{}_Report.txt", stem)
}

fn or_na(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        "N/A"
    } else {
        trimmed
    }
}
