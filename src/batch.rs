//! @ai:module:intent Generate comments for every student record in a directory
//! @ai:module:layer application
//! @ai:module:public_api generate_file, generate_directory, BatchResult, BatchEntry, BatchFailure
//! @ai:module:depends_on engine, student, error
//! @ai:module:stateless true

use crate::engine::{CommentGenerator, GeneratedComment};
use crate::error::{Error, Result};
use crate::student::StudentRecord;
use rand::Rng;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// @ai:intent Comments generated for one record file
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub student: String,
    pub comments: Vec<GeneratedComment>,
}

/// @ai:intent A record file that could not be read or parsed
#[derive(Debug, Clone, Serialize)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub message: String,
}

/// @ai:intent Result of generating a whole directory
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchResult {
    pub files_processed: usize,
    pub entries: Vec<BatchEntry>,
    pub failures: Vec<BatchFailure>,
}

impl BatchResult {
    /// @ai:intent Total number of comments generated
    pub fn comment_count(&self) -> usize {
        self.entries.iter().map(|e| e.comments.len()).sum()
    }

    /// @ai:intent Mean quality score over all comments, 0 when there are none
    pub fn mean_score(&self) -> f64 {
        let count = self.comment_count();
        if count == 0 {
            return 0.0;
        }
        let total: u64 = self
            .entries
            .iter()
            .flat_map(|e| &e.comments)
            .map(|c| u64::from(c.quality.score))
            .sum();
        total as f64 / count as f64
    }

    /// @ai:intent Check that nothing failed and every comment reached `pass_score`
    pub fn passed(&self, pass_score: u8) -> bool {
        self.failures.is_empty()
            && self
                .entries
                .iter()
                .flat_map(|e| &e.comments)
                .all(|c| c.quality.passed(pass_score))
    }
}

/// @ai:intent Generate `count` comments for one record file
/// @ai:effects fs:read, random
pub fn generate_file<R: Rng + ?Sized>(
    path: &Path,
    generator: &CommentGenerator,
    count: u32,
    rng: &mut R,
) -> Result<BatchEntry> {
    let record = StudentRecord::load(path)?;
    let attributes = record.attributes();
    let comments = generator.generate_variations_with_rng(
        &attributes,
        &record.topics(),
        &record.subjects(),
        count,
        rng,
    );

    Ok(BatchEntry {
        path: path.to_path_buf(),
        student: attributes
            .display_name(generator.config().defaults.fallback_name())
            .to_string(),
        comments,
    })
}

/// @ai:intent Generate comments for all `.json` records under a directory
/// @ai:post unreadable records and walk errors are listed in failures, not returned as errors
/// @ai:effects fs:read, random, log
pub fn generate_directory<R: Rng + ?Sized>(
    path: &Path,
    generator: &CommentGenerator,
    count: u32,
    rng: &mut R,
) -> Result<BatchResult> {
    if !path.is_dir() {
        return Err(Error::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        });
    }

    let mut result = BatchResult::default();

    for entry in WalkDir::new(path).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let failed_path = e.path().unwrap_or(path).to_path_buf();
                tracing::warn!("Cannot read {}: {}", failed_path.display(), e);
                result.failures.push(BatchFailure {
                    path: failed_path,
                    message: e.to_string(),
                });
                continue;
            }
        };

        let file_path = entry.path();
        if !entry.file_type().is_file() || !is_record_file(file_path) {
            continue;
        }

        result.files_processed += 1;
        match generate_file(file_path, generator, count, rng) {
            Ok(batch_entry) => {
                tracing::info!(
                    "Generated {} comments for {} ({})",
                    batch_entry.comments.len(),
                    batch_entry.student,
                    file_path.display()
                );
                result.entries.push(batch_entry);
            }
            Err(e) => {
                tracing::warn!("Skipping invalid student record {}: {}", file_path.display(), e);
                result.failures.push(BatchFailure {
                    path: file_path.to_path_buf(),
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(result)
}

fn is_record_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
