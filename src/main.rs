//! @ai:module:intent CLI entry point for generating and checking report comments
//! @ai:module:layer presentation
//! @ai:module:public_api main
//! @ai:module:depends_on engine, batch, output, quality, config

use clap::{Parser, Subcommand, ValueEnum};
use kinder_comments::{
    batch, output, quality, CommentGenerator, Gender, GeneratorConfig, OutputFormat, Rating,
    StudentAttributes, StudentRecord,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "kcomment")]
#[command(author, version, about = "Kindergarten report comment generator")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate comments for one student
    Generate {
        /// JSON student record (studentName, gender, strengths, weaknesses, overallAttributes, topics, subjects)
        record: Option<PathBuf>,

        /// Student name (overrides the record)
        #[arg(long)]
        name: Option<String>,

        /// he, she or they (overrides the record)
        #[arg(long)]
        gender: Option<String>,

        /// Comma-separated strengths (overrides the record)
        #[arg(long)]
        strengths: Option<String>,

        /// Comma-separated growth areas (overrides the record)
        #[arg(long)]
        weaknesses: Option<String>,

        /// Overall rating 1-10 (overrides the record)
        #[arg(long)]
        rating: Option<String>,

        /// Selected topic; repeat for several
        #[arg(long = "topic")]
        topics: Vec<String>,

        /// Selected subject; repeat for several
        #[arg(long = "subject")]
        subjects: Vec<String>,

        /// Number of comment variants
        #[arg(long, default_value = "2")]
        count: u32,

        /// Seed for reproducible template choice
        #[arg(long)]
        seed: Option<u64>,

        /// Show quality diagnostics under each comment
        #[arg(long, default_value = "false")]
        diagnostics: bool,

        /// Write a plain-text report with the selected comment
        #[arg(long)]
        export: Option<Option<PathBuf>>,

        /// Variant to export
        #[arg(long, default_value = "1")]
        select: u32,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },

    /// Generate comments for every JSON record in a directory
    Batch {
        /// Directory of student records
        path: PathBuf,

        /// Number of comment variants per student
        #[arg(long, default_value = "2")]
        count: u32,

        /// Seed for reproducible template choice
        #[arg(long)]
        seed: Option<u64>,

        /// Fail with exit code 1 if any comment scores below the configured pass score
        #[arg(long, default_value = "false")]
        fail_under: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },

    /// Score an existing comment against a student record
    Check {
        /// JSON student record
        record: PathBuf,

        /// Comment text
        #[arg(long, conflicts_with = "comment_file")]
        comment: Option<String>,

        /// File containing the comment text
        #[arg(long)]
        comment_file: Option<PathBuf>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match GeneratorConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        },
        None => GeneratorConfig::default(),
    };
    let generator = CommentGenerator::new(config);

    match cli.command {
        Commands::Generate {
            record,
            name,
            gender,
            strengths,
            weaknesses,
            rating,
            topics,
            subjects,
            count,
            seed,
            diagnostics,
            export,
            select,
            format,
        } => {
            let record = match record.as_deref().map(StudentRecord::load).transpose() {
                Ok(record) => record.unwrap_or_default(),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::from(2);
                }
            };

            let mut attributes = record.attributes();
            if let Some(name) = name {
                attributes.name = name;
            }
            if let Some(gender) = gender {
                attributes.gender = Gender::parse(&gender);
            }
            if let Some(strengths) = strengths {
                attributes.strengths = strengths;
            }
            if let Some(weaknesses) = weaknesses {
                attributes.weaknesses = weaknesses;
            }
            if let Some(rating) = rating {
                attributes.rating = Rating::parse(&rating);
            }
            let topics = if topics.is_empty() { record.topics() } else { topics };
            let subjects = if subjects.is_empty() { record.subjects() } else { subjects };

            let mut rng = make_rng(seed);
            let comments = generator.generate_variations_with_rng(
                &attributes,
                &topics,
                &subjects,
                count.max(1),
                &mut rng,
            );

            println!(
                "{}",
                output::format_generation(&comments, format.into(), diagnostics)
            );

            if let Some(export) = export {
                let Some(selected) = comments.iter().find(|c| c.variant.0 == select) else {
                    eprintln!("Error: no comment variant {} to export", select);
                    return ExitCode::from(2);
                };
                let path = export
                    .unwrap_or_else(|| PathBuf::from(output::export_file_name(&attributes)));
                if let Err(e) = write_export(&path, &attributes, &selected.text) {
                    eprintln!("Error: {}", e);
                    return ExitCode::from(2);
                }
                eprintln!("Exported comment {} to {}", select, path.display());
            }

            ExitCode::SUCCESS
        }

        Commands::Batch {
            path,
            count,
            seed,
            fail_under,
            format,
        } => {
            let mut rng = make_rng(seed);
            match batch::generate_directory(&path, &generator, count.max(1), &mut rng) {
                Ok(result) => {
                    println!("{}", output::format_batch_result(&result, format.into()));

                    let pass_score = generator.config().validation.pass_score;
                    if fail_under && !result.passed(pass_score) {
                        ExitCode::from(1)
                    } else {
                        ExitCode::SUCCESS
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::from(2)
                }
            }
        }

        Commands::Check {
            record,
            comment,
            comment_file,
            format,
        } => {
            let record = match StudentRecord::load(&record) {
                Ok(record) => record,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::from(2);
                }
            };

            let text = match (comment, comment_file) {
                (Some(text), _) => text,
                (None, Some(path)) => match std::fs::read_to_string(&path) {
                    Ok(text) => text,
                    Err(e) => {
                        eprintln!("Error: Failed to read file {}: {}", path.display(), e);
                        return ExitCode::from(2);
                    }
                },
                (None, None) => {
                    eprintln!("Error: check requires --comment or --comment-file");
                    return ExitCode::from(2);
                }
            };

            let report =
                quality::validate_generated_comment(&text, &record.attributes(), generator.config());
            println!("{}", output::format_quality_report(&report, format.into()));

            if report.passed(generator.config().validation.pass_score) {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }

        Commands::Config => {
            print!("{}", generator.config().to_toml_string());
            ExitCode::SUCCESS
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kinder_comments=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn write_export(
    path: &Path,
    attributes: &StudentAttributes,
    comment: &str,
) -> kinder_comments::Result<()> {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let report = output::format_export_report(attributes, comment, &date);
    std::fs::write(path, report).map_err(|e| kinder_comments::Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
