use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ranker::analysis::synthesizer::{estimate_count, is_bulk};
use ranker::export::{default_export_file_name, export_csv};
use ranker::models::upload::format_file_size;
use ranker::{AnalysisReport, AnalysisSession, AppError, Config, UploadedFile};

#[derive(Parser)]
#[command(name = "ranker")]
#[command(about = "Rank resumes against a job description", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze resumes against a job description
    Analyze {
        /// Resume files (PDF, DOC, DOCX)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Job description text
        #[arg(short, long, conflicts_with = "job_file")]
        job: Option<String>,

        /// Read the job description from a file
        #[arg(long)]
        job_file: Option<PathBuf>,

        /// Seed for reproducible results (overrides RANKER_SEED)
        #[arg(long)]
        seed: Option<u64>,

        /// Disable the random scoring term
        #[arg(long)]
        no_jitter: bool,

        /// Only print the top N candidates
        #[arg(short, long)]
        top: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Export rankings to CSV (defaults to candidate_rankings_<date>.csv in RANKER_EXPORT_DIR)
        #[arg(long, num_args = 0..=1)]
        export: Option<Option<PathBuf>>,
    },

    /// Show how each file would be treated without analyzing it
    Inspect {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let mut config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Ranker v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            files,
            job,
            job_file,
            seed,
            no_jitter,
            top,
            format,
            export,
        } => {
            if seed.is_some() {
                config.seed = seed;
            }
            if no_jitter {
                config.score_jitter = false;
            }

            let job_description = match (job, job_file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path).with_context(|| {
                    format!("Failed to read job description from {}", path.display())
                })?,
                (None, None) => String::new(),
            };

            let mut session = AnalysisSession::from_config(&config);
            for rejected in session.add_files(load_files(&files)) {
                eprintln!("⚠️  {}", rejected.user_message());
            }
            session.set_job_description(job_description);

            let report = session
                .analyze(|stage| {
                    if matches!(format, OutputFormat::Table) {
                        eprintln!("[{:>3}%] {}", stage.percent(), stage.label());
                    }
                })
                .map_err(notify)?;

            match format {
                OutputFormat::Table => print_table(report, top),
                OutputFormat::Json => {
                    println!("{}", report.to_json_pretty().map_err(notify)?)
                }
            }

            if let Some(target) = export {
                let path = target.unwrap_or_else(|| {
                    config
                        .export_dir
                        .join(default_export_file_name(report.analyzed_at.date_naive()))
                });
                export_csv(&path, &report.ranked).map_err(notify)?;
                eprintln!("✅ Exported results to {}", path.display());
            }
        }

        Commands::Inspect { files } => {
            for file in load_files(&files) {
                let supported = if file.is_supported() { "" } else { "  (unsupported)" };
                if is_bulk(&file) {
                    println!(
                        "{}  {}  {}  bulk: ~{} candidates{}",
                        file.name,
                        file.mime_type,
                        format_file_size(file.size),
                        estimate_count(&file),
                        supported
                    );
                } else {
                    println!(
                        "{}  {}  {}  single resume{}",
                        file.name,
                        file.mime_type,
                        format_file_size(file.size),
                        supported
                    );
                }
            }
        }
    }

    Ok(())
}

/// Shows the user-facing message for `e` and hands it on as the exit error.
fn notify(e: AppError) -> anyhow::Error {
    eprintln!("❌ {}", e.user_message());
    e.into()
}

/// Turns paths into descriptors, skipping (and reporting) any that cannot be stat'ed.
fn load_files(paths: &[PathBuf]) -> Vec<UploadedFile> {
    paths
        .iter()
        .filter_map(|path| match UploadedFile::from_path(path) {
            Ok(file) => Some(file),
            Err(e) => {
                warn!("Skipping {}: {e}", path.display());
                eprintln!("⚠️  Could not read {}", path.display());
                None
            }
        })
        .collect()
}

fn print_table(report: &AnalysisReport, top: Option<usize>) {
    let summary = &report.summary;
    println!(
        "\n📊 {} candidates analyzed · average score {:.1} · top score {} · {} strong matches",
        summary.total_candidates, summary.average_score, summary.top_score, summary.strong_matches
    );
    println!("   Job keywords: {}", report.job_keywords.join(", "));

    let limit = top.unwrap_or(report.ranked.len());
    for entry in report.ranked.iter().take(limit) {
        let c = &entry.candidate;
        println!("\n#{:<3} {}  -  {}%", entry.ranking, c.name, entry.score);
        println!(
            "     {} at {} · {} years · {}",
            c.experience, c.company, c.years_experience, c.location
        );
        println!("     {} · {}", c.email, c.phone);
        if entry.matched_skills.is_empty() {
            println!("     Matched skills: none");
        } else {
            println!("     Matched skills: {}", entry.matched_skills.join(", "));
        }
        println!("     Source: {}", c.file_name);
    }
}
