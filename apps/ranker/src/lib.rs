//! # Ranker
//!
//! Mock candidate screening: paste a job description, hand over resume file descriptors,
//! get back a ranked candidate list.
//!
//! Candidate records are synthesized, never parsed from the files. Scoring is a keyword
//! overlap heuristic with an optional random term.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ranker::{AnalysisSession, UploadedFile};
//!
//! let mut session = AnalysisSession::seeded(42);
//! session.add_files(vec![UploadedFile::new("resumes_batch.pdf", 250_000, "application/pdf")]);
//! session.set_job_description("Senior Python engineer, remote");
//!
//! let report = session.analyze(|stage| println!("{}", stage.label()))?;
//! for entry in &report.ranked {
//!     println!("#{} {} ({})", entry.ranking, entry.candidate.name, entry.score);
//! }
//! # Ok::<(), ranker::AppError>(())
//! ```

pub mod analysis;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod session;

pub use analysis::pipeline::{AnalysisReport, AnalysisStage};
pub use analysis::scoring::{CandidateScorer, KeywordMatchScorer, MatchScore};
pub use config::Config;
pub use errors::{AppError, Result};
pub use models::{Candidate, RankedCandidate, RankingSummary, UploadedFile};
pub use session::AnalysisSession;
