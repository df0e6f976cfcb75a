use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

use crate::analysis::pipeline::{run_analysis, AnalysisReport, AnalysisRequest, AnalysisStage};
use crate::analysis::scoring::{CandidateScorer, KeywordMatchScorer};
use crate::config::Config;
use crate::errors::{AppError, Result};
use crate::models::{RankedCandidate, UploadedFile};

/// One user's analysis context: selected files, the job description, and the latest results.
///
/// Each session owns its random source, so independent sessions never share state.
pub struct AnalysisSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    files: Vec<UploadedFile>,
    job_description: String,
    report: Option<AnalysisReport>,
    rng: StdRng,
    /// Pluggable scorer. Default: KeywordMatchScorer.
    scorer: Arc<dyn CandidateScorer>,
}

impl AnalysisSession {
    /// Session with an entropy-seeded random source and the default scorer.
    pub fn new() -> Self {
        Self::with_parts(StdRng::from_entropy(), Arc::new(KeywordMatchScorer::default()))
    }

    /// Session whose synthesized candidates and scores are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_parts(
            StdRng::seed_from_u64(seed),
            Arc::new(KeywordMatchScorer::default()),
        )
    }

    pub fn from_config(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_parts(rng, Arc::new(KeywordMatchScorer::new(config.score_jitter)))
    }

    pub fn with_parts(rng: StdRng, scorer: Arc<dyn CandidateScorer>) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            files: Vec::new(),
            job_description: String::new(),
            report: None,
            rng,
            scorer,
        };
        tracing::debug!(session = %session.id, scorer = session.scorer.name(), "Session created");
        session
    }

    /// Adds every supported file. Unsupported files are skipped and returned as
    /// `UnsupportedFileType` warnings; they never block the rest of the batch.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = UploadedFile>) -> Vec<AppError> {
        let mut rejected = Vec::new();
        for file in files {
            match file.validate() {
                Ok(()) => {
                    tracing::debug!(session = %self.id, file = %file.name, "File added");
                    self.files.push(file);
                }
                Err(e) => {
                    tracing::warn!(session = %self.id, "{e}");
                    rejected.push(e);
                }
            }
        }
        rejected
    }

    /// Removes the first file with this name. Returns false when no such file was added.
    pub fn remove_file(&mut self, name: &str) -> bool {
        match self.files.iter().position(|f| f.name == name) {
            Some(index) => {
                self.files.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    /// Ranked candidates from the latest successful analysis.
    pub fn results(&self) -> &[RankedCandidate] {
        self.report
            .as_ref()
            .map(|r| r.ranked.as_slice())
            .unwrap_or_default()
    }

    /// Runs a fresh analysis, replacing any previous results.
    ///
    /// On failure the previous results are dropped and the session stays ready for a retry.
    pub fn analyze(&mut self, on_stage: impl FnMut(AnalysisStage)) -> Result<&AnalysisReport> {
        self.report = None;

        let request = AnalysisRequest {
            files: &self.files,
            job_description: &self.job_description,
        };
        let report = run_analysis(request, self.scorer.as_ref(), &mut self.rng, on_stage)
            .inspect_err(|e| {
                tracing::warn!(session = %self.id, code = e.code(), "Analysis failed: {e}")
            })?;

        Ok(self.report.insert(report))
    }

    /// Clears files, job description and results.
    pub fn reset(&mut self) {
        self.files.clear();
        self.job_description.clear();
        self.report = None;
        tracing::debug!(session = %self.id, "Session reset");
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}
