//! Analysis pipeline: validate inputs → synthesize candidates → rank → summarize.
//!
//! Progress is reported synchronously through an observer callback; no stage waits or sleeps.

use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::analysis::keywords::extract_keywords;
use crate::analysis::ranking::rank_with_keywords;
use crate::analysis::scoring::CandidateScorer;
use crate::analysis::synthesizer::expand_files;
use crate::errors::{AppError, Result};
use crate::models::{RankedCandidate, RankingSummary, UploadedFile};

/// Progress stages, in the order the pipeline passes through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    ExtractingText,
    AnalyzingSkills,
    MatchingRequirements,
    CalculatingScores,
    RankingCandidates,
}

impl AnalysisStage {
    pub const ALL: [AnalysisStage; 5] = [
        AnalysisStage::ExtractingText,
        AnalysisStage::AnalyzingSkills,
        AnalysisStage::MatchingRequirements,
        AnalysisStage::CalculatingScores,
        AnalysisStage::RankingCandidates,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisStage::ExtractingText => "Extracting text from resumes...",
            AnalysisStage::AnalyzingSkills => "Analyzing skills and experience...",
            AnalysisStage::MatchingRequirements => "Matching with job requirements...",
            AnalysisStage::CalculatingScores => "Calculating compatibility scores...",
            AnalysisStage::RankingCandidates => "Ranking candidates...",
        }
    }

    pub fn percent(&self) -> u8 {
        match self {
            AnalysisStage::ExtractingText => 20,
            AnalysisStage::AnalyzingSkills => 40,
            AnalysisStage::MatchingRequirements => 60,
            AnalysisStage::CalculatingScores => 80,
            AnalysisStage::RankingCandidates => 100,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    pub files: &'a [UploadedFile],
    pub job_description: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub ranked: Vec<RankedCandidate>,
    pub summary: RankingSummary,
    pub job_keywords: Vec<String>,
    pub scorer_backend: String,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs a full analysis. Refuses with `MissingInput` before doing any work when there are
/// no files or the job description is blank.
pub fn run_analysis(
    request: AnalysisRequest<'_>,
    scorer: &dyn CandidateScorer,
    rng: &mut dyn RngCore,
    mut on_stage: impl FnMut(AnalysisStage),
) -> Result<AnalysisReport> {
    validate_request(&request)?;

    let mut advance = |stage: AnalysisStage| {
        tracing::info!(progress = stage.percent(), "{}", stage.label());
        on_stage(stage);
    };

    advance(AnalysisStage::ExtractingText);
    let candidates = expand_files(request.files, rng);
    tracing::info!(
        files = request.files.len(),
        candidates = candidates.len(),
        "Synthesized candidates"
    );

    advance(AnalysisStage::AnalyzingSkills);
    let job_keywords = extract_keywords(request.job_description);

    advance(AnalysisStage::MatchingRequirements);
    advance(AnalysisStage::CalculatingScores);
    let ranked = rank_with_keywords(candidates, &job_keywords, scorer, rng);

    advance(AnalysisStage::RankingCandidates);
    let summary = RankingSummary::from_ranked(&ranked);
    tracing::info!(
        total = summary.total_candidates,
        top_score = summary.top_score,
        average = summary.average_score,
        "Analysis complete"
    );

    Ok(AnalysisReport {
        ranked,
        summary,
        job_keywords,
        scorer_backend: scorer.name().to_string(),
        analyzed_at: Utc::now(),
    })
}

fn validate_request(request: &AnalysisRequest<'_>) -> Result<()> {
    if request.files.is_empty() {
        return Err(AppError::MissingInput(
            "Please upload at least one resume".to_string(),
        ));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::MissingInput(
            "Please enter a job description".to_string(),
        ));
    }
    Ok(())
}
