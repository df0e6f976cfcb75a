use rand::RngCore;

use crate::analysis::keywords::extract_keywords;
use crate::analysis::scoring::CandidateScorer;
use crate::models::{Candidate, RankedCandidate};

/// Scores every candidate against the job description and returns them best first.
///
/// Keywords are extracted once. The sort is stable, so equal scores keep their input order.
/// `ranking` is the 1-based position after sorting.
pub fn rank(
    candidates: Vec<Candidate>,
    job_description: &str,
    scorer: &dyn CandidateScorer,
    rng: &mut dyn RngCore,
) -> Vec<RankedCandidate> {
    let job_keywords = extract_keywords(job_description);
    rank_with_keywords(candidates, &job_keywords, scorer, rng)
}

/// Same as [`rank`] for callers that already hold the extracted keywords.
pub fn rank_with_keywords(
    candidates: Vec<Candidate>,
    job_keywords: &[String],
    scorer: &dyn CandidateScorer,
    rng: &mut dyn RngCore,
) -> Vec<RankedCandidate> {
    tracing::debug!(
        candidates = candidates.len(),
        keywords = job_keywords.len(),
        scorer = scorer.name(),
        "Ranking candidates"
    );

    let mut ranked: Vec<RankedCandidate> = candidates
        .into_iter()
        .map(|candidate| {
            let result = scorer.score(&candidate, job_keywords, rng);
            RankedCandidate {
                candidate,
                score: result.score,
                matched_skills: result.matched_skills,
                ranking: 0,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    for (position, entry) in ranked.iter_mut().enumerate() {
        entry.ranking = position + 1;
    }

    ranked
}
