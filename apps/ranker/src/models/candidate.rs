use serde::{Deserialize, Serialize};

/// A synthesized candidate record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// 1-based, unique within a run, assigned in processing order.
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub company: String,
    pub years_experience: u32,
    /// No duplicate entries.
    pub skills: Vec<String>,
    pub education: String,
    pub location: String,
    pub file_name: String,
    pub summary: String,
}

/// A candidate after scoring. Only the ranker creates these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub score: u32,
    pub matched_skills: Vec<String>,
    pub ranking: usize,
}

/// Aggregate numbers shown above a ranked list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingSummary {
    pub total_candidates: usize,
    pub average_score: f64,
    pub top_score: u32,
    /// Candidates scoring at least `STRONG_MATCH_THRESHOLD`.
    pub strong_matches: usize,
}

pub const STRONG_MATCH_THRESHOLD: u32 = 80;

impl RankingSummary {
    pub fn from_ranked(ranked: &[RankedCandidate]) -> Self {
        let total_candidates = ranked.len();
        let average_score = if total_candidates == 0 {
            0.0
        } else {
            let sum: u64 = ranked.iter().map(|c| c.score as u64).sum();
            ((sum as f64 / total_candidates as f64) * 10.0).round() / 10.0
        };

        Self {
            total_candidates,
            average_score,
            top_score: ranked.iter().map(|c| c.score).max().unwrap_or(0),
            strong_matches: ranked
                .iter()
                .filter(|c| c.score >= STRONG_MATCH_THRESHOLD)
                .count(),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_candidate(id: u32) -> Candidate {
    Candidate {
        id,
        name: "Alex Johnson".to_string(),
        email: "alex.johnson@email.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        experience: "Software Engineer".to_string(),
        company: "Oracle".to_string(),
        years_experience: 6,
        skills: vec!["Python".to_string(), "SQL".to_string()],
        education: "Coding Bootcamp".to_string(),
        location: "Remote".to_string(),
        file_name: "alex.pdf".to_string(),
        summary: "Experienced Software Engineer with 6 years of experience.".to_string(),
    }
}
