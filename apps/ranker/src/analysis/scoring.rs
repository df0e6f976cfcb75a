//! Match scoring: pluggable, trait-based scorer that rates a candidate against job keywords.
//!
//! Default: `KeywordMatchScorer` (additive keyword heuristics plus an optional random term).
//!
//! `AnalysisSession` holds an `Arc<dyn CandidateScorer>` so the backend can be swapped
//! without touching the pipeline.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::analysis::vocabulary::{
    EDUCATION_TERMS, LOCATION_TERMS, SENIORITY_TERMS, TOP_COMPANIES,
};
use crate::models::Candidate;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

pub const MAX_SCORE: u32 = 100;

const POINTS_PER_SKILL: u32 = 8;
const POINTS_SENIOR: u32 = 10;
const POINTS_MID: u32 = 6;
const POINTS_JUNIOR: u32 = 3;
const POINTS_EDUCATION: u32 = 6;
const POINTS_TOP_COMPANY: u32 = 5;
const POINTS_LOCATION: u32 = 3;
/// Exclusive upper bound of the random term.
const JITTER_CEILING: u32 = 5;

/// Points contributed by each scoring term, before clamping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skills: u32,
    pub experience: u32,
    pub education: u32,
    pub company: u32,
    pub location: u32,
    pub jitter: u32,
}

impl MatchBreakdown {
    /// Sum of every term except the random one.
    pub fn deterministic_total(&self) -> u32 {
        self.skills + self.experience + self.education + self.company + self.location
    }

    pub fn total(&self) -> u32 {
        self.deterministic_total() + self.jitter
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    /// 0 – 100
    pub score: u32,
    /// Candidate skills overlapping a job keyword, in the candidate's skill order.
    pub matched_skills: Vec<String>,
    pub breakdown: MatchBreakdown,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching the ranker or session.
pub trait CandidateScorer: Send + Sync {
    fn score(
        &self,
        candidate: &Candidate,
        job_keywords: &[String],
        rng: &mut dyn RngCore,
    ) -> MatchScore;

    /// Backend label for logging.
    fn name(&self) -> &str;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordMatchScorer (default)
// ────────────────────────────────────────────────────────────────────────────

/// Additive keyword scorer.
///
/// Terms:
/// 1. skills: 8 per skill that substring-matches a keyword in either direction (uncapped)
/// 2. experience: 10 if a seniority term appears and years ≥ 5, else 6 if years ≥ 3, else 3
/// 3. education: 6 if education or keywords mention a degree term
/// 4. company: 5 for a top company
/// 5. location: 3 if location or keywords mention a preferred location
/// 6. jitter: uniform integer in [0, 5) when enabled
///
/// The total is clamped to 100.
#[derive(Debug, Clone)]
pub struct KeywordMatchScorer {
    pub jitter: bool,
}

impl Default for KeywordMatchScorer {
    fn default() -> Self {
        Self { jitter: true }
    }
}

impl KeywordMatchScorer {
    pub fn new(jitter: bool) -> Self {
        Self { jitter }
    }
}

impl CandidateScorer for KeywordMatchScorer {
    fn score(
        &self,
        candidate: &Candidate,
        job_keywords: &[String],
        rng: &mut dyn RngCore,
    ) -> MatchScore {
        let jitter = if self.jitter {
            rng.gen_range(0..JITTER_CEILING)
        } else {
            0
        };
        compute_match(candidate, job_keywords, jitter)
    }

    fn name(&self) -> &str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core keyword match algorithm
// ────────────────────────────────────────────────────────────────────────────

fn compute_match(candidate: &Candidate, job_keywords: &[String], jitter: u32) -> MatchScore {
    let keywords: Vec<String> = job_keywords
        .iter()
        .filter(|k| !k.trim().is_empty())
        .map(|k| k.to_lowercase())
        .collect();

    let matched_skills: Vec<String> = candidate
        .skills
        .iter()
        .filter(|skill| skill_matches(skill, &keywords))
        .cloned()
        .collect();

    let breakdown = MatchBreakdown {
        skills: matched_skills.len() as u32 * POINTS_PER_SKILL,
        experience: experience_points(candidate, &keywords),
        education: if mentions_any(&candidate.education, &keywords, EDUCATION_TERMS) {
            POINTS_EDUCATION
        } else {
            0
        },
        company: if TOP_COMPANIES.contains(&candidate.company.to_lowercase().as_str()) {
            POINTS_TOP_COMPANY
        } else {
            0
        },
        location: if mentions_location(&candidate.location, &keywords) {
            POINTS_LOCATION
        } else {
            0
        },
        jitter,
    };

    MatchScore {
        score: breakdown.total().min(MAX_SCORE),
        matched_skills,
        breakdown,
    }
}

fn skill_matches(skill: &str, keywords: &[String]) -> bool {
    let skill = skill.to_lowercase();
    keywords
        .iter()
        .any(|k| skill.contains(k.as_str()) || k.contains(skill.as_str()))
}

fn experience_points(candidate: &Candidate, keywords: &[String]) -> u32 {
    let senior_role = mentions_any(&candidate.experience, keywords, SENIORITY_TERMS);
    if senior_role && candidate.years_experience >= 5 {
        POINTS_SENIOR
    } else if candidate.years_experience >= 3 {
        POINTS_MID
    } else {
        POINTS_JUNIOR
    }
}

/// True when `field` or any keyword contains one of `terms`.
fn mentions_any(field: &str, keywords: &[String], terms: &[&str]) -> bool {
    let field = field.to_lowercase();
    terms
        .iter()
        .any(|term| field.contains(term) || keywords.iter().any(|k| k.contains(term)))
}

/// Single-word locations match like `mentions_any`. Multi-word locations only match a run
/// of adjacent keywords equal to the location's words, e.g. `["san", "francisco"]`.
fn mentions_location(location: &str, keywords: &[String]) -> bool {
    let location = location.to_lowercase();
    LOCATION_TERMS.iter().any(|term| {
        if location.contains(term) {
            return true;
        }
        let words: Vec<&str> = term.split_whitespace().collect();
        if words.len() == 1 {
            keywords.iter().any(|k| k.contains(term))
        } else {
            keywords
                .windows(words.len())
                .any(|run| run.iter().zip(&words).all(|(k, w)| k == w))
        }
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
