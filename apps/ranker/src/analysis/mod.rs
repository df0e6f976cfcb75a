// Candidate analysis engine.
// Implements: keyword extraction, candidate synthesis, match scoring, ranking, and the
// pipeline that strings them together. Pure functions only; randomness is always injected.

pub mod keywords;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod synthesizer;
pub mod vocabulary;
