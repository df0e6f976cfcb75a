pub mod candidate;
pub mod upload;

pub use candidate::{Candidate, RankedCandidate, RankingSummary};
pub use upload::UploadedFile;
