//! Candidate synthesis: turns uploaded file descriptors into mocked candidate records.
//!
//! Files are never opened. File size and filename drive how many candidates a file expands
//! into; every other field comes from the fixed vocabularies and the injected `Rng`.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::analysis::vocabulary::{
    BULK_FILENAME_HINTS, COMPANIES, DEFAULT_EDUCATION, DEFAULT_LOCATION, EXPERIENCE_TITLES,
    NAMES, SKILLS,
};
use crate::models::{Candidate, UploadedFile};

const BULK_SIZE_THRESHOLD: u64 = 500_000;

const MIN_SKILLS: usize = 5;
const MAX_SKILLS: usize = 12;

/// True when a file looks like a bundle of resumes: a hint word in its name or more than
/// 500,000 bytes.
pub fn is_bulk(file: &UploadedFile) -> bool {
    let name = file.name.to_lowercase();
    BULK_FILENAME_HINTS.iter().any(|hint| name.contains(hint)) || file.size > BULK_SIZE_THRESHOLD
}

/// Number of candidates a bulk file is presumed to contain, by size alone.
pub fn estimate_count(file: &UploadedFile) -> usize {
    match file.size {
        s if s < 100_000 => 5,
        s if s < 500_000 => 10,
        s if s < 1_000_000 => 20,
        _ => 50,
    }
}

/// Builds one synthetic candidate.
///
/// The name is `NAMES[index % NAMES.len()]`; everything else is drawn from `rng`.
/// Skills are sampled without replacement, so the set never holds duplicates.
pub fn synthesize<R: Rng + ?Sized>(
    file_name: &str,
    index: usize,
    id: u32,
    rng: &mut R,
) -> Candidate {
    let name = NAMES[index % NAMES.len()];
    let experience = pick(EXPERIENCE_TITLES, rng);
    let company = pick(COMPANIES, rng);
    let years_experience = rng.gen_range(1..=10);

    let skill_count = rng.gen_range(MIN_SKILLS..=MAX_SKILLS).min(SKILLS.len());
    let skills: Vec<String> = SKILLS
        .choose_multiple(rng, skill_count)
        .map(|s| s.to_string())
        .collect();

    let summary = build_summary(experience, years_experience, &skills, company);

    Candidate {
        id,
        name: name.to_string(),
        email: email_for(name),
        phone: random_phone(rng),
        experience: experience.to_string(),
        company: company.to_string(),
        years_experience,
        skills,
        education: DEFAULT_EDUCATION.to_string(),
        location: DEFAULT_LOCATION.to_string(),
        file_name: file_name.to_string(),
        summary,
    }
}

/// Expands one uploaded file into candidates, assigning ids from `next_id` onward.
///
/// Bulk files yield `estimate_count` candidates named `Resume_{n}_from_{original}`;
/// any other file yields exactly one candidate under its own name. `next_id` is left
/// pointing past the last id handed out.
pub fn expand_file<R: Rng + ?Sized>(
    file: &UploadedFile,
    next_id: &mut u32,
    rng: &mut R,
) -> Vec<Candidate> {
    if is_bulk(file) {
        let count = estimate_count(file);
        tracing::debug!(file = %file.name, count, "Expanding bulk file");
        (1..=count)
            .map(|n| {
                let file_name = format!("Resume_{n}_from_{}", file.name);
                next_candidate(&file_name, next_id, rng)
            })
            .collect()
    } else {
        vec![next_candidate(&file.name, next_id, rng)]
    }
}

/// Expands every file in order. Ids start at 1 and run across the whole batch.
pub fn expand_files<R: Rng + ?Sized>(files: &[UploadedFile], rng: &mut R) -> Vec<Candidate> {
    let mut next_id = 1;
    files
        .iter()
        .flat_map(|file| expand_file(file, &mut next_id, rng))
        .collect()
}

fn next_candidate<R: Rng + ?Sized>(file_name: &str, next_id: &mut u32, rng: &mut R) -> Candidate {
    let id = *next_id;
    *next_id += 1;
    synthesize(file_name, (id - 1) as usize, id, rng)
}

fn pick<R: Rng + ?Sized>(items: &[&'static str], rng: &mut R) -> &'static str {
    items[rng.gen_range(0..items.len())]
}

fn email_for(name: &str) -> String {
    let local = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(".")
        .to_lowercase();
    format!("{local}@email.com")
}

fn random_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "+1 (555) {:03}-{:04}",
        rng.gen_range(0..1000),
        rng.gen_range(0..10000)
    )
}

fn build_summary(role: &str, years: u32, skills: &[String], company: &str) -> String {
    let top_skills = skills.iter().take(3).map(String::as_str).collect::<Vec<_>>();
    format!(
        "Experienced {role} with {years} years of experience. Skilled in {}. \
         Currently working at {company} with a proven track record of delivering \
         high-quality solutions.",
        top_skills.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn file(name: &str, size: u64) -> UploadedFile {
        UploadedFile::new(name, size, crate::models::upload::MIME_PDF)
    }

    #[test]
    fn test_is_bulk_by_filename_keyword() {
        assert!(is_bulk(&file("candidates_batch1.pdf", 10_000)));
        assert!(is_bulk(&file("All_RESUMES.docx", 10_000)));
    }

    #[test]
    fn test_is_bulk_by_size() {
        assert!(is_bulk(&file("resume.pdf", 600_000)));
        assert!(!is_bulk(&file("resume.pdf", 500_000)));
    }

    #[test]
    fn test_single_small_resume_is_not_bulk() {
        assert!(!is_bulk(&file("resume.pdf", 10_000)));
    }

    #[test]
    fn test_estimate_count_bands() {
        assert_eq!(estimate_count(&file("a.pdf", 50_000)), 5);
        assert_eq!(estimate_count(&file("a.pdf", 250_000)), 10);
        assert_eq!(estimate_count(&file("a.pdf", 750_000)), 20);
        assert_eq!(estimate_count(&file("a.pdf", 2_000_000)), 50);
    }

    #[test]
    fn test_estimate_count_boundaries_are_exclusive() {
        assert_eq!(estimate_count(&file("a.pdf", 99_999)), 5);
        assert_eq!(estimate_count(&file("a.pdf", 100_000)), 10);
        assert_eq!(estimate_count(&file("a.pdf", 500_000)), 20);
        assert_eq!(estimate_count(&file("a.pdf", 1_000_000)), 50);
    }

    #[test]
    fn test_synthesize_name_is_deterministic_by_index() {
        let mut rng = StdRng::seed_from_u64(7);
        let first = synthesize("a.pdf", 0, 1, &mut rng);
        let wrapped = synthesize("a.pdf", NAMES.len(), 21, &mut rng);
        assert_eq!(first.name, NAMES[0]);
        assert_eq!(wrapped.name, NAMES[0]);
        assert_eq!(first.email, "alex.johnson@email.com");
    }

    #[test]
    fn test_synthesize_field_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for i in 0..200 {
            let c = synthesize("a.pdf", i, i as u32 + 1, &mut rng);
            assert!((1..=10).contains(&c.years_experience));
            assert!((MIN_SKILLS..=MAX_SKILLS).contains(&c.skills.len()));
            let unique: HashSet<_> = c.skills.iter().collect();
            assert_eq!(unique.len(), c.skills.len(), "duplicate skills in {:?}", c.skills);
            assert!(EXPERIENCE_TITLES.contains(&c.experience.as_str()));
            assert!(COMPANIES.contains(&c.company.as_str()));
            assert_eq!(c.education, DEFAULT_EDUCATION);
            assert_eq!(c.location, DEFAULT_LOCATION);
            assert!(c.phone.starts_with("+1 (555) "));
        }
    }

    #[test]
    fn test_summary_mentions_role_years_skills_company() {
        let mut rng = StdRng::seed_from_u64(3);
        let c = synthesize("a.pdf", 2, 3, &mut rng);
        assert!(c.summary.contains(&c.experience));
        assert!(c.summary.contains(&format!("{} years", c.years_experience)));
        assert!(c.summary.contains(&c.company));
        for skill in c.skills.iter().take(3) {
            assert!(c.summary.contains(skill.as_str()));
        }
    }

    #[test]
    fn test_same_seed_same_candidate() {
        let a = synthesize("a.pdf", 4, 5, &mut StdRng::seed_from_u64(99));
        let b = synthesize("a.pdf", 4, 5, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_expand_bulk_file_names_and_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut next_id = 1;
        let out = expand_file(&file("batch.pdf", 250_000), &mut next_id, &mut rng);
        assert_eq!(out.len(), 10);
        assert_eq!(out[0].file_name, "Resume_1_from_batch.pdf");
        assert_eq!(out[9].file_name, "Resume_10_from_batch.pdf");
        assert_eq!(next_id, 11);
    }

    #[test]
    fn test_expand_files_ids_continue_across_files() {
        let mut rng = StdRng::seed_from_u64(1);
        let files = vec![
            file("jane.pdf", 20_000),
            file("bulk_upload.pdf", 20_000),
            file("john.docx", 30_000),
        ];
        let out = expand_files(&files, &mut rng);
        assert_eq!(out.len(), 1 + 5 + 1);
        let ids: Vec<u32> = out.iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=7).collect::<Vec<_>>());
        assert_eq!(out[0].file_name, "jane.pdf");
        assert_eq!(out[1].file_name, "Resume_1_from_bulk_upload.pdf");
        assert_eq!(out[6].file_name, "john.docx");
        assert_eq!(out[6].name, NAMES[6]);
    }
}
