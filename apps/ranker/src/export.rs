//! CSV export of a ranked candidate list.

use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};

use crate::errors::Result;
use crate::models::RankedCandidate;

pub const CSV_HEADERS: [&str; 11] = [
    "Rank",
    "Name",
    "Email",
    "Phone",
    "Experience",
    "Company",
    "Years Exp",
    "Location",
    "Score",
    "Matched Skills",
    "Summary",
];

/// Writes the header and one row per candidate. Every field is double-quoted,
/// matched skills are joined with `; `, and commas in the summary become `;`.
pub fn write_csv<W: Write>(writer: W, ranked: &[RankedCandidate]) -> Result<()> {
    let mut out = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    out.write_record(CSV_HEADERS)?;
    for entry in ranked {
        out.write_record(row(entry))?;
    }
    out.flush()?;
    Ok(())
}

/// Writes the CSV to `path`, creating or truncating it.
pub fn export_csv(path: &Path, ranked: &[RankedCandidate]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(file, ranked)?;
    tracing::info!(path = %path.display(), rows = ranked.len(), "Exported rankings");
    Ok(())
}

/// `candidate_rankings_YYYY-MM-DD.csv`
pub fn default_export_file_name(date: NaiveDate) -> String {
    format!("candidate_rankings_{}.csv", date.format("%Y-%m-%d"))
}

fn row(entry: &RankedCandidate) -> [String; 11] {
    let c = &entry.candidate;
    [
        entry.ranking.to_string(),
        c.name.clone(),
        c.email.clone(),
        c.phone.clone(),
        c.experience.clone(),
        c.company.clone(),
        c.years_experience.to_string(),
        c.location.clone(),
        entry.score.to_string(),
        entry.matched_skills.join("; "),
        c.summary.replace(',', ";"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::sample_candidate;

    fn ranked() -> RankedCandidate {
        let mut candidate = sample_candidate(1);
        candidate.summary = "Skilled in Python, SQL, and Docker.".to_string();
        RankedCandidate {
            candidate,
            score: 87,
            matched_skills: vec!["Python".to_string(), "SQL".to_string()],
            ranking: 1,
        }
    }

    fn render(rows: &[RankedCandidate]) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, rows).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_line() {
        let out = render(&[]);
        assert_eq!(
            out.trim_end(),
            "\"Rank\",\"Name\",\"Email\",\"Phone\",\"Experience\",\"Company\",\
             \"Years Exp\",\"Location\",\"Score\",\"Matched Skills\",\"Summary\""
        );
    }

    #[test]
    fn test_summary_commas_become_semicolons() {
        let out = render(&[ranked()]);
        let line = out.lines().nth(1).unwrap();
        assert!(line.ends_with("\"Skilled in Python; SQL; and Docker.\""));
        assert!(line.contains("\"Python; SQL\""));
        assert!(line.starts_with("\"1\",\"Alex Johnson\""));
        assert!(line.contains(",\"87\","));
    }

    #[test]
    fn test_every_field_quoted() {
        let out = render(&[ranked()]);
        let line = out.lines().nth(1).unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(line.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.len(), CSV_HEADERS.len());
        assert_eq!(line.matches('"').count(), CSV_HEADERS.len() * 2);
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        export_csv(&path, &[ranked()]).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_export_to_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.csv");
        let err = export_csv(&path, &[ranked()]).unwrap_err();
        assert!(matches!(err, crate::errors::AppError::Io(_)));
        assert_eq!(err.code(), "IO_ERROR");
        assert_eq!(err.user_message(), "A file system error occurred");
    }

    #[test]
    fn test_default_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            default_export_file_name(date),
            "candidate_rankings_2024-03-07.csv"
        );
    }
}
