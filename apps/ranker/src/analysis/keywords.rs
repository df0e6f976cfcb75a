//! Keyword extraction from free-form job descriptions.

use crate::analysis::vocabulary::STOP_WORDS;

/// Splits `text` into lowercase significant words.
///
/// Each whitespace-separated token is lowercased and stripped of everything except
/// alphanumerics and `_`. Tokens of two characters or fewer and stop words are dropped.
/// Order follows the input and duplicates are kept.
pub fn extract_keywords(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(normalize_token)
        .filter(|token| token.chars().count() > 2 && !is_stop_word(token))
        .collect()
}

fn normalize_token(token: &str) -> String {
    token
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   \n\t ").is_empty());
    }

    #[test]
    fn test_job_title_line() {
        let keywords = extract_keywords("Senior Python Engineer, 5+ years, remote");
        assert_eq!(keywords, vec!["senior", "python", "engineer", "years", "remote"]);
    }

    #[test]
    fn test_stop_words_dropped_case_insensitively() {
        let keywords = extract_keywords("THE Rust AND With Kafka");
        assert_eq!(keywords, vec!["rust", "kafka"]);
    }

    #[test]
    fn test_punctuation_cannot_smuggle_short_or_stop_tokens() {
        // "and," normalizes to a stop word, "(a)" and "go!" to short tokens
        let keywords = extract_keywords("and, (a) go! kubernetes.");
        assert_eq!(keywords, vec!["kubernetes"]);
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let keywords = extract_keywords("docker python docker");
        assert_eq!(keywords, vec!["docker", "python", "docker"]);
    }

    #[test]
    fn test_underscore_kept() {
        assert_eq!(extract_keywords("snake_case"), vec!["snake_case"]);
    }

    #[test]
    fn test_no_output_token_is_short_or_stop_word() {
        let text = "We are looking for a Senior Engineer who has 5+ years of \
                    experience with AWS, SQL and CI/CD. You will own the platform; \
                    it's a remote-first team in New York.";
        for token in extract_keywords(text) {
            assert!(token.chars().count() > 2, "short token {token:?}");
            assert!(!STOP_WORDS.contains(&token.as_str()), "stop word {token:?}");
            assert_eq!(token, token.to_lowercase());
        }
    }
}
