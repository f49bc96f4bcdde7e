//! Keyword extraction — turns raw résumé or job-posting text into a normalized keyword set.
//!
//! Pipeline: lower-case → strip non-word characters → split on whitespace →
//! drop tokens of 3 characters or fewer → drop stopwords → deduplicate.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Tokens must be strictly longer than this (in characters) to count as keywords.
pub const MIN_KEYWORD_CHARS: usize = 3;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// Words longer than three characters that carry no signal in résumés or postings.
const STOPWORDS: &[&str] = &[
    // general English
    "about", "above", "after", "again", "against", "also", "because", "been", "before", "being",
    "below", "between", "both", "could", "does", "doing", "down", "during", "each", "from",
    "further", "have", "having", "here", "into", "just", "more", "most", "once", "only", "other",
    "ought", "over", "same", "should", "some", "such", "than", "that", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "under", "until",
    "very", "were", "what", "when", "where", "which", "while", "whom", "will", "with", "within",
    "would", "your", "yours", "yourself", "ourselves", "itself", "himself", "herself",
    // job-posting filler
    "ability", "candidate", "ideal", "including", "looking", "must", "plus", "preferred",
    "required", "requirements", "responsibilities", "role", "years",
];

static STOPWORD_SET: Lazy<BTreeSet<&'static str>> =
    Lazy::new(|| STOPWORDS.iter().copied().collect());

pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}

/// A deduplicated, normalized set of keywords. Iterates in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

impl FromIterator<String> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

/// Lower-cases, strips non-word characters and splits on whitespace.
/// No length or stopword filtering.
pub fn normalized_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_WORD
        .replace_all(&lowered, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Extracts the keyword set of `text`. Empty text yields an empty set.
pub fn extract_keywords(text: &str) -> KeywordSet {
    normalized_tokens(text)
        .into_iter()
        .filter(|t| t.chars().count() > MIN_KEYWORD_CHARS)
        .filter(|t| !is_stopword(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME_SNIPPET: &str = r#"
        Senior Developer, ABC Tech
        Developed scalable web applications using React, Node.js, and Python.
        Implemented CI/CD pipelines. Skills: JavaScript, TypeScript, Git, SQL.
    "#;

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   \n\t ").is_empty());
    }

    #[test]
    fn test_tokens_are_lowercase_and_punctuation_free() {
        let set = extract_keywords(RESUME_SNIPPET);
        for token in set.iter() {
            assert_eq!(token, token.to_lowercase());
            assert!(token.chars().all(|c| c.is_alphanumeric() || c == '_'), "{token}");
        }
        assert!(set.contains("nodejs"));
        assert!(set.contains("cicd"));
        assert!(set.contains("javascript"));
    }

    #[test]
    fn test_short_tokens_are_dropped() {
        let set = extract_keywords("Git SQL AWS rust React");
        assert!(!set.contains("git"));
        assert!(!set.contains("sql"));
        assert!(!set.contains("aws"));
        assert!(set.contains("rust"));
        assert!(set.contains("react"));
    }

    #[test]
    fn test_stopwords_are_dropped() {
        let set = extract_keywords("We would like someone with experience through their career");
        assert!(!set.contains("would"));
        assert!(!set.contains("with"));
        assert!(!set.contains("through"));
        assert!(!set.contains("their"));
        assert!(set.contains("someone"));
        assert!(set.contains("experience"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = extract_keywords("Python python PYTHON, python!");
        assert_eq!(set.len(), 1);
        assert!(set.contains("python"));
    }

    #[test]
    fn test_every_token_satisfies_invariants() {
        let text = "The ideal candidate has 5+ years of Kubernetes, Docker & AWS; \
                    strong communication, résumé-writing and C++ skills.";
        let set = extract_keywords(text);
        for token in set.iter() {
            assert!(token.chars().count() > MIN_KEYWORD_CHARS);
            assert!(!is_stopword(token));
            assert_eq!(token, token.to_lowercase());
        }
        assert!(set.contains("résuméwriting"));
    }

    #[test]
    fn test_normalized_tokens_keeps_short_words() {
        let tokens = normalized_tokens("B.S. in Computer Science");
        assert_eq!(tokens, vec!["bs", "in", "computer", "science"]);
    }
}
