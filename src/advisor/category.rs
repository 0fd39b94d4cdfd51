//! Category detection over the ordered keyword buckets

use crate::advisor::catalog::Category;
use crate::advisor::knowledge::{KeywordBucket, KEYWORD_TABLE};
use crate::error::{Result, SkillSyncError};
use aho_corasick::AhoCorasick;
use std::sync::OnceLock;

/// One automaton per keyword bucket, kept in priority order.
pub struct CategoryDetector {
    buckets: Vec<(KeywordBucket, AhoCorasick)>,
}

impl CategoryDetector {
    pub fn new() -> Result<Self> {
        let buckets = KEYWORD_TABLE
            .iter()
            .map(|(bucket, keywords)| {
                AhoCorasick::new(keywords.iter())
                    .map(|matcher| (*bucket, matcher))
                    .map_err(|e| {
                        SkillSyncError::InvalidInput(format!(
                            "Failed to build keyword matcher for {:?}: {}",
                            bucket, e
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { buckets })
    }

    /// First bucket with any keyword inside the text, if any.
    pub fn detect_bucket(&self, text: &str) -> Option<KeywordBucket> {
        let lower = text.to_lowercase();
        self.buckets
            .iter()
            .find(|(_, matcher)| matcher.is_match(&lower))
            .map(|(bucket, _)| *bucket)
    }

    /// Category for the text. Never fails; unmatched text is Business.
    pub fn detect(&self, text: &str) -> Category {
        self.detect_bucket(text)
            .map(|bucket| bucket.category())
            .unwrap_or(Category::Business)
    }
}

impl Default for CategoryDetector {
    fn default() -> Self {
        Self::new().expect("Failed to create default category detector")
    }
}

fn shared_detector() -> &'static CategoryDetector {
    static DETECTOR: OnceLock<CategoryDetector> = OnceLock::new();
    DETECTOR.get_or_init(CategoryDetector::default)
}

/// Detect the coarse category of a free-text question.
pub fn detect_category(text: &str) -> Category {
    shared_detector().detect(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_priority() {
        // "design" appears in arts, but "engineer" is checked first in tech
        assert_eq!(detect_category("design engineer"), Category::Tech);
        assert_eq!(detect_category("graphic design"), Category::Arts);
    }

    #[test]
    fn test_education_and_general_fold_into_business() {
        let detector = CategoryDetector::new().unwrap();
        assert_eq!(detector.detect_bucket("become a teacher"), Some(KeywordBucket::Education));
        assert_eq!(detector.detect("become a teacher"), Category::Business);
        assert_eq!(detector.detect_bucket("linkedin tips"), Some(KeywordBucket::General));
        assert_eq!(detector.detect("linkedin tips"), Category::Business);
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        assert_eq!(detect_category("NURSING school"), Category::Healthcare);
        assert_eq!(detect_category("Python"), Category::Tech);
    }

    #[test]
    fn test_default_is_business() {
        assert_eq!(detect_category(""), Category::Business);
        assert_eq!(detect_category("asdkjhasdkjh nonsense query"), Category::Business);
        assert_eq!(detect_category("   "), Category::Business);
    }

    #[test]
    fn test_detection_is_deterministic() {
        let text = "How do I start a career in cybersecurity?";
        let first = detect_category(text);
        for _ in 0..10 {
            assert_eq!(detect_category(text), first);
        }
        assert_eq!(first, Category::Tech);
    }
}
