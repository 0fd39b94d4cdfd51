//! Catalog search with synthetic augmentation for sparse results

use crate::advisor::catalog::{CareerQuestion, Category};
use crate::advisor::engine::AnswerTemplateEngine;
use std::collections::HashSet;

/// Below this many catalog hits a synthetic answer is prepended.
pub const DEFAULT_SPARSE_THRESHOLD: usize = 3;

/// Forces augmentation regardless of the number of hits.
const TOPIC_MARKER: &str = "topic:";

/// Substring search over a question catalog.
#[derive(Debug, Clone, Copy)]
pub struct QuestionMatcher {
    engine: AnswerTemplateEngine,
    sparse_threshold: usize,
}

impl Default for QuestionMatcher {
    fn default() -> Self {
        Self::new(AnswerTemplateEngine::default())
    }
}

impl QuestionMatcher {
    pub fn new(engine: AnswerTemplateEngine) -> Self {
        Self {
            engine,
            sparse_threshold: DEFAULT_SPARSE_THRESHOLD,
        }
    }

    pub fn with_sparse_threshold(mut self, threshold: usize) -> Self {
        self.sparse_threshold = threshold;
        self
    }

    /// Catalog entries containing the query, in catalog order.
    pub fn catalog_matches(&self, query: &str, catalog: &[CareerQuestion]) -> Vec<CareerQuestion> {
        let lower = query.to_lowercase();
        catalog
            .iter()
            .filter(|question| question.matches(&lower))
            .cloned()
            .collect()
    }

    /// Search the catalog.
    ///
    /// A blank query returns the whole catalog. No hits yield exactly one
    /// synthetic answer; too few hits, or a query carrying `topic:`, get a
    /// synthetic answer in front of the hits.
    pub fn search(&self, query: &str, catalog: &[CareerQuestion]) -> Vec<CareerQuestion> {
        if query.trim().is_empty() {
            return catalog.to_vec();
        }

        let mut results = self.catalog_matches(query, catalog);
        log::debug!("Catalog search for {:?} matched {} entries", query, results.len());

        if results.is_empty() {
            return vec![self.engine.answer(query)];
        }

        let forced = query.to_lowercase().contains(TOPIC_MARKER);
        if results.len() < self.sparse_threshold || forced {
            results.insert(0, self.engine.answer(query));
        }

        results
    }
}

/// Search with the default engine and threshold.
pub fn search(query: &str, catalog: &[CareerQuestion]) -> Vec<CareerQuestion> {
    QuestionMatcher::default().search(query, catalog)
}

/// Catalog entries in one category, in catalog order.
pub fn filter_by_topic(category: Category, catalog: &[CareerQuestion]) -> Vec<CareerQuestion> {
    catalog
        .iter()
        .filter(|question| question.category == category)
        .cloned()
        .collect()
}

/// Entries whose category is in the set. An empty set keeps everything.
pub fn filter_by_categories(
    categories: &HashSet<Category>,
    questions: &[CareerQuestion],
) -> Vec<CareerQuestion> {
    if categories.is_empty() {
        return questions.to_vec();
    }
    questions
        .iter()
        .filter(|question| categories.contains(&question.category))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::catalog::sample_catalog;
    use crate::advisor::engine::Strategy;

    #[test]
    fn test_blank_query_returns_catalog() {
        let catalog = sample_catalog();
        assert_eq!(search("", &catalog), catalog);
        assert_eq!(search("   ", &catalog), catalog);
    }

    #[test]
    fn test_sparse_hits_get_synthetic_answer_first() {
        let catalog = sample_catalog();
        let results = search("How do I start a career in cybersecurity?", &catalog);
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ai_generated);
        assert_eq!(results[1].id, 1);
        assert!(!results[1].is_ai_generated);
    }

    #[test]
    fn test_many_hits_are_returned_as_is() {
        let catalog = sample_catalog();
        let results = search("tech", &catalog);
        assert!(results.len() >= DEFAULT_SPARSE_THRESHOLD);
        assert!(results.iter().all(|q| !q.is_ai_generated));
        // catalog order is kept
        let positions: Vec<usize> = results
            .iter()
            .map(|r| catalog.iter().position(|c| c.id == r.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_topic_marker_forces_augmentation() {
        let catalog = vec![
            CareerQuestion::generated("topic: tech one", "a".into(), Category::Tech),
            CareerQuestion::generated("topic: tech two", "b".into(), Category::Tech),
            CareerQuestion::generated("topic: tech three", "c".into(), Category::Tech),
        ];
        let results = search("topic: tech", &catalog);
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].question, "topic: tech");
    }

    #[test]
    fn test_no_hits_yield_single_synthetic_answer() {
        let catalog = sample_catalog();
        let results = search("asdkjhasdkjh nonsense query", &catalog);
        assert_eq!(results.len(), 1);
        assert!(results[0].is_ai_generated);
        assert_eq!(results[0].category, Category::Business);
    }

    #[test]
    fn test_threshold_and_strategy_are_configurable() {
        let catalog = sample_catalog();
        let matcher = QuestionMatcher::new(AnswerTemplateEngine::new(Strategy::DemoKeywordTable))
            .with_sparse_threshold(1);
        let results = matcher.search("How do I start a career in cybersecurity?", &catalog);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);

        let results = matcher.search("asdkjhasdkjh", &catalog);
        assert!(results[0].answer.starts_with("Thank you for your career question!"));
    }

    #[test]
    fn test_filters() {
        let catalog = sample_catalog();
        let arts = filter_by_topic(Category::Arts, &catalog);
        assert!(!arts.is_empty());
        assert!(arts.iter().all(|q| q.category == Category::Arts));

        assert_eq!(filter_by_categories(&HashSet::new(), &catalog), catalog);
        let set: HashSet<Category> = [Category::Tech, Category::Healthcare].into_iter().collect();
        let filtered = filter_by_categories(&set, &catalog);
        assert!(filtered
            .iter()
            .all(|q| q.category == Category::Tech || q.category == Category::Healthcare));
    }
}
