//! Advisor service: the search flow over the catalog, the template engine,
//! and the optional live chat-completion client

use crate::advisor::catalog::{find_by_id, sample_catalog, CareerQuestion, Category};
use crate::advisor::demo::generate_demo_response;
use crate::advisor::engine::{AnswerTemplateEngine, Strategy};
use crate::advisor::matcher::{filter_by_categories, filter_by_topic, QuestionMatcher};
use crate::config::Config;
use crate::error::{Result, SkillSyncError};
use crate::llm::{user_facing_message, ChatCompletionClient};
use crate::storage::{PreferencesRepository, SharedStore};
use std::collections::HashSet;
use std::time::Duration;

/// Where the answers of a search came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    Catalog,
    Template,
    Live,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub query: String,
    pub results: Vec<CareerQuestion>,
    pub source: AnswerSource,
    /// Short message explaining why a live answer was not used.
    pub notice: Option<&'static str>,
}

pub struct Advisor {
    catalog: Vec<CareerQuestion>,
    engine: AnswerTemplateEngine,
    matcher: QuestionMatcher,
    client: Option<ChatCompletionClient>,
    preferences: PreferencesRepository,
    demo_delay: Duration,
}

impl Advisor {
    /// Advisor using the API key from the environment or the config file.
    pub fn new(config: &Config, store: SharedStore) -> Result<Self> {
        Self::with_api_key(config, store, config.api_key())
    }

    /// Advisor with an explicit API key; the environment is not consulted.
    pub fn with_api_key(config: &Config, store: SharedStore, api_key: Option<String>) -> Result<Self> {
        let engine = AnswerTemplateEngine::new(config.advisor.strategy);
        let matcher = QuestionMatcher::new(engine).with_sparse_threshold(config.advisor.sparse_threshold);

        let client = if config.llm.enabled {
            Some(ChatCompletionClient::new(config.llm.clone(), api_key)?)
        } else {
            None
        };

        Ok(Self {
            catalog: sample_catalog(),
            engine,
            matcher,
            client,
            preferences: PreferencesRepository::new(store),
            demo_delay: Duration::from_millis(config.llm.demo_delay_ms),
        })
    }

    pub fn catalog(&self) -> &[CareerQuestion] {
        &self.catalog
    }

    pub fn preferences(&self) -> &PreferencesRepository {
        &self.preferences
    }

    /// True when a question without catalog hits would go to the live API.
    pub fn live_answers_available(&self) -> Result<bool> {
        let configured = self.client.as_ref().map_or(false, |c| c.is_configured());
        Ok(configured && self.preferences.settings()?.ai_responses)
    }

    /// Answer a free-text question.
    ///
    /// The trimmed query is recorded in the recent searches, while matching
    /// uses the text as typed. A blank query lists the whole catalog. Without catalog hits
    /// the live client is tried first when it is configured and enabled;
    /// any failure falls back to the template engine with a notice.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome> {
        self.preferences.record_search(query)?;

        if query.trim().is_empty() {
            return Ok(self.outcome(query, self.catalog.clone(), AnswerSource::Catalog, None));
        }

        let hits = self.matcher.catalog_matches(query, &self.catalog);
        if !hits.is_empty() {
            let results = self.matcher.search(query, &self.catalog);
            let source = if results.len() > hits.len() {
                AnswerSource::Template
            } else {
                AnswerSource::Catalog
            };
            return Ok(self.outcome(query, results, source, None));
        }

        let mut notice = None;
        if self.live_answers_available()? {
            if let Some(client) = &self.client {
                match client.career_advice(query).await {
                    Ok(advice) => {
                        let answer = CareerQuestion::generated(query, advice.answer, advice.category);
                        return Ok(self.outcome(query, vec![answer], AnswerSource::Live, None));
                    }
                    Err(e) => {
                        log::warn!("Live answer failed, using templates: {}", e);
                        notice = Some(user_facing_message(&e));
                    }
                }
            }
        }

        let answer = match self.engine.strategy() {
            Strategy::DemoKeywordTable => {
                let advice = generate_demo_response(query, self.demo_delay).await;
                CareerQuestion::generated(query, advice.answer, advice.category)
            }
            Strategy::CatalogAugmented => self.engine.answer(query),
        };
        Ok(self.outcome(query, vec![answer], AnswerSource::Template, notice))
    }

    fn outcome(
        &self,
        query: &str,
        results: Vec<CareerQuestion>,
        source: AnswerSource,
        notice: Option<&'static str>,
    ) -> SearchOutcome {
        log::debug!("Search {:?} produced {} result(s) from {:?}", query, results.len(), source);
        SearchOutcome {
            query: query.to_string(),
            results,
            source,
            notice,
        }
    }

    /// Open a catalog question and add it to the recently viewed list.
    pub fn show(&self, id: i64) -> Result<CareerQuestion> {
        let question = find_by_id(&self.catalog, id)
            .cloned()
            .ok_or_else(|| SkillSyncError::NotFound(format!("question {}", id)))?;
        self.preferences.record_view(&question)?;
        Ok(question)
    }

    /// Record a question opened from search results, including synthesized
    /// answers that are not in the catalog.
    pub fn view(&self, question: &CareerQuestion) -> Result<()> {
        self.preferences.record_view(question)
    }

    pub fn topic(&self, category: Category) -> Vec<CareerQuestion> {
        filter_by_topic(category, &self.catalog)
    }

    /// Catalog narrowed to the given career fields.
    pub fn browse(&self, categories: &HashSet<Category>) -> Vec<CareerQuestion> {
        filter_by_categories(categories, &self.catalog)
    }

    /// Saved questions that still exist in the catalog, in save order.
    pub fn bookmarked_questions(&self) -> Result<Vec<CareerQuestion>> {
        Ok(self
            .preferences
            .bookmarks()?
            .into_iter()
            .filter_map(|id| find_by_id(&self.catalog, id).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn offline_config() -> Config {
        let mut config = Config::default();
        config.llm.enabled = false;
        config
    }

    fn advisor(config: &Config) -> Advisor {
        Advisor::new(config, Arc::new(MemoryStore::new())).unwrap()
    }

    #[tokio::test]
    async fn test_search_records_history() {
        let advisor = advisor(&offline_config());
        let outcome = advisor.search("tech").await.unwrap();
        assert_eq!(outcome.source, AnswerSource::Catalog);
        assert_eq!(outcome.results.len(), 6);

        let searches = advisor.preferences().recent_searches().unwrap();
        assert_eq!(searches[0].query, "tech");
    }

    #[tokio::test]
    async fn test_matching_uses_query_as_typed() {
        let advisor = advisor(&offline_config());
        let outcome = advisor.search("tech ").await.unwrap();
        for result in outcome.results.iter().filter(|r| !r.is_ai_generated) {
            let text = format!("{} {}", result.question, result.answer).to_lowercase();
            assert!(text.contains("tech "), "{} should contain the trailing space", result.id);
        }

        let blank = advisor.search("   ").await.unwrap();
        assert_eq!(blank.results.len(), advisor.catalog().len());
        assert_eq!(advisor.preferences().recent_searches().unwrap()[0].query, "tech");
    }

    #[tokio::test]
    async fn test_sparse_search_is_augmented() {
        let advisor = advisor(&offline_config());
        let outcome = advisor
            .search("How do I start a career in cybersecurity?")
            .await
            .unwrap();
        assert_eq!(outcome.source, AnswerSource::Template);
        assert_eq!(outcome.results.len(), 2);
        assert!(outcome.results[0].is_ai_generated);
    }

    #[tokio::test]
    async fn test_no_hits_use_configured_strategy() {
        let mut config = offline_config();
        config.advisor.strategy = Strategy::DemoKeywordTable;
        let advisor = advisor(&config);

        let outcome = advisor.search("zzz qqq").await.unwrap();
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.source, AnswerSource::Template);
        assert!(outcome.notice.is_none());
        assert_eq!(
            outcome.results[0].answer,
            crate::advisor::demo::DemoTopic::General.answer()
        );
    }

    #[tokio::test]
    async fn test_unconfigured_key_skips_live_call() {
        let advisor = Advisor::with_api_key(
            &Config::default(),
            Arc::new(MemoryStore::new()),
            Some("not-a-key".to_string()),
        )
        .unwrap();
        assert!(!advisor.live_answers_available().unwrap());

        let outcome = advisor.search("zzz qqq").await.unwrap();
        assert_eq!(outcome.source, AnswerSource::Template);
        assert!(outcome.notice.is_none());
    }

    #[test]
    fn test_show_tracks_recently_viewed() {
        let advisor = advisor(&offline_config());
        let question = advisor.show(101).unwrap();
        assert_eq!(question.id, 101);
        assert_eq!(advisor.preferences().recently_viewed().unwrap()[0].id, 101);
        assert!(matches!(advisor.show(7), Err(SkillSyncError::NotFound(_))));
    }

    #[test]
    fn test_bookmarked_questions_follow_catalog() {
        let advisor = advisor(&offline_config());
        advisor.preferences().toggle_bookmark(2, advisor.catalog()).unwrap();
        advisor.preferences().toggle_bookmark(424_242, advisor.catalog()).unwrap();
        let saved = advisor.bookmarked_questions().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, 2);
    }

    #[test]
    fn test_topic_and_browse() {
        let advisor = advisor(&offline_config());
        let healthcare = advisor.topic(Category::Healthcare);
        assert!(!healthcare.is_empty());
        assert!(healthcare.iter().all(|q| q.category == Category::Healthcare));

        let everything = advisor.browse(&HashSet::new());
        assert_eq!(everything.len(), advisor.catalog().len());
    }
}
