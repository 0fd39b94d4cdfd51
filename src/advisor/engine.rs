//! Synthetic answer generation behind one engine with selectable strategies

use crate::advisor::catalog::CareerQuestion;
use crate::advisor::category::detect_category;
use crate::advisor::demo;
use crate::advisor::responses::generate_intelligent_response;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Build a synthetic catalog entry for a question from the field and intent
/// templates.
pub fn generate_ai_response(query: &str) -> CareerQuestion {
    let category = detect_category(query);
    let answer = generate_intelligent_response(query).trim().to_string();
    CareerQuestion::generated(query, answer, category)
}

/// How the engine turns a question into an answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Field profiles, intents, and question patterns.
    #[default]
    CatalogAugmented,
    /// Keyword table with thirteen overview answers.
    DemoKeywordTable,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::CatalogAugmented => write!(f, "catalog_augmented"),
            Strategy::DemoKeywordTable => write!(f, "demo_keyword_table"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "catalog_augmented" | "catalog" => Ok(Strategy::CatalogAugmented),
            "demo_keyword_table" | "demo" => Ok(Strategy::DemoKeywordTable),
            other => Err(format!("Unknown answer strategy: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerTemplateEngine {
    strategy: Strategy,
}

impl AnswerTemplateEngine {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Synthetic answer for a question using the configured strategy.
    pub fn answer(&self, query: &str) -> CareerQuestion {
        match self.strategy {
            Strategy::CatalogAugmented => generate_ai_response(query),
            Strategy::DemoKeywordTable => CareerQuestion::generated(
                query,
                demo::generate_comprehensive_answer(query).to_string(),
                demo::detect_category(query),
            ),
        }
    }
}
