//! Question catalog, classifiers, and answer generation

pub mod catalog;
pub mod category;
pub mod classifier;
pub mod demo;
pub mod engine;
pub mod knowledge;
pub mod matcher;
pub mod recommend;
pub mod responses;

pub use catalog::{sample_catalog, CareerQuestion, Category};
pub use category::detect_category;
pub use classifier::{analyze_question, extract_field_from_query, Intent, QuestionAnalysis};
pub use engine::{generate_ai_response, AnswerTemplateEngine, Strategy};
pub use matcher::{filter_by_categories, filter_by_topic, search, QuestionMatcher};
pub use recommend::{learning_paths, recommendations};
