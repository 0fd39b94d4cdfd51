//! SkillSync career advisor library

pub mod advisor;
pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod output;
pub mod storage;

pub use app::{Advisor, AnswerSource, SearchOutcome};
pub use config::Config;
pub use error::{Result, SkillSyncError};
