//! Error handling for the career advisor

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillSyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {status} {message}")]
    Api { status: u16, message: String },

    #[error("No response generated from the chat completion API")]
    EmptyResponse,

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Reset link has expired. Please request a new one.")]
    TokenExpired,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SkillSyncError>;

/// Per-field form errors, keyed by the form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Ok when no field failed, otherwise a `Validation` error.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(SkillSyncError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for SkillSyncError {
    fn from(err: anyhow::Error) -> Self {
        SkillSyncError::Configuration(format!("{:#}", err))
    }
}

impl From<reqwest::Error> for SkillSyncError {
    fn from(err: reqwest::Error) -> Self {
        SkillSyncError::Network(err.to_string())
    }
}

impl From<askama::Error> for SkillSyncError {
    fn from(err: askama::Error) -> Self {
        SkillSyncError::OutputFormatting(err.to_string())
    }
}
