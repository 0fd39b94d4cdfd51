//! Forgot-password flow backed by a single pending reset token

use crate::auth::{validate_new_password, validate_reset_email};
use crate::error::{FieldErrors, Result, SkillSyncError};
use crate::storage::users::UserRepository;
use crate::storage::{keys, load_json, save_json, SharedStore};
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One hour, in milliseconds.
pub const RESET_TOKEN_TTL_MS: i64 = 60 * 60 * 1000;
const TOKEN_LENGTH: usize = 13;
const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetRecord {
    pub email: String,
    pub token: String,
    /// Issue time in milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub expires_in: i64,
}

impl ResetRecord {
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms - self.timestamp > self.expires_in
    }
}

#[derive(Clone)]
pub struct PasswordResetService {
    store: SharedStore,
    users: UserRepository,
}

impl PasswordResetService {
    pub fn new(store: SharedStore) -> Self {
        let users = UserRepository::new(store.clone());
        Self { store, users }
    }

    /// Issue a reset token for a registered email. A new request replaces
    /// any pending token.
    pub fn request_reset(&self, email: &str) -> Result<String> {
        validate_reset_email(email)?;

        if self.users.find_user_by_email(email)?.is_none() {
            let mut errors = FieldErrors::new();
            errors.insert("email", "No account found with this email address");
            return Err(SkillSyncError::Validation(errors));
        }

        let record = ResetRecord {
            email: email.trim().to_lowercase(),
            token: generate_token(),
            timestamp: Utc::now().timestamp_millis(),
            expires_in: RESET_TOKEN_TTL_MS,
        };
        save_json(self.store.as_ref(), keys::PASSWORD_RESET, &record)?;
        log::info!("Issued password reset token");
        Ok(record.token)
    }

    pub fn pending(&self) -> Result<Option<ResetRecord>> {
        load_json(self.store.as_ref(), keys::PASSWORD_RESET)
    }

    /// Set a new password using a pending token. Expired tokens are
    /// discarded.
    pub fn reset_password(&self, token: &str, password: &str, confirm_password: &str) -> Result<()> {
        validate_new_password(password, confirm_password)?;

        let record = self
            .pending()?
            .filter(|record| record.token == token.trim())
            .ok_or_else(|| SkillSyncError::InvalidInput("Invalid or expired reset link".to_string()))?;

        if record.is_expired_at(Utc::now().timestamp_millis()) {
            self.store.remove(keys::PASSWORD_RESET)?;
            return Err(SkillSyncError::TokenExpired);
        }

        self.users.update_user_password(&record.email, password)?;
        self.store.remove(keys::PASSWORD_RESET)?;
        log::info!("Password reset completed");
        Ok(())
    }
}

fn generate_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LENGTH)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    fn service() -> (Arc<MemoryStore>, PasswordResetService) {
        let store = Arc::new(MemoryStore::new());
        let users = UserRepository::new(store.clone());
        users.create_user("Ada", "ada@example.com", "secret1").unwrap();
        (store.clone(), PasswordResetService::new(store))
    }

    #[test]
    fn test_reset_flow() {
        let (store, service) = service();
        let token = service.request_reset("ADA@example.com").unwrap();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));

        let record = service.pending().unwrap().unwrap();
        assert_eq!(record.email, "ada@example.com");
        assert_eq!(record.expires_in, 3_600_000);

        service.reset_password(&token, "newpass", "newpass").unwrap();
        assert_eq!(store.get(keys::PASSWORD_RESET).unwrap(), None);

        let users = UserRepository::new(store);
        assert!(users.authenticate_user("ada@example.com", "newpass").is_ok());
        assert!(users.authenticate_user("ada@example.com", "secret1").is_err());
    }

    #[test]
    fn test_unknown_email() {
        let (_, service) = service();
        let err = service.request_reset("bob@example.com").unwrap_err();
        assert!(err.to_string().contains("No account found with this email address"));
        assert!(service.request_reset("not-an-email").is_err());
    }

    #[test]
    fn test_missing_or_wrong_token() {
        let (_, service) = service();
        let err = service.reset_password("abc", "newpass", "newpass").unwrap_err();
        assert!(err.to_string().contains("Invalid or expired reset link"));

        service.request_reset("ada@example.com").unwrap();
        assert!(matches!(
            service.reset_password("not-the-token", "newpass", "newpass"),
            Err(SkillSyncError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_expired_token() {
        let (store, service) = service();
        let record = ResetRecord {
            email: "ada@example.com".to_string(),
            token: "oldtoken".to_string(),
            timestamp: Utc::now().timestamp_millis() - RESET_TOKEN_TTL_MS - 1_000,
            expires_in: RESET_TOKEN_TTL_MS,
        };
        save_json(store.as_ref(), keys::PASSWORD_RESET, &record).unwrap();

        assert!(matches!(
            service.reset_password("oldtoken", "newpass", "newpass"),
            Err(SkillSyncError::TokenExpired)
        ));
        assert_eq!(service.pending().unwrap(), None);
    }

    #[test]
    fn test_password_rules_checked_first() {
        let (_, service) = service();
        let token = service.request_reset("ada@example.com").unwrap();
        assert!(matches!(
            service.reset_password(&token, "abc", "abd"),
            Err(SkillSyncError::Validation(_))
        ));
        assert!(service.pending().unwrap().is_some());
    }
}
