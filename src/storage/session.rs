//! The signed-in user

use crate::error::Result;
use crate::storage::users::User;
use crate::storage::{keys, load_json, save_json, SharedStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account fields kept for the active session. The password hash stays in
/// the user database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub join_date: DateTime<Utc>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_authenticated: bool,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            join_date: user.join_date,
            last_login: user.last_login,
            is_authenticated: true,
        }
    }
}

#[derive(Clone)]
pub struct SessionRepository {
    store: SharedStore,
}

impl SessionRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn current_user(&self) -> Result<Option<SessionUser>> {
        load_json(self.store.as_ref(), keys::CURRENT_USER)
    }

    pub fn set_current_user(&self, user: &User) -> Result<SessionUser> {
        let session = SessionUser::from(user);
        save_json(self.store.as_ref(), keys::CURRENT_USER, &session)?;
        Ok(session)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(keys::CURRENT_USER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    fn user() -> User {
        User {
            id: 42,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            join_date: Utc::now(),
            last_login: None,
        }
    }

    #[test]
    fn test_session_lifecycle() {
        let store = Arc::new(MemoryStore::new());
        let sessions = SessionRepository::new(store.clone());
        assert_eq!(sessions.current_user().unwrap(), None);

        let session = sessions.set_current_user(&user()).unwrap();
        assert!(session.is_authenticated);
        assert_eq!(sessions.current_user().unwrap(), Some(session));

        let raw = store.get(keys::CURRENT_USER).unwrap().unwrap();
        assert!(!raw.contains("argon2"));
        assert!(raw.contains("isAuthenticated"));

        sessions.clear().unwrap();
        assert_eq!(sessions.current_user().unwrap(), None);
    }

    #[test]
    fn test_corrupt_session_reads_as_signed_out() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::CURRENT_USER, "garbage").unwrap();
        let sessions = SessionRepository::new(store);
        assert_eq!(sessions.current_user().unwrap(), None);
    }
}
