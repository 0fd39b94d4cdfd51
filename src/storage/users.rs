//! User accounts stored as one JSON database document

use crate::auth::{hash_password, verify_password};
use crate::error::{FieldErrors, Result, SkillSyncError};
use crate::storage::{keys, load_json, save_json, SharedStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DATABASE_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string.
    pub password: String,
    pub join_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseMetadata {
    pub last_updated: DateTime<Utc>,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDatabase {
    pub users: Vec<User>,
    pub metadata: DatabaseMetadata,
}

impl Default for UserDatabase {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            metadata: DatabaseMetadata {
                last_updated: Utc::now(),
                version: DATABASE_VERSION.to_string(),
            },
        }
    }
}

impl UserDatabase {
    fn position_by_email(&self, email: &str) -> Option<usize> {
        let email = email.to_lowercase();
        self.users.iter().position(|u| u.email.to_lowercase() == email)
    }

    fn position_by_id(&self, id: i64) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

/// Name/email changes accepted by [`UserRepository::update_user_profile`].
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Keys holding per-user data that `clear_user_data` wipes.
const USER_DATA_KEYS: [&str; 5] = [
    keys::BOOKMARKS,
    keys::NOTIFICATIONS,
    keys::RECENT_SEARCHES,
    keys::RECENTLY_VIEWED,
    keys::SETTINGS,
];

#[derive(Clone)]
pub struct UserRepository {
    store: SharedStore,
}

impl UserRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Current database. A missing or unreadable document is replaced by an
    /// empty one.
    fn database(&self) -> Result<UserDatabase> {
        match load_json(self.store.as_ref(), keys::USERS_DB)? {
            Some(database) => Ok(database),
            None => {
                let database = UserDatabase::default();
                self.save(database.clone())?;
                Ok(database)
            }
        }
    }

    fn save(&self, mut database: UserDatabase) -> Result<()> {
        database.metadata.last_updated = Utc::now();
        save_json(self.store.as_ref(), keys::USERS_DB, &database)
    }

    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let database = self.database()?;
        Ok(database
            .position_by_email(email)
            .map(|i| database.users[i].clone()))
    }

    pub fn find_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let database = self.database()?;
        Ok(database.position_by_id(id).map(|i| database.users[i].clone()))
    }

    /// Register a user. The email is stored lower-cased and the password
    /// is hashed.
    pub fn create_user(&self, name: &str, email: &str, password: &str) -> Result<User> {
        let mut database = self.database()?;

        if database.position_by_email(email).is_some() {
            return Err(SkillSyncError::AlreadyExists("User with this email".to_string()));
        }

        let now = Utc::now();
        let mut id = now.timestamp_millis();
        while database.position_by_id(id).is_some() {
            id += 1;
        }

        let user = User {
            id,
            name: name.to_string(),
            email: email.to_lowercase(),
            password: hash_password(password)?,
            join_date: now,
            last_login: Some(now),
        };

        database.users.push(user.clone());
        self.save(database)?;
        log::info!("Created user account {}", user.id);
        Ok(user)
    }

    /// Check credentials and record the login time.
    pub fn authenticate_user(&self, email: &str, password: &str) -> Result<User> {
        let mut database = self.database()?;

        let index = database
            .position_by_email(email)
            .filter(|&i| verify_password(password, &database.users[i].password))
            .ok_or(SkillSyncError::InvalidCredentials)?;

        database.users[index].last_login = Some(Utc::now());
        let user = database.users[index].clone();
        self.save(database)?;
        Ok(user)
    }

    pub fn update_user_password(&self, email: &str, new_password: &str) -> Result<()> {
        let mut database = self.database()?;
        let index = database
            .position_by_email(email)
            .ok_or_else(|| SkillSyncError::NotFound(format!("user {}", email)))?;

        database.users[index].password = hash_password(new_password)?;
        self.save(database)
    }

    pub fn update_user_profile(&self, id: i64, update: ProfileUpdate) -> Result<User> {
        let mut database = self.database()?;
        let index = database
            .position_by_id(id)
            .ok_or_else(|| SkillSyncError::NotFound(format!("user {}", id)))?;

        if let Some(email) = &update.email {
            let taken = database
                .position_by_email(email)
                .map_or(false, |other| other != index);
            if taken {
                let mut errors = FieldErrors::new();
                errors.insert("email", "Email already in use");
                return Err(SkillSyncError::Validation(errors));
            }
        }

        let user = &mut database.users[index];
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email.to_lowercase();
        }

        let updated = user.clone();
        self.save(database)?;
        Ok(updated)
    }

    pub fn delete_user(&self, id: i64) -> Result<()> {
        let mut database = self.database()?;
        let index = database
            .position_by_id(id)
            .ok_or_else(|| SkillSyncError::NotFound(format!("user {}", id)))?;

        database.users.remove(index);
        self.save(database)
    }

    pub fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.database()?.users)
    }

    /// Remove bookmarks, notifications, history, and settings while keeping
    /// the account itself.
    pub fn clear_user_data(&self, id: i64) -> Result<()> {
        if self.find_user_by_id(id)?.is_none() {
            return Err(SkillSyncError::NotFound(format!("user {}", id)));
        }
        for key in USER_DATA_KEYS {
            self.store.remove(key)?;
        }
        Ok(())
    }

    pub fn export_database(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.database()?)?)
    }

    /// Replace the database with an exported document. Invalid input leaves
    /// the current database untouched.
    pub fn import_database(&self, json: &str) -> Result<()> {
        let database: UserDatabase = serde_json::from_str(json)?;
        self.save(database)
    }

    pub fn reset_database(&self) -> Result<()> {
        self.save(UserDatabase::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    fn repository() -> UserRepository {
        UserRepository::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_duplicate_email_is_rejected_case_insensitively() {
        let users = repository();
        users.create_user("Ada", "Ada@Example.com", "secret1").unwrap();

        let err = users.create_user("Other", "ADA@example.COM", "secret2").unwrap_err();
        assert!(err.to_string().contains("already exists"));

        let found = users.find_user_by_email("aDa@example.com").unwrap().unwrap();
        assert_eq!(found.email, "ada@example.com");
        assert_eq!(users.all_users().unwrap().len(), 1);
    }

    #[test]
    fn test_passwords_are_not_stored_in_plaintext() {
        let store = Arc::new(MemoryStore::new());
        let users = UserRepository::new(store.clone());
        users.create_user("Ada", "ada@example.com", "secret1").unwrap();

        let raw = store.get(keys::USERS_DB).unwrap().unwrap();
        assert!(!raw.contains("secret1"));
        assert!(raw.contains("\"version\": \"1.0.0\""));
    }

    #[test]
    fn test_authenticate() {
        let users = repository();
        users.create_user("Ada", "ada@example.com", "secret1").unwrap();

        let user = users.authenticate_user("ADA@example.com", "secret1").unwrap();
        assert_eq!(user.name, "Ada");
        assert!(user.last_login.is_some());
        assert!(matches!(
            users.authenticate_user("ada@example.com", "wrong!"),
            Err(SkillSyncError::InvalidCredentials)
        ));
        assert!(matches!(
            users.authenticate_user("nobody@example.com", "secret1"),
            Err(SkillSyncError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_update_profile_rejects_taken_email() {
        let users = repository();
        let ada = users.create_user("Ada", "ada@example.com", "secret1").unwrap();
        users.create_user("Bob", "bob@example.com", "secret1").unwrap();

        let err = users
            .update_user_profile(
                ada.id,
                ProfileUpdate {
                    email: Some("BOB@example.com".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.to_string().contains("Email already in use"));

        let renamed = users
            .update_user_profile(
                ada.id,
                ProfileUpdate {
                    name: Some("Ada L.".to_string()),
                    email: Some("ADA@example.com".to_string()),
                },
            )
            .unwrap();
        assert_eq!(renamed.name, "Ada L.");
        assert_eq!(renamed.email, "ada@example.com");
    }

    #[test]
    fn test_password_update_and_delete() {
        let users = repository();
        let ada = users.create_user("Ada", "ada@example.com", "secret1").unwrap();

        users.update_user_password("ada@example.com", "newpass").unwrap();
        assert!(users.authenticate_user("ada@example.com", "newpass").is_ok());

        users.delete_user(ada.id).unwrap();
        assert!(users.find_user_by_id(ada.id).unwrap().is_none());
        assert!(matches!(users.delete_user(ada.id), Err(SkillSyncError::NotFound(_))));
    }

    #[test]
    fn test_export_import_reset() {
        let users = repository();
        users.create_user("Ada", "ada@example.com", "secret1").unwrap();
        let exported = users.export_database().unwrap();

        users.reset_database().unwrap();
        assert!(users.all_users().unwrap().is_empty());

        assert!(users.import_database("not json").is_err());
        users.import_database(&exported).unwrap();
        assert_eq!(users.all_users().unwrap().len(), 1);
    }

    #[test]
    fn test_clear_user_data_removes_per_user_keys() {
        let store = Arc::new(MemoryStore::new());
        let users = UserRepository::new(store.clone());
        let ada = users.create_user("Ada", "ada@example.com", "secret1").unwrap();
        store.set(keys::BOOKMARKS, "[1]").unwrap();
        store.set(keys::SETTINGS, "{}").unwrap();

        users.clear_user_data(ada.id).unwrap();
        assert_eq!(store.get(keys::BOOKMARKS).unwrap(), None);
        assert_eq!(store.get(keys::SETTINGS).unwrap(), None);
        assert!(store.get(keys::USERS_DB).unwrap().is_some());
    }
}
