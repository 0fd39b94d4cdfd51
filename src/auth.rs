//! Account form validation and password hashing

use crate::error::{FieldErrors, Result, SkillSyncError};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use regex::Regex;
use std::sync::OnceLock;

pub const MIN_PASSWORD_LENGTH: usize = 6;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Sign-up or sign-in form input.
#[derive(Debug, Clone, Default)]
pub struct AccountForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    SignUp,
    SignIn,
}

/// Validate an account form. Name and confirmation are only checked when
/// signing up.
pub fn validate_account_form(form: &AccountForm, mode: FormMode) -> Result<()> {
    let mut errors = FieldErrors::new();

    if mode == FormMode::SignUp && form.name.trim().is_empty() {
        errors.insert("name", "Name is required");
    }

    if form.email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(&form.email) {
        errors.insert("email", "Please enter a valid email");
    }

    if let Some(message) = password_problem(&form.password) {
        errors.insert("password", message);
    }

    if mode == FormMode::SignUp {
        if let Some(message) = confirmation_problem(&form.password, &form.confirm_password) {
            errors.insert("confirmPassword", message);
        }
    }

    errors.into_result()
}

/// Validate a new password and its confirmation.
pub fn validate_new_password(password: &str, confirm_password: &str) -> Result<()> {
    let mut errors = FieldErrors::new();
    if let Some(message) = password_problem(password) {
        errors.insert("password", message);
    }
    if let Some(message) = confirmation_problem(password, confirm_password) {
        errors.insert("confirmPassword", message);
    }
    errors.into_result()
}

/// Validate the email of a password-reset request.
pub fn validate_reset_email(email: &str) -> Result<()> {
    let mut errors = FieldErrors::new();
    if email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.insert("email", "Please enter a valid email address");
    }
    errors.into_result()
}

fn password_problem(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required")
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        Some("Password must be at least 6 characters")
    } else {
        None
    }
}

fn confirmation_problem(password: &str, confirm_password: &str) -> Option<&'static str> {
    if confirm_password.is_empty() {
        Some("Please confirm your password")
    } else if password != confirm_password {
        Some("Passwords do not match")
    } else {
        None
    }
}

/// Salted argon2 hash in PHC string format.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| SkillSyncError::Storage(format!("Failed to hash password: {}", e)))
}

/// Check a password against a stored PHC hash. Unparseable hashes never
/// verify.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            log::warn!("Stored password hash is unreadable: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(name: &str, email: &str, password: &str, confirm: &str) -> AccountForm {
        AccountForm {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    fn field_errors(result: Result<()>) -> FieldErrors {
        match result {
            Err(SkillSyncError::Validation(errors)) => errors,
            other => panic!("expected validation errors, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_signup() {
        let form = signup("Ada", "ada@example.com", "secret1", "secret1");
        assert!(validate_account_form(&form, FormMode::SignUp).is_ok());
    }

    #[test]
    fn test_empty_signup_reports_every_field() {
        let errors = field_errors(validate_account_form(&AccountForm::default(), FormMode::SignUp));
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert_eq!(errors.get("confirmPassword"), Some("Please confirm your password"));
    }

    #[test]
    fn test_shape_and_length_checks() {
        let form = signup("Ada", "ada@example", "abc", "abd");
        let errors = field_errors(validate_account_form(&form, FormMode::SignUp));
        assert_eq!(errors.get("email"), Some("Please enter a valid email"));
        assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
    }

    #[test]
    fn test_sign_in_skips_name_and_confirmation() {
        let form = signup("", "ada@example.com", "secret1", "");
        assert!(validate_account_form(&form, FormMode::SignIn).is_ok());
    }

    #[test]
    fn test_reset_email_message() {
        let errors = field_errors(validate_reset_email("nope"));
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
        assert!(validate_reset_email("a@b.co").is_ok());
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn test_password_hashing() {
        let hash = hash_password("secret1").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert_ne!(hash, hash_password("secret1").unwrap());
        assert!(verify_password("secret1", &hash));
        assert!(!verify_password("secret2", &hash));
        assert!(!verify_password("secret1", "plaintext"));
    }
}
