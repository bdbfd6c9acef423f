// ABOUTME: Account registration and login with Argon2id password hashing
// ABOUTME: Hashing and verification run on the blocking pool to keep the runtime responsive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logging::AppLogger;
use crate::persistence::{AccountStore, UserDataStore};
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use nourish_core::errors::{AppError, AppResult};
use nourish_core::models::{UserAccount, UserData};
use rand::rngs::OsRng;
use std::sync::Arc;
use uuid::Uuid;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Hash a password into an Argon2id PHC string
///
/// # Errors
///
/// Returns an internal error if hashing fails
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
}

/// Check a password against a stored PHC string
///
/// An unparseable hash counts as a mismatch.
#[must_use]
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(password_hash) else {
        tracing::error!("Failed to parse stored password hash");
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Registers and authenticates users
#[derive(Clone)]
pub struct AuthService {
    accounts: Arc<dyn AccountStore>,
    user_data: Arc<dyn UserDataStore>,
}

impl AuthService {
    /// Create the service over the given stores
    #[must_use]
    pub fn new(accounts: Arc<dyn AccountStore>, user_data: Arc<dyn UserDataStore>) -> Self {
        Self {
            accounts,
            user_data,
        }
    }

    /// Register a new account and initialize its empty snapshot
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if username or password is blank
    /// - `ResourceAlreadyExists` if the username is taken
    /// - storage errors from the stores
    pub async fn register(&self, username: &str, password: &str) -> AppResult<UserAccount> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::invalid_input("Username and password are required"));
        }

        if self.accounts.find_by_username(username).await?.is_some() {
            AppLogger::log_auth_event(username, "register", false, None);
            return Err(AppError::already_exists(format!("Username '{username}'")));
        }

        let password = password.to_owned();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))??;

        let account = UserAccount {
            id: Uuid::new_v4(),
            username: username.to_owned(),
            password_hash,
            created_at: Utc::now(),
        };

        self.accounts.insert(account.clone()).await?;
        self.user_data.save(account.id, &UserData::default()).await?;

        AppLogger::log_auth_event(username, "register", true, Some(account.id));
        Ok(account)
    }

    /// Authenticate by username and password
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` for an unknown user or a wrong password
    pub async fn login(&self, username: &str, password: &str) -> AppResult<UserAccount> {
        let username = username.trim();
        let Some(account) = self.accounts.find_by_username(username).await? else {
            AppLogger::log_auth_event(username, "login", false, None);
            return Err(AppError::auth_invalid(INVALID_CREDENTIALS));
        };

        let password = password.to_owned();
        let password_hash = account.password_hash.clone();
        let is_valid =
            tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
                .await
                .map_err(|e| {
                    AppError::internal(format!("Password verification task failed: {e}"))
                })?;

        if !is_valid {
            AppLogger::log_auth_event(username, "login", false, None);
            return Err(AppError::auth_invalid(INVALID_CREDENTIALS));
        }

        AppLogger::log_auth_event(username, "login", true, Some(account.id));
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_argon2id_phc_and_verifies() {
        let hash = hash_password("correct horse").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct horse", &hash));
        assert!(!verify_password("battery staple", &hash));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let first = hash_password("pw").unwrap();
        let second = hash_password("pw").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        assert!(!verify_password("pw", "not-a-phc-string"));
    }
}
