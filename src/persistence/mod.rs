// ABOUTME: Persistence ports for accounts and per-user snapshots with pluggable backends
// ABOUTME: File backend for real use and an in-memory backend for tests and ephemeral runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON file backend
pub mod file;
/// In-memory backend
pub mod memory;

use crate::config::{AppConfig, StorageBackend};
use nourish_core::errors::AppResult;
use nourish_core::models::{UserAccount, UserData};
use std::sync::Arc;
use uuid::Uuid;

/// Storage of `{profile, logs}` snapshots keyed by user id
#[async_trait::async_trait]
pub trait UserDataStore: Send + Sync {
    /// Load the snapshot of a user, `None` if nothing was ever saved
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or the data is corrupt
    async fn load(&self, user_id: Uuid) -> AppResult<Option<UserData>>;

    /// Replace the snapshot of a user
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn save(&self, user_id: Uuid, data: &UserData) -> AppResult<()>;
}

/// Storage of registered accounts
#[async_trait::async_trait]
pub trait AccountStore: Send + Sync {
    /// Look up an account by exact username
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserAccount>>;

    /// Add an account
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the username is taken, or a storage error
    async fn insert(&self, account: UserAccount) -> AppResult<()>;
}

/// Both stores for the configured backend
#[derive(Clone)]
pub struct Stores {
    /// Account store
    pub accounts: Arc<dyn AccountStore>,
    /// Snapshot store
    pub user_data: Arc<dyn UserDataStore>,
}

impl Stores {
    /// Open the stores selected by the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created
    pub async fn open(config: &AppConfig) -> AppResult<Self> {
        match config.storage {
            StorageBackend::File => {
                let accounts = file::FileAccountStore::open(&config.data_dir).await?;
                let user_data = file::FileUserDataStore::open(&config.data_dir).await?;
                tracing::debug!(data_dir = %config.data_dir.display(), "Opened file stores");
                Ok(Self {
                    accounts: Arc::new(accounts),
                    user_data: Arc::new(user_data),
                })
            }
            StorageBackend::Memory => {
                tracing::debug!("Using in-memory stores");
                Ok(Self::in_memory())
            }
        }
    }

    /// Fresh in-memory stores
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            accounts: Arc::new(memory::InMemoryAccountStore::new()),
            user_data: Arc::new(memory::InMemoryUserDataStore::new()),
        }
    }
}
