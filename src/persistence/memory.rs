// ABOUTME: In-memory account and snapshot stores backed by concurrent maps
// ABOUTME: Contents live for the lifetime of the process only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AccountStore, UserDataStore};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use nourish_core::errors::{AppError, AppResult};
use nourish_core::models::{UserAccount, UserData};
use uuid::Uuid;

/// Snapshots held in a `DashMap`
#[derive(Debug, Default)]
pub struct InMemoryUserDataStore {
    snapshots: DashMap<Uuid, UserData>,
}

impl InMemoryUserDataStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a saved snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether nothing has been saved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[async_trait::async_trait]
impl UserDataStore for InMemoryUserDataStore {
    async fn load(&self, user_id: Uuid) -> AppResult<Option<UserData>> {
        Ok(self.snapshots.get(&user_id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, user_id: Uuid, data: &UserData) -> AppResult<()> {
        self.snapshots.insert(user_id, data.clone());
        Ok(())
    }
}

/// Accounts held in a `DashMap` keyed by username
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: DashMap<String, UserAccount>,
}

impl InMemoryAccountStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserAccount>> {
        Ok(self.accounts.get(username).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, account: UserAccount) -> AppResult<()> {
        match self.accounts.entry(account.username.clone()) {
            Entry::Occupied(_) => Err(AppError::already_exists(format!(
                "Username '{}'",
                account.username
            ))),
            Entry::Vacant(slot) => {
                slot.insert(account);
                Ok(())
            }
        }
    }
}
