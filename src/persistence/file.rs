// ABOUTME: JSON file stores for accounts and per-user snapshots under the data directory
// ABOUTME: Writes go to a temporary sibling first and are renamed into place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Layout:
//!
//! ```text
//! <data_dir>/accounts.json        every registered account
//! <data_dir>/users/<user_id>.json one snapshot per user
//! ```

use super::{AccountStore, UserDataStore};
use nourish_core::constants::persistence::{ACCOUNTS_FILE, USER_DATA_DIR};
use nourish_core::errors::{AppError, AppResult};
use nourish_core::models::{UserAccount, UserData};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use uuid::Uuid;

async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<Option<T>> {
    match fs::read(path).await {
        Ok(bytes) => {
            let value = serde_json::from_slice(&bytes).map_err(|e| {
                AppError::serialization(format!("Corrupt data in {}", path.display()))
                    .with_source(e)
            })?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(
            AppError::storage(format!("Failed to read {}", path.display())).with_source(e),
        ),
    }
}

async fn write_json<T: Serialize + Sync>(path: &Path, value: &T) -> AppResult<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    let tmp = path.with_extension("json.tmp");

    fs::write(&tmp, &bytes).await.map_err(|e| {
        AppError::storage(format!("Failed to write {}", tmp.display())).with_source(e)
    })?;
    fs::rename(&tmp, path).await.map_err(|e| {
        AppError::storage(format!("Failed to replace {}", path.display())).with_source(e)
    })?;
    Ok(())
}

/// One JSON file per user
#[derive(Debug)]
pub struct FileUserDataStore {
    dir: PathBuf,
}

impl FileUserDataStore {
    /// Open the store, creating `<data_dir>/users` if needed
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be created
    pub async fn open(data_dir: &Path) -> AppResult<Self> {
        let dir = data_dir.join(USER_DATA_DIR);
        fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::storage(format!("Failed to create {}", dir.display())).with_source(e)
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, user_id: Uuid) -> PathBuf {
        self.dir.join(format!("{user_id}.json"))
    }
}

#[async_trait::async_trait]
impl UserDataStore for FileUserDataStore {
    async fn load(&self, user_id: Uuid) -> AppResult<Option<UserData>> {
        read_json(&self.path_for(user_id)).await
    }

    async fn save(&self, user_id: Uuid, data: &UserData) -> AppResult<()> {
        write_json(&self.path_for(user_id), data).await
    }
}

/// All accounts in a single JSON array
#[derive(Debug)]
pub struct FileAccountStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the accounts file
    write_lock: Mutex<()>,
}

impl FileAccountStore {
    /// Open the store, creating the data directory if needed
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be created
    pub async fn open(data_dir: &Path) -> AppResult<Self> {
        fs::create_dir_all(data_dir).await.map_err(|e| {
            AppError::storage(format!("Failed to create {}", data_dir.display())).with_source(e)
        })?;
        Ok(Self {
            path: data_dir.join(ACCOUNTS_FILE),
            write_lock: Mutex::new(()),
        })
    }

    async fn read_all(&self) -> AppResult<Vec<UserAccount>> {
        Ok(read_json(&self.path).await?.unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl AccountStore for FileAccountStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserAccount>> {
        Ok(self
            .read_all()
            .await?
            .into_iter()
            .find(|account| account.username == username))
    }

    async fn insert(&self, account: UserAccount) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut accounts = self.read_all().await?;
        if accounts.iter().any(|a| a.username == account.username) {
            return Err(AppError::already_exists(format!(
                "Username '{}'",
                account.username
            )));
        }
        accounts.push(account);
        write_json(&self.path, &accounts).await
    }
}
