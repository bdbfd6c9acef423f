// ABOUTME: Application configuration loaded from environment variables
// ABOUTME: Data directory, autosave debounce window, and storage backend selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nourish_core::constants::persistence::{APP_DIR_NAME, DEFAULT_AUTOSAVE_DEBOUNCE_MS};
use nourish_core::errors::{AppError, AppResult};
use nourish_intelligence::NutritionConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Where user snapshots and accounts are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON files under the data directory
    #[default]
    File,
    /// Process memory, lost on exit
    Memory,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(AppError::config(format!(
                "NOURISH_STORAGE must be 'file' or 'memory', got '{other}'"
            ))),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root directory for persisted data
    pub data_dir: PathBuf,
    /// Quiet period before staged state is flushed
    pub autosave_debounce: Duration,
    /// Storage backend
    pub storage: StorageBackend,
    /// Calculator coefficients
    pub nutrition: NutritionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            autosave_debounce: Duration::from_millis(DEFAULT_AUTOSAVE_DEBOUNCE_MS),
            storage: StorageBackend::default(),
            nutrition: NutritionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `NOURISH_DATA_DIR`: data directory
    /// - `NOURISH_AUTOSAVE_DEBOUNCE_MS`: autosave quiet period in milliseconds
    /// - `NOURISH_STORAGE`: `file` or `memory`
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if a value cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        let data_dir = env::var("NOURISH_DATA_DIR").map_or_else(|_| default_data_dir(), PathBuf::from);

        let debounce_ms = env_var_or(
            "NOURISH_AUTOSAVE_DEBOUNCE_MS",
            &DEFAULT_AUTOSAVE_DEBOUNCE_MS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            AppError::config("NOURISH_AUTOSAVE_DEBOUNCE_MS must be a whole number of milliseconds")
                .with_source(e)
        })?;

        let storage = env_var_or("NOURISH_STORAGE", "file").parse()?;

        Ok(Self {
            data_dir,
            autosave_debounce: Duration::from_millis(debounce_ms),
            storage,
            nutrition: NutritionConfig::default(),
        })
    }

    /// Override the data directory
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        self.data_dir = data_dir.as_ref().to_path_buf();
        self
    }
}

/// `dirs::data_dir()/nourish`, or `./.nourish` when the platform has none
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(format!(".{APP_DIR_NAME}")),
        |dir| dir.join(APP_DIR_NAME),
    )
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
