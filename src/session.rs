// ABOUTME: Logged-in user session tying the tracker to its debounced auto-saver
// ABOUTME: Every mutation goes through apply() so the resulting snapshot is always staged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::auth::AuthService;
use crate::autosave::AutoSaver;
use crate::config::AppConfig;
use crate::persistence::UserDataStore;
use crate::tracker::Tracker;
use chrono::{Local, NaiveDate};
use nourish_core::errors::AppResult;
use nourish_core::models::UserAccount;
use std::sync::Arc;

/// Local calendar date used for day logs
#[must_use]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// A user's open session
pub struct UserSession {
    account: UserAccount,
    tracker: Tracker,
    saver: AutoSaver,
}

impl UserSession {
    /// Authenticate and open a session for today
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` for bad credentials or a storage error while loading
    pub async fn login(
        auth: &AuthService,
        store: Arc<dyn UserDataStore>,
        config: &AppConfig,
        username: &str,
        password: &str,
    ) -> AppResult<Self> {
        let account = auth.login(username, password).await?;
        Self::open(account, store, config, local_today()).await
    }

    /// Open a session for an already authenticated account
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error if the snapshot cannot be loaded
    pub async fn open(
        account: UserAccount,
        store: Arc<dyn UserDataStore>,
        config: &AppConfig,
        today: NaiveDate,
    ) -> AppResult<Self> {
        let data = store.load(account.id).await?.unwrap_or_default();
        let tracker = Tracker::from_snapshot(account.id, data, today, config.nutrition.clone());
        let saver = AutoSaver::spawn(account.id, store, config.autosave_debounce);

        tracing::debug!(
            user.id = %account.id,
            logs = tracker.logs().len(),
            onboarded = tracker.profile().is_some(),
            "Session opened"
        );
        Ok(Self {
            account,
            tracker,
            saver,
        })
    }

    /// Account of the session
    #[must_use]
    pub const fn account(&self) -> &UserAccount {
        &self.account
    }

    /// Read access to the state
    #[must_use]
    pub const fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Run a mutation and stage the resulting snapshot
    ///
    /// Nothing is staged when the mutation fails.
    ///
    /// # Errors
    ///
    /// Returns the mutation's error, or an internal error if the saver stopped
    pub async fn apply<T>(
        &mut self,
        mutation: impl FnOnce(&mut Tracker) -> AppResult<T>,
    ) -> AppResult<T> {
        let value = mutation(&mut self.tracker)?;
        self.saver.stage(self.tracker.snapshot()).await?;
        Ok(value)
    }

    /// Move the session to a new local date
    ///
    /// # Errors
    ///
    /// Returns an internal error if the saver stopped
    pub async fn roll_over(&mut self, today: NaiveDate) -> AppResult<()> {
        if today == self.tracker.today() {
            return Ok(());
        }
        self.apply(|tracker| {
            tracker.roll_over(today);
            Ok(())
        })
        .await
    }

    /// Write pending changes immediately
    ///
    /// # Errors
    ///
    /// Returns the storage error of the write
    pub async fn flush(&self) -> AppResult<()> {
        self.saver.flush().await
    }

    /// Flush and end the session
    ///
    /// # Errors
    ///
    /// Returns the storage error of the final write
    pub async fn logout(self) -> AppResult<()> {
        tracing::debug!(user.id = %self.account.id, "Session closed");
        self.saver.close().await
    }
}
