// ABOUTME: Debounced background persistence of user snapshots
// ABOUTME: Coalesces staged snapshots and writes the latest one after a quiet period
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Auto-saver
//!
//! A tokio task owns the latest staged [`UserData`]. Every stage pushes the
//! write deadline out by the debounce window, so a burst of edits results in
//! a single write. [`AutoSaver::flush`] writes immediately and reports the
//! outcome; closing the saver flushes whatever is still staged.

use crate::logging::AppLogger;
use crate::persistence::UserDataStore;
use nourish_core::constants::persistence::AUTOSAVE_CHANNEL_CAPACITY;
use nourish_core::errors::{AppError, AppResult};
use nourish_core::models::UserData;
use std::future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use uuid::Uuid;

enum Command {
    Stage(Box<UserData>),
    Flush(oneshot::Sender<AppResult<()>>),
}

/// Handle to the background save task of one user
pub struct AutoSaver {
    tx: mpsc::Sender<Command>,
    handle: JoinHandle<()>,
}

impl AutoSaver {
    /// Start the save task
    #[must_use]
    pub fn spawn(user_id: Uuid, store: Arc<dyn UserDataStore>, debounce: Duration) -> Self {
        let (tx, rx) = mpsc::channel(AUTOSAVE_CHANNEL_CAPACITY);
        let handle = tokio::spawn(SaveTask::new(user_id, store, debounce).run(rx));
        Self { tx, handle }
    }

    /// Stage a snapshot for the next debounced write
    ///
    /// # Errors
    ///
    /// Returns an internal error if the save task has stopped
    pub async fn stage(&self, data: UserData) -> AppResult<()> {
        self.tx
            .send(Command::Stage(Box::new(data)))
            .await
            .map_err(|_| AppError::internal("Autosave task is not running"))
    }

    /// Write the staged snapshot now
    ///
    /// # Errors
    ///
    /// Returns the storage error of the write, or an internal error if the
    /// save task has stopped
    pub async fn flush(&self) -> AppResult<()> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.tx
            .send(Command::Flush(ack_tx))
            .await
            .map_err(|_| AppError::internal("Autosave task is not running"))?;
        ack_rx
            .await
            .map_err(|_| AppError::internal("Autosave task dropped the flush request"))?
    }

    /// Flush anything staged and stop the task
    ///
    /// # Errors
    ///
    /// Returns the error of the final flush, or an internal error if the task panicked
    pub async fn close(self) -> AppResult<()> {
        let result = self.flush().await;
        drop(self.tx);
        self.handle
            .await
            .map_err(|e| AppError::internal(format!("Autosave task failed: {e}")))?;
        result
    }
}

struct SaveTask {
    user_id: Uuid,
    store: Arc<dyn UserDataStore>,
    debounce: Duration,
    staged: Option<Box<UserData>>,
    coalesced: usize,
    deadline: Option<Instant>,
}

impl SaveTask {
    fn new(user_id: Uuid, store: Arc<dyn UserDataStore>, debounce: Duration) -> Self {
        Self {
            user_id,
            store,
            debounce,
            staged: None,
            coalesced: 0,
            deadline: None,
        }
    }

    async fn run(mut self, mut rx: mpsc::Receiver<Command>) {
        loop {
            let deadline = self.deadline;
            let timer = async move {
                match deadline {
                    Some(at) => sleep_until(at).await,
                    None => future::pending::<()>().await,
                }
            };

            tokio::select! {
                command = rx.recv() => match command {
                    Some(Command::Stage(data)) => {
                        self.staged = Some(data);
                        self.coalesced += 1;
                        self.deadline = Some(Instant::now() + self.debounce);
                    }
                    Some(Command::Flush(ack)) => {
                        let result = self.write().await;
                        // Requester may have given up waiting
                        let _ = ack.send(result);
                    }
                    None => {
                        if let Err(e) = self.write().await {
                            tracing::error!(user.id = %self.user_id, "Final autosave failed: {e}");
                        }
                        tracing::debug!(user.id = %self.user_id, "Autosave task stopped");
                        break;
                    }
                },
                () = timer => {
                    if let Err(e) = self.write().await {
                        tracing::warn!(user.id = %self.user_id, "Debounced autosave failed: {e}");
                    }
                }
            }
        }
    }

    async fn write(&mut self) -> AppResult<()> {
        self.deadline = None;
        let Some(data) = self.staged.take() else {
            return Ok(());
        };

        match self.store.save(self.user_id, &data).await {
            Ok(()) => {
                AppLogger::log_snapshot_flushed(self.user_id, data.logs.len(), self.coalesced);
                self.coalesced = 0;
                Ok(())
            }
            Err(e) => {
                // Keep the snapshot and retry after another quiet period
                self.staged = Some(data);
                self.deadline = Some(Instant::now() + self.debounce);
                Err(e)
            }
        }
    }
}
