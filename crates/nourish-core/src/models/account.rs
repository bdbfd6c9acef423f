// ABOUTME: Account record and the persisted per-user snapshot
// ABOUTME: UserData is what the persistence port loads at login and saves after changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::log::DailyLog;
use super::profile::Profile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Unique account identifier, shared with the profile
    pub id: Uuid,
    /// Unique login name
    pub username: String,
    /// Argon2 PHC string
    pub password_hash: String,
    /// Registration time
    pub created_at: DateTime<Utc>,
}

/// Persisted state of one user
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserData {
    /// Profile, absent until onboarding completes
    pub profile: Option<Profile>,
    /// Daily logs in append order
    #[serde(default)]
    pub logs: Vec<DailyLog>,
}
