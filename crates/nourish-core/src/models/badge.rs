// ABOUTME: Achievement badge catalog and unlocked badge records
// ABOUTME: The catalog is static; a profile owns at most one Badge per BadgeId
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a badge definition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BadgeId {
    /// Logged the first meal
    #[serde(rename = "first_log")]
    FirstLog,
    /// Three day streak
    #[serde(rename = "streak_3")]
    Streak3,
    /// Seven day streak
    #[serde(rename = "streak_7")]
    Streak7,
    /// Fourteen day streak
    #[serde(rename = "streak_14")]
    Streak14,
    /// Meal scored 80 or more
    #[serde(rename = "quality_80")]
    Quality80,
    /// Every macro within tolerance of its target for a day
    #[serde(rename = "perfect_day")]
    PerfectDay,
}

impl BadgeId {
    /// Wire name of the badge
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstLog => "first_log",
            Self::Streak3 => "streak_3",
            Self::Streak7 => "streak_7",
            Self::Streak14 => "streak_14",
            Self::Quality80 => "quality_80",
            Self::PerfectDay => "perfect_day",
        }
    }

    /// Catalog entry for this id
    #[must_use]
    pub fn definition(self) -> &'static BadgeDefinition {
        // Every id has exactly one catalog row, in declaration order
        &BADGE_CATALOG[self as usize]
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeDefinition {
    /// Identifier
    pub id: BadgeId,
    /// Display name
    pub name: &'static str,
    /// What the user did to earn it
    pub description: &'static str,
    /// Emoji icon
    pub icon: &'static str,
}

impl BadgeDefinition {
    /// Stamp this definition as unlocked at `at`
    #[must_use]
    pub fn unlock(&self, at: DateTime<Utc>) -> Badge {
        Badge {
            id: self.id,
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            icon: self.icon.to_owned(),
            unlocked_at: at,
        }
    }
}

/// Every badge that can be earned, indexed by `BadgeId as usize`
pub static BADGE_CATALOG: [BadgeDefinition; 6] = [
    BadgeDefinition {
        id: BadgeId::FirstLog,
        name: "First Step",
        description: "Logged your first meal",
        icon: "🌱",
    },
    BadgeDefinition {
        id: BadgeId::Streak3,
        name: "On Fire",
        description: "3-day logging streak",
        icon: "🔥",
    },
    BadgeDefinition {
        id: BadgeId::Streak7,
        name: "Unstoppable",
        description: "7-day logging streak",
        icon: "🚀",
    },
    BadgeDefinition {
        id: BadgeId::Streak14,
        name: "Habit Master",
        description: "14-day logging streak",
        icon: "👑",
    },
    BadgeDefinition {
        id: BadgeId::Quality80,
        name: "Clean Eater",
        description: "Logged a meal with 80+ quality score",
        icon: "🥗",
    },
    BadgeDefinition {
        id: BadgeId::PerfectDay,
        name: "Perfect Day",
        description: "Hit all macro targets within 10%",
        icon: "🎯",
    },
];

/// A badge owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Identifier of the definition
    pub id: BadgeId,
    /// Display name at unlock time
    pub name: String,
    /// Description at unlock time
    pub description: String,
    /// Emoji icon
    pub icon: String,
    /// When the badge was granted
    pub unlocked_at: DateTime<Utc>,
}
