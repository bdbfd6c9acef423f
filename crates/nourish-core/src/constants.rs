// ABOUTME: Application-wide constants for nutrition math, gamification, and persistence
// ABOUTME: Energy densities, badge thresholds, autosave timing, and export headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Carbohydrates: 4 kcal/g
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Gamification thresholds
pub mod gamification {
    /// Streak length unlocking the "On Fire" badge
    pub const STREAK_SHORT_DAYS: u32 = 3;
    /// Streak length unlocking the "Unstoppable" badge
    pub const STREAK_WEEK_DAYS: u32 = 7;
    /// Streak length unlocking the "Habit Master" badge
    pub const STREAK_FORTNIGHT_DAYS: u32 = 14;
    /// Minimum meal quality score for the "Clean Eater" badge
    pub const HIGH_QUALITY_SCORE: f64 = 80.0;
    /// Allowed relative deviation from every macro target for a perfect day
    pub const PERFECT_DAY_TOLERANCE: f64 = 0.10;
}

/// Persistence defaults
pub mod persistence {
    /// Quiet period before staged state is written (milliseconds)
    pub const DEFAULT_AUTOSAVE_DEBOUNCE_MS: u64 = 500;
    /// Capacity of the autosave command channel
    pub const AUTOSAVE_CHANNEL_CAPACITY: usize = 64;
    /// Application directory name under the platform data dir
    pub const APP_DIR_NAME: &str = "nourish";
    /// File holding all registered accounts
    pub const ACCOUNTS_FILE: &str = "accounts.json";
    /// Directory holding one snapshot file per user
    pub const USER_DATA_DIR: &str = "users";
}

/// CSV export layout
pub mod export {
    /// Header row of the history export
    pub const CSV_HEADERS: [&str; 6] = [
        "Date",
        "Total Calories",
        "Total Protein (g)",
        "Total Carbs (g)",
        "Total Fat (g)",
        "Meals Count",
    ];
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the logging layer
    pub const NOURISH: &str = "nourish";
}
