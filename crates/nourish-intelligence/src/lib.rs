// ABOUTME: Nutrition and gamification engine for the Nourish tracker
// ABOUTME: Pure calculator, log aggregation, streak and badge evaluation, progress trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nourish Intelligence
//!
//! Synchronous, side-effect free engine. Every function takes the current
//! state by reference and returns new values; persistence and clocks belong
//! to the caller.
//!
//! ## Modules
//!
//! - **config**: Mifflin-St Jeor coefficients, activity factors, goal splits
//! - **`nutrition_calculator`**: BMR, TDEE and macro targets
//! - **aggregation**: appending meals and summing daily logs
//! - **streak**: consecutive logging days
//! - **badges**: badge unlock evaluation
//! - **trends**: history, calorie/weight series, CSV export

/// Calculator configuration
pub mod config;

/// BMR, TDEE and macro target calculation
pub mod nutrition_calculator;

/// Daily log aggregation
pub mod aggregation;

/// Logging streak evaluation
pub mod streak;

/// Badge unlock evaluation
pub mod badges;

/// Progress history and export
pub mod trends;

pub use aggregation::{
    append_meal, daily_totals, ensure_today_entry, find_log, period_totals, record_weight,
    total_meal_count, AppendOutcome,
};
pub use badges::{check_new_badges, check_new_badges_with_targets, is_perfect_day};
pub use config::NutritionConfig;
pub use nutrition_calculator::{
    calculate_bmr, calculate_macro_targets, calculate_targets, calculate_tdee,
};
pub use streak::calculate_streak;
pub use trends::{calorie_weight_series, export_csv, export_file_name, history, DaySummary, TrendPoint};
