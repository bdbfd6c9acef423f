// ABOUTME: Data model for profiles, daily logs, meals, badges, templates, and accounts
// ABOUTME: Re-exports all model types for convenient access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Accounts and persisted user snapshots
pub mod account;
/// Badge catalog and owned badges
pub mod badge;
/// Day-indexed log entries
pub mod log;
/// Meals, food items, quality scores, templates
pub mod meal;
/// Profiles, biometrics and targets
pub mod profile;

pub use account::{UserAccount, UserData};
pub use badge::{Badge, BadgeDefinition, BadgeId, BADGE_CATALOG};
pub use log::DailyLog;
pub use meal::{Confidence, FoodItem, MacroTotals, Meal, MealTemplate, MealType, QualityScore};
pub use profile::{
    ActivityLevel, Biometrics, DietaryPreference, GoalType, MacroTargets, NutritionTargets,
    Profile, Sex, Theme,
};
