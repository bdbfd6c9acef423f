// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides dates, food items, onboarding answers and ready-made trackers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nourish`

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use nourish::tracker::{MealDraft, OnboardingInput, Tracker};
use nourish_core::models::{
    ActivityLevel, Biometrics, Confidence, DailyLog, DietaryPreference, FoodItem, GoalType, Meal,
    MealType, QualityScore, Sex, UserData,
};
use nourish_intelligence::NutritionConfig;
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn noon(day: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_hms_opt(12, 0, 0).unwrap())
}

pub fn food(name: &str, calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> FoodItem {
    FoodItem {
        name: name.to_owned(),
        calories,
        protein_g,
        carbs_g,
        fat_g,
        portion: "1 serving".to_owned(),
        confidence: Confidence::High,
    }
}

pub fn quality(score: f64) -> QualityScore {
    QualityScore {
        score,
        explanation: "test".to_owned(),
        suggestions: Vec::new(),
    }
}

pub fn draft(score: f64, items: Vec<FoodItem>) -> MealDraft {
    MealDraft {
        meal_type: MealType::Lunch,
        items,
        quality: quality(score),
        image_ref: None,
    }
}

/// 30 year old male, 180 cm, 75 kg, moderately active, maintaining
///
/// BMR 1730, TDEE 2682, targets 2682 kcal / 168 P / 302 C / 89 F
pub fn biometrics() -> Biometrics {
    Biometrics {
        age: 30,
        sex: Sex::Male,
        height_cm: 180.0,
        weight_kg: 75.0,
        activity_level: ActivityLevel::ModeratelyActive,
        goal: GoalType::Maintain,
    }
}

pub fn onboarding_input() -> OnboardingInput {
    OnboardingInput {
        name: "Sam".to_owned(),
        biometrics: biometrics(),
        target_weight_kg: 72.0,
        dietary_preference: DietaryPreference::NonVegetarian,
    }
}

/// Day entry holding one meal
pub fn logged_day(day: NaiveDate, score: f64) -> DailyLog {
    let mut log = DailyLog::empty(day);
    log.meals.push(Meal::new(
        MealType::Dinner,
        vec![food("rice bowl", 600.0, 20.0, 90.0, 15.0)],
        quality(score),
        None,
        noon(day),
    ));
    log
}

pub fn tracker_with(data: UserData, today: NaiveDate) -> Tracker {
    Tracker::from_snapshot(Uuid::new_v4(), data, today, NutritionConfig::default())
}

/// Tracker of a freshly onboarded user with no meals
pub fn onboarded_tracker(today: NaiveDate) -> Tracker {
    let mut tracker = tracker_with(UserData::default(), today);
    tracker.complete_onboarding(onboarding_input()).unwrap();
    tracker
}
