// ABOUTME: Badge unlock evaluation against the static badge catalog
// ABOUTME: Reports only badges whose conditions hold and which the user does not own yet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Badge Evaluator
//!
//! | badge | condition |
//! |---|---|
//! | `first_log` | at least one meal logged |
//! | `streak_3` / `streak_7` / `streak_14` | current streak reaches the threshold |
//! | `quality_80` | the last log entry holds a meal scoring 80 or more |
//! | `perfect_day` | the last log entry's totals sit within 10% of every non-zero target |
//!
//! Conditions are evaluated independently on every call. Callers stamp the
//! unlock time and merge the result into the profile.

use crate::aggregation::{daily_totals, total_meal_count};
use nourish_core::constants::gamification::{
    HIGH_QUALITY_SCORE, PERFECT_DAY_TOLERANCE, STREAK_FORTNIGHT_DAYS, STREAK_SHORT_DAYS,
    STREAK_WEEK_DAYS,
};
use nourish_core::models::{Badge, BadgeDefinition, BadgeId, DailyLog, MacroTargets, BADGE_CATALOG};

/// Newly earned badges without macro targets, in catalog order
///
/// `perfect_day` needs targets and is never reported here; use
/// [`check_new_badges_with_targets`] for the full catalog.
#[must_use]
pub fn check_new_badges(
    logs: &[DailyLog],
    owned: &[Badge],
    current_streak: u32,
) -> Vec<&'static BadgeDefinition> {
    evaluate(logs, owned, current_streak, None)
}

/// Newly earned badges including `perfect_day`, in catalog order
#[must_use]
pub fn check_new_badges_with_targets(
    logs: &[DailyLog],
    owned: &[Badge],
    current_streak: u32,
    targets: &MacroTargets,
) -> Vec<&'static BadgeDefinition> {
    evaluate(logs, owned, current_streak, Some(targets))
}

fn evaluate(
    logs: &[DailyLog],
    owned: &[Badge],
    current_streak: u32,
    targets: Option<&MacroTargets>,
) -> Vec<&'static BadgeDefinition> {
    BADGE_CATALOG
        .iter()
        .filter(|definition| !owned.iter().any(|badge| badge.id == definition.id))
        .filter(|definition| match definition.id {
            BadgeId::FirstLog => total_meal_count(logs) >= 1,
            BadgeId::Streak3 => current_streak >= STREAK_SHORT_DAYS,
            BadgeId::Streak7 => current_streak >= STREAK_WEEK_DAYS,
            BadgeId::Streak14 => current_streak >= STREAK_FORTNIGHT_DAYS,
            BadgeId::Quality80 => last_log_has_high_quality_meal(logs),
            BadgeId::PerfectDay => match (targets, logs.last()) {
                (Some(targets), Some(log)) => is_perfect_day(log, targets),
                _ => false,
            },
        })
        .collect()
}

// Positional last entry, not the most recent date
fn last_log_has_high_quality_meal(logs: &[DailyLog]) -> bool {
    logs.last().is_some_and(|log| {
        log.meals
            .iter()
            .any(|meal| meal.quality.score >= HIGH_QUALITY_SCORE)
    })
}

/// Whether a day's totals land within tolerance of every non-zero target
///
/// Targets of zero are skipped. All-zero targets never make a perfect day.
#[must_use]
pub fn is_perfect_day(log: &DailyLog, targets: &MacroTargets) -> bool {
    let totals = daily_totals(log);
    let pairs = [
        (totals.calories, targets.calories),
        (totals.protein_g, targets.protein_g),
        (totals.carbs_g, targets.carbs_g),
        (totals.fat_g, targets.fat_g),
    ];

    let mut checked = 0;
    for (actual, target) in pairs {
        if target <= 0.0 {
            continue;
        }
        if (actual - target).abs() > target * PERFECT_DAY_TOLERANCE {
            return false;
        }
        checked += 1;
    }
    checked > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use nourish_core::models::{Confidence, FoodItem, Meal, MealType, QualityScore};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn meal(score: f64, calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Meal {
        Meal::new(
            MealType::Dinner,
            vec![FoodItem {
                name: "bowl".to_owned(),
                calories,
                protein_g,
                carbs_g,
                fat_g,
                portion: "1 bowl".to_owned(),
                confidence: Confidence::High,
            }],
            QualityScore {
                score,
                explanation: String::new(),
                suggestions: Vec::new(),
            },
            None,
            Utc::now(),
        )
    }

    fn log_with(date: NaiveDate, meals: Vec<Meal>) -> DailyLog {
        DailyLog {
            date,
            meals,
            weight_kg: None,
        }
    }

    fn ids(definitions: &[&BadgeDefinition]) -> Vec<BadgeId> {
        definitions.iter().map(|d| d.id).collect()
    }

    #[test]
    fn test_single_high_quality_meal() {
        let logs = vec![log_with(date(1), vec![meal(85.0, 500.0, 30.0, 50.0, 15.0)])];
        let unlocked = check_new_badges(&logs, &[], 1);
        assert_eq!(ids(&unlocked), vec![BadgeId::FirstLog, BadgeId::Quality80]);
    }

    #[test]
    fn test_streak_thresholds_in_catalog_order() {
        let logs = vec![log_with(date(1), vec![meal(10.0, 1.0, 1.0, 1.0, 1.0)])];
        let unlocked = check_new_badges(&logs, &[], 14);
        assert_eq!(
            ids(&unlocked),
            vec![
                BadgeId::FirstLog,
                BadgeId::Streak3,
                BadgeId::Streak7,
                BadgeId::Streak14
            ]
        );
    }

    #[test]
    fn test_owned_badges_are_not_reported() {
        let logs = vec![log_with(date(1), vec![meal(90.0, 1.0, 1.0, 1.0, 1.0)])];
        let owned: Vec<Badge> = check_new_badges(&logs, &[], 3)
            .into_iter()
            .map(|d| d.unlock(Utc::now()))
            .collect();

        assert!(check_new_badges(&logs, &owned, 3).is_empty());
    }

    #[test]
    fn test_quality_uses_positional_last_entry() {
        // High scoring meal sits on the later date but not in the last position
        let logs = vec![
            log_with(date(5), vec![meal(95.0, 1.0, 1.0, 1.0, 1.0)]),
            log_with(date(4), vec![meal(20.0, 1.0, 1.0, 1.0, 1.0)]),
        ];
        assert!(!ids(&check_new_badges(&logs, &[], 0)).contains(&BadgeId::Quality80));
    }

    #[test]
    fn test_empty_logs_unlock_nothing() {
        assert!(check_new_badges(&[], &[], 0).is_empty());
    }

    #[test]
    fn test_perfect_day_within_tolerance() {
        let targets = MacroTargets {
            calories: 2000.0,
            protein_g: 150.0,
            carbs_g: 200.0,
            fat_g: 67.0,
        };
        let hit = log_with(date(1), vec![meal(50.0, 1950.0, 160.0, 185.0, 70.0)]);
        let miss = log_with(date(1), vec![meal(50.0, 1950.0, 100.0, 185.0, 70.0)]);

        assert!(is_perfect_day(&hit, &targets));
        assert!(!is_perfect_day(&miss, &targets));

        let unlocked = check_new_badges_with_targets(&[hit.clone()], &[], 0, &targets);
        assert!(ids(&unlocked).contains(&BadgeId::PerfectDay));
        assert!(!ids(&check_new_badges(&[hit], &[], 0)).contains(&BadgeId::PerfectDay));
    }

    #[test]
    fn test_perfect_day_needs_a_target() {
        let log = log_with(date(1), Vec::new());
        assert!(!is_perfect_day(&log, &MacroTargets::default()));
    }
}
