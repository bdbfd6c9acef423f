// ABOUTME: Daily log aggregation: appending meals, per-day totals, and range rollups
// ABOUTME: Every operation returns a fresh collection and leaves its input untouched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use nourish_core::models::{DailyLog, MacroTotals, Meal};

/// Result of appending a meal to the log collection
#[derive(Debug, Clone, PartialEq)]
pub struct AppendOutcome {
    /// Updated collection
    pub logs: Vec<DailyLog>,
    /// The day had no meals before this append
    pub was_empty: bool,
}

/// Find the entry for a date
#[must_use]
pub fn find_log(logs: &[DailyLog], date: NaiveDate) -> Option<&DailyLog> {
    logs.iter().find(|log| log.date == date)
}

/// Append a meal to the entry for `date`, creating the entry at the end if missing
///
/// Meals within a day keep insertion order.
#[must_use]
pub fn append_meal(logs: &[DailyLog], meal: Meal, date: NaiveDate) -> AppendOutcome {
    let mut logs = logs.to_vec();

    let was_empty = if let Some(entry) = logs.iter_mut().find(|log| log.date == date) {
        let was_empty = entry.meals.is_empty();
        entry.meals.push(meal);
        was_empty
    } else {
        let mut entry = DailyLog::empty(date);
        entry.meals.push(meal);
        logs.push(entry);
        true
    };

    AppendOutcome { logs, was_empty }
}

/// Calories and macros summed over the meals of one day
#[must_use]
pub fn daily_totals(log: &DailyLog) -> MacroTotals {
    log.meals.iter().map(Meal::totals).sum()
}

/// Guarantee an entry exists for `today`, appending an empty one if missing
#[must_use]
pub fn ensure_today_entry(logs: &[DailyLog], today: NaiveDate) -> Vec<DailyLog> {
    let mut logs = logs.to_vec();
    if !logs.iter().any(|log| log.date == today) {
        logs.push(DailyLog::empty(today));
    }
    logs
}

/// Record body weight on `date`, creating the entry if missing
#[must_use]
pub fn record_weight(logs: &[DailyLog], date: NaiveDate, weight_kg: f64) -> Vec<DailyLog> {
    let mut logs = logs.to_vec();
    if let Some(entry) = logs.iter_mut().find(|log| log.date == date) {
        entry.weight_kg = Some(weight_kg);
    } else {
        let mut entry = DailyLog::empty(date);
        entry.weight_kg = Some(weight_kg);
        logs.push(entry);
    }
    logs
}

/// Totals over every entry whose date falls in `from..=to`
///
/// An inverted range yields zero totals.
#[must_use]
pub fn period_totals(logs: &[DailyLog], from: NaiveDate, to: NaiveDate) -> MacroTotals {
    logs.iter()
        .filter(|log| (from..=to).contains(&log.date))
        .map(daily_totals)
        .sum()
}

/// Number of meals across every entry
#[must_use]
pub fn total_meal_count(logs: &[DailyLog]) -> usize {
    logs.iter().map(|log| log.meals.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use nourish_core::models::{Confidence, FoodItem, MealType, QualityScore};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn meal(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Meal {
        Meal::new(
            MealType::Lunch,
            vec![FoodItem {
                name: "plate".to_owned(),
                calories,
                protein_g,
                carbs_g,
                fat_g,
                portion: "1 plate".to_owned(),
                confidence: Confidence::Medium,
            }],
            QualityScore::default(),
            None,
            Utc::now(),
        )
    }

    #[test]
    fn test_append_creates_entry_at_end() {
        let logs = vec![DailyLog::empty(date(2))];
        let outcome = append_meal(&logs, meal(100.0, 1.0, 1.0, 1.0), date(1));

        assert!(outcome.was_empty);
        assert_eq!(outcome.logs.len(), 2);
        assert_eq!(outcome.logs[1].date, date(1));
        // input untouched
        assert_eq!(logs.len(), 1);
    }

    #[test]
    fn test_append_to_existing_keeps_order() {
        let first = meal(100.0, 1.0, 1.0, 1.0);
        let second = meal(200.0, 2.0, 2.0, 2.0);
        let outcome = append_meal(&[], first.clone(), date(1));
        let outcome = append_meal(&outcome.logs, second.clone(), date(1));

        assert!(!outcome.was_empty);
        assert_eq!(outcome.logs.len(), 1);
        assert_eq!(outcome.logs[0].meals, vec![first, second]);
    }

    #[test]
    fn test_append_to_empty_today_entry_is_first_of_day() {
        let logs = ensure_today_entry(&[], date(5));
        let outcome = append_meal(&logs, meal(100.0, 1.0, 1.0, 1.0), date(5));

        assert!(outcome.was_empty);
        assert_eq!(outcome.logs.len(), 1);
    }

    #[test]
    fn test_daily_totals_sums_meals() {
        let mut log = DailyLog::empty(date(1));
        log.meals.push(meal(200.0, 10.0, 20.0, 5.0));
        log.meals.push(meal(300.0, 20.0, 10.0, 15.0));

        let totals = daily_totals(&log);
        assert_eq!(
            totals,
            MacroTotals {
                calories: 500.0,
                protein_g: 30.0,
                carbs_g: 30.0,
                fat_g: 20.0,
            }
        );
    }

    #[test]
    fn test_daily_totals_empty_is_zero() {
        assert_eq!(daily_totals(&DailyLog::empty(date(1))), MacroTotals::ZERO);
    }

    #[test]
    fn test_ensure_today_entry_is_idempotent() {
        let once = ensure_today_entry(&[], date(3));
        let twice = ensure_today_entry(&once, date(3));
        assert_eq!(once, twice);
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn test_record_weight_overwrites() {
        let logs = record_weight(&[], date(1), 70.0);
        let logs = record_weight(&logs, date(1), 69.5);

        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].weight_kg, Some(69.5));
        assert!(!logs[0].has_meals());
    }

    #[test]
    fn test_period_totals_inclusive_range() {
        let outcome = append_meal(&[], meal(100.0, 1.0, 1.0, 1.0), date(1));
        let outcome = append_meal(&outcome.logs, meal(200.0, 2.0, 2.0, 2.0), date(2));
        let outcome = append_meal(&outcome.logs, meal(400.0, 4.0, 4.0, 4.0), date(3));

        let totals = period_totals(&outcome.logs, date(2), date(3));
        assert!((totals.calories - 600.0).abs() < f64::EPSILON);
        assert_eq!(period_totals(&outcome.logs, date(3), date(1)), MacroTotals::ZERO);
        assert_eq!(total_meal_count(&outcome.logs), 3);
    }
}
