// ABOUTME: Progress views over the meal log: day history, calorie/weight series, CSV export
// ABOUTME: History lists only days with meals, most recent first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::aggregation::daily_totals;
use chrono::NaiveDate;
use nourish_core::constants::export::CSV_HEADERS;
use nourish_core::models::{DailyLog, MacroTotals};
use serde::Serialize;
use std::fmt::Write as _;

/// Totals of one logged day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    /// Calendar date
    pub date: NaiveDate,
    /// Summed calories and macros
    pub totals: MacroTotals,
    /// Number of meals logged
    pub meal_count: usize,
}

/// One point of the calorie and body weight chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// Calendar date
    pub date: NaiveDate,
    /// Calories eaten that day
    pub calories: f64,
    /// Recorded weight, or the profile weight when none was recorded
    pub weight_kg: f64,
}

/// Days with at least one meal, most recent first
#[must_use]
pub fn history(logs: &[DailyLog]) -> Vec<DaySummary> {
    let mut days: Vec<DaySummary> = logs
        .iter()
        .filter(|log| log.has_meals())
        .map(|log| DaySummary {
            date: log.date,
            totals: daily_totals(log),
            meal_count: log.meals.len(),
        })
        .collect();
    days.sort_by(|a, b| b.date.cmp(&a.date));
    days
}

/// Calories and weight per entry, in stored order
#[must_use]
pub fn calorie_weight_series(logs: &[DailyLog], fallback_weight_kg: f64) -> Vec<TrendPoint> {
    logs.iter()
        .map(|log| TrendPoint {
            date: log.date,
            calories: daily_totals(log).calories,
            weight_kg: log.weight_kg.unwrap_or(fallback_weight_kg),
        })
        .collect()
}

/// Render the history as CSV, or `None` when nothing has been logged
///
/// Rows are newline separated with no trailing newline.
#[must_use]
pub fn export_csv(logs: &[DailyLog]) -> Option<String> {
    let days = history(logs);
    if days.is_empty() {
        return None;
    }

    let mut csv = CSV_HEADERS.join(",");
    for day in days {
        // Writing into a String cannot fail
        let _ = write!(
            csv,
            "\n{},{},{},{},{},{}",
            day.date,
            day.totals.calories,
            day.totals.protein_g,
            day.totals.carbs_g,
            day.totals.fat_g,
            day.meal_count
        );
    }
    Some(csv)
}

/// Suggested file name for an export made on `date`
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("nourish_report_{date}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use nourish_core::models::{Confidence, FoodItem, Meal, MealType, QualityScore};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    fn log_with_calories(date: NaiveDate, calories: &[f64]) -> DailyLog {
        let mut log = DailyLog::empty(date);
        for &kcal in calories {
            log.meals.push(Meal::new(
                MealType::Lunch,
                vec![FoodItem {
                    name: "rice".to_owned(),
                    calories: kcal,
                    protein_g: 10.0,
                    carbs_g: 20.5,
                    fat_g: 2.0,
                    portion: "1 cup".to_owned(),
                    confidence: Confidence::Low,
                }],
                QualityScore::default(),
                None,
                Utc::now(),
            ));
        }
        log
    }

    #[test]
    fn test_history_skips_empty_days_and_sorts_descending() {
        let logs = vec![
            log_with_calories(date(2), &[100.0]),
            DailyLog::empty(date(3)),
            log_with_calories(date(1), &[200.0, 300.0]),
        ];
        let days = history(&logs);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, date(2));
        assert_eq!(days[1].meal_count, 2);
        assert!((days[1].totals.calories - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_series_falls_back_to_profile_weight() {
        let mut weighed = DailyLog::empty(date(2));
        weighed.weight_kg = Some(71.2);
        let logs = vec![log_with_calories(date(1), &[400.0]), weighed];

        let series = calorie_weight_series(&logs, 72.0);
        assert_eq!(series.len(), 2);
        assert!((series[0].weight_kg - 72.0).abs() < f64::EPSILON);
        assert!((series[0].calories - 400.0).abs() < f64::EPSILON);
        assert!((series[1].weight_kg - 71.2).abs() < f64::EPSILON);
        assert!(series[1].calories.abs() < f64::EPSILON);
    }

    #[test]
    fn test_export_csv_layout() {
        let logs = vec![
            log_with_calories(date(1), &[500.0]),
            log_with_calories(date(2), &[250.0, 250.0]),
        ];
        let csv = export_csv(&logs).unwrap();

        assert_eq!(
            csv,
            "Date,Total Calories,Total Protein (g),Total Carbs (g),Total Fat (g),Meals Count\n\
             2024-05-02,500,20,41,4,2\n\
             2024-05-01,500,10,20.5,2,1"
        );
    }

    #[test]
    fn test_export_csv_without_meals_is_none() {
        assert!(export_csv(&[]).is_none());
        assert!(export_csv(&[DailyLog::empty(date(1))]).is_none());
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(date(9)), "nourish_report_2024-05-09.csv");
    }
}
