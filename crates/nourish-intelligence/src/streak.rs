// ABOUTME: Logging streak evaluation over the day-indexed meal log
// ABOUTME: A streak stays alive through yesterday so an untouched today never breaks it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Days, NaiveDate};
use nourish_core::models::DailyLog;

/// Number of consecutive days with at least one meal, ending today or yesterday
///
/// Entries without meals are ignored. If the most recent logged day is older
/// than yesterday the streak is broken and the result is zero.
#[must_use]
pub fn calculate_streak(logs: &[DailyLog], today: NaiveDate) -> u32 {
    let mut days: Vec<NaiveDate> = logs
        .iter()
        .filter(|log| log.has_meals())
        .map(|log| log.date)
        .collect();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();

    let Some(&latest) = days.first() else {
        return 0;
    };

    let yesterday = today.pred_opt();
    if latest != today && Some(latest) != yesterday {
        return 0;
    }

    let mut streak = 0;
    let mut cursor = Some(latest);
    for day in days {
        if Some(day) != cursor {
            break;
        }
        streak += 1;
        cursor = day.checked_sub_days(Days::new(1));
    }

    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use nourish_core::models::{Meal, MealType, QualityScore};

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn logged(date: NaiveDate) -> DailyLog {
        let mut log = DailyLog::empty(date);
        log.meals.push(Meal::new(
            MealType::Snack,
            Vec::new(),
            QualityScore::default(),
            None,
            Utc::now(),
        ));
        log
    }

    #[test]
    fn test_three_day_streak_anchored_at_yesterday() {
        let logs = vec![logged(date(1, 1)), logged(date(1, 2)), logged(date(1, 3))];
        assert_eq!(calculate_streak(&logs, date(1, 4)), 3);
    }

    #[test]
    fn test_gap_before_yesterday_breaks_streak() {
        let logs = vec![logged(date(1, 1)), logged(date(1, 2))];
        assert_eq!(calculate_streak(&logs, date(1, 4)), 0);
    }

    #[test]
    fn test_empty_today_entry_does_not_break() {
        let logs = vec![
            logged(date(1, 2)),
            logged(date(1, 3)),
            DailyLog::empty(date(1, 4)),
        ];
        assert_eq!(calculate_streak(&logs, date(1, 4)), 2);
    }

    #[test]
    fn test_stops_at_first_gap() {
        let logs = vec![
            logged(date(1, 1)),
            logged(date(1, 3)),
            logged(date(1, 4)),
        ];
        assert_eq!(calculate_streak(&logs, date(1, 4)), 2);
    }

    #[test]
    fn test_unordered_logs_across_month_boundary() {
        let logs = vec![logged(date(2, 1)), logged(date(1, 30)), logged(date(1, 31))];
        assert_eq!(calculate_streak(&logs, date(2, 1)), 3);
    }

    #[test]
    fn test_no_meals_is_zero() {
        assert_eq!(calculate_streak(&[], date(1, 1)), 0);
        assert_eq!(calculate_streak(&[DailyLog::empty(date(1, 1))], date(1, 1)), 0);
    }
}
