// ABOUTME: Day-indexed meal log entry keyed by local calendar date
// ABOUTME: Holds the meals of one day in insertion order and an optional body weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal::Meal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything logged on one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    /// Local calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Meals in the order they were logged
    #[serde(default)]
    pub meals: Vec<Meal>,
    /// Body weight recorded on this date (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

impl DailyLog {
    /// An entry with no meals
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            meals: Vec::new(),
            weight_kg: None,
        }
    }

    /// Whether at least one meal was logged
    #[must_use]
    pub fn has_meals(&self) -> bool {
        !self.meals.is_empty()
    }
}
