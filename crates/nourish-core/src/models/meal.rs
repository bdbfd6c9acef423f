// ABOUTME: Meal, food item, quality score, and meal template definitions
// ABOUTME: Meal totals are derived from food items at construction and never edited afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use uuid::Uuid;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Parse meal type from string, case-insensitive
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            "snack" => Some(Self::Snack),
            _ => None,
        }
    }
}

/// How confident the food recognizer was about an item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Confidence {
    /// Clear match
    High,
    /// Plausible match
    #[default]
    Medium,
    /// Rough guess
    Low,
}

/// Individual food item within a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food name
    pub name: String,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Free-form portion description ("1 cup", "150 g")
    pub portion: String,
    /// Recognition confidence
    #[serde(default)]
    pub confidence: Confidence,
}

impl FoodItem {
    /// Macro contribution of this item
    #[must_use]
    pub const fn macros(&self) -> MacroTotals {
        MacroTotals {
            calories: self.calories,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
        }
    }
}

/// Nutritional desirability rating produced by an external evaluator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QualityScore {
    /// Score from 0 to 100
    pub score: f64,
    /// Why the meal got this score
    pub explanation: String,
    /// How the meal could be improved
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Summed calories and macronutrients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MacroTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
}

impl MacroTotals {
    /// All-zero totals
    pub const ZERO: Self = Self {
        calories: 0.0,
        protein_g: 0.0,
        carbs_g: 0.0,
        fat_g: 0.0,
    };
}

impl Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fat_g: self.fat_g + rhs.fat_g,
        }
    }
}

impl AddAssign for MacroTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// A logged meal
///
/// `totals` always equals the sum over `items`; both are private to
/// construction so the denormalized values cannot drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Unique meal identifier
    pub id: Uuid,
    /// When the meal was logged
    pub timestamp: DateTime<Utc>,
    /// Breakfast, lunch, dinner or snack
    pub meal_type: MealType,
    /// Reference to an analyzed photo, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    items: Vec<FoodItem>,
    totals: MacroTotals,
    /// Quality assessment of the meal
    pub quality: QualityScore,
}

impl Meal {
    /// Build a meal, deriving its totals from the food items
    #[must_use]
    pub fn new(
        meal_type: MealType,
        items: Vec<FoodItem>,
        quality: QualityScore,
        image_ref: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let totals = items.iter().map(FoodItem::macros).sum();
        Self {
            id: Uuid::new_v4(),
            timestamp,
            meal_type,
            image_ref,
            items,
            totals,
            quality,
        }
    }

    /// Food items making up the meal
    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Calories and macros summed over the items
    #[must_use]
    pub const fn totals(&self) -> MacroTotals {
        self.totals
    }
}

/// A named, reusable meal composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealTemplate {
    /// Unique template identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    items: Vec<FoodItem>,
    totals: MacroTotals,
    /// Quality score carried over to instantiated meals
    pub quality: QualityScore,
}

impl MealTemplate {
    /// Create a template from a set of food items
    #[must_use]
    pub fn new(name: impl Into<String>, items: Vec<FoodItem>, quality: QualityScore) -> Self {
        let totals = items.iter().map(FoodItem::macros).sum();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            items,
            totals,
            quality,
        }
    }

    /// Snapshot an already logged meal
    #[must_use]
    pub fn from_meal(name: impl Into<String>, meal: &Meal) -> Self {
        Self::new(name, meal.items.clone(), meal.quality.clone())
    }

    /// Food items of the template
    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Precomputed totals
    #[must_use]
    pub const fn totals(&self) -> MacroTotals {
        self.totals
    }

    /// Fast-fill a new meal from this template
    #[must_use]
    pub fn instantiate(&self, meal_type: MealType, timestamp: DateTime<Utc>) -> Meal {
        Meal::new(
            meal_type,
            self.items.clone(),
            self.quality.clone(),
            None,
            timestamp,
        )
    }
}
