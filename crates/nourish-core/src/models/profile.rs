// ABOUTME: User profile with biometrics, goals, derived nutrition targets, badges and templates
// ABOUTME: Targets are only ever replaced together with the biometrics they derive from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::badge::{Badge, BadgeId};
use super::meal::MealTemplate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Biological sex used by the BMR equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Training twice a day
    Athlete,
}

/// Body composition goal driving the calorie adjustment and macro split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Caloric deficit
    LoseWeight,
    /// Caloric balance
    #[default]
    Maintain,
    /// Caloric surplus
    GainMuscle,
}

/// Dietary preference forwarded to recipe and coaching collaborators
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    /// Eats meat and fish
    #[default]
    NonVegetarian,
    /// No meat or fish
    Vegetarian,
}

/// Display theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light mode
    #[default]
    Light,
    /// Dark mode
    Dark,
}

impl Theme {
    /// The other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Inputs of the nutrition calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Biometrics {
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Height in centimeters
    pub height_cm: f64,
    /// Current body weight in kilograms
    pub weight_kg: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Goal
    pub goal: GoalType,
}

/// Daily calorie and macronutrient targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MacroTargets {
    /// Energy target (kcal)
    pub calories: f64,
    /// Protein target (grams)
    pub protein_g: f64,
    /// Carbohydrate target (grams)
    pub carbs_g: f64,
    /// Fat target (grams)
    pub fat_g: f64,
}

/// Everything the calculator derives from [`Biometrics`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct NutritionTargets {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Goal-adjusted macro targets
    pub macro_targets: MacroTargets,
}

/// User profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Same identifier as the owning account
    pub id: Uuid,
    /// Display name
    pub name: String,
    biometrics: Biometrics,
    /// Weight the user is working towards (kg)
    pub target_weight_kg: f64,
    /// Dietary preference
    #[serde(default)]
    pub dietary_preference: DietaryPreference,
    targets: NutritionTargets,
    /// Unlocked badges, at most one per badge id
    #[serde(default)]
    pub badges: Vec<Badge>,
    /// Saved meal templates
    #[serde(default)]
    pub saved_templates: Vec<MealTemplate>,
    /// Display theme
    #[serde(default)]
    pub theme: Theme,
}

impl Profile {
    /// Create a profile from biometrics and the targets computed for them
    #[must_use]
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        biometrics: Biometrics,
        target_weight_kg: f64,
        dietary_preference: DietaryPreference,
        targets: NutritionTargets,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            biometrics,
            target_weight_kg,
            dietary_preference,
            targets,
            badges: Vec::new(),
            saved_templates: Vec::new(),
            theme: Theme::default(),
        }
    }

    /// Current biometrics
    #[must_use]
    pub const fn biometrics(&self) -> &Biometrics {
        &self.biometrics
    }

    /// Targets derived from the current biometrics
    #[must_use]
    pub const fn targets(&self) -> &NutritionTargets {
        &self.targets
    }

    /// Replace biometrics together with their freshly computed targets
    pub fn set_biometrics(&mut self, biometrics: Biometrics, targets: NutritionTargets) {
        self.biometrics = biometrics;
        self.targets = targets;
    }

    /// Whether a badge with this id is already owned
    #[must_use]
    pub fn has_badge(&self, id: BadgeId) -> bool {
        self.badges.iter().any(|badge| badge.id == id)
    }

    /// Merge newly unlocked badges, ignoring any already owned
    ///
    /// Returns how many badges were actually added.
    pub fn merge_badges(&mut self, unlocked: impl IntoIterator<Item = Badge>) -> usize {
        let mut added = 0;
        for badge in unlocked {
            if !self.has_badge(badge.id) {
                self.badges.push(badge);
                added += 1;
            }
        }
        added
    }

    /// Find a saved template
    #[must_use]
    pub fn template(&self, id: Uuid) -> Option<&MealTemplate> {
        self.saved_templates.iter().find(|t| t.id == id)
    }
}
