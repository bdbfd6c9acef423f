// ABOUTME: In-memory application state for one user: profile, day logs and current streak
// ABOUTME: Orchestrates the engine for meal saving, badge unlocking, profile edits and templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tracker
//!
//! The tracker owns the state of a logged-in user and applies every
//! mutation through the pure engine in `nourish_intelligence`. It never
//! touches storage; callers take a [`Tracker::snapshot`] after each change
//! and hand it to the auto-saver.

use crate::logging::AppLogger;
use chrono::{DateTime, NaiveDate, Utc};
use nourish_core::errors::{AppError, AppResult};
use nourish_core::models::{
    ActivityLevel, Badge, Biometrics, DailyLog, DietaryPreference, FoodItem, GoalType,
    MacroTargets, MacroTotals, Meal, MealTemplate, MealType, Profile, QualityScore, Sex, Theme,
    UserData,
};
use nourish_intelligence::{
    append_meal, calculate_streak, calculate_targets, check_new_badges_with_targets, daily_totals,
    ensure_today_entry, find_log, record_weight, NutritionConfig,
};
use serde::Serialize;
use uuid::Uuid;

/// Answers collected by the onboarding flow
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingInput {
    /// Display name
    pub name: String,
    /// Calculator inputs
    pub biometrics: Biometrics,
    /// Weight the user is working towards (kg)
    pub target_weight_kg: f64,
    /// Dietary preference
    pub dietary_preference: DietaryPreference,
}

/// Partial profile edit; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    /// Age in years
    pub age: Option<u32>,
    /// Biological sex
    pub sex: Option<Sex>,
    /// Height (cm)
    pub height_cm: Option<f64>,
    /// Body weight (kg)
    pub weight_kg: Option<f64>,
    /// Target weight (kg)
    pub target_weight_kg: Option<f64>,
    /// Activity level
    pub activity_level: Option<ActivityLevel>,
    /// Goal
    pub goal: Option<GoalType>,
    /// Dietary preference
    pub dietary_preference: Option<DietaryPreference>,
}

/// A meal as submitted by the logger, before id and timestamp are assigned
#[derive(Debug, Clone, PartialEq)]
pub struct MealDraft {
    /// Breakfast, lunch, dinner or snack
    pub meal_type: MealType,
    /// Recognized or entered food items
    pub items: Vec<FoodItem>,
    /// Quality assessment
    pub quality: QualityScore,
    /// Photo reference, if any
    pub image_ref: Option<String>,
}

/// What happened when a meal was saved
#[derive(Debug, Clone, PartialEq)]
pub struct MealSaveOutcome {
    /// The stored meal
    pub meal: Meal,
    /// Today had no meals before this one
    pub first_meal_of_day: bool,
    /// Badges unlocked by this save, in catalog order
    pub unlocked: Vec<Badge>,
    /// First meal of the day or at least one badge unlocked
    pub celebrate: bool,
    /// Streak after the save
    pub streak: u32,
}

impl MealSaveOutcome {
    /// Badge to announce, if any
    #[must_use]
    pub fn headline_badge(&self) -> Option<&Badge> {
        self.unlocked.first()
    }
}

/// Today's progress against the targets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodaySummary {
    /// Calendar date
    pub date: NaiveDate,
    /// Eaten so far
    pub totals: MacroTotals,
    /// Daily targets, once onboarded
    pub targets: Option<MacroTargets>,
    /// Targets minus totals; negative when over
    pub remaining: Option<MacroTotals>,
    /// Meals logged today
    pub meal_count: usize,
    /// Current streak
    pub streak: u32,
}

/// Application state of one user
#[derive(Debug, Clone)]
pub struct Tracker {
    user_id: Uuid,
    profile: Option<Profile>,
    logs: Vec<DailyLog>,
    streak: u32,
    today: NaiveDate,
    nutrition: NutritionConfig,
}

impl Tracker {
    /// Build the state from a persisted snapshot, guaranteeing an entry for `today`
    /// and recomputing the profile's targets from its biometrics
    #[must_use]
    pub fn from_snapshot(
        user_id: Uuid,
        data: UserData,
        today: NaiveDate,
        nutrition: NutritionConfig,
    ) -> Self {
        let logs = ensure_today_entry(&data.logs, today);
        let streak = calculate_streak(&logs, today);
        // Targets always follow the biometrics, whatever the snapshot holds
        let profile = data.profile.map(|mut profile| {
            let biometrics = *profile.biometrics();
            profile.set_biometrics(biometrics, calculate_targets(&biometrics, &nutrition));
            profile
        });
        Self {
            user_id,
            profile,
            logs,
            streak,
            today,
            nutrition,
        }
    }

    /// Owning user
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// Profile, `None` until onboarding is complete
    #[must_use]
    pub const fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// All day entries in stored order
    #[must_use]
    pub fn logs(&self) -> &[DailyLog] {
        &self.logs
    }

    /// Current logging streak
    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    /// Date the tracker considers today
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Persistable copy of the state
    #[must_use]
    pub fn snapshot(&self) -> UserData {
        UserData {
            profile: self.profile.clone(),
            logs: self.logs.clone(),
        }
    }

    fn profile_mut(&mut self) -> AppResult<&mut Profile> {
        self.profile
            .as_mut()
            .ok_or_else(|| AppError::not_found("Profile"))
    }

    fn refresh_streak(&mut self) {
        let streak = calculate_streak(&self.logs, self.today);
        if streak != self.streak {
            AppLogger::log_streak_changed(self.user_id, self.streak, streak);
            self.streak = streak;
        }
    }

    /// Create the profile and its targets
    ///
    /// # Errors
    ///
    /// - `ResourceAlreadyExists` if the user is already onboarded
    /// - `InvalidInput` for a blank name or non-positive biometrics
    pub fn complete_onboarding(&mut self, input: OnboardingInput) -> AppResult<&Profile> {
        if self.profile.is_some() {
            return Err(AppError::already_exists("Profile"));
        }
        let name = input.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Name must not be empty"));
        }
        validate_biometrics(&input.biometrics, input.target_weight_kg)?;

        let targets = calculate_targets(&input.biometrics, &self.nutrition);
        tracing::info!(
            user.id = %self.user_id,
            bmr = targets.bmr,
            tdee = targets.tdee,
            calories = targets.macro_targets.calories,
            "Onboarding complete"
        );

        Ok(&*self.profile.insert(Profile::new(
            self.user_id,
            name,
            input.biometrics,
            input.target_weight_kg,
            input.dietary_preference,
            targets,
        )))
    }

    /// Edit biometrics or preferences, recomputing targets
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` before onboarding
    /// - `InvalidInput` for non-positive biometrics
    pub fn update_profile(&mut self, update: ProfileUpdate) -> AppResult<&Profile> {
        let nutrition = self.nutrition.clone();
        let profile = self.profile_mut()?;

        let current = *profile.biometrics();
        let biometrics = Biometrics {
            age: update.age.unwrap_or(current.age),
            sex: update.sex.unwrap_or(current.sex),
            height_cm: update.height_cm.unwrap_or(current.height_cm),
            weight_kg: update.weight_kg.unwrap_or(current.weight_kg),
            activity_level: update.activity_level.unwrap_or(current.activity_level),
            goal: update.goal.unwrap_or(current.goal),
        };
        let target_weight_kg = update.target_weight_kg.unwrap_or(profile.target_weight_kg);
        validate_biometrics(&biometrics, target_weight_kg)?;

        profile.set_biometrics(biometrics, calculate_targets(&biometrics, &nutrition));
        profile.target_weight_kg = target_weight_kg;
        if let Some(preference) = update.dietary_preference {
            profile.dietary_preference = preference;
        }

        tracing::info!(
            user.id = %profile.id,
            calories = profile.targets().macro_targets.calories,
            "Profile updated"
        );
        Ok(&*profile)
    }

    /// Change the display name
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` before onboarding, `InvalidInput` for a blank name
    pub fn rename(&mut self, name: &str) -> AppResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Name must not be empty"));
        }
        self.profile_mut()?.name = name.to_owned();
        Ok(())
    }

    /// Switch between light and dark theme, returning the new theme
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` before onboarding
    pub fn toggle_theme(&mut self) -> AppResult<Theme> {
        let profile = self.profile_mut()?;
        profile.theme = profile.theme.toggled();
        Ok(profile.theme)
    }

    /// Log a meal for today, then re-evaluate the streak and badges
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` before onboarding
    /// - `InvalidInput` if the draft has no food items, a negative or
    ///   non-finite item value, or a score outside `0..=100`
    pub fn save_meal(&mut self, draft: MealDraft, now: DateTime<Utc>) -> AppResult<MealSaveOutcome> {
        if self.profile.is_none() {
            return Err(AppError::not_found("Profile"));
        }
        if draft.items.is_empty() {
            return Err(AppError::invalid_input("A meal needs at least one food item"));
        }
        validate_items(&draft.items, &draft.quality)?;

        let meal = Meal::new(
            draft.meal_type,
            draft.items,
            draft.quality,
            draft.image_ref,
            now,
        );
        Ok(self.store_meal(meal, now))
    }

    fn store_meal(&mut self, meal: Meal, now: DateTime<Utc>) -> MealSaveOutcome {
        let outcome = append_meal(&self.logs, meal.clone(), self.today);
        self.logs = outcome.logs;
        self.refresh_streak();

        AppLogger::log_meal_saved(self.user_id, meal.id, meal.totals().calories, outcome.was_empty);

        let streak = self.streak;
        let unlocked = match self.profile.as_mut() {
            Some(profile) => {
                let unlocked: Vec<Badge> = check_new_badges_with_targets(
                    &self.logs,
                    &profile.badges,
                    streak,
                    &profile.targets().macro_targets,
                )
                .into_iter()
                .map(|definition| definition.unlock(now))
                .collect();
                profile.merge_badges(unlocked.iter().cloned());
                unlocked
            }
            None => Vec::new(),
        };
        for badge in &unlocked {
            AppLogger::log_badge_unlocked(self.user_id, badge.id.as_str());
        }

        MealSaveOutcome {
            meal,
            first_meal_of_day: outcome.was_empty,
            celebrate: outcome.was_empty || !unlocked.is_empty(),
            unlocked,
            streak,
        }
    }

    /// Record today's body weight
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a non-positive weight
    pub fn record_weight(&mut self, weight_kg: f64) -> AppResult<()> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(AppError::invalid_input("Weight must be positive"));
        }
        self.logs = record_weight(&self.logs, self.today, weight_kg);
        tracing::info!(user.id = %self.user_id, weight_kg, "Weight recorded");
        Ok(())
    }

    /// Most recently logged meal of today
    #[must_use]
    pub fn last_meal_today(&self) -> Option<&Meal> {
        find_log(&self.logs, self.today).and_then(|log| log.meals.last())
    }

    /// Save a logged meal as a reusable template
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` before onboarding or for an unknown meal
    /// - `InvalidInput` for a blank name
    pub fn save_template_from_meal(&mut self, name: &str, meal_id: Uuid) -> AppResult<&MealTemplate> {
        let name = template_name(name)?;
        let meal = self
            .logs
            .iter()
            .flat_map(|log| log.meals.iter())
            .find(|meal| meal.id == meal_id)
            .ok_or_else(|| AppError::not_found(format!("Meal {meal_id}")))?;
        let template = MealTemplate::from_meal(name, meal);
        self.push_template(template)
    }

    /// Save a template from food items
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound` before onboarding
    /// - `InvalidInput` for a blank name, no items or invalid item values
    pub fn save_template(
        &mut self,
        name: &str,
        items: Vec<FoodItem>,
        quality: QualityScore,
    ) -> AppResult<&MealTemplate> {
        let name = template_name(name)?;
        if items.is_empty() {
            return Err(AppError::invalid_input("A template needs at least one food item"));
        }
        validate_items(&items, &quality)?;
        self.push_template(MealTemplate::new(name, items, quality))
    }

    fn push_template(&mut self, template: MealTemplate) -> AppResult<&MealTemplate> {
        let templates = &mut self.profile_mut()?.saved_templates;
        templates.push(template);
        templates
            .last()
            .ok_or_else(|| AppError::internal("Template vanished after insert"))
    }

    /// Rename a template
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for an unknown template, `InvalidInput` for a blank name
    pub fn rename_template(&mut self, template_id: Uuid, name: &str) -> AppResult<()> {
        let name = template_name(name)?;
        let template = self
            .profile_mut()?
            .saved_templates
            .iter_mut()
            .find(|t| t.id == template_id)
            .ok_or_else(|| AppError::not_found(format!("Template {template_id}")))?;
        template.name = name.to_owned();
        Ok(())
    }

    /// Delete a template
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for an unknown template
    pub fn delete_template(&mut self, template_id: Uuid) -> AppResult<MealTemplate> {
        let templates = &mut self.profile_mut()?.saved_templates;
        let index = templates
            .iter()
            .position(|t| t.id == template_id)
            .ok_or_else(|| AppError::not_found(format!("Template {template_id}")))?;
        Ok(templates.remove(index))
    }

    /// Log a new meal filled from a template
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` before onboarding or for an unknown template
    pub fn log_template(
        &mut self,
        template_id: Uuid,
        meal_type: MealType,
        now: DateTime<Utc>,
    ) -> AppResult<MealSaveOutcome> {
        let meal = self
            .profile
            .as_ref()
            .ok_or_else(|| AppError::not_found("Profile"))?
            .template(template_id)
            .ok_or_else(|| AppError::not_found(format!("Template {template_id}")))?
            .instantiate(meal_type, now);
        Ok(self.store_meal(meal, now))
    }

    /// Move to a new calendar date
    pub fn roll_over(&mut self, today: NaiveDate) {
        if today == self.today {
            return;
        }
        tracing::debug!(user.id = %self.user_id, from = %self.today, to = %today, "Day rollover");
        self.today = today;
        self.logs = ensure_today_entry(&self.logs, today);
        self.refresh_streak();
    }

    /// Totals and remaining budget for today
    #[must_use]
    pub fn today_summary(&self) -> TodaySummary {
        let (totals, meal_count) = find_log(&self.logs, self.today)
            .map_or((MacroTotals::ZERO, 0), |log| (daily_totals(log), log.meals.len()));
        let targets = self.profile.as_ref().map(|p| p.targets().macro_targets);
        let remaining = targets.map(|t| MacroTotals {
            calories: t.calories - totals.calories,
            protein_g: t.protein_g - totals.protein_g,
            carbs_g: t.carbs_g - totals.carbs_g,
            fat_g: t.fat_g - totals.fat_g,
        });

        TodaySummary {
            date: self.today,
            totals,
            targets,
            remaining,
            meal_count,
            streak: self.streak,
        }
    }
}

fn template_name(name: &str) -> AppResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::invalid_input("Template name must not be empty"));
    }
    Ok(name)
}

fn validate_items(items: &[FoodItem], quality: &QualityScore) -> AppResult<()> {
    if !quality.score.is_finite() || !(0.0..=100.0).contains(&quality.score) {
        return Err(AppError::invalid_input("Quality score must be between 0 and 100"));
    }
    for item in items {
        let values = [item.calories, item.protein_g, item.carbs_g, item.fat_g];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(AppError::invalid_input(format!(
                "Food item '{}' has a negative or non-finite value",
                item.name
            )));
        }
    }
    Ok(())
}

fn validate_biometrics(biometrics: &Biometrics, target_weight_kg: f64) -> AppResult<()> {
    if biometrics.age == 0 {
        return Err(AppError::invalid_input("Age must be positive"));
    }
    for (label, value) in [
        ("Height", biometrics.height_cm),
        ("Weight", biometrics.weight_kg),
        ("Target weight", target_weight_kg),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(AppError::invalid_input(format!("{label} must be positive")));
        }
    }
    Ok(())
}
