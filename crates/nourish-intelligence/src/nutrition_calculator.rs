// ABOUTME: Nutrition target calculation: BMR, TDEE, and goal-based macronutrient targets
// ABOUTME: Pure and deterministic; recomputed whenever biometrics, activity, or goal change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Three-step pipeline turning a user's biometrics into daily targets:
//!
//! 1. BMR from the Mifflin-St Jeor equation (unrounded)
//! 2. TDEE as BMR times an activity factor (rounded to whole kcal)
//! 3. Goal-adjusted calories split into protein, carbs and fat grams
//!
//! Every gram value is rounded on its own, so `4p + 4c + 9f` may differ from
//! the calorie target by a few kcal. That approximation is accepted.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{
    ActivityFactorsConfig, BmrConfig, EnergyDensityConfig, GoalConfig, MacroSplit,
    NutritionConfig,
};
use nourish_core::models::{ActivityLevel, Biometrics, GoalType, MacroTargets, NutritionTargets, Sex};

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female: -161
///
/// No rounding is applied and no input range is enforced; validating
/// biometrics is the caller's concern.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, sex: Sex, config: &BmrConfig) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + sex_constant
}

/// Activity multiplier for a level
#[must_use]
pub const fn activity_factor(activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::LightlyActive => config.lightly_active,
        ActivityLevel::ModeratelyActive => config.moderately_active,
        ActivityLevel::VeryActive => config.very_active,
        ActivityLevel::Athlete => config.athlete,
    }
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = round(BMR x Activity Factor)
///
/// - Sedentary: 1.2
/// - Lightly active: 1.375
/// - Moderately active: 1.55
/// - Very active: 1.725
/// - Athlete: 1.9
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    (bmr * activity_factor(activity_level, config)).round()
}

/// Calculate daily calorie and macronutrient targets for a goal
///
/// - Lose weight: round(TDEE x 0.80), 35/35/30 protein/carbs/fat
/// - Gain muscle: round(TDEE x 1.10), 30/45/25
/// - Maintain: TDEE unchanged, 25/45/30
///
/// Grams are `round(calories x share / kcal_per_gram)`. A TDEE of zero yields
/// all-zero targets.
#[must_use]
pub fn calculate_macro_targets(
    tdee: f64,
    goal: GoalType,
    goals: &GoalConfig,
    energy: &EnergyDensityConfig,
) -> MacroTargets {
    let (calories, split) = match goal {
        GoalType::LoseWeight => (
            (tdee * goals.lose_weight_calorie_factor).round(),
            goals.lose_weight_split,
        ),
        GoalType::GainMuscle => (
            (tdee * goals.gain_muscle_calorie_factor).round(),
            goals.gain_muscle_split,
        ),
        GoalType::Maintain => (tdee, goals.maintain_split),
    };

    split_calories(calories, split, energy)
}

fn split_calories(calories: f64, split: MacroSplit, energy: &EnergyDensityConfig) -> MacroTargets {
    MacroTargets {
        calories,
        protein_g: (calories * split.protein / energy.protein).round(),
        carbs_g: (calories * split.carbs / energy.carbs).round(),
        fat_g: (calories * split.fat / energy.fat).round(),
    }
}

/// Calculate BMR, TDEE and macro targets in one pass
///
/// This is the entry point used whenever a profile is created or any of its
/// biometric, activity or goal fields change.
#[must_use]
pub fn calculate_targets(biometrics: &Biometrics, config: &NutritionConfig) -> NutritionTargets {
    let bmr = calculate_bmr(
        biometrics.weight_kg,
        biometrics.height_cm,
        biometrics.age,
        biometrics.sex,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, biometrics.activity_level, &config.activity_factors);
    let macro_targets = calculate_macro_targets(tdee, biometrics.goal, &config.goals, &config.energy);

    NutritionTargets {
        bmr,
        tdee,
        macro_targets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> NutritionConfig {
        NutritionConfig::default()
    }

    #[test]
    fn test_bmr_male_typical() {
        // 10 * 75 + 6.25 * 180 - 5 * 30 + 5 = 1730
        let bmr = calculate_bmr(75.0, 180.0, 30, Sex::Male, &config().bmr);
        assert!((bmr - 1730.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmr_female_typical() {
        // 10 * 60 + 6.25 * 165 - 5 * 25 - 161 = 1345.25
        let bmr = calculate_bmr(60.0, 165.0, 25, Sex::Female, &config().bmr);
        assert!((bmr - 1345.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmr_is_not_clamped_or_rounded() {
        let bmr = calculate_bmr(40.0, 140.0, 20, Sex::Female, &config().bmr);
        // 400 + 875 - 100 - 161 = 1014
        assert!((bmr - 1014.0).abs() < f64::EPSILON);

        let bmr = calculate_bmr(0.0, 0.0, 0, Sex::Female, &config().bmr);
        assert!((bmr + 161.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tdee_rounds_to_whole_kcal() {
        // 1345.25 * 1.375 = 1849.71875
        let tdee = calculate_tdee(1345.25, ActivityLevel::LightlyActive, &config().activity_factors);
        assert!((tdee - 1850.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_lose_weight_targets() {
        let c = config();
        let targets = calculate_macro_targets(2000.0, GoalType::LoseWeight, &c.goals, &c.energy);

        assert!((targets.calories - 1600.0).abs() < f64::EPSILON);
        assert!((targets.protein_g - 140.0).abs() < f64::EPSILON);
        assert!((targets.carbs_g - 140.0).abs() < f64::EPSILON);
        // 1600 * 0.30 / 9 = 53.33
        assert!((targets.fat_g - 53.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gain_muscle_targets() {
        let c = config();
        let targets = calculate_macro_targets(2000.0, GoalType::GainMuscle, &c.goals, &c.energy);

        assert!((targets.calories - 2200.0).abs() < f64::EPSILON);
        assert!((targets.protein_g - 165.0).abs() < f64::EPSILON);
        // 2200 * 0.45 / 4 = 247.5 rounds up
        assert!((targets.carbs_g - 248.0).abs() < f64::EPSILON);
        // 2200 * 0.25 / 9 = 61.1
        assert!((targets.fat_g - 61.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_tdee_yields_zero_targets() {
        let c = config();
        for goal in [GoalType::LoseWeight, GoalType::Maintain, GoalType::GainMuscle] {
            let targets = calculate_macro_targets(0.0, goal, &c.goals, &c.energy);
            assert_eq!(targets, MacroTargets::default());
        }
    }
}
