// ABOUTME: Nutrition calculator configuration with the Mifflin-St Jeor and activity constants
// ABOUTME: Defaults reproduce the published coefficients and the goal-based macro splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use nourish_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use serde::{Deserialize, Serialize};

/// Nutrition calculation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-specific calorie adjustment and macro split
    pub goals: GoalConfig,
    /// Energy density of each macronutrient
    pub energy: EnergyDensityConfig,
}

/// Mifflin-St Jeor coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Lightly active: 1.375
    pub lightly_active: f64,
    /// Moderately active: 1.55
    pub moderately_active: f64,
    /// Very active: 1.725
    pub very_active: f64,
    /// Athlete: 1.9
    pub athlete: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            athlete: 1.9,
        }
    }
}

/// Share of calories assigned to each macronutrient (fractions of 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein share
    pub protein: f64,
    /// Carbohydrate share
    pub carbs: f64,
    /// Fat share
    pub fat: f64,
}

/// Calorie adjustment and macro split per goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalConfig {
    /// Calorie multiplier when losing weight (20% deficit)
    pub lose_weight_calorie_factor: f64,
    /// Split when losing weight (35/35/30)
    pub lose_weight_split: MacroSplit,
    /// Calorie multiplier when gaining muscle (10% surplus)
    pub gain_muscle_calorie_factor: f64,
    /// Split when gaining muscle (30/45/25)
    pub gain_muscle_split: MacroSplit,
    /// Split when maintaining (25/45/30); calories equal TDEE
    pub maintain_split: MacroSplit,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            lose_weight_calorie_factor: 0.80,
            lose_weight_split: MacroSplit {
                protein: 0.35,
                carbs: 0.35,
                fat: 0.30,
            },
            gain_muscle_calorie_factor: 1.10,
            gain_muscle_split: MacroSplit {
                protein: 0.30,
                carbs: 0.45,
                fat: 0.25,
            },
            maintain_split: MacroSplit {
                protein: 0.25,
                carbs: 0.45,
                fat: 0.30,
            },
        }
    }
}

/// kcal per gram of each macronutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyDensityConfig {
    /// Protein (4 kcal/g)
    pub protein: f64,
    /// Carbohydrates (4 kcal/g)
    pub carbs: f64,
    /// Fat (9 kcal/g)
    pub fat: f64,
}

impl Default for EnergyDensityConfig {
    fn default() -> Self {
        Self {
            protein: KCAL_PER_GRAM_PROTEIN,
            carbs: KCAL_PER_GRAM_CARBS,
            fat: KCAL_PER_GRAM_FAT,
        }
    }
}
