// ABOUTME: Meal and weight logging commands for nourish-cli
// ABOUTME: Saves meals from items or templates and reports streaks and unlocked badges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use chrono::Utc;
use nourish::session::UserSession;
use nourish::tracker::MealDraft;
use nourish_core::models::{FoodItem, MealType, QualityScore};
use uuid::Uuid;

use crate::helpers::display::display_meal_outcome;

/// Log a meal from food items
pub async fn log(
    session: &mut UserSession,
    meal_type: MealType,
    items: Vec<FoodItem>,
    score: f64,
    explanation: String,
    image_ref: Option<String>,
) -> Result<()> {
    let draft = MealDraft {
        meal_type,
        items,
        quality: QualityScore {
            score,
            explanation,
            suggestions: Vec::new(),
        },
        image_ref,
    };
    let outcome = session
        .apply(|tracker| tracker.save_meal(draft, Utc::now()))
        .await?;
    display_meal_outcome(&outcome);
    Ok(())
}

/// Log a meal from a saved template
pub async fn log_from_template(
    session: &mut UserSession,
    template_id: Uuid,
    meal_type: MealType,
) -> Result<()> {
    let outcome = session
        .apply(|tracker| tracker.log_template(template_id, meal_type, Utc::now()))
        .await?;
    display_meal_outcome(&outcome);
    Ok(())
}

/// Record today's weight
pub async fn weight(session: &mut UserSession, weight_kg: f64) -> Result<()> {
    session
        .apply(|tracker| tracker.record_weight(weight_kg))
        .await?;
    println!("Recorded {weight_kg} kg for today.");
    Ok(())
}
