// ABOUTME: clap value parsers for nourish-cli arguments
// ABOUTME: Parses enums by their snake_case names and food items from colon-separated fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nourish_core::models::{ActivityLevel, Confidence, FoodItem, GoalType, MealType, Sex};

pub fn sex(value: &str) -> Result<Sex, String> {
    match value.to_lowercase().as_str() {
        "male" | "m" => Ok(Sex::Male),
        "female" | "f" => Ok(Sex::Female),
        other => Err(format!("unknown sex '{other}', expected male or female")),
    }
}

pub fn activity_level(value: &str) -> Result<ActivityLevel, String> {
    match value.to_lowercase().replace('-', "_").as_str() {
        "sedentary" => Ok(ActivityLevel::Sedentary),
        "lightly_active" => Ok(ActivityLevel::LightlyActive),
        "moderately_active" => Ok(ActivityLevel::ModeratelyActive),
        "very_active" => Ok(ActivityLevel::VeryActive),
        "athlete" => Ok(ActivityLevel::Athlete),
        other => Err(format!(
            "unknown activity level '{other}', expected sedentary, lightly_active, \
             moderately_active, very_active or athlete"
        )),
    }
}

pub fn goal(value: &str) -> Result<GoalType, String> {
    match value.to_lowercase().replace('-', "_").as_str() {
        "lose_weight" | "lose" => Ok(GoalType::LoseWeight),
        "maintain" => Ok(GoalType::Maintain),
        "gain_muscle" | "gain" => Ok(GoalType::GainMuscle),
        other => Err(format!(
            "unknown goal '{other}', expected lose_weight, maintain or gain_muscle"
        )),
    }
}

pub fn meal_type(value: &str) -> Result<MealType, String> {
    MealType::parse(value).ok_or_else(|| {
        format!("unknown meal type '{value}', expected breakfast, lunch, dinner or snack")
    })
}

/// `name:kcal:protein_g:carbs_g:fat_g[:portion]`
pub fn food_item(value: &str) -> Result<FoodItem, String> {
    let fields: Vec<&str> = value.split(':').map(str::trim).collect();
    if !(5..=6).contains(&fields.len()) {
        return Err("expected name:kcal:protein_g:carbs_g:fat_g[:portion]".to_owned());
    }

    let number = |index: usize, label: &str| -> Result<f64, String> {
        let parsed: f64 = fields[index]
            .parse()
            .map_err(|_| format!("{label} '{}' is not a number", fields[index]))?;
        if !parsed.is_finite() {
            return Err(format!("{label} must be a finite number"));
        }
        if parsed < 0.0 {
            return Err(format!("{label} must not be negative"));
        }
        Ok(parsed)
    };

    if fields[0].is_empty() {
        return Err("food name must not be empty".to_owned());
    }

    Ok(FoodItem {
        name: fields[0].to_owned(),
        calories: number(1, "calories")?,
        protein_g: number(2, "protein")?,
        carbs_g: number(3, "carbs")?,
        fat_g: number(4, "fat")?,
        portion: fields.get(5).map_or_else(|| "1 serving".to_owned(), |p| (*p).to_owned()),
        confidence: Confidence::High,
    })
}

/// Quality score in `0..=100`
pub fn score(value: &str) -> Result<f64, String> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("score '{value}' is not a number"))?;
    if !parsed.is_finite() || !(0.0..=100.0).contains(&parsed) {
        return Err(format!("score must be between 0 and 100, got '{value}'"));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_item_with_portion() {
        let item = food_item("oats: 300 :10:54:5:1 cup").unwrap();
        assert_eq!(item.name, "oats");
        assert!((item.calories - 300.0).abs() < f64::EPSILON);
        assert_eq!(item.portion, "1 cup");
    }

    #[test]
    fn test_food_item_rejects_bad_input() {
        assert!(food_item("oats:300:10").is_err());
        assert!(food_item("oats:lots:10:54:5").is_err());
        assert!(food_item("oats:-1:10:54:5").is_err());
        assert!(food_item(":300:10:54:5").is_err());
    }

    #[test]
    fn test_food_item_rejects_non_finite_numbers() {
        assert!(food_item("oats:nan:10:54:5").is_err());
        assert!(food_item("oats:300:inf:54:5").is_err());
        assert!(food_item("oats:300:10:54:-inf").is_err());
    }

    #[test]
    fn test_score_bounds() {
        assert!(score("85").is_ok_and(|v| (v - 85.0).abs() < f64::EPSILON));
        assert!(score(" 0 ").is_ok_and(|v| v.abs() < f64::EPSILON));
        assert!(score("NaN").is_err());
        assert!(score("inf").is_err());
        assert!(score("101").is_err());
        assert!(score("-5").is_err());
    }

    #[test]
    fn test_enum_parsers() {
        assert_eq!(activity_level("very-active"), Ok(ActivityLevel::VeryActive));
        assert_eq!(goal("gain"), Ok(GoalType::GainMuscle));
        assert_eq!(sex("F"), Ok(Sex::Female));
        assert!(meal_type("brunch").is_err());
    }
}
