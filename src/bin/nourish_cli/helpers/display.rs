// ABOUTME: Output formatting helpers for nourish-cli
// ABOUTME: Consistent terminal rendering of profiles, summaries, badges and history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nourish::tracker::{MealSaveOutcome, TodaySummary};
use nourish_core::models::{Badge, MealTemplate, Profile};
use nourish_intelligence::{DaySummary, TrendPoint};

pub fn display_profile(profile: &Profile) {
    let biometrics = profile.biometrics();
    let targets = profile.targets();
    println!("\n{}", profile.name);
    println!("{}", "=".repeat(50));
    println!(
        "   Age {} | {:?} | {} cm | {} kg (target {} kg)",
        biometrics.age,
        biometrics.sex,
        biometrics.height_cm,
        biometrics.weight_kg,
        profile.target_weight_kg
    );
    println!(
        "   Activity: {:?} | Goal: {:?} | Diet: {:?} | Theme: {:?}",
        biometrics.activity_level, biometrics.goal, profile.dietary_preference, profile.theme
    );
    println!("   BMR: {:.0} kcal | TDEE: {:.0} kcal", targets.bmr, targets.tdee);
    let macros = targets.macro_targets;
    println!(
        "   Daily targets: {:.0} kcal | P {:.0} g | C {:.0} g | F {:.0} g",
        macros.calories, macros.protein_g, macros.carbs_g, macros.fat_g
    );
}

pub fn display_summary(summary: &TodaySummary) {
    println!("\nToday {} ({} meals, streak {})", summary.date, summary.meal_count, summary.streak);
    println!("{}", "=".repeat(50));
    let totals = summary.totals;
    println!(
        "   Eaten:     {:>6.0} kcal | P {:>5.0} g | C {:>5.0} g | F {:>5.0} g",
        totals.calories, totals.protein_g, totals.carbs_g, totals.fat_g
    );
    if let (Some(targets), Some(remaining)) = (summary.targets, summary.remaining) {
        println!(
            "   Target:    {:>6.0} kcal | P {:>5.0} g | C {:>5.0} g | F {:>5.0} g",
            targets.calories, targets.protein_g, targets.carbs_g, targets.fat_g
        );
        println!(
            "   Remaining: {:>6.0} kcal | P {:>5.0} g | C {:>5.0} g | F {:>5.0} g",
            remaining.calories, remaining.protein_g, remaining.carbs_g, remaining.fat_g
        );
    }
}

pub fn display_meal_outcome(outcome: &MealSaveOutcome) {
    let totals = outcome.meal.totals();
    println!(
        "Saved {:?} ({:.0} kcal, quality {:.0}) id {}",
        outcome.meal.meal_type, totals.calories, outcome.meal.quality.score, outcome.meal.id
    );
    if outcome.first_meal_of_day {
        println!("First meal of the day logged!");
    }
    if let Some(badge) = outcome.headline_badge() {
        println!("{} Badge unlocked: {} - {}", badge.icon, badge.name, badge.description);
        for extra in outcome.unlocked.iter().skip(1) {
            println!("   also unlocked: {} {}", extra.icon, extra.name);
        }
    }
    println!("Streak: {} day(s)", outcome.streak);
}

pub fn display_badges(badges: &[Badge]) {
    if badges.is_empty() {
        println!("No badges yet. Log a meal to earn your first one!");
        return;
    }
    for badge in badges {
        println!(
            "{} {:<14} {:<40} {}",
            badge.icon,
            badge.name,
            badge.description,
            badge.unlocked_at.format("%Y-%m-%d")
        );
    }
}

pub fn display_history(days: &[DaySummary]) {
    if days.is_empty() {
        println!("No history available yet.");
        return;
    }
    println!("{:<12} {:>8} {:>8} {:>8} {:>8} {:>6}", "Date", "kcal", "P (g)", "C (g)", "F (g)", "Meals");
    for day in days {
        println!(
            "{:<12} {:>8.0} {:>8.1} {:>8.1} {:>8.1} {:>6}",
            day.date.to_string(),
            day.totals.calories,
            day.totals.protein_g,
            day.totals.carbs_g,
            day.totals.fat_g,
            day.meal_count
        );
    }
}

pub fn display_trend(points: &[TrendPoint]) {
    println!("\n{:<12} {:>8} {:>8}", "Date", "kcal", "kg");
    for point in points {
        println!(
            "{:<12} {:>8.0} {:>8.1}",
            point.date.to_string(),
            point.calories,
            point.weight_kg
        );
    }
}

pub fn display_templates(templates: &[MealTemplate]) {
    if templates.is_empty() {
        println!("No saved templates.");
        return;
    }
    for template in templates {
        let totals = template.totals();
        println!(
            "{}  {:<24} {:>6.0} kcal  ({} items)",
            template.id,
            template.name,
            totals.calories,
            template.items().len()
        );
    }
}
