// ABOUTME: Nourish CLI - command-line front end for the nutrition tracker
// ABOUTME: Registers accounts, logs meals and weight, and shows progress, streaks and badges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Create an account
//! nourish-cli register --username sam --password secret
//!
//! # Set up the profile
//! nourish-cli -u sam -p secret onboard --name Sam --age 30 --sex male \
//!     --height-cm 180 --weight-kg 75 --target-weight-kg 70 \
//!     --activity moderately_active --goal lose_weight
//!
//! # Log a meal: name:kcal:protein:carbs:fat[:portion]
//! nourish-cli -u sam -p secret log-meal --meal-type lunch \
//!     --item "chicken salad:450:35:20:18:1 bowl" --score 85
//!
//! # Progress
//! nourish-cli -u sam -p secret summary
//! nourish-cli -u sam -p secret export-csv --output report.csv
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nourish::auth::AuthService;
use nourish::config::AppConfig;
use nourish::logging::LoggingConfig;
use nourish::persistence::Stores;
use nourish::session::UserSession;
use nourish_core::models::{ActivityLevel, FoodItem, GoalType, MealType, Sex};
use std::env;
use std::path::PathBuf;
use uuid::Uuid;

use helpers::parse;

#[derive(Parser)]
#[command(
    name = "nourish-cli",
    about = "Nourish nutrition tracker",
    long_about = "Track meals against BMR/TDEE based macro targets, keep logging streaks and earn badges."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (default: NOURISH_DATA_DIR or the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Username (falls back to NOURISH_USERNAME)
    #[arg(long, short = 'u', global = true)]
    username: Option<String>,

    /// Password (falls back to NOURISH_PASSWORD)
    #[arg(long, short = 'p', global = true)]
    password: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Create a new account
    Register,

    /// Complete the profile and compute daily targets
    Onboard {
        /// Display name
        #[arg(long)]
        name: String,
        /// Age in years
        #[arg(long)]
        age: u32,
        /// male or female
        #[arg(long, value_parser = parse::sex)]
        sex: Sex,
        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,
        /// Weight in kilograms
        #[arg(long)]
        weight_kg: f64,
        /// Target weight in kilograms
        #[arg(long)]
        target_weight_kg: f64,
        /// sedentary, lightly_active, moderately_active, very_active, athlete
        #[arg(long, value_parser = parse::activity_level)]
        activity: ActivityLevel,
        /// lose_weight, maintain, gain_muscle
        #[arg(long, value_parser = parse::goal, default_value = "maintain")]
        goal: GoalType,
        /// Vegetarian diet
        #[arg(long)]
        vegetarian: bool,
    },

    /// Edit the profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Log a meal for today
    LogMeal {
        /// breakfast, lunch, dinner, snack
        #[arg(long, value_parser = parse::meal_type)]
        meal_type: MealType,
        /// Food item as name:kcal:protein_g:carbs_g:fat_g[:portion], repeatable
        #[arg(long = "item", value_parser = parse::food_item, required_unless_present = "template")]
        items: Vec<FoodItem>,
        /// Quality score from 0 to 100
        #[arg(long, default_value = "50", value_parser = parse::score)]
        score: f64,
        /// Why the meal got its score
        #[arg(long, default_value = "")]
        explanation: String,
        /// Photo reference
        #[arg(long)]
        image: Option<String>,
        /// Fill the meal from a saved template instead of items
        #[arg(long, conflicts_with = "items")]
        template: Option<Uuid>,
    },

    /// Record today's body weight
    Weight {
        /// Weight in kilograms
        weight_kg: f64,
    },

    /// Today's totals against targets
    Summary,

    /// Current logging streak
    Streak,

    /// Owned badges
    Badges,

    /// Logged days, most recent first
    History {
        /// Also print the calorie and weight series
        #[arg(long)]
        trend: bool,
    },

    /// Export history as CSV
    ExportCsv {
        /// Output file (stdout if omitted)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Saved meal templates
    Templates {
        #[command(subcommand)]
        action: TemplateCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Show the profile and targets
    Show,
    /// Update biometrics or preferences; targets are recomputed
    Update {
        /// Age in years
        #[arg(long)]
        age: Option<u32>,
        /// male or female
        #[arg(long, value_parser = parse::sex)]
        sex: Option<Sex>,
        /// Height in centimeters
        #[arg(long)]
        height_cm: Option<f64>,
        /// Weight in kilograms
        #[arg(long)]
        weight_kg: Option<f64>,
        /// Target weight in kilograms
        #[arg(long)]
        target_weight_kg: Option<f64>,
        /// Activity level
        #[arg(long, value_parser = parse::activity_level)]
        activity: Option<ActivityLevel>,
        /// Goal
        #[arg(long, value_parser = parse::goal)]
        goal: Option<GoalType>,
        /// Vegetarian diet
        #[arg(long)]
        vegetarian: Option<bool>,
    },
    /// Change the display name
    Rename {
        /// New name
        name: String,
    },
    /// Toggle light/dark theme
    Theme,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum TemplateCommand {
    /// List saved templates
    List,
    /// Save today's most recent meal as a template
    SaveLast {
        /// Template name
        name: String,
    },
    /// Rename a template
    Rename {
        /// Template id
        id: Uuid,
        /// New name
        name: String,
    },
    /// Delete a template
    Delete {
        /// Template id
        id: Uuid,
    },
}

fn credential(value: Option<String>, var: &str, what: &str) -> Result<String> {
    value
        .or_else(|| env::var(var).ok())
        .with_context(|| format!("{what} required: pass --{what} or set {var}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }

    let stores = Stores::open(&config).await?;
    let auth = AuthService::new(stores.accounts.clone(), stores.user_data.clone());

    let username = credential(cli.username, "NOURISH_USERNAME", "username")?;
    let password = credential(cli.password, "NOURISH_PASSWORD", "password")?;

    if matches!(cli.command, Command::Register) {
        return commands::account::register(&auth, &username, &password).await;
    }

    let mut session =
        UserSession::login(&auth, stores.user_data.clone(), &config, &username, &password).await?;
    let result = commands::run(&mut session, cli.command).await;
    session.logout().await?;
    result
}
