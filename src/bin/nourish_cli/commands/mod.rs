// ABOUTME: Command dispatch for nourish-cli
// ABOUTME: Routes parsed subcommands to account, meal, progress and template handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod account;
pub mod meals;
pub mod progress;
pub mod templates;

use crate::{Command, ProfileCommand};
use anyhow::Result;
use nourish::session::UserSession;
use nourish::tracker::ProfileUpdate;
use nourish_core::models::Biometrics;

/// Run a command inside an authenticated session
pub async fn run(session: &mut UserSession, command: Command) -> Result<()> {
    match command {
        Command::Register => anyhow::bail!("register runs without a session"),
        Command::Onboard {
            name,
            age,
            sex,
            height_cm,
            weight_kg,
            target_weight_kg,
            activity,
            goal,
            vegetarian,
        } => {
            let biometrics = Biometrics {
                age,
                sex,
                height_cm,
                weight_kg,
                activity_level: activity,
                goal,
            };
            account::onboard(session, name, biometrics, target_weight_kg, vegetarian).await
        }
        Command::Profile { action } => match action {
            ProfileCommand::Show => account::show(session),
            ProfileCommand::Update {
                age,
                sex,
                height_cm,
                weight_kg,
                target_weight_kg,
                activity,
                goal,
                vegetarian,
            } => {
                let update = ProfileUpdate {
                    age,
                    sex,
                    height_cm,
                    weight_kg,
                    target_weight_kg,
                    activity_level: activity,
                    goal,
                    dietary_preference: vegetarian.map(account::dietary_preference),
                };
                account::update(session, update).await
            }
            ProfileCommand::Rename { name } => account::rename(session, &name).await,
            ProfileCommand::Theme => account::toggle_theme(session).await,
        },
        Command::LogMeal {
            meal_type,
            items,
            score,
            explanation,
            image,
            template,
        } => match template {
            Some(template_id) => meals::log_from_template(session, template_id, meal_type).await,
            None => meals::log(session, meal_type, items, score, explanation, image).await,
        },
        Command::Weight { weight_kg } => meals::weight(session, weight_kg).await,
        Command::Summary => {
            progress::summary(session);
            Ok(())
        }
        Command::Streak => {
            progress::streak(session);
            Ok(())
        }
        Command::Badges => {
            progress::badges(session);
            Ok(())
        }
        Command::History { trend } => {
            progress::history(session, trend);
            Ok(())
        }
        Command::ExportCsv { output } => progress::export_csv(session, output).await,
        Command::Templates { action } => templates::run(session, action).await,
    }
}
