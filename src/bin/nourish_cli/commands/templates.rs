// ABOUTME: Meal template commands for nourish-cli
// ABOUTME: List, save the last meal, rename and delete saved templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use nourish::session::UserSession;

use crate::helpers::display::display_templates;
use crate::TemplateCommand;

pub async fn run(session: &mut UserSession, action: TemplateCommand) -> Result<()> {
    match action {
        TemplateCommand::List => {
            let templates = session
                .tracker()
                .profile()
                .map_or(&[][..], |profile| profile.saved_templates.as_slice());
            display_templates(templates);
        }
        TemplateCommand::SaveLast { name } => {
            let meal_id = session
                .tracker()
                .last_meal_today()
                .map(|meal| meal.id)
                .context("No meal logged today to save")?;
            let template = session
                .apply(|tracker| tracker.save_template_from_meal(&name, meal_id).cloned())
                .await?;
            println!("Meal saved to favorites as '{}' ({})", template.name, template.id);
        }
        TemplateCommand::Rename { id, name } => {
            session
                .apply(|tracker| tracker.rename_template(id, &name))
                .await?;
            println!("Template renamed");
        }
        TemplateCommand::Delete { id } => {
            let removed = session.apply(|tracker| tracker.delete_template(id)).await?;
            println!("Template '{}' removed", removed.name);
        }
    }
    Ok(())
}
