// ABOUTME: Account and profile commands for nourish-cli
// ABOUTME: Registration, onboarding, profile edits, rename and theme toggling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use nourish::auth::AuthService;
use nourish::session::UserSession;
use nourish::tracker::{OnboardingInput, ProfileUpdate, Tracker};
use nourish_core::models::{Biometrics, DietaryPreference};
use tracing::info;

use crate::helpers::display::display_profile;

pub const fn dietary_preference(vegetarian: bool) -> DietaryPreference {
    if vegetarian {
        DietaryPreference::Vegetarian
    } else {
        DietaryPreference::NonVegetarian
    }
}

/// Create an account
pub async fn register(auth: &AuthService, username: &str, password: &str) -> Result<()> {
    let account = auth.register(username, password).await?;
    info!("Registered account {}", account.id);
    println!("Account '{}' created. Next: run `onboard` to set up your profile.", account.username);
    Ok(())
}

/// Complete onboarding
pub async fn onboard(
    session: &mut UserSession,
    name: String,
    biometrics: Biometrics,
    target_weight_kg: f64,
    vegetarian: bool,
) -> Result<()> {
    let input = OnboardingInput {
        name,
        biometrics,
        target_weight_kg,
        dietary_preference: dietary_preference(vegetarian),
    };
    let profile = session
        .apply(|tracker| tracker.complete_onboarding(input).cloned())
        .await?;
    display_profile(&profile);
    Ok(())
}

/// Show the profile
pub fn show(session: &UserSession) -> Result<()> {
    let profile = session
        .tracker()
        .profile()
        .context("No profile yet: run `onboard` first")?;
    display_profile(profile);
    Ok(())
}

/// Update biometrics and preferences
pub async fn update(session: &mut UserSession, update: ProfileUpdate) -> Result<()> {
    let profile = session
        .apply(|tracker| tracker.update_profile(update).cloned())
        .await?;
    display_profile(&profile);
    Ok(())
}

/// Change the display name
pub async fn rename(session: &mut UserSession, name: &str) -> Result<()> {
    session.apply(|tracker| tracker.rename(name)).await?;
    println!("Name updated.");
    Ok(())
}

/// Toggle the theme
pub async fn toggle_theme(session: &mut UserSession) -> Result<()> {
    let theme = session.apply(Tracker::toggle_theme).await?;
    println!("Theme is now {theme:?}.");
    Ok(())
}
