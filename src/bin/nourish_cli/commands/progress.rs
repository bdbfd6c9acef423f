// ABOUTME: Progress commands for nourish-cli
// ABOUTME: Today summary, streak, badges, history with trend, and CSV export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use nourish::session::UserSession;
use nourish_intelligence::{calorie_weight_series, export_csv as render_csv, export_file_name, history as day_history};
use std::path::PathBuf;

use crate::helpers::display::{display_badges, display_history, display_summary, display_trend};

pub fn summary(session: &UserSession) {
    display_summary(&session.tracker().today_summary());
}

pub fn streak(session: &UserSession) {
    let streak = session.tracker().streak();
    match streak {
        0 => println!("No active streak. Log a meal today to start one."),
        1 => println!("1 day streak"),
        n => println!("{n} day streak"),
    }
}

pub fn badges(session: &UserSession) {
    let badges = session
        .tracker()
        .profile()
        .map_or(&[][..], |profile| profile.badges.as_slice());
    display_badges(badges);
}

pub fn history(session: &UserSession, trend: bool) {
    let tracker = session.tracker();
    display_history(&day_history(tracker.logs()));
    if trend {
        let fallback = tracker
            .profile()
            .map_or(0.0, |profile| profile.biometrics().weight_kg);
        display_trend(&calorie_weight_series(tracker.logs(), fallback));
    }
}

/// Write the CSV report to a file or stdout
pub async fn export_csv(session: &UserSession, output: Option<PathBuf>) -> Result<()> {
    let tracker = session.tracker();
    let Some(csv) = render_csv(tracker.logs()) else {
        println!("No data to export!");
        return Ok(());
    };

    match output {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(export_file_name(tracker.today()))
            } else {
                path
            };
            tokio::fs::write(&path, csv)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => println!("{csv}"),
    }
    Ok(())
}
