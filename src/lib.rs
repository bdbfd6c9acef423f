// ABOUTME: Main library entry point for the Nourish nutrition tracker
// ABOUTME: Application layer over the engine: accounts, sessions, autosave, and persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nourish
//!
//! Personal nutrition tracking: daily calorie and macro targets from
//! biometrics, a day-indexed meal log, logging streaks, and achievement badges.
//!
//! ## Architecture
//!
//! - **`nourish_core`**: data model, errors, constants
//! - **`nourish_intelligence`**: pure calculator, aggregation, streak and badge engine
//! - **tracker**: per-user state driving the engine
//! - **session**: login, snapshot loading, debounced saving
//! - **persistence**: account and snapshot stores (file or memory)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nourish::config::AppConfig;
//! use nourish::persistence::Stores;
//! use nourish::auth::AuthService;
//! use nourish::session::UserSession;
//! use nourish_core::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let stores = Stores::open(&config).await?;
//!     let auth = AuthService::new(stores.accounts.clone(), stores.user_data.clone());
//!
//!     auth.register("sam", "hunter2").await?;
//!     let session = UserSession::login(&auth, stores.user_data, &config, "sam", "hunter2").await?;
//!     println!("Streak: {}", session.tracker().streak());
//!     session.logout().await
//! }
//! ```

/// Account registration and login
pub mod auth;

/// Debounced snapshot persistence
pub mod autosave;

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Account and snapshot stores
pub mod persistence;

/// Logged-in user sessions
pub mod session;

/// Per-user application state
pub mod tracker;

pub use nourish_core::errors::{AppError, AppResult, ErrorCode};
