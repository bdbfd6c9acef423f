// ABOUTME: Core types and constants for the Nourish nutrition tracker
// ABOUTME: Foundation crate with error handling, constants, and the data model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nourish Core
//!
//! Foundation crate shared by the nutrition engine and the application layer.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy densities, badge thresholds, persistence defaults
//! - **models**: Profile, `DailyLog`, Meal, `FoodItem`, Badge, `MealTemplate`, accounts

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
