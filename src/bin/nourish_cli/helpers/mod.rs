// ABOUTME: Helper modules for nourish-cli
// ABOUTME: Argument parsers and terminal output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod parse;
