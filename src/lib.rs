// ABOUTME: Main library entry point for the fittrack boundary layer
// ABOUTME: Configuration, logging, payload validation, search shaping, and services over the core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # fittrack
//!
//! Computation core of a fitness and nutrition tracker: daily calorie targets,
//! schedule recurrence, planner month views, and diary totals.
//!
//! ## Architecture
//!
//! - **`fittrack-core`**: errors, constants, and domain models
//! - **`fittrack-intelligence`**: pure algorithms (energy estimator,
//!   recurrence evaluator, month grid, diary totals)
//! - **this crate**: environment configuration, logging setup, validation of
//!   loose JSON payloads, search provider request shaping, and services
//!
//! Persistence and transport belong to the caller.
//!
//! ## Example Usage
//!
//! ```rust
//! use fittrack::intelligence::compute_target_calories;
//! use fittrack::models::{ActivityLevel, Goal, Height, Profile, Sex, Weight};
//!
//! let profile = Profile {
//!     weight: Weight::kg(75.0),
//!     height: Height::cm(175.0),
//!     age: 25,
//!     sex: Sex::Other,
//!     goal: Goal::Recomposition,
//!     rate_lbs_per_week: 0.0,
//!     activity_level: ActivityLevel::Moderate,
//!     body_fat_percent: None,
//!     custom_target_kcal: None,
//! };
//! assert_eq!(compute_target_calories(&profile), 2415);
//! ```

/// Environment configuration for search providers
pub mod config;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Outbound search request shaping and response normalization
pub mod providers;

/// Services composing validation and the computation core
pub mod services;

/// Boundary validation of loose JSON payloads
pub mod validation;

pub use fittrack_core::{constants, models};
pub use fittrack_intelligence as intelligence;
