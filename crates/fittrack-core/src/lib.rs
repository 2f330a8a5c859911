// ABOUTME: Core types and constants for the fittrack workout and nutrition planner
// ABOUTME: Foundation crate with error handling, unit constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fittrack Core
//!
//! Foundation crate providing shared types and constants for the fittrack
//! planner. Nothing here performs I/O; the algorithms live in
//! `fittrack-intelligence` and the boundary layer in the root crate.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversion factors, energy coefficients, and input bounds
//! - **models**: Profiles, schedules, routines, diary entries, and search results

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversion factors, energy coefficients, and validation bounds
pub mod constants;

/// Domain models shared by the estimator, the planner, and the boundary layer
pub mod models;
