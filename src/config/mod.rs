// ABOUTME: Environment-only configuration for the fittrack boundary layer
// ABOUTME: Search provider settings; logging settings live in the logging module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration is read from environment variables only. Energy
//! coefficients are constants in `fittrack_core::constants` and are not
//! configurable.

/// Exercise and nutrition search provider configuration
pub mod api_providers;

pub use api_providers::{ApiProvidersConfig, ConfigProbe, ExerciseProvider};
