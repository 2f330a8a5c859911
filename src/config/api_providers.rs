// ABOUTME: Exercise and nutrition search API provider configuration
// ABOUTME: Provider selection, base URLs, and API keys read from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::env;
use std::fmt;

/// Default exercise search base for API Ninjas
pub const API_NINJAS_EXERCISES_BASE: &str = "https://api.api-ninjas.com/v1/exercises";
/// Default exercise search base for `ExerciseDB` on `RapidAPI`
pub const EXERCISEDB_BASE: &str = "https://exercisedb.p.rapidapi.com";
/// `RapidAPI` host header value for `ExerciseDB`
pub const EXERCISEDB_HOST: &str = "exercisedb.p.rapidapi.com";
/// API Ninjas nutrition endpoint
pub const API_NINJAS_NUTRITION_URL: &str = "https://api.api-ninjas.com/v1/nutrition";

/// Supported exercise search providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseProvider {
    /// `api-ninjas`
    ApiNinjas,
    /// `rapidapi-exercisedb`
    RapidapiExercisedb,
}

impl ExerciseProvider {
    /// Parse a provider name (case-insensitive)
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "api-ninjas" => Some(Self::ApiNinjas),
            "rapidapi-exercisedb" => Some(Self::RapidapiExercisedb),
            _ => None,
        }
    }

    /// Name used in configuration and derived exercise ids
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ApiNinjas => "api-ninjas",
            Self::RapidapiExercisedb => "rapidapi-exercisedb",
        }
    }
}

/// Search API configuration
///
/// `Debug` never prints key material.
#[derive(Clone, Default)]
pub struct ApiProvidersConfig {
    /// Exercise provider name as configured (lowercased)
    pub exercise_provider: String,
    /// Override for the exercise search base URL
    pub exercises_api_base: Option<String>,
    /// Key for the exercise provider (also accepted by the nutrition API)
    pub exercises_api_key: Option<String>,
    /// Key for the nutrition API
    pub nutrition_api_key: Option<String>,
}

impl ApiProvidersConfig {
    /// Load search provider configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            exercise_provider: env_var_or("EXERCISES_API_PROVIDER", ExerciseProvider::ApiNinjas.as_str())
                .to_lowercase(),
            exercises_api_base: non_empty_env("EXERCISES_API_BASE"),
            exercises_api_key: non_empty_env("EXERCISES_API_KEY"),
            nutrition_api_key: non_empty_env("NUTRITION_API_KEY"),
        }
    }

    /// Configured exercise provider
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the provider name is not supported
    pub fn exercise_provider(&self) -> AppResult<ExerciseProvider> {
        ExerciseProvider::parse(&self.exercise_provider).ok_or_else(|| {
            AppError::config_invalid(format!(
                "Unsupported EXERCISES_API_PROVIDER: {}",
                self.exercise_provider
            ))
        })
    }

    /// Key for the exercise provider
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when no exercise key is configured
    pub fn exercises_key(&self) -> AppResult<&str> {
        self.exercises_api_key
            .as_deref()
            .ok_or_else(|| AppError::config_missing("Missing EXERCISES_API_KEY"))
    }

    /// Key for the nutrition API, preferring the exercise key
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when neither key is configured
    pub fn nutrition_key(&self) -> AppResult<&str> {
        self.exercises_api_key
            .as_deref()
            .or(self.nutrition_api_key.as_deref())
            .ok_or_else(|| AppError::config_missing("Missing API key"))
    }

    /// Configuration summary that is safe to expose
    #[must_use]
    pub fn probe(&self) -> ConfigProbe {
        ConfigProbe {
            ok: true,
            exercise_provider: self.exercise_provider.clone(),
            has_exercises_api_key: self.exercises_api_key.is_some(),
            has_nutrition_api_key: self.nutrition_api_key.is_some(),
        }
    }
}

impl fmt::Debug for ApiProvidersConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiProvidersConfig")
            .field("exercise_provider", &self.exercise_provider)
            .field("exercises_api_base", &self.exercises_api_base)
            .field("exercises_api_key", &self.exercises_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("nutrition_api_key", &self.nutrition_api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Configuration probe; reports key presence, never key values
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigProbe {
    /// Always true
    pub ok: bool,
    /// Configured exercise provider name
    pub exercise_provider: String,
    /// Whether an exercise API key is configured
    pub has_exercises_api_key: bool,
    /// Whether a nutrition API key is configured
    pub has_nutrition_api_key: bool,
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
