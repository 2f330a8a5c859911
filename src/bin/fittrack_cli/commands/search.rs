// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Search provider commands for fittrack-cli
// ABOUTME: Request descriptions, response normalization, and the configuration probe

use crate::helpers::io::{print_json, read_input};
use fittrack::config::ApiProvidersConfig;
use fittrack::errors::AppResult;
use fittrack::providers::{
    check_upstream_status, normalize_exercises, normalize_foods, ExerciseSearch, FoodSearch,
};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

#[derive(Serialize)]
struct Normalized<T> {
    data: Vec<T>,
}

/// Print the exercise search request with keys redacted
pub fn exercise_request(query: &str) -> AppResult<()> {
    let search = ExerciseSearch::from_config(&ApiProvidersConfig::from_env())?;
    print_json(&search.request(query)?.redacted())
}

/// Print the food search request with keys redacted
pub fn food_request(query: &str) -> AppResult<()> {
    let search = FoodSearch::from_config(&ApiProvidersConfig::from_env())?;
    print_json(&search.request(query)?.redacted())
}

/// Normalize an exercise search body for the configured provider
pub fn normalize_exercise_body(body: &Path, status: u16) -> AppResult<()> {
    let provider = ApiProvidersConfig::from_env().exercise_provider()?;
    let body = upstream_body("Exercise search", body, status)?;
    print_json(&Normalized {
        data: normalize_exercises(provider, &body),
    })
}

/// Normalize a food search body
pub fn normalize_food_body(body: &Path, status: u16) -> AppResult<()> {
    let body = upstream_body("Nutrition search", body, status)?;
    print_json(&Normalized {
        data: normalize_foods(&body),
    })
}

/// Print the configuration probe
pub fn probe() -> AppResult<()> {
    print_json(&ApiProvidersConfig::from_env().probe())
}

fn upstream_body(service: &str, body: &Path, status: u16) -> AppResult<Value> {
    let text = read_input(body)?;
    check_upstream_status(service, status, &text)?;
    Ok(serde_json::from_str(&text)?)
}
