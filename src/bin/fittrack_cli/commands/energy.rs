// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Calorie target command for fittrack-cli
// ABOUTME: Validates a nutrition profile and prints targets with the estimate breakdown

use crate::helpers::io::{print_json, read_json};
use fittrack::errors::AppResult;
use fittrack::services::NutritionService;
use fittrack::validation::ProfilePayload;
use std::path::Path;

/// Print the saved profile, its targets, and the estimate breakdown
pub fn target(profile: &Path) -> AppResult<()> {
    let payload: ProfilePayload = read_json(profile)?;
    let saved = NutritionService::new().save_profile(payload)?;
    print_json(&saved)
}
