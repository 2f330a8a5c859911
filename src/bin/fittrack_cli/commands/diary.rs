// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Diary command for fittrack-cli
// ABOUTME: Validates logged entries and prints the day summary

use crate::helpers::io::{print_json, read_json};
use fittrack::errors::AppResult;
use fittrack::models::{MealEntry, ProfileTargets};
use fittrack::services::DiaryService;
use fittrack::validation::{parse_date, MealEntryPayload};
use std::path::Path;

/// Print the summary of `date`
pub fn day(entries: &Path, date: &str, target: Option<i32>) -> AppResult<()> {
    let date = parse_date("date", date)?;
    let payloads: Vec<MealEntryPayload> = read_json(entries)?;
    let entries = payloads
        .into_iter()
        .map(MealEntryPayload::validate)
        .collect::<AppResult<Vec<MealEntry>>>()?;

    let targets = target.map(|kcal| ProfileTargets::new(kcal, None));
    print_json(&DiaryService.day(&entries, date, targets.as_ref()))
}
