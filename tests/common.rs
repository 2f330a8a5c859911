// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, reference profiles, schedules, and diary entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fittrack`

use chrono::NaiveDate;
use fittrack::models::{
    ActivityLevel, Goal, Height, MealEntry, MealType, Profile, RepeatKind, ScheduleRecord,
    ScheduleRule, Sex, Weight,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn day(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).unwrap()
}

/// 75 kg, 175 cm, 25 years, other, recomposition, moderate: 2415 kcal
pub fn reference_profile() -> Profile {
    Profile {
        weight: Weight::kg(75.0),
        height: Height::cm(175.0),
        age: 25,
        sex: Sex::Other,
        goal: Goal::Recomposition,
        rate_lbs_per_week: 0.0,
        activity_level: ActivityLevel::Moderate,
        body_fat_percent: None,
        custom_target_kcal: None,
    }
}

/// Stored schedule record
pub fn schedule(id: &str, title: Option<&str>, rule: ScheduleRule) -> ScheduleRecord {
    ScheduleRecord {
        id: id.to_owned(),
        routine_id: format!("routine-{id}"),
        routine_title: title.map(str::to_owned),
        time: "07:00".to_owned(),
        rule,
    }
}

/// Rule starting at midnight
pub fn rule(start: NaiveDate, repeat: RepeatKind) -> ScheduleRule {
    ScheduleRule::starting_on(start, repeat)
}

/// Diary entry with optional macros
pub fn meal_entry(
    date: NaiveDate,
    meal: MealType,
    calories: f64,
    protein_g: Option<f64>,
    fat_g: Option<f64>,
    carbohydrates_g: Option<f64>,
) -> MealEntry {
    MealEntry {
        id: None,
        date,
        meal,
        food_name: "food".to_owned(),
        quantity_grams: 100.0,
        calories,
        protein_g,
        fat_g,
        carbohydrates_g,
    }
}
