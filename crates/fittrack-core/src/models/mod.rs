// ABOUTME: Domain models for profiles, schedules, routines, diary entries, and search results
// ABOUTME: Re-exports the value types consumed by the estimator and the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Value objects only. Records are rebuilt per request from whatever the
//! storage collaborator persisted; nothing here owns a lifecycle.
//!
//! - `Profile`: body and activity inputs for the energy estimator
//! - `ScheduleRule` / `ScheduleRecord`: recurrence definition for a routine
//! - `Routine`: ordered exercises with their sets
//! - `MealEntry` / `FoodItem`: diary entries and normalized food search hits
//! - `ExerciseItem`: normalized exercise search hit

mod exercise;
mod nutrition;
mod profile;
mod routine;
mod schedule;

pub use exercise::ExerciseItem;
pub use nutrition::{DietPreferences, FoodItem, MealEntry, MealType};
pub use profile::{
    ActivityLevel, Goal, Height, HeightUnit, Profile, ProfileTargets, Sex, Weight, WeightUnit,
};
pub use routine::{Routine, RoutineItem, SetEntry};
pub use schedule::{parse_start_date_time, RepeatKind, ScheduleRecord, ScheduleRule, WeekdaySet};
