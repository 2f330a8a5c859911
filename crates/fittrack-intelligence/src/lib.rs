// ABOUTME: Energy target estimation, recurrence evaluation, and planner calendar algorithms
// ABOUTME: Leaf computations consumed by the boundary layer in the root crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fittrack Intelligence
//!
//! Side-effect-free computations. Every function here is total over the
//! validated inputs produced by the boundary layer and may be called from
//! any number of threads at once.
//!
//! - **energy**: BMR, TDEE, and the clamped daily calorie target
//! - **recurrence**: whether a schedule occurs on a given day
//! - **calendar**: month grid and per-day planned sessions
//! - **diary**: daily intake totals against a target
//! - **conversions**: unit conversion, clamping, and day/month arithmetic

/// Unit conversion, clamping, rounding, and calendar arithmetic helpers
pub mod conversions;

/// Energy target estimator (Mifflin-St Jeor / Katch-McArdle, PAL, clamped adjustment)
pub mod energy;

/// Recurrence evaluator for schedule rules
pub mod recurrence;

/// Planner month grid and session placement
pub mod calendar;

/// Daily diary totals
pub mod diary;

pub use calendar::{plan_month, CalendarDay, MonthGrid, MonthPlan, PlannedDay, PlannedSession};
pub use diary::{summarize_day, DaySummary, MacroTotals, MealGroup};
pub use energy::{
    compute_target_calories, estimate_energy, resolve_targets, BmrMethod, EnergyConstants,
    EnergyEstimate,
};
pub use recurrence::{next_occurrence, occurrences_between, occurs_on};
