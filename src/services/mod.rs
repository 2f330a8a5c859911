// ABOUTME: Domain service layer composing validation and the pure computation core
// ABOUTME: Nutrition profile saving, planner month views, and diary day summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services are transport-agnostic: they take payloads or stored records and
//! return serializable results, leaving persistence to the caller.

/// Diary day summaries against the profile target
pub mod diary;

/// Nutrition profile validation and target computation
pub mod nutrition;

/// Planner month views
pub mod planner;

pub use diary::DiaryService;
pub use nutrition::{NutritionService, SavedProfile};
pub use planner::PlannerService;
