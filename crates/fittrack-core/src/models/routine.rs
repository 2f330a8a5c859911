// ABOUTME: Workout routine model with ordered exercises and their sets
// ABOUTME: Wire shape matches the routine editor payload (title, unit, items, sets)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One set of an exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SetEntry {
    /// Repetitions
    pub reps: u32,
    /// Load in the routine's unit
    pub weight: f64,
}

/// Exercise within a routine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoutineItem {
    /// Identifier from the exercise search provider
    pub exercise_id: String,
    /// Display name
    pub name: String,
    /// Sets in order
    pub sets: Vec<SetEntry>,
}

/// Named, ordered list of exercises
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Routine {
    /// Record identifier once persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Non-empty title
    pub title: String,
    /// Weight unit for every set (`kg` unless stated)
    pub unit: String,
    /// Exercises in order
    pub items: Vec<RoutineItem>,
}

impl Routine {
    /// Total number of sets across all exercises
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.items.iter().map(|item| item.sets.len()).sum()
    }
}
