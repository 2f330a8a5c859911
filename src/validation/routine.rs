// ABOUTME: Routine payload validation for the routine editor
// ABOUTME: Non-empty title, unit defaulting to kg, whole non-negative reps and non-negative loads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{non_empty_text, non_negative, required, whole_number};
use crate::errors::{AppError, AppResult};
use fittrack_core::constants::defaults;
use fittrack_core::models::{Routine, RoutineItem, SetEntry};
use serde::{Deserialize, Serialize};

/// One set as submitted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetPayload {
    /// Repetitions
    pub reps: Option<f64>,
    /// Load
    pub weight: Option<f64>,
}

/// One exercise as submitted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineItemPayload {
    /// Exercise id from the search provider
    pub exercise_id: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Sets in order
    #[serde(default)]
    pub sets: Vec<SetPayload>,
}

/// Routine as submitted by the editor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutinePayload {
    /// Title
    pub title: Option<String>,
    /// Weight unit, `kg` when absent
    pub unit: Option<String>,
    /// Exercises in order
    #[serde(default)]
    pub items: Vec<RoutineItemPayload>,
}

impl RoutinePayload {
    /// Validate into a [`Routine`] without an id
    ///
    /// # Errors
    ///
    /// Returns an `AppError` naming the first invalid field
    pub fn validate(self) -> AppResult<Routine> {
        let title = non_empty_text("title", self.title)?;
        let unit = self.unit.unwrap_or_else(|| defaults::ROUTINE_UNIT.to_owned());
        let items = self
            .items
            .into_iter()
            .map(RoutineItemPayload::validate)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Routine {
            id: None,
            title,
            unit,
            items,
        })
    }
}

impl RoutineItemPayload {
    fn validate(self) -> AppResult<RoutineItem> {
        Ok(RoutineItem {
            exercise_id: required("exerciseId", self.exercise_id)?,
            name: required("name", self.name)?,
            sets: self
                .sets
                .into_iter()
                .map(SetPayload::validate)
                .collect::<AppResult<Vec<_>>>()?,
        })
    }
}

impl SetPayload {
    fn validate(self) -> AppResult<SetEntry> {
        let reps = whole_number("reps", non_negative("reps", required("reps", self.reps)?)?)?;
        let reps = u32::try_from(reps)
            .map_err(|e| AppError::out_of_range("reps", "reps is too large").with_source(e))?;
        let weight = non_negative("weight", required("weight", self.weight)?)?;
        Ok(SetEntry { reps, weight })
    }
}
