// ABOUTME: Schedule payload validation into a recurrence rule for the planner
// ABOUTME: Repeat kind, positive integer interval, weekday indices 0-6, ISO start date-time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{non_empty_text, parse_date_time, positive_whole, required, whole_within};
use crate::errors::{AppError, AppResult};
use fittrack_core::constants::{defaults, limits};
use fittrack_core::models::{RepeatKind, ScheduleRecord, ScheduleRule, WeekdaySet};
use serde::{Deserialize, Serialize};

/// Schedule as submitted by a client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePayload {
    /// Routine to schedule
    pub routine_id: Option<String>,
    /// ISO date-time of the first occurrence
    pub start_date: Option<String>,
    /// Time of day shown in the planner
    pub time: Option<String>,
    /// `none`, `daily`, `weekly` or `monthly`; `none` when absent
    pub repeat: Option<String>,
    /// Positive whole number; 1 when absent
    pub interval: Option<f64>,
    /// Weekday indices, 0 = Sunday
    pub days_of_week: Option<Vec<f64>>,
}

/// Validated schedule that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDraft {
    /// Routine to schedule
    pub routine_id: String,
    /// Time of day
    pub time: String,
    /// Recurrence
    pub rule: ScheduleRule,
}

impl ScheduleDraft {
    /// Attach the identifier assigned by the store
    #[must_use]
    pub fn into_record(self, id: impl Into<String>) -> ScheduleRecord {
        ScheduleRecord {
            id: id.into(),
            routine_id: self.routine_id,
            routine_title: None,
            time: self.time,
            rule: self.rule,
        }
    }
}

impl SchedulePayload {
    /// Validate into a schedule draft
    ///
    /// # Errors
    ///
    /// Returns an `AppError` naming the first invalid field
    pub fn validate(self) -> AppResult<ScheduleDraft> {
        let routine_id = non_empty_text("routineId", self.routine_id)?;
        let time = required("time", self.time)?;
        let start_date = parse_date_time("startDate", &required("startDate", self.start_date)?)?;

        let repeat = match self.repeat {
            Some(name) => RepeatKind::parse(&name).ok_or_else(|| {
                AppError::invalid_format("repeat", format!("Unsupported repeat: {name}"))
            })?,
            None => RepeatKind::None,
        };

        let interval = match self.interval {
            Some(value) => u32::try_from(positive_whole("interval", value)?).map_err(|e| {
                AppError::out_of_range("interval", "interval is too large").with_source(e)
            })?,
            None => defaults::SCHEDULE_INTERVAL,
        };

        let days_of_week = match self.days_of_week {
            Some(days) => weekday_set(&days)?,
            None => WeekdaySet::empty(),
        };

        Ok(ScheduleDraft {
            routine_id,
            time,
            rule: ScheduleRule::new(start_date, repeat)
                .with_interval(interval)
                .with_days(days_of_week),
        })
    }
}

fn weekday_set(days: &[f64]) -> AppResult<WeekdaySet> {
    days.iter().try_fold(WeekdaySet::empty(), |set, &day| {
        let index = whole_within("daysOfWeek", day, 0, limits::MAX_WEEKDAY_INDEX)?;
        Ok(set | WeekdaySet::from_indices([index as u8]))
    })
}
