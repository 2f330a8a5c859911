// ABOUTME: Planner month grid and placement of scheduled routines onto grid days
// ABOUTME: Sunday-first weeks covering a month, evaluated cell by cell in parallel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::recurrence::occurs_on;
use chrono::{Datelike, Days, NaiveDate};
use fittrack_core::models::ScheduleRecord;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One cell of the planner grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    /// Calendar date of the cell
    pub date: NaiveDate,
    /// False for the leading/trailing days of neighbouring months
    pub in_month: bool,
}

/// Whole weeks (Sunday to Saturday) covering one month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    days: Vec<CalendarDay>,
}

impl MonthGrid {
    /// Grid for `month` (1-12) of `year`, `None` for an invalid month
    #[must_use]
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_first = if month == 12 {
            NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let last = next_first.pred_opt()?;

        let lead = u64::from(first.weekday().num_days_from_sunday());
        let trail = u64::from(6 - last.weekday().num_days_from_sunday());
        let grid_start = first.checked_sub_days(Days::new(lead))?;
        let grid_end = last.checked_add_days(Days::new(trail))?;

        let days = grid_start
            .iter_days()
            .take_while(|date| *date <= grid_end)
            .map(|date| CalendarDay {
                date,
                in_month: date.month() == month && date.year() == year,
            })
            .collect();

        Some(Self { year, month, days })
    }

    /// Grid for the month containing `date`
    #[must_use]
    pub fn containing(date: NaiveDate) -> Option<Self> {
        Self::for_month(date.year(), date.month())
    }

    /// Grid for the following month
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        if self.month == 12 {
            Self::for_month(self.year.checked_add(1)?, 1)
        } else {
            Self::for_month(self.year, self.month + 1)
        }
    }

    /// Grid for the preceding month
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        if self.month == 1 {
            Self::for_month(self.year.checked_sub(1)?, 12)
        } else {
            Self::for_month(self.year, self.month - 1)
        }
    }

    /// Year shown
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month shown (1-12)
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// All cells, Sunday first, a multiple of 7 long
    #[must_use]
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Cells grouped into weeks
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }
}

/// A routine placed on a grid day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlannedSession {
    /// Schedule that produced this session
    pub schedule_id: String,
    /// Routine to run
    pub routine_id: String,
    /// Routine title, or the routine id when no title is known
    pub label: String,
    /// Time of day (`HH:MM`)
    pub time: String,
}

/// Grid day with its sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlannedDay {
    /// Calendar date
    pub date: NaiveDate,
    /// False outside the displayed month
    pub in_month: bool,
    /// Sessions in schedule order
    pub sessions: Vec<PlannedSession>,
}

/// Month view with sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthPlan {
    /// Year shown
    pub year: i32,
    /// Month shown (1-12)
    pub month: u32,
    /// Grid days in order
    pub days: Vec<PlannedDay>,
}

impl MonthPlan {
    /// Number of sessions on days inside the month
    #[must_use]
    pub fn sessions_in_month(&self) -> usize {
        self.days
            .iter()
            .filter(|day| day.in_month)
            .map(|day| day.sessions.len())
            .sum()
    }

    /// Day entry for `date`, if it is on the grid
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<&PlannedDay> {
        self.days.iter().find(|day| day.date == date)
    }
}

/// Place every schedule on every grid day it occurs on
///
/// Evaluates one occurrence check per (schedule, day) pair. Days are
/// evaluated in parallel; output order matches the grid.
#[must_use]
pub fn plan_month(grid: &MonthGrid, schedules: &[ScheduleRecord]) -> MonthPlan {
    let days: Vec<PlannedDay> = grid
        .days()
        .par_iter()
        .map(|cell| PlannedDay {
            date: cell.date,
            in_month: cell.in_month,
            sessions: schedules
                .iter()
                .filter(|schedule| occurs_on(&schedule.rule, cell.date))
                .map(|schedule| PlannedSession {
                    schedule_id: schedule.id.clone(),
                    routine_id: schedule.routine_id.clone(),
                    label: schedule.label().to_owned(),
                    time: schedule.time.clone(),
                })
                .collect(),
        })
        .collect();

    let plan = MonthPlan {
        year: grid.year(),
        month: grid.month(),
        days,
    };

    debug!(
        year = plan.year,
        month = plan.month,
        schedules = schedules.len(),
        sessions = plan.sessions_in_month(),
        "month plan built"
    );

    plan
}
