// ABOUTME: Planner service building the month view of scheduled routines
// ABOUTME: Validates the requested month and places stored schedules on the grid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use fittrack_core::models::ScheduleRecord;
use fittrack_intelligence::{plan_month, MonthGrid, MonthPlan};
use tracing::info;

/// Planner operations
#[derive(Debug, Clone, Copy, Default)]
pub struct PlannerService;

impl PlannerService {
    /// Month view for `month` (1-12) of `year`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a month outside 1-12 or an unrepresentable year
    pub fn month_view(
        &self,
        schedules: &[ScheduleRecord],
        year: i32,
        month: u32,
    ) -> AppResult<MonthPlan> {
        let grid = MonthGrid::for_month(year, month).ok_or_else(|| {
            AppError::out_of_range("month", format!("No such month: {year}-{month:02}"))
        })?;
        Ok(self.plan(&grid, schedules))
    }

    /// Month view for the month containing `date`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when the grid cannot be built at the edge of
    /// the supported date range
    pub fn month_view_containing(
        &self,
        schedules: &[ScheduleRecord],
        date: NaiveDate,
    ) -> AppResult<MonthPlan> {
        let grid = MonthGrid::containing(date).ok_or_else(|| {
            AppError::out_of_range("date", format!("No month grid for {date}"))
        })?;
        Ok(self.plan(&grid, schedules))
    }

    fn plan(&self, grid: &MonthGrid, schedules: &[ScheduleRecord]) -> MonthPlan {
        let plan = plan_month(grid, schedules);
        info!(
            year = plan.year,
            month = plan.month,
            sessions = plan.sessions_in_month(),
            "planner month view built"
        );
        plan
    }
}
