// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Planner commands for fittrack-cli
// ABOUTME: Month views of stored schedules and single-day recurrence checks

use crate::helpers::io::{print_json, read_json};
use chrono::NaiveDate;
use fittrack::errors::{AppError, AppResult};
use fittrack::intelligence::{next_occurrence, occurs_on};
use fittrack::models::ScheduleRecord;
use fittrack::services::PlannerService;
use fittrack::validation::{parse_date, SchedulePayload};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OccursReport {
    date: NaiveDate,
    occurs: bool,
    next_occurrence: Option<NaiveDate>,
}

/// Print the month view for `YYYY-MM`
pub fn calendar(schedules: &Path, month: &str) -> AppResult<()> {
    let (year, month) = parse_month(month)?;
    let schedules: Vec<ScheduleRecord> = read_json(schedules)?;
    let plan = PlannerService.month_view(&schedules, year, month)?;
    print_json(&plan)
}

/// Print whether the schedule occurs on `date` and when it next occurs
pub fn occurs(schedule: &Path, date: &str, horizon_days: u64) -> AppResult<()> {
    let date = parse_date("date", date)?;
    let payload: SchedulePayload = read_json(schedule)?;
    let rule = payload.validate()?.rule;

    print_json(&OccursReport {
        date,
        occurs: occurs_on(&rule, date),
        next_occurrence: next_occurrence(&rule, date, horizon_days),
    })
}

fn parse_month(text: &str) -> AppResult<(i32, u32)> {
    let invalid = || AppError::invalid_format("month", "month must be YYYY-MM");
    let (year, month) = text.trim().split_once('-').ok_or_else(invalid)?;
    let year = year.parse::<i32>().map_err(|_| invalid())?;
    let month = month.parse::<u32>().map_err(|_| invalid())?;
    Ok((year, month))
}
