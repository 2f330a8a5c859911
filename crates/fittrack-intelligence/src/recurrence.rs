// ABOUTME: Recurrence evaluator deciding whether a schedule occurs on a calendar day
// ABOUTME: None/daily/weekly/monthly rules with interval gating and weekday filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recurrence Evaluator
//!
//! Dates are compared at calendar-day granularity: the start time of day is
//! dropped before any arithmetic.
//!
//! Weekly rules gate on whole weeks elapsed since the start day, so in an
//! every-2-weeks rule every selected weekday of a matching week fires, even
//! weekdays earlier in the week than the start weekday.
//!
//! Monthly rules require the exact same day of month. A rule starting on the
//! 31st never fires in shorter months.

use crate::conversions::{days_between, months_between};
use chrono::{Datelike, Days, NaiveDate};
use fittrack_core::models::{RepeatKind, ScheduleRule};
use tracing::warn;

/// Whether `rule` occurs on `date`
#[must_use]
pub fn occurs_on(rule: &ScheduleRule, date: NaiveDate) -> bool {
    let start = rule.start_day();
    let diff_days = days_between(start, date);
    if diff_days < 0 {
        return false;
    }

    let interval = effective_interval(rule.interval);

    match rule.repeat {
        RepeatKind::None => date == start,
        RepeatKind::Daily => diff_days % interval == 0,
        RepeatKind::Weekly => {
            if !rule.effective_weekdays().contains_weekday(date.weekday()) {
                return false;
            }
            (diff_days / 7) % interval == 0
        }
        RepeatKind::Monthly => {
            let months = months_between(start, date);
            if months < 0 || date.day() != start.day() {
                return false;
            }
            months % interval == 0
        }
        RepeatKind::Unknown => {
            warn!(start = %start, "unknown repeat kind never occurs");
            false
        }
    }
}

/// Days in `[from, to]` on which `rule` occurs, in ascending order
pub fn occurrences_between(
    rule: &ScheduleRule,
    from: NaiveDate,
    to: NaiveDate,
) -> impl Iterator<Item = NaiveDate> + '_ {
    from.iter_days()
        .take_while(move |day| *day <= to)
        .filter(move |day| occurs_on(rule, *day))
}

/// Next day on or after `from` on which `rule` occurs, searching `horizon_days`
#[must_use]
pub fn next_occurrence(rule: &ScheduleRule, from: NaiveDate, horizon_days: u64) -> Option<NaiveDate> {
    let from = from.max(rule.start_day());
    let to = from
        .checked_add_days(Days::new(horizon_days))
        .unwrap_or(NaiveDate::MAX);
    occurrences_between(rule, from, to).next()
}

fn effective_interval(interval: u32) -> i64 {
    if interval == 0 {
        warn!("schedule interval of 0 treated as 1");
        1
    } else {
        i64::from(interval)
    }
}
