// ABOUTME: Diary service summarising one day of meal entries against the profile target
// ABOUTME: Groups meal entries by meal type and reports totals and remaining calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use fittrack_core::models::{MealEntry, ProfileTargets};
use fittrack_intelligence::{summarize_day, DaySummary};
use tracing::info;

/// Diary operations
#[derive(Debug, Clone, Copy, Default)]
pub struct DiaryService;

impl DiaryService {
    /// Summary of `date`, measured against the displayed target when known
    #[must_use]
    pub fn day(
        &self,
        entries: &[MealEntry],
        date: NaiveDate,
        targets: Option<&ProfileTargets>,
    ) -> DaySummary {
        let summary = summarize_day(entries, date, targets.map(ProfileTargets::display_target_kcal));
        info!(
            %date,
            entries = summary.meals.iter().map(|meal| meal.entries.len()).sum::<usize>(),
            calories = summary.totals.calories,
            remaining_kcal = ?summary.remaining_kcal,
            "diary day summarised"
        );
        summary
    }
}
