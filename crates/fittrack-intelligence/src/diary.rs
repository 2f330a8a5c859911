// ABOUTME: Daily diary totals, per-meal grouping, and remaining calories against a target
// ABOUTME: Missing macronutrients count as zero in every sum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::conversions::round_half_up;
use chrono::NaiveDate;
use fittrack_core::models::{MealEntry, MealType};
use serde::{Deserialize, Serialize};

/// Summed energy and macronutrients
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Carbohydrates (grams)
    pub carbohydrates_g: f64,
}

impl MacroTotals {
    fn add(mut self, entry: &MealEntry) -> Self {
        self.calories += entry.calories;
        self.protein_g += entry.protein_g.unwrap_or(0.0);
        self.fat_g += entry.fat_g.unwrap_or(0.0);
        self.carbohydrates_g += entry.carbohydrates_g.unwrap_or(0.0);
        self
    }

    fn of<'a>(entries: impl IntoIterator<Item = &'a MealEntry>) -> Self {
        entries.into_iter().fold(Self::default(), Self::add)
    }
}

/// Entries logged for one meal slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealGroup {
    /// Meal slot
    pub meal: MealType,
    /// Entries in logging order
    pub entries: Vec<MealEntry>,
    /// Totals for this meal
    pub totals: MacroTotals,
}

/// One diary day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DaySummary {
    /// Day summarised
    pub date: NaiveDate,
    /// Totals across all meals
    pub totals: MacroTotals,
    /// Breakfast, lunch, dinner, and snack always; other only when used
    pub meals: Vec<MealGroup>,
    /// Target the day is measured against
    pub target_kcal: Option<i32>,
    /// Target minus eaten, rounded; `None` without a target
    pub remaining_kcal: Option<i32>,
}

/// Summarise the entries logged on `date`
///
/// Entries for other days are ignored, so callers may pass a wider slice.
#[must_use]
pub fn summarize_day(entries: &[MealEntry], date: NaiveDate, target_kcal: Option<i32>) -> DaySummary {
    let todays: Vec<&MealEntry> = entries.iter().filter(|entry| entry.date == date).collect();
    let totals = MacroTotals::of(todays.iter().copied());

    let meals = MealType::ALL
        .iter()
        .filter_map(|&meal| {
            let entries: Vec<MealEntry> = todays
                .iter()
                .filter(|entry| entry.meal == meal)
                .map(|&entry| entry.clone())
                .collect();
            if meal == MealType::Other && entries.is_empty() {
                return None;
            }
            let totals = MacroTotals::of(&entries);
            Some(MealGroup {
                meal,
                entries,
                totals,
            })
        })
        .collect();

    let remaining_kcal =
        target_kcal.map(|target| round_half_up(f64::from(target) - totals.calories));

    DaySummary {
        date,
        totals,
        meals,
        target_kcal,
        remaining_kcal,
    }
}
