// ABOUTME: Diary entry payload validation for the nutrition log
// ABOUTME: Calendar date, meal slot, positive quantity, and non-negative energy and macros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{non_negative, parse_date, positive, required};
use crate::errors::AppResult;
use fittrack_core::models::{MealEntry, MealType};
use serde::{Deserialize, Serialize};

/// Diary entry as submitted
///
/// Macro fields keep their snake-case wire names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntryPayload {
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    /// Meal slot name; unknown names file under other
    pub meal: Option<String>,
    /// Food name
    pub food_name: Option<String>,
    /// Grams eaten
    pub quantity_grams: Option<f64>,
    /// Energy (kcal)
    pub calories: Option<f64>,
    /// Protein grams
    #[serde(rename = "protein_g")]
    pub protein_g: Option<f64>,
    /// Fat grams
    #[serde(rename = "fat_g")]
    pub fat_g: Option<f64>,
    /// Carbohydrate grams
    #[serde(rename = "carbohydrates_g")]
    pub carbohydrates_g: Option<f64>,
}

impl MealEntryPayload {
    /// Validate into a [`MealEntry`] without an id
    ///
    /// # Errors
    ///
    /// Returns an `AppError` naming the first invalid field
    pub fn validate(self) -> AppResult<MealEntry> {
        let date = parse_date("date", &required("date", self.date)?)?;
        let meal = MealType::from_str_lossy(&required("meal", self.meal)?);
        let food_name = required("foodName", self.food_name)?;
        let quantity_grams = positive("quantityGrams", required("quantityGrams", self.quantity_grams)?)?;
        let calories = non_negative("calories", required("calories", self.calories)?)?;

        Ok(MealEntry {
            id: None,
            date,
            meal,
            food_name,
            quantity_grams,
            calories,
            protein_g: optional_macro("protein_g", self.protein_g)?,
            fat_g: optional_macro("fat_g", self.fat_g)?,
            carbohydrates_g: optional_macro("carbohydrates_g", self.carbohydrates_g)?,
        })
    }
}

fn optional_macro(field: &str, value: Option<f64>) -> AppResult<Option<f64>> {
    value.map(|grams| non_negative(field, grams)).transpose()
}
