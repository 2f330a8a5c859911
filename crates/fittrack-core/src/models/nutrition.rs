// ABOUTME: Nutrition diary models for food intake tracking
// ABOUTME: MealType, MealEntry, FoodItem, and the dietary preferences stored with a profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    #[serde(other)]
    Other,
}

impl MealType {
    /// Diary display order
    pub const ALL: [Self; 5] = [
        Self::Breakfast,
        Self::Lunch,
        Self::Dinner,
        Self::Snack,
        Self::Other,
    ];

    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }
}

/// Food logged in the diary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    /// Record identifier once persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Day the food was eaten
    pub date: NaiveDate,
    /// Meal slot
    pub meal: MealType,
    /// Food name
    pub food_name: String,
    /// Quantity eaten (grams)
    pub quantity_grams: f64,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    #[serde(rename = "protein_g", default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Fat (grams)
    #[serde(rename = "fat_g", default, skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    /// Carbohydrates (grams)
    #[serde(
        rename = "carbohydrates_g",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub carbohydrates_g: Option<f64>,
}

/// Food returned by a nutrition search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    /// Identifier derived from the name and result position
    pub id: String,
    /// Display name
    pub name: String,
    /// Serving size (grams)
    pub serving_size_g: f64,
    /// Energy per serving (kcal)
    pub calories: f64,
    /// Protein per serving (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Fat per serving (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_total_g: Option<f64>,
    /// Carbohydrates per serving (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates_total_g: Option<f64>,
}

impl FoodItem {
    /// Diary entry for one serving of this food
    #[must_use]
    pub fn to_entry(&self, date: NaiveDate, meal: MealType) -> MealEntry {
        MealEntry {
            id: None,
            date,
            meal,
            food_name: self.name.clone(),
            quantity_grams: self.serving_size_g,
            calories: self.calories,
            protein_g: self.protein_g,
            fat_g: self.fat_total_g,
            carbohydrates_g: self.carbohydrates_total_g,
        }
    }
}

/// Dietary settings stored with a nutrition profile; not used by the estimator
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DietPreferences {
    /// Free-form dietary preference (vegetarian, keto, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_preference: Option<String>,
    /// Free-form allergy notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    /// Meals per day (1-10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meals_per_day: Option<u32>,
    /// Protein target (g per kg, 0-3)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_per_kg: Option<f64>,
}
