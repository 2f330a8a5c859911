// ABOUTME: Food search request building and nutrition response normalization
// ABOUTME: API Ninjas nutrition endpoint; calories fall back to 4/4/9 kcal per gram of macros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{number_of, text_of, trimmed_query, SearchRequest};
use crate::config::api_providers::{ApiProvidersConfig, API_NINJAS_NUTRITION_URL};
use crate::errors::AppResult;
use fittrack_core::constants::macros;
use fittrack_core::models::FoodItem;
use serde_json::Value;
use tracing::debug;

/// Food search against API Ninjas nutrition
#[derive(Debug, Clone)]
pub struct FoodSearch {
    api_key: String,
}

impl FoodSearch {
    /// Resolve the key from configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when neither the exercise nor the nutrition key is set
    pub fn from_config(config: &ApiProvidersConfig) -> AppResult<Self> {
        Ok(Self {
            api_key: config.nutrition_key()?.to_owned(),
        })
    }

    /// Request for a free-text food query
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when the query is blank
    pub fn request(&self, query: &str) -> AppResult<SearchRequest> {
        let query = urlencoding::encode(trimmed_query(query)?);
        Ok(
            SearchRequest::get(format!("{API_NINJAS_NUTRITION_URL}?query={query}"))
                .secret_header("X-Api-Key", &self.api_key),
        )
    }
}

/// Normalize a nutrition search body (a bare array; anything else is empty)
#[must_use]
pub fn normalize_foods(body: &Value) -> Vec<FoodItem> {
    let foods: Vec<FoodItem> = body
        .as_array()
        .map(|items| {
            items
                .iter()
                .enumerate()
                .map(|(index, item)| normalize_food(item, index))
                .collect()
        })
        .unwrap_or_default();

    debug!(count = foods.len(), "food search normalized");
    foods
}

fn normalize_food(item: &Value, index: usize) -> FoodItem {
    let protein = number_of(item, "protein_g");
    let carbs = number_of(item, "carbohydrates_total_g");
    let fat = number_of(item, "fat_total_g");

    let calories = number_of(item, "calories").or_else(|| {
        (protein.is_some() || carbs.is_some() || fat.is_some()).then(|| {
            protein.unwrap_or(0.0) * macros::KCAL_PER_G_PROTEIN
                + carbs.unwrap_or(0.0) * macros::KCAL_PER_G_CARBS
                + fat.unwrap_or(0.0) * macros::KCAL_PER_G_FAT
        })
    });

    let name = text_of(item, &["name"]).filter(|name| !name.is_empty());

    FoodItem {
        id: format!(
            "{}-{index}",
            name.as_deref().unwrap_or("food").to_lowercase()
        ),
        name: name.unwrap_or_else(|| "Food".to_owned()),
        serving_size_g: number_of(item, "serving_size_g").unwrap_or(macros::DEFAULT_SERVING_SIZE_G),
        calories: calories.unwrap_or(0.0),
        protein_g: protein,
        fat_total_g: fat,
        carbohydrates_total_g: carbs,
    }
}
