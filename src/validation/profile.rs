// ABOUTME: Nutrition profile payload validation into an estimator Profile plus diet preferences
// ABOUTME: Enforces units, age, rate, body fat, meals per day, protein per kg, and target bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{positive, positive_whole, required, whole_within, within};
use crate::errors::{AppError, AppResult};
use fittrack_core::constants::limits;
use fittrack_core::models::{
    ActivityLevel, DietPreferences, Goal, Height, HeightUnit, Profile, Sex, Weight, WeightUnit,
};
use serde::{Deserialize, Serialize};

/// Nutrition profile as submitted by a client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    /// Body weight magnitude
    pub weight_value: Option<f64>,
    /// `kg` or `lbs` (`lb` accepted)
    pub weight_unit: Option<String>,
    /// Height magnitude
    pub height_value: Option<f64>,
    /// `cm` or `in`
    pub height_unit: Option<String>,
    /// Whole years
    pub age: Option<f64>,
    /// `male`, `female` or `other`
    pub gender: Option<String>,
    /// `recomp`, `lose` or `gain`
    pub goal: Option<String>,
    /// lb per week, -2 to 2
    pub rate_lbs_per_week: Option<f64>,
    /// Activity category name
    pub activity_level: Option<String>,
    /// Body fat percentage, 0 to 75
    pub body_fat_percent: Option<f64>,
    /// Free-form dietary preference
    pub dietary_preference: Option<String>,
    /// Free-form allergy notes
    pub allergies: Option<String>,
    /// Meals per day, 1 to 10
    pub meals_per_day: Option<f64>,
    /// Protein grams per kg of body weight, 0 to 3
    pub protein_per_kg: Option<f64>,
    /// User override target
    pub custom_target_kcal: Option<f64>,
    /// Previously stored target
    pub last_target_kcal: Option<f64>,
}

/// Profile checked at the boundary
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedProfile {
    /// Estimator input
    pub profile: Profile,
    /// Preferences stored with the profile
    pub preferences: DietPreferences,
    /// Target last stored for this profile, if the client sent one
    pub last_target_kcal: Option<i32>,
}

impl ProfilePayload {
    /// Validate into typed values
    ///
    /// # Errors
    ///
    /// Returns an `AppError` naming the first field that is missing, malformed
    /// or out of range
    pub fn validate(self) -> AppResult<ValidatedProfile> {
        let weight_unit = parse_choice("weightUnit", self.weight_unit, WeightUnit::parse)?;
        let weight_value = positive("weightValue", required("weightValue", self.weight_value)?)?;
        let height_unit = parse_choice("heightUnit", self.height_unit, HeightUnit::parse)?;
        let height_value = positive("heightValue", required("heightValue", self.height_value)?)?;

        let age = whole_within(
            "age",
            required("age", self.age)?,
            i64::from(limits::MIN_AGE),
            i64::from(limits::MAX_AGE),
        )?;

        let sex = match self.gender {
            Some(gender) => parse_choice("gender", Some(gender), Sex::parse)?,
            None => Sex::default(),
        };
        let goal = parse_choice("goal", self.goal, Goal::parse)?;
        let activity_level =
            parse_choice("activityLevel", self.activity_level, ActivityLevel::parse)?;

        let rate_lbs_per_week = within(
            "rateLbsPerWeek",
            self.rate_lbs_per_week.unwrap_or(0.0),
            -limits::MAX_RATE_LBS_PER_WEEK,
            limits::MAX_RATE_LBS_PER_WEEK,
        )?;

        let body_fat_percent = self
            .body_fat_percent
            .map(|bf| within("bodyFatPercent", bf, 0.0, limits::MAX_BODY_FAT_PERCENT))
            .transpose()?;

        let meals_per_day = self
            .meals_per_day
            .map(|meals| {
                whole_within(
                    "mealsPerDay",
                    meals,
                    i64::from(limits::MIN_MEALS_PER_DAY),
                    i64::from(limits::MAX_MEALS_PER_DAY),
                )
            })
            .transpose()?;

        let protein_per_kg = self
            .protein_per_kg
            .map(|protein| within("proteinPerKg", protein, 0.0, limits::MAX_PROTEIN_PER_KG))
            .transpose()?;

        let custom_target_kcal = self
            .custom_target_kcal
            .map(|kcal| target_kcal("customTargetKcal", kcal))
            .transpose()?;
        let last_target_kcal = self
            .last_target_kcal
            .map(|kcal| target_kcal("lastTargetKcal", kcal))
            .transpose()?;

        Ok(ValidatedProfile {
            profile: Profile {
                weight: Weight {
                    value: weight_value,
                    unit: weight_unit,
                },
                height: Height {
                    value: height_value,
                    unit: height_unit,
                },
                age: age as u32,
                sex,
                goal,
                rate_lbs_per_week,
                activity_level,
                body_fat_percent,
                custom_target_kcal,
            },
            preferences: DietPreferences {
                dietary_preference: self.dietary_preference,
                allergies: self.allergies,
                meals_per_day: meals_per_day.map(|meals| meals as u32),
                protein_per_kg,
            },
            last_target_kcal,
        })
    }
}

fn parse_choice<T>(
    field: &str,
    value: Option<String>,
    parse: impl FnOnce(&str) -> Option<T>,
) -> AppResult<T> {
    let text = required(field, value)?;
    parse(&text).ok_or_else(|| {
        AppError::invalid_format(field, format!("Unsupported {field}: {text}"))
    })
}

fn target_kcal(field: &str, value: f64) -> AppResult<i32> {
    let kcal = positive_whole(field, value)?;
    i32::try_from(kcal)
        .map_err(|e| AppError::out_of_range(field, format!("{field} is too large")).with_source(e))
}
