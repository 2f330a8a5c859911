// ABOUTME: Body and activity profile consumed by the energy target estimator
// ABOUTME: Weight/height with units, sex, goal, activity level, and target override
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Unit a body weight was entered in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WeightUnit {
    /// Kilograms
    #[serde(rename = "kg")]
    Kg,
    /// Pounds
    #[serde(rename = "lbs", alias = "lb")]
    Lb,
}

impl WeightUnit {
    /// Parse the unit names accepted on the wire
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" => Some(Self::Kg),
            "lb" | "lbs" => Some(Self::Lb),
            _ => None,
        }
    }
}

/// Unit a height was entered in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    /// Centimeters
    Cm,
    /// Inches
    In,
}

impl HeightUnit {
    /// Parse the unit names accepted on the wire
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cm" => Some(Self::Cm),
            "in" => Some(Self::In),
            _ => None,
        }
    }
}

/// Body weight with the unit it was entered in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Weight {
    /// Positive magnitude
    pub value: f64,
    /// Unit of `value`
    pub unit: WeightUnit,
}

impl Weight {
    /// Weight in kilograms
    #[must_use]
    pub const fn kg(value: f64) -> Self {
        Self {
            value,
            unit: WeightUnit::Kg,
        }
    }

    /// Weight in pounds
    #[must_use]
    pub const fn lb(value: f64) -> Self {
        Self {
            value,
            unit: WeightUnit::Lb,
        }
    }
}

/// Height with the unit it was entered in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Height {
    /// Positive magnitude
    pub value: f64,
    /// Unit of `value`
    pub unit: HeightUnit,
}

impl Height {
    /// Height in centimeters
    #[must_use]
    pub const fn cm(value: f64) -> Self {
        Self {
            value,
            unit: HeightUnit::Cm,
        }
    }

    /// Height in inches
    #[must_use]
    pub const fn inches(value: f64) -> Self {
        Self {
            value,
            unit: HeightUnit::In,
        }
    }
}

/// Biological sex category used for BMR
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed; shares the female BMR constant
    #[default]
    Other,
}

impl Sex {
    /// Parse the category names accepted on the wire
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Body composition goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Hold weight, no caloric adjustment
    #[serde(rename = "recomp", alias = "recomposition")]
    Recomposition,
    /// Lose weight
    Lose,
    /// Gain weight
    Gain,
}

impl Goal {
    /// Parse the goal names accepted on the wire
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "recomp" | "recomposition" => Some(Self::Recomposition),
            "lose" => Some(Self::Lose),
            "gain" => Some(Self::Gain),
            _ => None,
        }
    }
}

/// Activity level category for the PAL multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    #[serde(rename = "very", alias = "very-active", alias = "very_active")]
    VeryActive,
    /// Twice-daily training
    Athlete,
    /// Stored value that matches no known category
    #[serde(other)]
    Unknown,
}

impl ActivityLevel {
    /// Parse the category names accepted on the wire
    ///
    /// Returns `None` for names outside the six known categories; stored
    /// records that need a lenient read should deserialize into
    /// [`ActivityLevel::Unknown`] instead.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Some(Self::Sedentary),
            "light" => Some(Self::Light),
            "moderate" => Some(Self::Moderate),
            "active" => Some(Self::Active),
            "very" | "very-active" | "very_active" => Some(Self::VeryActive),
            "athlete" => Some(Self::Athlete),
            _ => None,
        }
    }
}

/// Validated input for one energy target computation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Body weight
    pub weight: Weight,
    /// Height
    pub height: Height,
    /// Age in years (10-120)
    pub age: u32,
    /// Sex category
    #[serde(default)]
    pub sex: Sex,
    /// Goal
    pub goal: Goal,
    /// Requested weekly change in lb; only the magnitude is used
    #[serde(default)]
    pub rate_lbs_per_week: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Body fat percentage (0-75); switches BMR to Katch-McArdle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    /// User-chosen target that overrides the computed one for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_target_kcal: Option<i32>,
}

/// Targets persisted alongside a profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileTargets {
    /// Freshly computed target
    pub computed_target_kcal: i32,
    /// Override when present, otherwise the computed target
    pub last_target_kcal: i32,
}

impl ProfileTargets {
    /// Combine a computed target with an optional override
    #[must_use]
    pub fn new(computed_target_kcal: i32, custom_target_kcal: Option<i32>) -> Self {
        Self {
            computed_target_kcal,
            last_target_kcal: custom_target_kcal.unwrap_or(computed_target_kcal),
        }
    }

    /// Target to show the user
    #[must_use]
    pub const fn display_target_kcal(&self) -> i32 {
        self.last_target_kcal
    }

    /// Whether the user override differs from the computed value
    #[must_use]
    pub const fn is_overridden(&self) -> bool {
        self.last_target_kcal != self.computed_target_kcal
    }
}
