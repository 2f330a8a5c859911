// ABOUTME: Unit conversion, clamping, rounding, and calendar arithmetic helpers
// ABOUTME: Shared by the energy estimator and the recurrence evaluator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, NaiveDate};
use fittrack_core::constants::units::{CM_PER_IN, KG_PER_LB};
use fittrack_core::models::{Height, HeightUnit, Weight, WeightUnit};

/// Weight in kilograms
#[must_use]
pub fn to_kilograms(weight: Weight) -> f64 {
    match weight.unit {
        WeightUnit::Kg => weight.value,
        WeightUnit::Lb => weight.value * KG_PER_LB,
    }
}

/// Height in centimeters
#[must_use]
pub fn to_centimeters(height: Height) -> f64 {
    match height.unit {
        HeightUnit::Cm => height.value,
        HeightUnit::In => height.value * CM_PER_IN,
    }
}

/// Pull `value` into `[lower, upper]`, applying the upper bound first
///
/// Unlike [`f64::clamp`] this never panics: when the bounds are inverted the
/// lower bound wins.
#[must_use]
pub fn clamp_between(value: f64, lower: f64, upper: f64) -> f64 {
    lower.max(upper.min(value))
}

/// Round to the nearest integer, halves toward positive infinity
#[must_use]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Whole days from `from` to `to` (negative when `to` is earlier)
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Calendar months from `from` to `to`, ignoring the day of month
#[must_use]
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    i64::from(to.year() - from.year()) * 12 + i64::from(to.month()) - i64::from(from.month())
}
