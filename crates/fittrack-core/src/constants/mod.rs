// ABOUTME: Unit conversion factors, energy coefficients, and boundary validation limits
// ABOUTME: Immutable values shared by the estimator, the planner, and payload validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Fixed values only. None of these are read from the environment: a profile
//! must produce the same target on every call.

/// Unit conversion factors
pub mod units {
    /// Kilograms per pound (exact, international avoirdupois pound)
    pub const KG_PER_LB: f64 = 0.453_592_37;

    /// Centimeters per inch (exact)
    pub const CM_PER_IN: f64 = 2.54;

    /// Days per week
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Energy balance coefficients
///
/// References:
/// - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
///   *American Journal of Clinical Nutrition*, 51(2), 241-247.
/// - Katch, F.I. & `McArdle`, W.D. (1996). Nutrition, Weight Control, and Exercise.
pub mod energy {
    /// Mifflin-St Jeor weight coefficient (kcal per kg)
    pub const MSJ_WEIGHT_COEF: f64 = 10.0;
    /// Mifflin-St Jeor height coefficient (kcal per cm)
    pub const MSJ_HEIGHT_COEF: f64 = 6.25;
    /// Mifflin-St Jeor age coefficient (kcal per year)
    pub const MSJ_AGE_COEF: f64 = -5.0;
    /// Mifflin-St Jeor male constant
    pub const MSJ_MALE_CONSTANT: f64 = 5.0;
    /// Mifflin-St Jeor constant for every other sex category
    pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

    /// Katch-McArdle intercept (kcal/day)
    pub const KATCH_MCARDLE_INTERCEPT: f64 = 370.0;
    /// Katch-McArdle lean mass coefficient (kcal per kg lean body mass)
    pub const KATCH_MCARDLE_LBM_COEF: f64 = 21.6;

    /// Physical activity level multipliers
    pub const PAL_SEDENTARY: f64 = 1.2;
    /// Light activity
    pub const PAL_LIGHT: f64 = 1.375;
    /// Moderate activity, also used for unknown categories
    pub const PAL_MODERATE: f64 = 1.55;
    /// Active
    pub const PAL_ACTIVE: f64 = 1.725;
    /// Very active; shares the active multiplier
    pub const PAL_VERY_ACTIVE: f64 = 1.725;
    /// Athlete
    pub const PAL_ATHLETE: f64 = 1.9;

    /// Approximate energy content of one pound of body mass (kcal)
    pub const KCAL_PER_LB: f64 = 3500.0;

    /// Largest deficit allowed, as a fraction of TDEE
    pub const MAX_DEFICIT_FRACTION: f64 = 0.25;
    /// Largest surplus allowed, as a fraction of TDEE
    pub const MAX_SURPLUS_FRACTION: f64 = 0.15;
}

/// Macronutrient energy density used when an upstream food omits calories
pub mod macros {
    /// kcal per gram of protein
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// kcal per gram of carbohydrate
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// kcal per gram of fat
    pub const KCAL_PER_G_FAT: f64 = 9.0;
    /// Serving size assumed when an upstream food omits it (grams)
    pub const DEFAULT_SERVING_SIZE_G: f64 = 100.0;
}

/// Bounds enforced on incoming payloads before anything reaches the core
pub mod limits {
    /// Youngest accepted age (years)
    pub const MIN_AGE: u32 = 10;
    /// Oldest accepted age (years)
    pub const MAX_AGE: u32 = 120;
    /// Largest accepted weekly rate of change (lb/week), applied symmetrically
    pub const MAX_RATE_LBS_PER_WEEK: f64 = 2.0;
    /// Largest accepted body fat percentage
    pub const MAX_BODY_FAT_PERCENT: f64 = 75.0;
    /// Meals per day range
    pub const MIN_MEALS_PER_DAY: u32 = 1;
    /// Meals per day range
    pub const MAX_MEALS_PER_DAY: u32 = 10;
    /// Largest accepted protein target (g per kg)
    pub const MAX_PROTEIN_PER_KG: f64 = 3.0;
    /// Highest weekday index (Saturday)
    pub const MAX_WEEKDAY_INDEX: i64 = 6;
}

/// Defaults applied by the boundary layer
pub mod defaults {
    /// Routine weight unit when the payload omits it
    pub const ROUTINE_UNIT: &str = "kg";
    /// Schedule interval when the payload omits it
    pub const SCHEDULE_INTERVAL: u32 = 1;
    /// Schedule time of day shown by the planner when none is stored
    pub const SCHEDULE_TIME: &str = "07:00";
}
