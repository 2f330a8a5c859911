// ABOUTME: Daily calorie target estimation from a body and activity profile
// ABOUTME: BMR (Mifflin-St Jeor or Katch-McArdle), PAL multiplier, and clamped goal adjustment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Target Estimator
//!
//! Turns a validated [`Profile`] into a daily calorie target:
//!
//! 1. Convert weight to kg and height to cm.
//! 2. BMR from lean body mass when body fat is known, otherwise from
//!    weight, height, age, and sex.
//! 3. TDEE = BMR x PAL.
//! 4. Add the goal adjustment (3500 kcal per lb per week, spread over 7 days).
//! 5. Clamp to a 25% deficit / 15% surplus around TDEE and round.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Katch, F.I., & `McArdle`, W.D. (1996). *Nutrition, Weight Control, and Exercise*.
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use crate::conversions::{clamp_between, round_half_up, to_centimeters, to_kilograms};
use fittrack_core::constants::{energy, units};
use fittrack_core::models::{ActivityLevel, Goal, Profile, ProfileTargets, Sex};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// PAL multipliers per activity category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactors {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light: 1.375
    pub light: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Active: 1.725
    pub active: f64,
    /// Very active: 1.725
    pub very_active: f64,
    /// Athlete: 1.9
    pub athlete: f64,
    /// Used for categories the table does not know: 1.55
    pub fallback: f64,
}

/// Coefficient table for the estimator
///
/// Immutable; [`EnergyConstants::STANDARD`] is what [`compute_target_calories`]
/// uses. Pass a different table to [`estimate_energy`] only for what-if
/// calculations, never for persisted targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyConstants {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor constant for female and other (-161)
    pub msj_female_constant: f64,
    /// Katch-McArdle intercept (370)
    pub katch_mcardle_intercept: f64,
    /// Katch-McArdle lean mass coefficient (21.6)
    pub katch_mcardle_lbm_coef: f64,
    /// PAL multipliers
    pub activity_factors: ActivityFactors,
    /// kcal per lb of body mass (3500)
    pub kcal_per_lb: f64,
    /// Maximum deficit as a fraction of TDEE (0.25)
    pub max_deficit_fraction: f64,
    /// Maximum surplus as a fraction of TDEE (0.15)
    pub max_surplus_fraction: f64,
}

impl EnergyConstants {
    /// Published coefficients
    pub const STANDARD: Self = Self {
        msj_weight_coef: energy::MSJ_WEIGHT_COEF,
        msj_height_coef: energy::MSJ_HEIGHT_COEF,
        msj_age_coef: energy::MSJ_AGE_COEF,
        msj_male_constant: energy::MSJ_MALE_CONSTANT,
        msj_female_constant: energy::MSJ_FEMALE_CONSTANT,
        katch_mcardle_intercept: energy::KATCH_MCARDLE_INTERCEPT,
        katch_mcardle_lbm_coef: energy::KATCH_MCARDLE_LBM_COEF,
        activity_factors: ActivityFactors {
            sedentary: energy::PAL_SEDENTARY,
            light: energy::PAL_LIGHT,
            moderate: energy::PAL_MODERATE,
            active: energy::PAL_ACTIVE,
            very_active: energy::PAL_VERY_ACTIVE,
            athlete: energy::PAL_ATHLETE,
            fallback: energy::PAL_MODERATE,
        },
        kcal_per_lb: energy::KCAL_PER_LB,
        max_deficit_fraction: energy::MAX_DEFICIT_FRACTION,
        max_surplus_fraction: energy::MAX_SURPLUS_FRACTION,
    };
}

impl Default for EnergyConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Which BMR equation produced an estimate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmrMethod {
    /// Weight, height, age, and sex
    MifflinStJeor,
    /// Lean body mass from body fat percentage
    KatchMcardle,
}

/// Every intermediate value of one target computation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyEstimate {
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Equation used for `bmr`
    pub bmr_method: BmrMethod,
    /// PAL multiplier applied
    pub activity_factor: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Signed weekly change derived from the goal (lb/week)
    pub weekly_delta_lb: f64,
    /// Goal adjustment before clamping (kcal/day)
    pub daily_adjustment_kcal: f64,
    /// Lowest allowed target (TDEE minus the maximum deficit)
    pub min_target_kcal: f64,
    /// Highest allowed target (TDEE plus the maximum surplus)
    pub max_target_kcal: f64,
    /// Target before rounding, after clamping
    pub clamped_target_kcal: f64,
    /// Rounded daily target (kcal/day)
    pub target_kcal: i32,
}

impl EnergyEstimate {
    /// Whether the requested rate was capped by the deficit/surplus limits
    #[must_use]
    pub fn is_clamped(&self) -> bool {
        let raw = self.tdee + self.daily_adjustment_kcal;
        (raw - self.clamped_target_kcal).abs() > f64::EPSILON * raw.abs().max(1.0)
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female and other: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn mifflin_st_jeor_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    constants: &EnergyConstants,
) -> f64 {
    let sex_constant = match sex {
        Sex::Male => constants.msj_male_constant,
        Sex::Female | Sex::Other => constants.msj_female_constant,
    };

    constants.msj_weight_coef * weight_kg
        + constants.msj_height_coef * height_cm
        + constants.msj_age_coef * f64::from(age)
        + sex_constant
}

/// Calculate Basal Metabolic Rate from lean body mass (Katch-McArdle)
///
/// Formula: BMR = 370 + 21.6 x LBM, with LBM = `weight_kg` x (1 - bf/100)
#[must_use]
pub fn katch_mcardle_bmr(weight_kg: f64, body_fat_percent: f64, constants: &EnergyConstants) -> f64 {
    let lean_mass_kg = weight_kg * (1.0 - body_fat_percent / 100.0);
    constants.katch_mcardle_intercept + constants.katch_mcardle_lbm_coef * lean_mass_kg
}

/// PAL multiplier for an activity level
///
/// `Active` and `VeryActive` share 1.725. Unknown categories get the
/// moderate multiplier.
#[must_use]
pub fn activity_factor(level: ActivityLevel, constants: &EnergyConstants) -> f64 {
    let factors = &constants.activity_factors;
    match level {
        ActivityLevel::Sedentary => factors.sedentary,
        ActivityLevel::Light => factors.light,
        ActivityLevel::Moderate => factors.moderate,
        ActivityLevel::Active => factors.active,
        ActivityLevel::VeryActive => factors.very_active,
        ActivityLevel::Athlete => factors.athlete,
        ActivityLevel::Unknown => {
            warn!(
                fallback = factors.fallback,
                "unknown activity level, using fallback multiplier"
            );
            factors.fallback
        }
    }
}

/// Signed weekly weight change in lb
///
/// The sign comes from the goal, never from the rate field: a negative rate
/// with `Gain` still gains.
#[must_use]
pub fn weekly_delta_lb(goal: Goal, rate_lbs_per_week: f64) -> f64 {
    match goal {
        Goal::Recomposition => 0.0,
        Goal::Gain => rate_lbs_per_week.abs(),
        Goal::Lose => -rate_lbs_per_week.abs(),
    }
}

/// Daily caloric adjustment for a weekly weight change
#[must_use]
pub fn daily_adjustment_kcal(weekly_delta_lb: f64, constants: &EnergyConstants) -> f64 {
    weekly_delta_lb * constants.kcal_per_lb / units::DAYS_PER_WEEK
}

/// Run the full estimate with an explicit coefficient table
#[must_use]
pub fn estimate_energy(profile: &Profile, constants: &EnergyConstants) -> EnergyEstimate {
    let weight_kg = to_kilograms(profile.weight);
    let height_cm = to_centimeters(profile.height);

    let (bmr, bmr_method) = match profile.body_fat_percent {
        Some(body_fat) => (
            katch_mcardle_bmr(weight_kg, body_fat, constants),
            BmrMethod::KatchMcardle,
        ),
        None => (
            mifflin_st_jeor_bmr(weight_kg, height_cm, profile.age, profile.sex, constants),
            BmrMethod::MifflinStJeor,
        ),
    };

    let factor = activity_factor(profile.activity_level, constants);
    let tdee = bmr * factor;

    let weekly_delta = weekly_delta_lb(profile.goal, profile.rate_lbs_per_week);
    let adjustment = daily_adjustment_kcal(weekly_delta, constants);

    let min_target = tdee - constants.max_deficit_fraction * tdee;
    let max_target = tdee + constants.max_surplus_fraction * tdee;
    let clamped = clamp_between(tdee + adjustment, min_target, max_target);
    let target_kcal = round_half_up(clamped);

    debug!(
        weight_kg,
        height_cm,
        bmr,
        ?bmr_method,
        activity_factor = factor,
        tdee,
        weekly_delta_lb = weekly_delta,
        target_kcal,
        "energy target estimated"
    );

    EnergyEstimate {
        weight_kg,
        height_cm,
        bmr,
        bmr_method,
        activity_factor: factor,
        tdee,
        weekly_delta_lb: weekly_delta,
        daily_adjustment_kcal: adjustment,
        min_target_kcal: min_target,
        max_target_kcal: max_target,
        clamped_target_kcal: clamped,
        target_kcal,
    }
}

/// Daily calorie target with the standard coefficients
#[must_use]
pub fn compute_target_calories(profile: &Profile) -> i32 {
    estimate_energy(profile, &EnergyConstants::STANDARD).target_kcal
}

/// Computed target plus the value to persist as the last target
///
/// The custom override, when present, becomes the last target; the computed
/// value is always recomputed.
#[must_use]
pub fn resolve_targets(profile: &Profile) -> ProfileTargets {
    ProfileTargets::new(compute_target_calories(profile), profile.custom_target_kcal)
}
