// ABOUTME: Integration tests for the energy target estimator
// ABOUTME: BMR equations, PAL multipliers, goal adjustments, clamping, and overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Energy target estimator tests
//!
//! Expected values are worked out by hand next to each assertion.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::intelligence::{
    compute_target_calories, estimate_energy, resolve_targets, BmrMethod, EnergyConstants,
};
use fittrack::models::{ActivityLevel, Goal, Height, Profile, Sex, Weight};

mod common;

use common::reference_profile;

// ============================================================================
// BMR EQUATIONS
// ============================================================================

#[test]
fn test_reference_profile_targets_2415() {
    common::init_test_logging();
    // 10*75 + 6.25*175 - 5*25 - 161 = 1557.75; x1.55 = 2414.5125
    assert_eq!(compute_target_calories(&reference_profile()), 2415);
}

#[test]
fn test_male_mifflin_st_jeor() {
    let profile = Profile {
        weight: Weight::kg(80.0),
        height: Height::cm(180.0),
        age: 30,
        sex: Sex::Male,
        ..reference_profile()
    };
    // 800 + 1125 - 150 + 5 = 1780; x1.55 = 2759
    let estimate = estimate_energy(&profile, &EnergyConstants::STANDARD);
    assert!((estimate.bmr - 1780.0).abs() < 1e-9);
    assert_eq!(estimate.target_kcal, 2759);
}

#[test]
fn test_female_mifflin_st_jeor() {
    let profile = Profile {
        weight: Weight::kg(80.0),
        height: Height::cm(180.0),
        age: 30,
        sex: Sex::Female,
        ..reference_profile()
    };
    // 1780 - 166 = 1614; x1.55 = 2501.7
    assert_eq!(compute_target_calories(&profile), 2502);
}

#[test]
fn test_imperial_units_are_converted() {
    let profile = Profile {
        weight: Weight::lb(165.0),
        height: Height::inches(69.0),
        age: 30,
        sex: Sex::Male,
        activity_level: ActivityLevel::Sedentary,
        ..reference_profile()
    };
    let estimate = estimate_energy(&profile, &EnergyConstants::STANDARD);
    assert!((estimate.weight_kg - 74.842_741_05).abs() < 1e-9);
    assert!((estimate.height_cm - 175.26).abs() < 1e-9);
    // BMR 1698.8024105; x1.2 = 2038.56
    assert_eq!(estimate.target_kcal, 2039);
}

#[test]
fn test_body_fat_switches_to_katch_mcardle() {
    let profile = Profile {
        body_fat_percent: Some(20.0),
        ..reference_profile()
    };
    let estimate = estimate_energy(&profile, &EnergyConstants::STANDARD);
    assert_eq!(estimate.bmr_method, BmrMethod::KatchMcardle);
    // 370 + 21.6 * 60 = 1666; x1.55 = 2582.3
    assert_eq!(estimate.target_kcal, 2582);
}

#[test]
fn test_body_fat_ignores_sex_and_age() {
    let base = Profile {
        body_fat_percent: Some(15.0),
        ..reference_profile()
    };
    let other = Profile {
        sex: Sex::Male,
        age: 70,
        ..base.clone()
    };
    assert_eq!(compute_target_calories(&base), compute_target_calories(&other));
}

// ============================================================================
// ACTIVITY MULTIPLIERS
// ============================================================================

#[test]
fn test_every_activity_level() {
    let cases = [
        (ActivityLevel::Sedentary, 1869),
        (ActivityLevel::Light, 2142),
        (ActivityLevel::Moderate, 2415),
        (ActivityLevel::Active, 2687),
        (ActivityLevel::VeryActive, 2687),
        (ActivityLevel::Athlete, 2960),
        (ActivityLevel::Unknown, 2415),
    ];
    for (activity_level, expected) in cases {
        let profile = Profile {
            activity_level,
            ..reference_profile()
        };
        assert_eq!(
            compute_target_calories(&profile),
            expected,
            "activity level {activity_level:?}"
        );
    }
}

#[test]
fn test_stored_unknown_activity_level_uses_moderate() {
    let stored = r#"{
        "weight": {"value": 75, "unit": "kg"},
        "height": {"value": 175, "unit": "cm"},
        "age": 25,
        "goal": "recomp",
        "activity_level": "couch"
    }"#;
    let profile: Profile = serde_json::from_str(stored).unwrap();
    assert_eq!(profile.activity_level, ActivityLevel::Unknown);
    assert_eq!(profile.sex, Sex::Other);
    assert_eq!(compute_target_calories(&profile), 2415);
}

// ============================================================================
// GOAL ADJUSTMENT AND CLAMPING
// ============================================================================

#[test]
fn test_gain_within_surplus_cap() {
    let profile = Profile {
        goal: Goal::Gain,
        rate_lbs_per_week: 0.5,
        ..reference_profile()
    };
    // 2414.5125 + 250
    assert_eq!(compute_target_calories(&profile), 2665);
}

#[test]
fn test_gain_capped_at_fifteen_percent() {
    let profile = Profile {
        goal: Goal::Gain,
        rate_lbs_per_week: 1.0,
        ..reference_profile()
    };
    let estimate = estimate_energy(&profile, &EnergyConstants::STANDARD);
    // 2914.5125 requested, cap 2776.689375
    assert!(estimate.is_clamped());
    assert_eq!(estimate.target_kcal, 2777);
}

#[test]
fn test_lose_within_deficit_cap() {
    let profile = Profile {
        goal: Goal::Lose,
        rate_lbs_per_week: 1.0,
        ..reference_profile()
    };
    assert_eq!(compute_target_calories(&profile), 1915);
}

#[test]
fn test_lose_capped_at_quarter_deficit() {
    let profile = Profile {
        goal: Goal::Lose,
        rate_lbs_per_week: 2.0,
        ..reference_profile()
    };
    // 1414.5125 requested, floor 1810.884375
    assert_eq!(compute_target_calories(&profile), 1811);
}

#[test]
fn test_rate_sign_is_ignored() {
    let gain = Profile {
        goal: Goal::Gain,
        rate_lbs_per_week: -0.5,
        ..reference_profile()
    };
    let lose = Profile {
        goal: Goal::Lose,
        rate_lbs_per_week: -0.5,
        ..reference_profile()
    };
    assert_eq!(compute_target_calories(&gain), 2665);
    assert_eq!(compute_target_calories(&lose), 2165);
}

#[test]
fn test_recomposition_ignores_rate() {
    let profile = Profile {
        rate_lbs_per_week: 2.0,
        ..reference_profile()
    };
    assert_eq!(compute_target_calories(&profile), 2415);
}

// ============================================================================
// OVERRIDES
// ============================================================================

#[test]
fn test_custom_target_becomes_last_target() {
    let profile = Profile {
        custom_target_kcal: Some(2100),
        ..reference_profile()
    };
    let targets = resolve_targets(&profile);
    assert_eq!(targets.computed_target_kcal, 2415);
    assert_eq!(targets.last_target_kcal, 2100);
    assert_eq!(targets.display_target_kcal(), 2100);
    assert!(targets.is_overridden());
}

#[test]
fn test_without_override_last_equals_computed() {
    let targets = resolve_targets(&reference_profile());
    assert_eq!(targets.last_target_kcal, targets.computed_target_kcal);
    assert!(!targets.is_overridden());
}

#[test]
fn test_override_does_not_change_computation() {
    let profile = Profile {
        custom_target_kcal: Some(1500),
        ..reference_profile()
    };
    assert_eq!(compute_target_calories(&profile), 2415);
}
