// ABOUTME: Property-based tests for the energy target estimator
// ABOUTME: Determinism, clamp bounds, and goal monotonicity over metric and imperial profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::intelligence::{compute_target_calories, estimate_energy, EnergyConstants};
use fittrack::models::{ActivityLevel, Goal, Height, Profile, Sex, Weight};
use proptest::prelude::*;

fn activity_level() -> impl Strategy<Value = ActivityLevel> {
    prop_oneof![
        Just(ActivityLevel::Sedentary),
        Just(ActivityLevel::Light),
        Just(ActivityLevel::Moderate),
        Just(ActivityLevel::Active),
        Just(ActivityLevel::VeryActive),
        Just(ActivityLevel::Athlete),
    ]
}

fn sex() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female), Just(Sex::Other)]
}

fn weight() -> impl Strategy<Value = Weight> {
    prop_oneof![
        (30.0f64..250.0).prop_map(Weight::kg),
        (66.0f64..550.0).prop_map(Weight::lb),
    ]
}

fn height() -> impl Strategy<Value = Height> {
    prop_oneof![
        (120.0f64..230.0).prop_map(Height::cm),
        (47.0f64..90.0).prop_map(Height::inches),
    ]
}

prop_compose! {
    fn recomp_profile()(
        weight in weight(),
        height in height(),
        age in 10u32..=120,
        sex in sex(),
        activity_level in activity_level(),
        body_fat in proptest::option::of(0.0f64..=75.0),
    ) -> Profile {
        Profile {
            weight,
            height,
            age,
            sex,
            goal: Goal::Recomposition,
            rate_lbs_per_week: 0.0,
            activity_level,
            body_fat_percent: body_fat,
            custom_target_kcal: None,
        }
    }
}

proptest! {
    #[test]
    fn prop_same_profile_same_target(profile in recomp_profile()) {
        prop_assert_eq!(
            compute_target_calories(&profile),
            compute_target_calories(&profile.clone())
        );
    }

    #[test]
    fn prop_recomposition_is_rounded_tdee(profile in recomp_profile(), rate in -2.0f64..2.0) {
        let profile = Profile { rate_lbs_per_week: rate, ..profile };
        let estimate = estimate_energy(&profile, &EnergyConstants::STANDARD);
        prop_assert_eq!(i64::from(estimate.target_kcal), (estimate.tdee + 0.5).floor() as i64);
    }

    #[test]
    fn prop_target_within_clamp_bounds(
        profile in recomp_profile(),
        goal in prop_oneof![Just(Goal::Lose), Just(Goal::Gain)],
        rate in -2.0f64..2.0,
    ) {
        let profile = Profile { goal, rate_lbs_per_week: rate, ..profile };
        let estimate = estimate_energy(&profile, &EnergyConstants::STANDARD);
        let target = f64::from(estimate.target_kcal);
        prop_assert!(target >= estimate.tdee * 0.75 - 1.0);
        prop_assert!(target <= estimate.tdee * 1.15 + 1.0);
    }

    #[test]
    fn prop_gain_never_below_lose(profile in recomp_profile(), rate in 0.0f64..2.0) {
        let maintain = compute_target_calories(&profile);
        let gain = compute_target_calories(&Profile {
            goal: Goal::Gain,
            rate_lbs_per_week: rate,
            ..profile.clone()
        });
        let lose = compute_target_calories(&Profile {
            goal: Goal::Lose,
            rate_lbs_per_week: rate,
            ..profile
        });
        prop_assert!(lose <= maintain);
        prop_assert!(maintain <= gain);
    }

    #[test]
    fn prop_faster_gain_is_not_smaller(profile in recomp_profile(), a in 0.0f64..2.0, b in 0.0f64..2.0) {
        let (slow, fast) = if a <= b { (a, b) } else { (b, a) };
        let at = |rate: f64| compute_target_calories(&Profile {
            goal: Goal::Gain,
            rate_lbs_per_week: rate,
            ..profile.clone()
        });
        prop_assert!(at(slow) <= at(fast));
    }

    #[test]
    fn prop_faster_loss_is_not_larger(profile in recomp_profile(), a in 0.0f64..2.0, b in 0.0f64..2.0) {
        let (slow, fast) = if a <= b { (a, b) } else { (b, a) };
        let at = |rate: f64| compute_target_calories(&Profile {
            goal: Goal::Lose,
            rate_lbs_per_week: rate,
            ..profile.clone()
        });
        prop_assert!(at(fast) <= at(slow));
    }
}
