// ABOUTME: Integration tests for daily diary totals and remaining calories
// ABOUTME: Covers meal grouping, missing macros, date filtering, and the diary service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::intelligence::summarize_day;
use fittrack::models::{FoodItem, MealType, ProfileTargets};
use fittrack::services::DiaryService;

mod common;

use common::{day, meal_entry};

#[test]
fn test_totals_treat_missing_macros_as_zero() {
    common::init_test_logging();
    let today = day(2024, 5, 1);
    let entries = vec![
        meal_entry(today, MealType::Breakfast, 300.0, Some(20.0), Some(10.0), None),
        meal_entry(today, MealType::Breakfast, 120.0, None, None, Some(30.0)),
        meal_entry(today, MealType::Snack, 80.5, Some(2.5), None, None),
    ];
    let summary = summarize_day(&entries, today, None);

    assert!((summary.totals.calories - 500.5).abs() < 1e-9);
    assert!((summary.totals.protein_g - 22.5).abs() < 1e-9);
    assert!((summary.totals.fat_g - 10.0).abs() < 1e-9);
    assert!((summary.totals.carbohydrates_g - 30.0).abs() < 1e-9);

    let breakfast = &summary.meals[0];
    assert_eq!(breakfast.meal, MealType::Breakfast);
    assert_eq!(breakfast.entries.len(), 2);
    assert!((breakfast.totals.calories - 420.0).abs() < 1e-9);
}

#[test]
fn test_meals_listed_in_display_order() {
    let today = day(2024, 5, 1);
    let summary = summarize_day(&[], today, Some(2000));
    let meals: Vec<_> = summary.meals.iter().map(|group| group.meal).collect();
    assert_eq!(
        meals,
        vec![MealType::Breakfast, MealType::Lunch, MealType::Dinner, MealType::Snack]
    );
    assert_eq!(summary.remaining_kcal, Some(2000));
}

#[test]
fn test_remaining_goes_negative_when_over_target() {
    let today = day(2024, 5, 1);
    let entries = vec![meal_entry(today, MealType::Dinner, 2100.4, None, None, None)];
    let summary = summarize_day(&entries, today, Some(2000));
    assert_eq!(summary.remaining_kcal, Some(-100));
}

#[test]
fn test_other_days_are_ignored() {
    let entries = vec![
        meal_entry(day(2024, 5, 1), MealType::Lunch, 500.0, None, None, None),
        meal_entry(day(2024, 5, 2), MealType::Lunch, 700.0, None, None, None),
    ];
    let summary = summarize_day(&entries, day(2024, 5, 2), None);
    assert!((summary.totals.calories - 700.0).abs() < 1e-9);
}

#[test]
fn test_food_search_hit_becomes_entry() {
    let food = FoodItem {
        id: "egg-0".into(),
        name: "Egg".into(),
        serving_size_g: 50.0,
        calories: 72.0,
        protein_g: Some(6.3),
        fat_total_g: Some(4.8),
        carbohydrates_total_g: None,
    };
    let today = day(2024, 5, 1);
    let entry = food.to_entry(today, MealType::Breakfast);
    assert_eq!(entry.food_name, "Egg");
    assert!((entry.quantity_grams - 50.0).abs() < f64::EPSILON);

    let summary = summarize_day(&[entry], today, None);
    assert!((summary.totals.fat_g - 4.8).abs() < 1e-9);
}

#[test]
fn test_service_measures_against_displayed_target() {
    let today = day(2024, 5, 1);
    let entries = vec![meal_entry(today, MealType::Lunch, 600.0, None, None, None)];
    let targets = ProfileTargets::new(2415, Some(1800));

    let summary = DiaryService.day(&entries, today, Some(&targets));
    assert_eq!(summary.target_kcal, Some(1800));
    assert_eq!(summary.remaining_kcal, Some(1200));

    let without = DiaryService.day(&entries, today, None);
    assert_eq!(without.remaining_kcal, None);
}
