// ABOUTME: Integration tests for search request shaping and upstream body normalization
// ABOUTME: Covers both exercise providers, the nutrition endpoint, and upstream failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::config::{ApiProvidersConfig, ExerciseProvider};
use fittrack::errors::ErrorCode;
use fittrack::providers::{
    check_upstream_status, normalize_exercises, normalize_foods, ExerciseSearch, FoodSearch,
};
use serde_json::json;

fn config(provider: &str, key: Option<&str>) -> ApiProvidersConfig {
    ApiProvidersConfig {
        exercise_provider: provider.to_owned(),
        exercises_api_key: key.map(str::to_owned),
        ..ApiProvidersConfig::default()
    }
}

// ============================================================================
// REQUESTS
// ============================================================================

#[test]
fn test_exercise_request_needs_key() {
    let err = ExerciseSearch::from_config(&config("api-ninjas", None)).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
}

#[test]
fn test_unsupported_provider_rejected() {
    let err = ExerciseSearch::from_config(&config("wger", Some("k"))).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_blank_query_rejected() {
    let search = ExerciseSearch::from_config(&config("api-ninjas", Some("k"))).unwrap();
    let err = search.request("   ").unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert_eq!(err.field(), Some("q"));
}

#[test]
fn test_custom_base_url() {
    let cfg = ApiProvidersConfig {
        exercises_api_base: Some("http://localhost:9000/ex".into()),
        ..config("api-ninjas", Some("k"))
    };
    let request = ExerciseSearch::from_config(&cfg)
        .unwrap()
        .request("leg press & squat")
        .unwrap();
    assert_eq!(request.method, "GET");
    assert_eq!(request.url, "http://localhost:9000/ex?name=leg%20press%20%26%20squat");
    assert_eq!(request.headers["Content-Type"], "application/json");
}

#[test]
fn test_redacted_request_serializes_without_key() {
    let search = ExerciseSearch::from_config(&config("rapidapi-exercisedb", Some("super-secret")))
        .unwrap();
    assert_eq!(search.provider(), ExerciseProvider::RapidapiExercisedb);
    let shown = serde_json::to_string(&search.request("row").unwrap().redacted()).unwrap();
    assert!(!shown.contains("super-secret"));
    assert!(shown.contains("[REDACTED]"));
}

#[test]
fn test_food_key_falls_back_to_nutrition_key() {
    let cfg = ApiProvidersConfig {
        nutrition_api_key: Some("n-key".into()),
        ..ApiProvidersConfig::default()
    };
    let request = FoodSearch::from_config(&cfg).unwrap().request("apple").unwrap();
    assert_eq!(request.headers["X-Api-Key"], "n-key");

    let both = ApiProvidersConfig {
        exercises_api_key: Some("e-key".into()),
        ..cfg
    };
    let request = FoodSearch::from_config(&both).unwrap().request("apple").unwrap();
    assert_eq!(request.headers["X-Api-Key"], "e-key");

    let err = FoodSearch::from_config(&ApiProvidersConfig::default()).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
}

// ============================================================================
// NORMALIZATION
// ============================================================================

#[test]
fn test_exercisedb_body_normalized() {
    let body = json!([{
        "id": "0025",
        "name": "barbell bench press",
        "target": "pectorals",
        "equipment": "barbell",
        "bodyPart": "chest",
        "gifUrl": "https://example.test/0025.gif"
    }]);
    let items = normalize_exercises(ExerciseProvider::RapidapiExercisedb, &body);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "0025");
    assert_eq!(items[0].target, "pectorals");
    assert_eq!(items[0].body_part, "chest");
    assert_eq!(items[0].gif_url, "https://example.test/0025.gif");
}

#[test]
fn test_wrapped_body_and_numeric_ids() {
    let body = json!({ "data": [{ "exerciseId": 42, "exercise_name": "Plank", "type": "core" }] });
    let items = normalize_exercises(ExerciseProvider::ApiNinjas, &body);
    assert_eq!(items[0].id, "42");
    assert_eq!(items[0].name, "Plank");
    assert_eq!(items[0].body_part, "core");
    assert_eq!(items[0].equipment, "");
}

#[test]
fn test_derived_ids_are_stable_across_calls() {
    let body = json!([{ "name": " Goblet Squat ", "muscle": "quadriceps", "equipment": "Kettlebell" }]);
    let first = normalize_exercises(ExerciseProvider::ApiNinjas, &body);
    let second = normalize_exercises(ExerciseProvider::ApiNinjas, &body);
    assert_eq!(first[0].id, "api-ninjas:goblet squat:quadriceps:kettlebell");
    assert_eq!(first, second);
}

#[test]
fn test_unexpected_exercise_body_is_empty() {
    assert!(normalize_exercises(ExerciseProvider::ApiNinjas, &json!("oops")).is_empty());
    assert!(normalize_exercises(ExerciseProvider::ApiNinjas, &json!({ "data": 3 })).is_empty());
}

#[test]
fn test_food_body_keeps_reported_calories() {
    let body = json!([
        { "name": "Rice", "calories": 130, "serving_size_g": 150, "carbohydrates_total_g": 28.2 },
        { "name": "Oil", "fat_total_g": "14", "calories": "not available" },
    ]);
    let foods = normalize_foods(&body);
    assert!((foods[0].calories - 130.0).abs() < f64::EPSILON);
    assert!((foods[0].serving_size_g - 150.0).abs() < f64::EPSILON);
    assert_eq!(foods[0].protein_g, None);
    assert_eq!(foods[1].id, "oil-1");
    assert!((foods[1].calories - 126.0).abs() < 1e-9);
}

// ============================================================================
// UPSTREAM STATUS
// ============================================================================

#[test]
fn test_upstream_failure_carries_status_and_body() {
    assert!(check_upstream_status("ExerciseDB", 200, "[]").is_ok());
    let err = check_upstream_status("ExerciseDB", 403, "forbidden").unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert_eq!(err.http_status(), 502);
    assert_eq!(err.message, "ExerciseDB: HTTP 403: forbidden");
    assert_eq!(err.details["body"], "forbidden");
}
