// ABOUTME: Exercise search request building and response normalization
// ABOUTME: Supports API Ninjas and ExerciseDB (RapidAPI) with stable derived exercise ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{text_of, trimmed_query, SearchRequest};
use crate::config::api_providers::{
    ApiProvidersConfig, ExerciseProvider, API_NINJAS_EXERCISES_BASE, EXERCISEDB_BASE,
    EXERCISEDB_HOST,
};
use crate::errors::AppResult;
use fittrack_core::models::ExerciseItem;
use serde_json::Value;
use tracing::debug;

/// Exercise search against the configured provider
#[derive(Debug, Clone)]
pub struct ExerciseSearch {
    provider: ExerciseProvider,
    base: String,
    api_key: String,
}

impl ExerciseSearch {
    /// Resolve provider, base URL, and key from configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for an unsupported provider and `ConfigMissing`
    /// when no exercise key is configured
    pub fn from_config(config: &ApiProvidersConfig) -> AppResult<Self> {
        let provider = config.exercise_provider()?;
        let api_key = config.exercises_key()?.to_owned();
        let base = config.exercises_api_base.clone().unwrap_or_else(|| {
            match provider {
                ExerciseProvider::ApiNinjas => API_NINJAS_EXERCISES_BASE,
                ExerciseProvider::RapidapiExercisedb => EXERCISEDB_BASE,
            }
            .to_owned()
        });

        Ok(Self {
            provider,
            base,
            api_key,
        })
    }

    /// Provider in use
    #[must_use]
    pub const fn provider(&self) -> ExerciseProvider {
        self.provider
    }

    /// Request for a name search
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when the query is blank
    pub fn request(&self, query: &str) -> AppResult<SearchRequest> {
        let query = urlencoding::encode(trimmed_query(query)?);
        let request = match self.provider {
            ExerciseProvider::ApiNinjas => {
                SearchRequest::get(format!("{}?name={query}", self.base))
                    .secret_header("X-Api-Key", &self.api_key)
            }
            ExerciseProvider::RapidapiExercisedb => {
                SearchRequest::get(format!("{}/exercises/name/{query}", self.base))
                    .secret_header("X-RapidAPI-Key", &self.api_key)
                    .header("X-RapidAPI-Host", EXERCISEDB_HOST)
            }
        };
        Ok(request.header("Content-Type", "application/json"))
    }

    /// Normalize an upstream body
    #[must_use]
    pub fn normalize(&self, body: &Value) -> Vec<ExerciseItem> {
        normalize_exercises(self.provider, body)
    }
}

/// Normalize an exercise search body
///
/// Accepts a bare array or an object with a `data` array; anything else is
/// an empty result.
#[must_use]
pub fn normalize_exercises(provider: ExerciseProvider, body: &Value) -> Vec<ExerciseItem> {
    let items = match body {
        Value::Array(items) => items.as_slice(),
        other => other
            .get("data")
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice),
    };

    let normalized: Vec<ExerciseItem> = items
        .iter()
        .enumerate()
        .map(|(index, item)| normalize_exercise(provider, item, index))
        .collect();

    debug!(
        provider = provider.as_str(),
        count = normalized.len(),
        "exercise search normalized"
    );
    normalized
}

const NAME_KEYS: [&str; 2] = ["name", "exercise_name"];
const TARGET_KEYS: [&str; 3] = ["target", "muscle", "bodyPart"];

fn normalize_exercise(provider: ExerciseProvider, item: &Value, index: usize) -> ExerciseItem {
    let id = text_of(item, &["id", "exerciseId"])
        .unwrap_or_else(|| derived_exercise_id(provider, item, index));

    ExerciseItem {
        id,
        name: text_of(item, &NAME_KEYS).unwrap_or_else(|| "Exercise".to_owned()),
        target: text_of(item, &TARGET_KEYS).unwrap_or_default(),
        equipment: text_of(item, &["equipment"]).unwrap_or_default(),
        body_part: text_of(item, &["bodyPart", "type"]).unwrap_or_default(),
        gif_url: text_of(item, &["gifUrl"]).unwrap_or_default(),
    }
}

/// `<provider>:<name>:<target>:<equipment>`, lowercased, blank parts skipped
fn derived_exercise_id(provider: ExerciseProvider, item: &Value, index: usize) -> String {
    let part = |keys: &[&str]| {
        text_of(item, keys)
            .unwrap_or_default()
            .trim()
            .to_lowercase()
    };
    let parts: Vec<String> = [part(&NAME_KEYS), part(&TARGET_KEYS), part(&["equipment"])]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        format!("{}:{index}", provider.as_str())
    } else {
        format!("{}:{}", provider.as_str(), parts.join(":"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(provider: &str) -> ApiProvidersConfig {
        ApiProvidersConfig {
            exercise_provider: provider.to_owned(),
            exercises_api_base: None,
            exercises_api_key: Some("secret".to_owned()),
            nutrition_api_key: None,
        }
    }

    #[test]
    fn test_api_ninjas_request() {
        let search = ExerciseSearch::from_config(&config("api-ninjas")).unwrap();
        let request = search.request(" bench press ").unwrap();
        assert_eq!(
            request.url,
            "https://api.api-ninjas.com/v1/exercises?name=bench%20press"
        );
        assert_eq!(request.headers["X-Api-Key"], "secret");
        assert_eq!(request.redacted().headers["X-Api-Key"], "[REDACTED]");
    }

    #[test]
    fn test_exercisedb_request() {
        let search = ExerciseSearch::from_config(&config("rapidapi-exercisedb")).unwrap();
        let request = search.request("curl").unwrap();
        assert_eq!(
            request.url,
            "https://exercisedb.p.rapidapi.com/exercises/name/curl"
        );
        assert_eq!(request.headers["X-RapidAPI-Host"], "exercisedb.p.rapidapi.com");
        let redacted = request.redacted();
        assert_eq!(redacted.headers["X-RapidAPI-Key"], "[REDACTED]");
        assert_eq!(redacted.headers["X-RapidAPI-Host"], "exercisedb.p.rapidapi.com");
    }

    #[test]
    fn test_derived_id_skips_blank_parts() {
        let body = json!([
            { "name": "Barbell Curl", "muscle": "Biceps", "equipment": "" },
            { "type": "cardio" },
        ]);
        let items = normalize_exercises(ExerciseProvider::ApiNinjas, &body);
        assert_eq!(items[0].id, "api-ninjas:barbell curl:biceps");
        assert_eq!(items[0].target, "Biceps");
        assert_eq!(items[1].id, "api-ninjas:1");
        assert_eq!(items[1].name, "Exercise");
        assert_eq!(items[1].body_part, "cardio");
    }
}
