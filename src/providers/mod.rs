// ABOUTME: Third-party exercise and nutrition search shaping without performing HTTP
// ABOUTME: Outbound request descriptions, upstream status checks, and JSON value helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Search providers
//!
//! The transport belongs to the caller. This module describes the request to
//! send ([`SearchRequest`]) and turns the body that came back into
//! [`ExerciseItem`](fittrack_core::models::ExerciseItem) or
//! [`FoodItem`](fittrack_core::models::FoodItem) lists.

/// Exercise search (API Ninjas, `ExerciseDB`)
pub mod exercises;
/// Food search (API Ninjas nutrition)
pub mod nutrition;

pub use exercises::{normalize_exercises, ExerciseSearch};
pub use nutrition::{normalize_foods, FoodSearch};

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

const REDACTED: &str = "[REDACTED]";

/// Outbound GET request description
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchRequest {
    /// Always `GET`
    pub method: &'static str,
    /// Fully encoded URL
    pub url: String,
    /// Request headers
    pub headers: BTreeMap<String, String>,
    #[serde(skip)]
    secret_headers: Vec<&'static str>,
}

impl SearchRequest {
    fn get(url: String) -> Self {
        Self {
            method: "GET",
            url,
            headers: BTreeMap::new(),
            secret_headers: Vec::new(),
        }
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_owned(), value.to_owned());
        self
    }

    fn secret_header(mut self, name: &'static str, value: &str) -> Self {
        self.secret_headers.push(name);
        self.header(name, value)
    }

    /// Copy with API key headers masked, for display
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        for name in &self.secret_headers {
            if let Some(value) = copy.headers.get_mut(*name) {
                REDACTED.clone_into(value);
            }
        }
        copy
    }
}

/// Map a non-success upstream status to `ExternalServiceError`
///
/// # Errors
///
/// Returns `ExternalServiceError` carrying the status and body text when
/// `status` is outside 200-299
pub fn check_upstream_status(service: &str, status: u16, body: &str) -> AppResult<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(
        AppError::external_service(service, format!("HTTP {status}: {body}"))
            .with_details(serde_json::json!({ "status": status, "body": body })),
    )
}

fn trimmed_query(query: &str) -> AppResult<&str> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::missing_field("q"));
    }
    Ok(query)
}

/// First of `keys` present with a non-null value
fn first_present<'a>(item: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| item.get(key))
        .find(|value| !value.is_null())
}

/// Text form of a scalar: strings as-is, everything else as JSON text
fn as_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn text_of(item: &Value, keys: &[&str]) -> Option<String> {
    first_present(item, keys).map(as_text)
}

/// Number from a JSON number or a numeric string; `None` when absent or not numeric
fn number_of(item: &Value, key: &str) -> Option<f64> {
    let value = item.get(key)?;
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}
