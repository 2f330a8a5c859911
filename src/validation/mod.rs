// ABOUTME: Boundary validation turning loose JSON payloads into typed domain values
// ABOUTME: Shared field checks (presence, ranges, whole numbers, dates) used by every payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Payload validation
//!
//! Payloads arrive as loosely typed JSON (`*Payload` structs with optional
//! fields). Each payload's `validate()` checks it once and returns the typed
//! value the pure core consumes; the core never re-validates. Every failure
//! is an [`AppError`] whose details name the offending field.

/// Diary entry payloads
pub mod diary;
/// Nutrition profile payloads
pub mod profile;
/// Routine payloads
pub mod routine;
/// Schedule payloads
pub mod schedule;

pub use diary::MealEntryPayload;
pub use profile::{ProfilePayload, ValidatedProfile};
pub use routine::{RoutineItemPayload, RoutinePayload, SetPayload};
pub use schedule::{ScheduleDraft, SchedulePayload};

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};
use fittrack_core::models::parse_start_date_time;
use serde::de::DeserializeOwned;

/// Deserialize a JSON body into a payload type
///
/// # Errors
///
/// Returns `InvalidInput` when the body is not JSON of the expected shape
pub fn parse_payload<T: DeserializeOwned>(body: &str) -> AppResult<T> {
    serde_json::from_str(body).map_err(|e| {
        AppError::invalid_input(format!("Invalid payload: {e}")).with_source(e)
    })
}

pub(crate) fn required<T>(field: &str, value: Option<T>) -> AppResult<T> {
    value.ok_or_else(|| AppError::missing_field(field))
}

pub(crate) fn non_empty_text(field: &str, value: Option<String>) -> AppResult<String> {
    let text = required(field, value)?;
    if text.trim().is_empty() {
        return Err(AppError::invalid_input(format!("{field} must not be empty"))
            .with_details(serde_json::json!({ "field": field })));
    }
    Ok(text)
}

fn finite(field: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::invalid_format(field, format!("{field} must be a finite number")))
    }
}

pub(crate) fn positive(field: &str, value: f64) -> AppResult<f64> {
    let value = finite(field, value)?;
    if value <= 0.0 {
        return Err(AppError::out_of_range(field, format!("{field} must be positive")));
    }
    Ok(value)
}

pub(crate) fn non_negative(field: &str, value: f64) -> AppResult<f64> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(AppError::out_of_range(field, format!("{field} must not be negative")));
    }
    Ok(value)
}

pub(crate) fn within(field: &str, value: f64, min: f64, max: f64) -> AppResult<f64> {
    let value = finite(field, value)?;
    if value < min || value > max {
        return Err(AppError::out_of_range(
            field,
            format!("{field} must be between {min} and {max}"),
        ));
    }
    Ok(value)
}

/// Accept only numbers without a fractional part
pub(crate) fn whole_number(field: &str, value: f64) -> AppResult<i64> {
    let value = finite(field, value)?;
    if value.fract() != 0.0 {
        return Err(AppError::invalid_format(field, format!("{field} must be an integer")));
    }
    if value.abs() > 9_007_199_254_740_991.0 {
        return Err(AppError::out_of_range(field, format!("{field} is too large")));
    }
    Ok(value as i64)
}

pub(crate) fn whole_within(field: &str, value: f64, min: i64, max: i64) -> AppResult<i64> {
    let value = whole_number(field, value)?;
    if value < min || value > max {
        return Err(AppError::out_of_range(
            field,
            format!("{field} must be between {min} and {max}"),
        ));
    }
    Ok(value)
}

pub(crate) fn positive_whole(field: &str, value: f64) -> AppResult<i64> {
    let value = whole_number(field, value)?;
    if value <= 0 {
        return Err(AppError::out_of_range(field, format!("{field} must be positive")));
    }
    Ok(value)
}

/// Parse a `YYYY-MM-DD` calendar date
///
/// # Errors
///
/// Returns `InvalidFormat` naming `field` when the text is not a date
pub fn parse_date(field: &str, text: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|e| {
        AppError::invalid_format(field, format!("{field} must be a YYYY-MM-DD date")).with_source(e)
    })
}

/// Parse a start date-time
///
/// Accepts RFC 3339 (the wall-clock time as written is kept, the offset is
/// dropped), a naive `YYYY-MM-DDTHH:MM[:SS[.f]]`, or a plain date at midnight.
///
/// # Errors
///
/// Returns `InvalidFormat` naming `field` when no format matches
pub fn parse_date_time(field: &str, text: &str) -> AppResult<NaiveDateTime> {
    parse_start_date_time(text).ok_or_else(|| {
        AppError::invalid_format(field, format!("{field} must be an ISO date or date-time"))
    })
}
