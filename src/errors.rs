// ABOUTME: Error handling re-exports for the fittrack boundary layer
// ABOUTME: AppError and ErrorCode are defined in fittrack-core and shared by every crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! See [`fittrack_core::errors`] for the definitions.

pub use fittrack_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
