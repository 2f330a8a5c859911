// ABOUTME: Normalized exercise search hit shared by every exercise provider
// ABOUTME: Provider-specific field names are mapped onto this shape by the boundary layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Exercise returned by a search, independent of the upstream provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseItem {
    /// Provider id, or a stable id derived from the descriptive fields
    pub id: String,
    /// Display name
    pub name: String,
    /// Target muscle
    pub target: String,
    /// Equipment needed
    pub equipment: String,
    /// Body part
    pub body_part: String,
    /// Animated demonstration, empty when the provider has none
    pub gif_url: String,
}
