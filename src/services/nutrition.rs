// ABOUTME: Nutrition profile service validating a payload and computing its calorie targets
// ABOUTME: Returns the record to persist together with the computed and last targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::validation::{ProfilePayload, ValidatedProfile};
use fittrack_intelligence::{estimate_energy, EnergyConstants, EnergyEstimate};
use fittrack_core::models::{Profile, ProfileTargets};
use serde::Serialize;
use tracing::info;

/// Profile ready to persist
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedProfile {
    /// Validated profile and preferences
    #[serde(flatten)]
    pub record: ValidatedProfile,
    /// Computed target and the target to store as last
    pub targets: ProfileTargets,
    /// Intermediate values of the computation
    pub estimate: EnergyEstimate,
}

/// Nutrition profile operations
#[derive(Debug, Clone, Copy, Default)]
pub struct NutritionService {
    constants: EnergyConstants,
}

impl NutritionService {
    /// Service using the standard coefficients
    #[must_use]
    pub const fn new() -> Self {
        Self {
            constants: EnergyConstants::STANDARD,
        }
    }

    /// Validate a submitted profile and compute its targets
    ///
    /// `lastTargetKcal` sent by the client is replaced: the stored last target
    /// is the custom override when present, otherwise the computed target.
    ///
    /// # Errors
    ///
    /// Returns the validation error for the first invalid field
    pub fn save_profile(&self, payload: ProfilePayload) -> AppResult<SavedProfile> {
        let mut record = payload.validate()?;
        let (estimate, targets) = self.targets_for(&record.profile);
        record.last_target_kcal = Some(targets.last_target_kcal);

        info!(
            computed_target_kcal = targets.computed_target_kcal,
            last_target_kcal = targets.last_target_kcal,
            overridden = targets.is_overridden(),
            bmr_method = ?estimate.bmr_method,
            "nutrition profile saved"
        );

        Ok(SavedProfile {
            record,
            targets,
            estimate,
        })
    }

    /// Estimate and targets for an already validated profile
    #[must_use]
    pub fn targets_for(&self, profile: &Profile) -> (EnergyEstimate, ProfileTargets) {
        let estimate = estimate_energy(profile, &self.constants);
        let targets = ProfileTargets::new(estimate.target_kcal, profile.custom_target_kcal);
        (estimate, targets)
    }
}
