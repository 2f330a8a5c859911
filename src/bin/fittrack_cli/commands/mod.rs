// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for fittrack-cli
// ABOUTME: Energy targets, planner and recurrence, diary, and search provider commands

pub mod diary;
pub mod energy;
pub mod planner;
pub mod search;
