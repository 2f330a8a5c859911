// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for fittrack-cli
// ABOUTME: JSON input reading and output printing

pub mod io;
