// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: JSON input and output helpers for fittrack-cli
// ABOUTME: Reads files or stdin (`-`) and pretty-prints results on stdout

use fittrack::errors::{AppError, AppResult};
use fittrack::validation::parse_payload;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read the whole input, `-` meaning stdin
pub fn read_input(path: &Path) -> AppResult<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map_err(|e| {
            AppError::invalid_input("Failed to read stdin").with_source(e)
        })?;
        return Ok(buffer);
    }
    fs::read_to_string(path).map_err(|e| {
        AppError::not_found(format!("Input file {}", path.display())).with_source(e)
    })
}

/// Read and deserialize JSON input
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    parse_payload(&read_input(path)?)
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
