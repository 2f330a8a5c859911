// ABOUTME: fittrack CLI - command-line access to the fittrack computation core
// ABOUTME: Calorie targets, planner months, recurrence checks, diary days, and search shaping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Every command reads JSON from a file (or stdin with `-`) and prints JSON.
//! Logs go to stderr.
//!
//! Usage:
//! ```bash
//! # Daily calorie target for a profile
//! fittrack-cli target --profile profile.json
//!
//! # Planner month with scheduled routines
//! fittrack-cli calendar --schedules schedules.json --month 2024-01
//!
//! # Does a schedule occur on a date?
//! fittrack-cli occurs --schedule schedule.json --date 2024-01-15
//!
//! # Diary day against a 2200 kcal target
//! fittrack-cli diary --entries entries.json --date 2024-05-01 --target 2200
//!
//! # Upstream request that would be sent (API keys redacted)
//! fittrack-cli search-request exercises --query "bench press"
//!
//! # Normalize an upstream response body
//! fittrack-cli normalize foods --body response.json
//!
//! # Configuration probe
//! fittrack-cli config
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use fittrack::logging::LoggingConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fittrack-cli",
    about = "fittrack computation CLI",
    long_about = "Command-line access to calorie target estimation, schedule recurrence, planner months, diary totals, and search provider shaping."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute calorie targets for a nutrition profile
    Target {
        /// Profile JSON file, `-` for stdin
        #[arg(long)]
        profile: PathBuf,
    },

    /// Planner month view for stored schedules
    Calendar {
        /// JSON array of schedule records, `-` for stdin
        #[arg(long)]
        schedules: PathBuf,

        /// Month to show (`YYYY-MM`)
        #[arg(long)]
        month: String,
    },

    /// Check whether a schedule occurs on a date
    Occurs {
        /// Schedule JSON file, `-` for stdin
        #[arg(long)]
        schedule: PathBuf,

        /// Day to check (`YYYY-MM-DD`)
        #[arg(long)]
        date: String,

        /// Days to search for the next occurrence
        #[arg(long, default_value = "366")]
        horizon_days: u64,
    },

    /// Summarise one diary day
    Diary {
        /// JSON array of diary entries, `-` for stdin
        #[arg(long)]
        entries: PathBuf,

        /// Day to summarise (`YYYY-MM-DD`)
        #[arg(long)]
        date: String,

        /// Daily calorie target
        #[arg(long)]
        target: Option<i32>,
    },

    /// Show the upstream search request built from the environment
    SearchRequest {
        /// Which search
        kind: SearchKind,

        /// Search text
        #[arg(long)]
        query: String,
    },

    /// Normalize an upstream search response body
    Normalize {
        /// Which search
        kind: SearchKind,

        /// Response body JSON file, `-` for stdin
        #[arg(long)]
        body: PathBuf,

        /// HTTP status the upstream returned
        #[arg(long, default_value = "200")]
        status: u16,
    },

    /// Show the configuration probe (never prints keys)
    Config,
}

/// Search kinds
#[derive(Clone, Copy, ValueEnum)]
enum SearchKind {
    /// Exercise search
    Exercises,
    /// Food search
    Foods,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    match cli.command {
        Command::Target { profile } => commands::energy::target(&profile)?,
        Command::Calendar { schedules, month } => commands::planner::calendar(&schedules, &month)?,
        Command::Occurs {
            schedule,
            date,
            horizon_days,
        } => commands::planner::occurs(&schedule, &date, horizon_days)?,
        Command::Diary {
            entries,
            date,
            target,
        } => commands::diary::day(&entries, &date, target)?,
        Command::SearchRequest { kind, query } => match kind {
            SearchKind::Exercises => commands::search::exercise_request(&query)?,
            SearchKind::Foods => commands::search::food_request(&query)?,
        },
        Command::Normalize { kind, body, status } => match kind {
            SearchKind::Exercises => commands::search::normalize_exercise_body(&body, status)?,
            SearchKind::Foods => commands::search::normalize_food_body(&body, status)?,
        },
        Command::Config => commands::search::probe()?,
    }

    Ok(())
}
