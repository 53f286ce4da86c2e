// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> load_config --> Logging --> run_sync_command
//! ```

use std::process::ExitCode;

use repo_sync::cli;
use repo_sync::cmd::sync::{build_log_config, load_config, run_sync_command};
use repo_sync::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match run_sync_command(&cli, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
