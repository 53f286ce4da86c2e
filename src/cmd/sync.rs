// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sync command implementation.

use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::loader::ConfigLoader;
use crate::config::{CONFIG_FILE_NAME, Config, ENV_PREFIX};
use crate::error::Result;
use crate::git::ShellBackend;
use crate::logging::LogConfig;
use crate::sync::prompt::TermConfirm;
use crate::sync::{RunOutcome, SyncOptions, run};

/// Loader for every configuration layer selected by `cli`.
///
/// # Errors
///
/// Returns an error if a command-line override cannot be applied.
pub fn build_config_loader(cli: &Cli) -> Result<ConfigLoader> {
    let mut loader =
        ConfigLoader::new().add_toml_file_optional(cli.base_dir().join(CONFIG_FILE_NAME));
    for path in &cli.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in cli.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}

/// Load the merged configuration.
///
/// # Errors
///
/// Returns an error if a named config file is missing, a file or
/// environment value is invalid, or validation fails.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let loader = build_config_loader(cli)?;
    for file in loader.loaded_files() {
        debug!(path = %file.display(), "config file");
    }
    loader.build().context("failed to load configuration")
}

/// Logging settings derived from the loaded configuration.
#[must_use]
pub fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

fn git_backend(config: &Config) -> Result<ShellBackend> {
    match &config.sync.git {
        Some(path) => Ok(ShellBackend::with_executable(path)),
        None => Ok(ShellBackend::new()?),
    }
}

/// Main handler for the sync command.
///
/// # Errors
///
/// Returns an error if git cannot be located, the manifest cannot be read,
/// the base directory cannot be listed, or the terminal fails.
pub fn run_sync_command(cli: &Cli, config: &Config) -> Result<RunOutcome> {
    let base: &Path = cli.base_dir();
    let git = git_backend(config)?;
    info!(
        base = %base.display(),
        git = %git.executable().display(),
        mode = ?cli.mode(),
        "starting sync"
    );

    let options = SyncOptions::from_config(base, cli.mode(), &config.sync);
    let mut confirm = TermConfirm::stdout();
    let mut out = std::io::stdout().lock();

    let outcome = run(&git, &mut confirm, &options, &mut out)
        .with_context(|| format!("sync of {} failed", base.display()))?;
    debug!(?outcome, "sync finished");
    Ok(outcome)
}
