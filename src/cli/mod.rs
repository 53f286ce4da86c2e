// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for repo-sync using clap derive.
//!
//! # Option Precedence
//!
//! ```text
//! repo-sync [--check-only | --sync] [-C DIR] [-c FILE]... [-l LEVEL]
//!           [--log-file FILE] [--manifest NAME]
//!
//! --check-only      report, never pull
//! --sync            pull without asking
//! (neither)         ask before pulling
//!
//! Precedence: CLI flags > REPO_SYNC_* env > --config > DIR/repo-sync.toml > defaults
//! ```

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::sync::RunMode;

/// Multi-repository sync helper
///
/// Clones repositories listed in a manifest, checks every subdirectory
/// against its upstream and optionally fast-forwards the ones that are behind.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "repo-sync",
    author,
    version,
    about = "Multi-repository sync helper",
    long_about = "repo-sync Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Clones the repositories listed in the manifest (.gitmodules by\n\
                  default) when their directory is missing, then fetches every\n\
                  git repository directly under the base directory and reports\n\
                  which ones are behind their upstream.",
    after_help = "CONFIG FILES:\n\n\
                  repo-sync reads `repo-sync.toml` from the base directory if it\n\
                  exists. Additional files can be given with --config and are\n\
                  loaded in order. REPO_SYNC_<SECTION>__<KEY> environment\n\
                  variables override files, and command-line flags override both."
)]
pub struct Cli {
    /// Only report status, never pull.
    #[arg(long = "check-only", conflicts_with = "sync")]
    pub check_only: bool,

    /// Pull every repository that is behind without asking.
    #[arg(long = "sync")]
    pub sync: bool,

    /// Base directory holding the repositories (default: current directory).
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Additional TOML configuration file(s). Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5))]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Manifest file name relative to the base directory.
    #[arg(long = "manifest", value_name = "NAME")]
    pub manifest: Option<String>,
}

impl Cli {
    /// Run mode selected by the flags.
    #[must_use]
    pub const fn mode(&self) -> RunMode {
        if self.check_only {
            RunMode::Check
        } else if self.sync {
            RunMode::Sync
        } else {
            RunMode::Interactive
        }
    }

    /// Base directory, `.` when not given.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        self.directory.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// Converts command-line options to `(key, value)` configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push(("global.log_level", level.to_string()));
        }
        if let Some(path) = &self.log_file {
            overrides.push(("global.log_file", path.display().to_string()));
        }
        if let Some(manifest) = &self.manifest {
            overrides.push(("sync.manifest", manifest.clone()));
        }

        overrides
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
