// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for repo-sync.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. repo-sync.toml (base directory, optional)
//! 3. --config FILE (repeatable)
//! 4. REPO_SYNC_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! REPO_SYNC_GLOBAL__LOG_LEVEL=4         → global.log_level = 4
//! REPO_SYNC_SYNC__MANIFEST=repos.ini    → sync.manifest = "repos.ini"
//! REPO_SYNC_SYNC__INCLUDE_HIDDEN=true   → sync.include_hidden = true
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{GlobalConfig, SyncConfig};

/// Name of the optional config file looked up in the base directory.
pub const CONFIG_FILE_NAME: &str = "repo-sync.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "REPO_SYNC";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Scan and sync options.
    pub sync: SyncConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use repo_sync::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("repo-sync.toml")
    ///     .with_env_prefix("REPO_SYNC")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate cross-field constraints after loading.
    ///
    /// # Errors
    ///
    /// Returns an error if any section holds an invalid value.
    pub fn validate(&self) -> Result<()> {
        self.sync.validate()?;
        Ok(())
    }
}
