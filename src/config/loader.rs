// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional(base/repo-sync.toml)
//!   .add_toml_file(--config)
//!   .with_env_prefix("REPO_SYNC")
//!   .set("sync.manifest", ..)
//!        |
//!        v
//!    build() --> Config
//! ```

use std::path::{Path, PathBuf};

use super::Config;
use crate::error::Result;

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<PathBuf>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(p.to_path_buf());
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(p.to_path_buf());
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required configuration file is missing.
    /// - A configuration file has invalid TOML syntax.
    /// - An environment variable cannot be parsed.
    /// - The merged configuration does not deserialize or validate.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let cfg = builder.build()?;
        let config: Config = cfg.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Files that contributed to this configuration, in load order.
    #[must_use]
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
