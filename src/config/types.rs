// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [global]  log_level, file_log_level, log_file
//! [sync]    manifest, include_hidden, git
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Filename of the submodule manifest looked up in the base directory.
pub const DEFAULT_MANIFEST: &str = ".gitmodules";

/// Global options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Console log level (0-5).
    pub log_level: LogLevel,
    /// File log level (0-5).
    pub file_log_level: LogLevel,
    /// Log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Scan and sync options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Manifest filename, relative to the base directory.
    pub manifest: String,
    /// Also scan directories whose name starts with '.'.
    pub include_hidden: bool,
    /// Explicit git executable. Resolved from PATH when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git: Option<PathBuf>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            manifest: DEFAULT_MANIFEST.to_string(),
            include_hidden: false,
            git: None,
        }
    }
}

impl SyncConfig {
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if the manifest name is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.manifest.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "sync".to_string(),
                key: "manifest".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
