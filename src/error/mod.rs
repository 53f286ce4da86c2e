// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            SyncError (~24 bytes)
//!                   |
//!   +--------+------+------+--------+-------+
//!   v        v      v      v        v       v
//!  Git   Manifest Config Process   Io     Other
//!  Box     Box     Box    Box     Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git      CommandFailed, CloneFailed, FetchFailed, PullFailed
//!   Manifest Unreadable
//!   Config   InvalidValue
//!   Process  ExecutableNotFound, SpawnFailed
//! ```
//!
//! Per-repository errors are caught by the orchestrator and turned into
//! status/log lines; only setup failures reach `main`.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SyncError`].
pub type SyncResult<T> = std::result::Result<T, SyncError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Manifest could not be read.
    #[error("manifest error: {0}")]
    Manifest(#[from] Box<ManifestError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl SyncError {
    /// Create a [`SyncError::Other`] from a message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into().into_boxed_str())
    }
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SyncError {
                fn from(err: $error) -> Self {
                    SyncError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ManifestError => Manifest,
    ConfigError => Config,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git exited with a non-zero status.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Clone of a manifest entry failed.
    #[error("failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },

    /// Refreshing remote-tracking refs failed.
    #[error("failed to fetch {repo}: {message}")]
    FetchFailed { repo: String, message: String },

    /// Fast-forward pull failed.
    #[error("failed to pull {repo}: {message}")]
    PullFailed { repo: String, message: String },
}

// --- Manifest Errors ---

/// Manifest reading errors.
///
/// A missing manifest is not an error; see [`crate::manifest::read_manifest`].
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest exists but could not be read.
    #[error("failed to read manifest '{path}': {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
