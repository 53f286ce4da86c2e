// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging infrastructure using the `tracing` ecosystem.
//!
//! ```text
//! init_logging(&LogConfig)
//!        |
//!        v
//!    registry
//!    |       |
//!    v       v
//! stderr    File (optional)
//! EnvFilter EnvFilter
//! ANSI      non_blocking
//! no time   FmtSpan::CLOSE
//!        |
//!        v
//!    LogGuard (flush on drop)
//!
//! LogLevel:  0=OFF  1=ERROR  2=WARN  3=INFO  4=DEBUG  5=TRACE
//! ```
//!
//! The summary report goes to stdout; logs never do.

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::{ConfigError, Result};

/// Verbosity level (0-5) as written in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LogLevel(u8);

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl LogLevel {
    pub const SILENT: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);
    pub const TRACE: Self = Self(5);

    const MAX: u8 = 5;

    /// Create a new `LogLevel` from a u8 value (0-5).
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if the level is greater than 5.
    pub fn new(level: u8) -> std::result::Result<Self, ConfigError> {
        Self::from_u8(level).ok_or_else(|| ConfigError::InvalidValue {
            section: "global".to_string(),
            key: "log_level".to_string(),
            message: format!("log level must be 0-{}, got {level}", Self::MAX),
        })
    }

    /// Convert from u8 value, returning None if out of range.
    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        if level <= Self::MAX {
            Some(Self(level))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Convert to tracing Level (None when silent).
    #[must_use]
    pub const fn to_tracing_level(self) -> Option<Level> {
        match self.0 {
            0 => None,
            1 => Some(Level::ERROR),
            2 => Some(Level::WARN),
            3 => Some(Level::INFO),
            4 => Some(Level::DEBUG),
            _ => Some(Level::TRACE),
        }
    }

    /// Convert to `EnvFilter` directive string.
    #[must_use]
    pub const fn to_filter_string(self) -> &'static str {
        match self.0 {
            0 => "off",
            1 => "error",
            2 => "warn",
            3 => "info",
            4 => "debug",
            _ => "trace",
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::INFO)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::TRACE)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }
}

/// RAII guard that keeps the logging system alive.
/// When dropped, flushes all pending log writes.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the logging system with the given configuration.
///
/// Returns a guard that must be kept alive for the duration of the program.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
///
/// # Example
///
/// ```no_run
/// use repo_sync::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::WARN)
///     .with_log_file("sync.log".to_string())
///     .build();
///
/// let _guard = init_logging(&config).expect("Failed to initialize logging");
/// tracing::info!("Logging initialized");
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_filter = EnvFilter::new(config.console_level().to_filter_string());

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(console::colors_enabled_stderr())
        .with_filter(console_filter);

    let (file_layer, file_guard) = if let Some(log_path) = config.log_file() {
        let log_path = Path::new(log_path);

        if let Some(parent) = log_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log directory {}", parent.display()))?;
        }

        let file = std::fs::File::create(log_path)
            .with_context(|| format!("failed to create log file {}", log_path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);

        let file_filter = EnvFilter::new(config.file_level().to_filter_string());

        let layer = fmt::layer()
            .with_writer(non_blocking)
            .with_target(true)
            .with_level(true)
            .with_ansi(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(file_filter);

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}
