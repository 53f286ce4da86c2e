// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Manifest reader.
//!
//! ```text
//! [submodule "libA"]          path = libA      --+
//!     path = libA                                 |--> ManifestEntry { libA, url }
//!     url = https://...       url  = https://  --+
//! ```
//!
//! Lines are matched one at a time; everything that is not a `path = ...` or
//! `url = ...` line is ignored. An entry is emitted as soon as both values are
//! pending, then both are cleared.

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{ManifestError, SyncResult};

static PATH_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*path\s*=\s*(.*?)\s*$").unwrap_or_else(|e| panic!("invalid path regex: {e}"))
});

static URL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*url\s*=\s*(.*?)\s*$").unwrap_or_else(|e| panic!("invalid url regex: {e}"))
});

/// One declared repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Checkout location, relative to the base directory.
    pub path: String,
    /// Clone source.
    pub url: String,
}

impl ManifestEntry {
    /// Checkout location without `.` components or trailing separators.
    ///
    /// `None` when the path is empty, absolute, or climbs out with `..`.
    #[must_use]
    pub fn checkout_path(&self) -> Option<PathBuf> {
        let mut normalized = PathBuf::new();
        for component in Path::new(&self.path).components() {
            match component {
                Component::Normal(part) => normalized.push(part),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        (!normalized.as_os_str().is_empty()).then_some(normalized)
    }
}

/// Parse manifest text into entries, in document order.
#[must_use]
pub fn parse_manifest(text: &str) -> Vec<ManifestEntry> {
    let mut entries = Vec::new();
    let mut pending_path: Option<String> = None;
    let mut pending_url: Option<String> = None;

    for line in text.lines() {
        if let Some(value) = capture_value(&PATH_LINE, line) {
            pending_path = Some(value);
        } else if let Some(value) = capture_value(&URL_LINE, line) {
            pending_url = Some(value);
        } else {
            continue;
        }

        match (pending_path.take(), pending_url.take()) {
            (Some(path), Some(url)) => entries.push(ManifestEntry { path, url }),
            (path, url) => {
                pending_path = path;
                pending_url = url;
            }
        }
    }

    entries
}

fn capture_value(pattern: &Regex, line: &str) -> Option<String> {
    pattern
        .captures(line)
        .map(|caps| caps[1].to_string())
        .filter(|value| !value.is_empty())
}

/// Read and parse the manifest at `path`.
///
/// A missing file yields an empty list.
///
/// # Errors
///
/// Returns `ManifestError::Unreadable` if the file exists but cannot be read.
pub fn read_manifest(path: &Path) -> SyncResult<Vec<ManifestEntry>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(manifest = %path.display(), "no manifest, skipping clone check");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(ManifestError::Unreadable {
                path: path.display().to_string(),
                source,
            }
            .into());
        }
    };

    let entries = parse_manifest(&text);
    debug!(manifest = %path.display(), count = entries.len(), "manifest parsed");
    Ok(entries)
}
