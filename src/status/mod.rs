// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-repository status and the run summary built from it.
//!
//! ```text
//! RepoStatus ... RepoStatus
//!      \            /
//!       v          v
//!   RunSummary::from_iter
//!   cloned | up_to_date | behind | no_upstream | not_git | failed
//! ```
//!
//! Each status lands in exactly one bucket; insertion order is preserved.

use std::fmt;

/// Commits on the upstream branch missing locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitCount {
    Known(u64),
    /// `rev-list` could not count; still reported as behind.
    Unknown,
}

impl fmt::Display for CommitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(n) => write!(f, "{n}"),
            Self::Unknown => f.write_str("?"),
        }
    }
}

/// Classification of one directory for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoStatus {
    Cloned { path: String },
    UpToDate { path: String },
    Behind { path: String, commits: CommitCount },
    NoUpstream { path: String },
    NotVersionControlled { path: String },
    ProbeFailed { path: String, reason: String },
}

impl RepoStatus {
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Cloned { path }
            | Self::UpToDate { path }
            | Self::Behind { path, .. }
            | Self::NoUpstream { path }
            | Self::NotVersionControlled { path }
            | Self::ProbeFailed { path, .. } => path,
        }
    }
}

/// A repository with updates waiting upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehindRepo {
    pub path: String,
    pub commits: CommitCount,
}

/// A repository whose probe failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRepo {
    pub path: String,
    pub reason: String,
}

/// Statuses of one run, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cloned: Vec<String>,
    pub up_to_date: Vec<String>,
    pub behind: Vec<BehindRepo>,
    pub no_upstream: Vec<String>,
    pub not_version_controlled: Vec<String>,
    pub probe_failed: Vec<FailedRepo>,
}

impl RunSummary {
    pub fn record(&mut self, status: RepoStatus) {
        match status {
            RepoStatus::Cloned { path } => self.cloned.push(path),
            RepoStatus::UpToDate { path } => self.up_to_date.push(path),
            RepoStatus::Behind { path, commits } => self.behind.push(BehindRepo { path, commits }),
            RepoStatus::NoUpstream { path } => self.no_upstream.push(path),
            RepoStatus::NotVersionControlled { path } => self.not_version_controlled.push(path),
            RepoStatus::ProbeFailed { path, reason } => {
                self.probe_failed.push(FailedRepo { path, reason });
            }
        }
    }

    #[must_use]
    pub fn has_updates(&self) -> bool {
        !self.behind.is_empty()
    }

    /// Number of directories recorded across all buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.cloned.len()
            + self.up_to_date.len()
            + self.behind.len()
            + self.no_upstream.len()
            + self.not_version_controlled.len()
            + self.probe_failed.len()
    }
}

impl FromIterator<RepoStatus> for RunSummary {
    fn from_iter<I: IntoIterator<Item = RepoStatus>>(iter: I) -> Self {
        let mut summary = Self::default();
        summary.extend(iter);
        summary
    }
}

impl Extend<RepoStatus> for RunSummary {
    fn extend<I: IntoIterator<Item = RepoStatus>>(&mut self, iter: I) {
        for status in iter {
            self.record(status);
        }
    }
}

#[cfg(test)]
mod tests;
