// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sync orchestrator.
//!
//! ```text
//! read_manifest(base/.gitmodules)
//!        |
//!        v
//! clone_missing ----------------> Cloned { path }
//!        |
//!        v
//! scan: sorted subdirectories --> probe() each (cloned ones skipped)
//!        |
//!        v
//! RunSummary --> report::write_summary
//!        |
//!        +-- no Behind --------------> UpToDate
//!        +-- Check ------------------> CheckOnly
//!        +-- Interactive, answer no -> Cancelled
//!        +-- Sync / answer yes ------> pull_behind --> Pulled
//! ```
//!
//! One repository at a time. A failure in one repository is logged and
//! reported, never propagated; only setup problems (unreadable manifest,
//! unlistable base directory, broken stdout) end the run early.

pub mod prompt;


use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::types::SyncConfig;
use crate::error::SyncResult;
use crate::git::Git;
use crate::manifest::{ManifestEntry, read_manifest};
use crate::probe::probe;
use crate::report;
use crate::status::{BehindRepo, FailedRepo, RepoStatus, RunSummary};

use prompt::Confirm;

/// What to do with repositories that are behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Report only.
    Check,
    /// Pull every repository that is behind.
    Sync,
    /// Ask first.
    #[default]
    Interactive,
}

/// Inputs of one run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub base_dir: PathBuf,
    pub manifest: String,
    pub include_hidden: bool,
    pub mode: RunMode,
}

impl SyncOptions {
    #[must_use]
    pub fn from_config(base_dir: impl Into<PathBuf>, mode: RunMode, config: &SyncConfig) -> Self {
        Self {
            base_dir: base_dir.into(),
            manifest: config.manifest.clone(),
            include_hidden: config.include_hidden,
            mode,
        }
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.base_dir.join(&self.manifest)
    }
}

/// Result of the pull phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullReport {
    pub updated: Vec<String>,
    pub failed: Vec<FailedRepo>,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing was behind.
    UpToDate,
    /// Updates exist; check-only mode.
    CheckOnly,
    /// The operator declined.
    Cancelled,
    Pulled(PullReport),
}

/// Clone every manifest entry whose directory is missing.
///
/// Returns a `Cloned` status per successful clone, keyed by the normalized
/// manifest path. Failures are logged and skipped.
pub fn clone_missing<G: Git + ?Sized>(
    git: &G,
    base: &Path,
    entries: &[ManifestEntry],
) -> Vec<RepoStatus> {
    let mut cloned = Vec::new();

    for entry in entries {
        let Some(relative) = entry.checkout_path() else {
            warn!(repo = %entry.path, "manifest path is outside the base directory, skipping");
            continue;
        };
        let dest = base.join(&relative);
        if dest.is_dir() {
            continue;
        }

        let path = relative.display().to_string();
        info!(repo = %path, url = %entry.url, "cloning missing repository");
        match git.clone_repo(&entry.url, &dest) {
            Ok(()) => cloned.push(RepoStatus::Cloned { path }),
            Err(e) => warn!(repo = %path, url = %entry.url, error = %e, "clone failed"),
        }
    }

    cloned
}

/// Names of the immediate subdirectories of `base`, sorted.
///
/// # Errors
///
/// Returns an error if `base` cannot be listed.
pub fn list_subdirectories(base: &Path, include_hidden: bool) -> SyncResult<Vec<String>> {
    let mut names = Vec::new();

    for entry in std::fs::read_dir(base)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(ToString::to_string) else {
            warn!(path = %entry.path().display(), "skipping non UTF-8 directory name");
            continue;
        };
        if !include_hidden && name.starts_with('.') {
            continue;
        }
        names.push(name);
    }

    names.sort();
    Ok(names)
}

/// Scanned directory that holds a checkout at `path`.
fn top_level_name(path: &str) -> Option<String> {
    Path::new(path)
        .components()
        .next()
        .and_then(|c| c.as_os_str().to_str())
        .map(ToString::to_string)
}

/// Probe every subdirectory of `base` except those in `skip`.
///
/// # Errors
///
/// Returns an error if `base` cannot be listed.
pub fn scan<G: Git + ?Sized>(
    git: &G,
    base: &Path,
    include_hidden: bool,
    skip: &HashSet<String>,
) -> SyncResult<Vec<RepoStatus>> {
    Ok(list_subdirectories(base, include_hidden)?
        .into_iter()
        .filter(|name| !skip.contains(name))
        .map(|name| probe(git, &base.join(&name), &name))
        .collect())
}

/// Fast-forward each repository in `behind`, reporting every result.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub fn pull_behind<G: Git + ?Sized, W: Write + ?Sized>(
    git: &G,
    base: &Path,
    behind: &[BehindRepo],
    out: &mut W,
) -> SyncResult<PullReport> {
    let mut pulled = PullReport::default();
    report::write_pull_header(out)?;

    for repo in behind {
        let result = git.pull_ff_only(&base.join(&repo.path));
        report::write_pull_result(out, &repo.path, result.as_ref().map(|_| ()))?;
        match result {
            Ok(()) => {
                info!(repo = %repo.path, "pulled");
                pulled.updated.push(repo.path.clone());
            }
            Err(e) => {
                warn!(repo = %repo.path, error = %e, "pull failed");
                pulled.failed.push(FailedRepo {
                    path: repo.path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(pulled)
}

/// Run clone, scan, report and the mode-dependent pull phase.
///
/// # Errors
///
/// Returns an error if the manifest exists but cannot be read, the base
/// directory cannot be listed, the prompt fails, or `out` cannot be written.
pub fn run<G, C, W>(
    git: &G,
    confirm: &mut C,
    options: &SyncOptions,
    out: &mut W,
) -> SyncResult<RunOutcome>
where
    G: Git + ?Sized,
    C: Confirm + ?Sized,
    W: Write + ?Sized,
{
    let base = options.base_dir.as_path();

    let entries = read_manifest(&options.manifest_path())?;
    let cloned = clone_missing(git, base, &entries);
    let skip: HashSet<String> = cloned
        .iter()
        .filter_map(|s| top_level_name(s.path()))
        .collect();

    let scanned = scan(git, base, options.include_hidden, &skip)?;
    let summary: RunSummary = cloned.into_iter().chain(scanned).collect();
    report::write_summary(out, &summary)?;

    let outcome = if !summary.has_updates() {
        RunOutcome::UpToDate
    } else {
        match options.mode {
            RunMode::Check => RunOutcome::CheckOnly,
            RunMode::Sync => RunOutcome::Pulled(pull_behind(git, base, &summary.behind, out)?),
            RunMode::Interactive => {
                writeln!(out)?;
                out.flush()?;
                if confirm.confirm(&report::pull_question(&summary))? {
                    RunOutcome::Pulled(pull_behind(git, base, &summary.behind, out)?)
                } else {
                    RunOutcome::Cancelled
                }
            }
        }
    };

    report::write_closing(out, &outcome)?;
    out.flush()?;
    Ok(outcome)
}
