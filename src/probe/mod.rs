// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository prober.
//!
//! ```text
//! no .git ----------------------------> NotVersionControlled
//! fetch fails ------------------------> ProbeFailed
//! @{u} unresolved --------------------> NoUpstream
//! HEAD == @{u} -----------------------> UpToDate
//! otherwise, rev-list HEAD..@{u} -----> Behind { n | ? }
//! ```
//!
//! Fetch only moves remote-tracking refs; the working tree and local
//! branches are left alone.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::git::Git;
use crate::status::{CommitCount, RepoStatus};

/// Local branch tip.
pub const LOCAL_REF: &str = "HEAD";
/// Upstream of the checked-out branch.
pub const UPSTREAM_REF: &str = "@{u}";

/// Classify the directory at `dir`, reported under `name`.
pub fn probe<G: Git + ?Sized>(git: &G, dir: &Path, name: &str) -> RepoStatus {
    let path = name.to_string();

    if !git.has_metadata(dir) {
        debug!(repo = %name, "no git metadata");
        return RepoStatus::NotVersionControlled { path };
    }

    info!(repo = %name, "checking");
    if let Err(e) = git.fetch(dir) {
        warn!(repo = %name, error = %e, "fetch failed, skipping");
        return RepoStatus::ProbeFailed {
            path,
            reason: e.to_string(),
        };
    }

    let revisions = git
        .resolve_revision(dir, LOCAL_REF)
        .and_then(|local| Ok((local, git.resolve_revision(dir, UPSTREAM_REF)?)));
    let (local, upstream) = match revisions {
        Ok(pair) => pair,
        Err(e) => {
            warn!(repo = %name, error = %e, "could not resolve revisions");
            return RepoStatus::ProbeFailed {
                path,
                reason: e.to_string(),
            };
        }
    };

    let Some(upstream) = upstream else {
        debug!(repo = %name, "no upstream configured");
        return RepoStatus::NoUpstream { path };
    };

    if local.as_deref() == Some(upstream.as_str()) {
        return RepoStatus::UpToDate { path };
    }

    let commits = match git.count_ahead(dir, LOCAL_REF, UPSTREAM_REF) {
        Ok(n) => CommitCount::Known(n),
        Err(e) => {
            debug!(repo = %name, error = %e, "could not count commits");
            CommitCount::Unknown
        }
    };
    info!(repo = %name, behind = %commits, "updates available");
    RepoStatus::Behind { path, commits }
}
