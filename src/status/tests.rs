// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{BehindRepo, CommitCount, RepoStatus, RunSummary};

#[test]
fn test_commit_count_display() {
    assert_eq!(CommitCount::Known(3).to_string(), "3");
    assert_eq!(CommitCount::Unknown.to_string(), "?");
}

#[test]
fn test_summary_buckets_each_status_once() {
    let statuses = vec![
        RepoStatus::Cloned { path: "libA".into() },
        RepoStatus::UpToDate { path: "libB".into() },
        RepoStatus::Behind {
            path: "libC".into(),
            commits: CommitCount::Known(3),
        },
        RepoStatus::NoUpstream { path: "libD".into() },
        RepoStatus::NotVersionControlled { path: "docs".into() },
        RepoStatus::ProbeFailed {
            path: "libE".into(),
            reason: "offline".into(),
        },
        RepoStatus::Behind {
            path: "libF".into(),
            commits: CommitCount::Unknown,
        },
    ];
    let count = statuses.len();
    let summary: RunSummary = statuses.into_iter().collect();

    assert_eq!(summary.total(), count);
    assert_eq!(summary.cloned, ["libA"]);
    assert_eq!(summary.up_to_date, ["libB"]);
    assert_eq!(summary.no_upstream, ["libD"]);
    assert_eq!(summary.not_version_controlled, ["docs"]);
    assert_eq!(summary.probe_failed.len(), 1);
    assert_eq!(
        summary.behind,
        vec![
            BehindRepo {
                path: "libC".into(),
                commits: CommitCount::Known(3),
            },
            BehindRepo {
                path: "libF".into(),
                commits: CommitCount::Unknown,
            },
        ]
    );
    assert!(summary.has_updates());
}

#[test]
fn test_empty_summary_has_no_updates() {
    let summary = RunSummary::default();
    assert_eq!(summary.total(), 0);
    assert!(!summary.has_updates());
}

#[test]
fn test_status_path() {
    let status = RepoStatus::ProbeFailed {
        path: "libE".into(),
        reason: "offline".into(),
    };
    assert_eq!(status.path(), "libE");
}
