// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git collaborator.
//!
//! ```text
//!       probe / sync
//!            |
//!     ,------v--------,
//!     | backend traits |
//!     '--+---------+--'
//!        |         |
//!        v         v
//!    GitQuery   GitMutation
//!   .has_metadata  .clone_repo
//!   .resolve_rev   .fetch
//!   .count_ahead   .pull_ff_only
//!        \         /
//!         v       v
//!       ShellBackend --> git CLI (cwd = repo path)
//! ```
//!
//! Every operation takes the repository path explicitly; the process working
//! directory is never changed.

pub mod backend;

pub use backend::{Git, GitMutation, GitQuery, ShellBackend};
