// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Console report.
//!
//! ```text
//! Summary
//!   Newly cloned: 1               (only when > 0)
//!   Up to date: 4
//!   Updates available: 2
//!   No upstream: 0
//!   Not a git repository: 1
//!   Fetch failed: 1               (only when > 0)
//!
//! Repositories with updates:
//!   • libA (3 commits behind)
//!   • libB (? commits behind)
//!
//! <closing line>
//! ```
//!
//! Styling comes from `console` and switches itself off when stdout is not
//! a terminal.

use std::io::{self, Write};

use console::style;

use crate::error::SyncError;
use crate::status::{BehindRepo, CommitCount, RunSummary};
use crate::sync::{PullReport, RunOutcome};

/// Write the status summary and the list of repositories with updates.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_summary<W: Write + ?Sized>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style("Summary").bold())?;
    if !summary.cloned.is_empty() {
        count_line(out, "Newly cloned", summary.cloned.len())?;
    }
    count_line(out, "Up to date", summary.up_to_date.len())?;
    count_line(out, "Updates available", summary.behind.len())?;
    count_line(out, "No upstream", summary.no_upstream.len())?;
    count_line(out, "Not a git repository", summary.not_version_controlled.len())?;
    if !summary.probe_failed.is_empty() {
        count_line(out, "Fetch failed", summary.probe_failed.len())?;
    }

    if summary.has_updates() {
        writeln!(out)?;
        writeln!(out, "{}", style("Repositories with updates:").bold())?;
        for repo in &summary.behind {
            writeln!(out, "  {} {}", style("•").cyan(), behind_label(repo))?;
        }
    }
    Ok(())
}

fn count_line<W: Write + ?Sized>(out: &mut W, label: &str, count: usize) -> io::Result<()> {
    writeln!(out, "  {label}: {}", style(count).bold())
}

/// `path (N commits behind)`.
#[must_use]
pub fn behind_label(repo: &BehindRepo) -> String {
    let noun = if repo.commits == CommitCount::Known(1) {
        "commit"
    } else {
        "commits"
    };
    format!("{} ({} {noun} behind)", repo.path, repo.commits)
}

/// Question asked before pulling in interactive mode.
#[must_use]
pub fn pull_question(summary: &RunSummary) -> String {
    match summary.behind.len() {
        1 => "Pull updates for 1 repository?".to_string(),
        n => format!("Pull updates for {n} repositories?"),
    }
}

/// Header printed before the pull loop.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_pull_header<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style("Pulling updates...").bold())
}

/// One line per pulled repository.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_pull_result<W: Write + ?Sized>(
    out: &mut W,
    path: &str,
    result: Result<(), &SyncError>,
) -> io::Result<()> {
    match result {
        Ok(()) => writeln!(out, "  {} {path}", style("✔").green()),
        Err(e) => writeln!(out, "  {} {path}: {e}", style("✖").red()),
    }
}

/// Closing status line for the run outcome.
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_closing<W: Write + ?Sized>(out: &mut W, outcome: &RunOutcome) -> io::Result<()> {
    writeln!(out)?;
    match outcome {
        RunOutcome::UpToDate => writeln!(
            out,
            "{} All repositories are fully up to date.",
            style("✔").green()
        ),
        RunOutcome::CheckOnly => writeln!(
            out,
            "{} Check-only mode: no repositories were pulled.",
            style("ℹ").blue()
        ),
        RunOutcome::Cancelled => writeln!(out, "{} Sync cancelled.", style("✖").yellow()),
        RunOutcome::Pulled(report) => write_pulled(out, report),
    }
}

fn write_pulled<W: Write + ?Sized>(out: &mut W, report: &PullReport) -> io::Result<()> {
    let total = report.updated.len() + report.failed.len();
    if report.failed.is_empty() {
        writeln!(
            out,
            "{} Updated {total} of {total} repositories.",
            style("✔").green()
        )
    } else {
        writeln!(
            out,
            "{} Updated {} of {total} repositories ({} failed).",
            style("⚠").yellow(),
            report.updated.len(),
            report.failed.len()
        )
    }
}
