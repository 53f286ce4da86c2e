// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)     --+
//!                        +--> ShellBackend (git CLI)
//! GitMutation (write) --+
//! ```

use crate::error::{GitError, ProcessError, SyncError, SyncResult};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

// --- Query Trait (Read-only operations) ---

/// Read-only git queries.
///
/// Implementors must not touch the working tree or local branches.
pub trait GitQuery {
    /// Check whether `path` carries git metadata (a `.git` directory, or the
    /// gitfile used by submodule checkouts).
    fn has_metadata(&self, path: &Path) -> bool {
        path.join(".git").exists()
    }

    /// Resolve `rev` to a commit id, `None` if it does not resolve.
    ///
    /// # Errors
    ///
    /// Returns an error only if git itself could not be run.
    fn resolve_revision(&self, repo: &Path, rev: &str) -> SyncResult<Option<String>>;

    /// Count commits reachable from `to` but not from `from`.
    ///
    /// # Errors
    ///
    /// Returns an error if the range cannot be walked or the count is unreadable.
    fn count_ahead(&self, repo: &Path, from: &str, to: &str) -> SyncResult<u64>;
}

// --- Mutation Trait (Write operations) ---

/// Git operations that change repository state.
pub trait GitMutation {
    /// Clone `url` into `dest`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CloneFailed` if the clone fails.
    fn clone_repo(&self, url: &str, dest: &Path) -> SyncResult<()>;

    /// Refresh remote-tracking refs.
    ///
    /// # Errors
    ///
    /// Returns `GitError::FetchFailed` if the fetch fails.
    fn fetch(&self, repo: &Path) -> SyncResult<()>;

    /// Fast-forward the current branch to its upstream; never merges.
    ///
    /// # Errors
    ///
    /// Returns `GitError::PullFailed` if the pull fails or would need a merge.
    fn pull_ff_only(&self, repo: &Path) -> SyncResult<()>;
}

/// Full collaborator used by the orchestrator.
pub trait Git: GitQuery + GitMutation {}

impl<T: GitQuery + GitMutation + ?Sized> Git for T {}

// --- ShellBackend Implementation (Git CLI) ---

/// Git backend that runs the git executable.
///
/// Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0` so a credential
/// prompt can never block the sequential loop.
#[derive(Debug, Clone)]
pub struct ShellBackend {
    executable: PathBuf,
}

impl ShellBackend {
    /// Locate `git` in PATH.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if git is not in PATH.
    pub fn new() -> SyncResult<Self> {
        let executable = which::which("git").map_err(|_| ProcessError::ExecutableNotFound {
            name: "git".to_string(),
        })?;
        Ok(Self::with_executable(executable))
    }

    /// Use a specific git executable.
    #[must_use]
    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Run git in `cwd` and return trimmed stdout.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::SpawnFailed` if git cannot be started and
    /// `GitError::CommandFailed` on a non-zero exit.
    pub fn git_command(&self, args: &[&str], cwd: &Path) -> SyncResult<String> {
        let command = format!("git {}", args.join(" "));
        debug!(cwd = %cwd.display(), %command, "running git");

        let output = Command::new(&self.executable)
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command,
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Split a clone destination into the directory git runs in and the
/// directory name it creates there.
///
/// git resolves the target against its own working directory, so only the
/// last component may be passed along with `current_dir(parent)`.
pub(crate) fn clone_target(dest: &Path) -> Option<(&Path, &str)> {
    let name = dest.file_name()?.to_str()?;
    let parent = dest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Some((parent, name))
}

/// Replace a plain `CommandFailed` with the operation-specific error.
fn wrap_failure(
    result: SyncResult<String>,
    wrap: impl FnOnce(String) -> GitError,
) -> SyncResult<()> {
    match result {
        Ok(_) => Ok(()),
        Err(SyncError::Git(git)) => match *git {
            GitError::CommandFailed { message, .. } => Err(wrap(message).into()),
            other => Err(other.into()),
        },
        Err(other) => Err(other),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map_or_else(|| path.display().to_string(), ToString::to_string)
}

impl GitQuery for ShellBackend {
    fn resolve_revision(&self, repo: &Path, rev: &str) -> SyncResult<Option<String>> {
        match self.git_command(&["rev-parse", "--verify", "--quiet", rev], repo) {
            Ok(id) if !id.is_empty() => Ok(Some(id)),
            Ok(_) => Ok(None),
            Err(SyncError::Git(git)) if matches!(*git, GitError::CommandFailed { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn count_ahead(&self, repo: &Path, from: &str, to: &str) -> SyncResult<u64> {
        let range = format!("{from}..{to}");
        let output = self.git_command(&["rev-list", "--count", &range], repo)?;
        output.parse::<u64>().map_err(|e| {
            SyncError::other(format!("unexpected rev-list output '{output}': {e}"))
        })
    }
}

impl GitMutation for ShellBackend {
    fn clone_repo(&self, url: &str, dest: &Path) -> SyncResult<()> {
        let (parent, name) = clone_target(dest).ok_or_else(|| GitError::CloneFailed {
            url: url.to_string(),
            message: format!("invalid destination '{}'", dest.display()),
        })?;
        std::fs::create_dir_all(parent)?;

        wrap_failure(
            self.git_command(&["clone", "--quiet", url, name], parent),
            |message| GitError::CloneFailed {
                url: url.to_string(),
                message,
            },
        )
    }

    fn fetch(&self, repo: &Path) -> SyncResult<()> {
        wrap_failure(self.git_command(&["fetch", "--quiet"], repo), |message| {
            GitError::FetchFailed {
                repo: display_name(repo),
                message,
            }
        })
    }

    fn pull_ff_only(&self, repo: &Path) -> SyncResult<()> {
        wrap_failure(
            self.git_command(&["pull", "--ff-only", "--quiet"], repo),
            |message| GitError::PullFailed {
                repo: display_name(repo),
                message,
            },
        )
    }
}
