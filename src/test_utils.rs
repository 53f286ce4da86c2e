// repo-sync: Multi-repository sync helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test utilities.
//!
//! ```text
//! FakeGit          scripted collaborator, records every call
//! ScriptedConfirm  canned prompt answer
//! GitFixture       real bare upstream + clones in a temp dir
//! capture_logs     run a closure with tracing output captured
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use crate::error::{GitError, SyncError, SyncResult};
use crate::git::{GitMutation, GitQuery};
use crate::sync::prompt::Confirm;

// --- FakeGit ---

/// Scripted state of one fake repository.
#[derive(Debug, Clone)]
pub(crate) struct FakeRepo {
    pub(crate) fetch_ok: bool,
    pub(crate) head: Option<String>,
    pub(crate) upstream: Option<String>,
    pub(crate) ahead: Option<u64>,
    pub(crate) pull_ok: bool,
}

impl FakeRepo {
    pub(crate) fn up_to_date() -> Self {
        Self {
            fetch_ok: true,
            head: Some("aaaa".into()),
            upstream: Some("aaaa".into()),
            ahead: Some(0),
            pull_ok: true,
        }
    }

    pub(crate) fn behind(count: u64) -> Self {
        Self {
            upstream: Some("bbbb".into()),
            ahead: Some(count),
            ..Self::up_to_date()
        }
    }

    pub(crate) fn no_upstream() -> Self {
        Self {
            upstream: None,
            ..Self::up_to_date()
        }
    }
}

/// In-memory collaborator keyed by directory name.
///
/// `has_metadata` uses the default implementation, so tests lay out real
/// directories (with or without `.git`) under a temp base.
#[derive(Debug, Default)]
pub(crate) struct FakeGit {
    repos: HashMap<String, FakeRepo>,
    failing_urls: Vec<String>,
    calls: RefCell<Vec<String>>,
}

impl FakeGit {
    pub(crate) fn with_repo(mut self, name: &str, repo: FakeRepo) -> Self {
        self.repos.insert(name.to_string(), repo);
        self
    }

    pub(crate) fn with_failing_clone(mut self, url: &str) -> Self {
        self.failing_urls.push(url.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn calls_to(&self, op: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| c.strip_prefix(&format!("{op} ")).map(ToString::to_string))
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn repo(&self, path: &Path) -> SyncResult<&FakeRepo> {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        self.repos
            .get(name)
            .ok_or_else(|| SyncError::other(format!("no fake repo for {name}")))
    }

    fn name(path: &Path) -> String {
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string()
    }
}

impl GitQuery for FakeGit {
    fn resolve_revision(&self, repo: &Path, rev: &str) -> SyncResult<Option<String>> {
        self.record(format!("resolve {} {rev}", Self::name(repo)));
        let fake = self.repo(repo)?;
        Ok(if rev == "HEAD" {
            fake.head.clone()
        } else {
            fake.upstream.clone()
        })
    }

    fn count_ahead(&self, repo: &Path, from: &str, to: &str) -> SyncResult<u64> {
        self.record(format!("count {} {from}..{to}", Self::name(repo)));
        self.repo(repo)?
            .ahead
            .ok_or_else(|| SyncError::other("count unavailable"))
    }
}

impl GitMutation for FakeGit {
    fn clone_repo(&self, url: &str, dest: &Path) -> SyncResult<()> {
        self.record(format!("clone {url} {}", dest.display()));
        if self.failing_urls.iter().any(|u| u == url) {
            return Err(GitError::CloneFailed {
                url: url.to_string(),
                message: "repository not found".to_string(),
            }
            .into());
        }
        std::fs::create_dir_all(dest.join(".git"))?;
        Ok(())
    }

    fn fetch(&self, repo: &Path) -> SyncResult<()> {
        let name = Self::name(repo);
        self.record(format!("fetch {name}"));
        if self.repo(repo)?.fetch_ok {
            Ok(())
        } else {
            Err(GitError::FetchFailed {
                repo: name,
                message: "could not resolve host".to_string(),
            }
            .into())
        }
    }

    fn pull_ff_only(&self, repo: &Path) -> SyncResult<()> {
        let name = Self::name(repo);
        self.record(format!("pull {name}"));
        if self.repo(repo)?.pull_ok {
            Ok(())
        } else {
            Err(GitError::PullFailed {
                repo: name,
                message: "Not possible to fast-forward, aborting.".to_string(),
            }
            .into())
        }
    }
}

/// Create `base/name`, with a `.git` directory when `versioned`.
pub(crate) fn make_dir(base: &Path, name: &str, versioned: bool) -> PathBuf {
    let dir = base.join(name);
    let target = if versioned { dir.join(".git") } else { dir.clone() };
    std::fs::create_dir_all(target).expect("failed to create test directory");
    dir
}

// --- ScriptedConfirm ---

/// Prompt that always gives the same answer and remembers the questions.
#[derive(Debug)]
pub(crate) struct ScriptedConfirm {
    answer: bool,
    pub(crate) asked: Vec<String>,
}

impl ScriptedConfirm {
    pub(crate) const fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Vec::new(),
        }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, question: &str) -> SyncResult<bool> {
        self.asked.push(question.to_string());
        Ok(self.answer)
    }
}

// --- GitFixture ---

/// Run git in `cwd` with a fixed identity; panics on failure.
pub(crate) fn run_git(args: &[&str], cwd: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// A bare upstream, a publishing clone (`seed`) and a base directory for the
/// checkouts under test.
pub(crate) struct GitFixture {
    pub(crate) temp: TempDir,
}

impl GitFixture {
    pub(crate) fn new() -> Self {
        let temp = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp.path();
        std::fs::create_dir_all(root.join("base")).expect("failed to create base dir");

        run_git(&["init", "--bare", "--quiet", "upstream.git"], root);
        run_git(&["clone", "--quiet", "upstream.git", "seed"], root);
        let fixture = Self { temp };
        fixture.publish(1);
        fixture
    }

    pub(crate) fn base(&self) -> PathBuf {
        self.temp.path().join("base")
    }

    pub(crate) fn upstream_url(&self) -> String {
        self.temp.path().join("upstream.git").display().to_string()
    }

    fn seed(&self) -> PathBuf {
        self.temp.path().join("seed")
    }

    /// Commit `count` empty commits in the seed clone and push them upstream.
    pub(crate) fn publish(&self, count: usize) {
        let seed = self.seed();
        for i in 0..count {
            run_git(
                &["commit", "--allow-empty", "--quiet", "-m", &format!("change {i}")],
                &seed,
            );
        }
        run_git(&["push", "--quiet", "origin", "HEAD"], &seed);
    }

    /// Clone the upstream into `base/name`.
    pub(crate) fn checkout(&self, name: &str) -> PathBuf {
        run_git(
            &["clone", "--quiet", &self.upstream_url(), name],
            &self.base(),
        );
        self.base().join(name)
    }
}

// --- Log capture ---

#[derive(Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` while capturing tracing output at INFO and above.
pub(crate) fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(BufferWriter {
            buffer: buffer.clone(),
        })
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .finish();

    let value = tracing::subscriber::with_default(subscriber, f);
    let logs = buffer
        .lock()
        .map(|guard| String::from_utf8_lossy(&guard).to_string())
        .unwrap_or_default();
    (value, logs)
}
