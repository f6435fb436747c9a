use crate::backend::{BranchBackend, RefRecord};
use crate::branches::Confirmer;
use crate::error::{KwgitError, Result};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

pub(crate) fn create_test_repo() -> TempDir {
    create_repo(false)
}

/// Repo whose `origin` remote points at itself, so pushes and fetches work offline.
pub(crate) fn create_test_repo_with_remote() -> TempDir {
    create_repo(true)
}

fn create_repo(add_origin_remote: bool) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    if add_origin_remote {
        let path_str = path.to_string_lossy().to_string();
        git(path, &["remote", "add", "origin", &path_str]);
    }

    temp_dir
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}

/// In-memory backend that records every call it receives.
#[derive(Default)]
pub(crate) struct FakeBackend {
    local: Vec<RefRecord>,
    remote: Vec<RefRecord>,
    reflog: HashMap<String, i64>,
    current: String,
    /// `None` makes `merged_branch_names` report a missing base branch.
    merged: Option<Vec<String>>,
    remote_existing: HashSet<String>,
    failing: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl FakeBackend {
    pub(crate) fn new() -> Self {
        Self {
            current: "main".to_string(),
            merged: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub(crate) fn with_local(mut self, name: &str, creator: &str, committer: &str) -> Self {
        self.local.push(RefRecord::new(name, creator, committer));
        self
    }

    /// Local branch whose creator date is the commit date.
    pub(crate) fn with_branch(self, name: &str, last_commit: i64) -> Self {
        let ts = last_commit.to_string();
        self.with_local(name, &ts, &ts)
    }

    pub(crate) fn with_remote(mut self, full_name: &str, creator: &str, committer: &str) -> Self {
        self.remote.push(RefRecord::new(full_name, creator, committer));
        self
    }

    pub(crate) fn with_reflog(mut self, name: &str, oldest: i64) -> Self {
        self.reflog.insert(name.to_string(), oldest);
        self
    }

    pub(crate) fn with_current(mut self, name: &str) -> Self {
        self.current = name.to_string();
        self
    }

    pub(crate) fn with_merged(mut self, names: &[&str]) -> Self {
        self.merged = Some(names.iter().map(|n| n.to_string()).collect());
        self
    }

    pub(crate) fn without_base_branch(mut self) -> Self {
        self.merged = None;
        self
    }

    pub(crate) fn with_remote_branch(mut self, name: &str) -> Self {
        self.remote_existing.insert(name.to_string());
        self
    }

    /// Make the local delete of `name` fail with `message`.
    pub(crate) fn failing_delete(mut self, name: &str, message: &str) -> Self {
        self.failing.insert(name.to_string(), message.to_string());
        self
    }

    /// Make the remote delete of `name` fail with `message`.
    pub(crate) fn failing_remote_delete(mut self, name: &str, message: &str) -> Self {
        self.failing
            .insert(format!("remote:{}", name), message.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Calls that mutate the repository.
    pub(crate) fn mutations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|call| call.starts_with("delete_"))
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn check_failure(&self, key: &str) -> Result<()> {
        match self.failing.get(key) {
            Some(message) => Err(KwgitError::GitError(message.clone())),
            None => Ok(()),
        }
    }
}

impl BranchBackend for FakeBackend {
    fn list_local_refs(&self) -> Result<Vec<String>> {
        self.record("list_local_refs".to_string());
        Ok(self.local.iter().map(|r| r.name.clone()).collect())
    }

    fn list_local_refs_with_metadata(&self) -> Result<Vec<RefRecord>> {
        self.record("list_local_refs_with_metadata".to_string());
        Ok(self.local.clone())
    }

    fn list_remote_refs_with_metadata(&self, remote: &str) -> Result<Vec<RefRecord>> {
        self.record(format!("list_remote_refs_with_metadata({})", remote));
        Ok(self.remote.clone())
    }

    fn reflog_oldest_timestamp(&self, name: &str) -> Option<i64> {
        self.record(format!("reflog_oldest_timestamp({})", name));
        self.reflog.get(name).copied()
    }

    fn current_branch_name(&self) -> Result<String> {
        self.record("current_branch_name".to_string());
        Ok(self.current.clone())
    }

    fn merged_branch_names(&self, base: &str) -> Result<Vec<String>> {
        self.record(format!("merged_branch_names({})", base));
        self.merged
            .clone()
            .ok_or_else(|| KwgitError::BaseBranchNotFound(base.to_string()))
    }

    fn last_commit_timestamp(&self, name: &str) -> Result<i64> {
        self.record(format!("last_commit_timestamp({})", name));
        self.local
            .iter()
            .find(|r| r.name == name)
            .and_then(|r| r.committer_date.parse().ok())
            .ok_or_else(|| KwgitError::RefNotFound(name.to_string()))
    }

    fn remote_ref_exists(&self, name: &str, remote: &str) -> Result<bool> {
        self.record(format!("remote_ref_exists({}, {})", name, remote));
        Ok(self.remote_existing.contains(name))
    }

    fn delete_local_ref(&self, name: &str, force: bool) -> Result<()> {
        self.record(format!("delete_local_ref({}, force={})", name, force));
        self.check_failure(name)
    }

    fn delete_remote_ref(&self, name: &str, remote: &str) -> Result<()> {
        self.record(format!("delete_remote_ref({}, {})", name, remote));
        self.check_failure(&format!("remote:{}", name))
    }
}

/// Confirmer that replays scripted answers and remembers what it was asked.
///
/// Once the script runs out every further question is answered "no".
#[derive(Default)]
pub(crate) struct ScriptedConfirmer {
    answers: VecDeque<bool>,
    pub(crate) asked: Vec<String>,
}

impl ScriptedConfirmer {
    pub(crate) fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            asked: Vec::new(),
        }
    }

    pub(crate) fn always(answer: bool, times: usize) -> Self {
        Self::new(&vec![answer; times])
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&mut self, label: &str) -> bool {
        self.asked.push(label.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}
