//! Test support: a recording VersionControl double and real-git fixtures.

use crate::domain::RepositoryHandle;
use crate::error::{GitError, GitResult};
use crate::services::VersionControl;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A call made against [`RecordingVcs`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsCall {
    CurrentBranch,
    PullRebase(String),
    Stage(Vec<PathBuf>),
    HasStagedChanges,
    Commit(String),
    Push(String),
}

/// VersionControl double that records calls and returns scripted results
#[derive(Debug)]
pub struct RecordingVcs {
    pub log: RefCell<Vec<VcsCall>>,
    pub branch: Option<String>,
    pub pull_fails: bool,
    pub stage_fails: bool,
    pub staged_changes: bool,
    pub commit_exit_code: Option<i32>,
    pub push_exit_code: Option<i32>,
}

impl Default for RecordingVcs {
    fn default() -> Self {
        Self {
            log: RefCell::new(Vec::new()),
            branch: Some("main".to_string()),
            pull_fails: false,
            stage_fails: false,
            staged_changes: true,
            commit_exit_code: None,
            push_exit_code: None,
        }
    }
}

impl RecordingVcs {
    pub fn calls(&self) -> Vec<VcsCall> {
        self.log.borrow().clone()
    }

    fn record(&self, call: VcsCall) {
        self.log.borrow_mut().push(call);
    }

    fn failed(command: &str, code: i32) -> GitError {
        GitError::CommandFailed {
            command: command.to_string(),
            code: Some(code),
            stderr: "scripted failure".to_string(),
        }
    }
}

impl VersionControl for RecordingVcs {
    fn current_branch(&self) -> GitResult<String> {
        self.record(VcsCall::CurrentBranch);
        self.branch.clone().ok_or(GitError::DetachedHead)
    }

    fn pull_rebase(&self, branch: &str) -> GitResult<()> {
        self.record(VcsCall::PullRebase(branch.to_string()));
        if self.pull_fails {
            return Err(Self::failed("git pull", 1));
        }
        Ok(())
    }

    fn stage(&self, paths: &[&Path]) -> GitResult<()> {
        let paths: Vec<PathBuf> = paths.iter().map(|p| p.to_path_buf()).collect();
        self.record(VcsCall::Stage(paths.clone()));
        if self.stage_fails {
            return Err(GitError::Stage(paths));
        }
        Ok(())
    }

    fn has_staged_changes(&self) -> GitResult<bool> {
        self.record(VcsCall::HasStagedChanges);
        Ok(self.staged_changes)
    }

    fn commit(&self, message: &str) -> GitResult<()> {
        self.record(VcsCall::Commit(message.to_string()));
        match self.commit_exit_code {
            Some(code) => Err(Self::failed("git commit", code)),
            None => Ok(()),
        }
    }

    fn push(&self, branch: &str) -> GitResult<()> {
        self.record(VcsCall::Push(branch.to_string()));
        match self.push_exit_code {
            Some(code) => Err(Self::failed("git push", code)),
            None => Ok(()),
        }
    }
}

/// Run git in `dir`, panicking on failure, and return trimmed stdout
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// A bare remote plus a clone of it on `main` with one pushed commit
pub struct TestClone {
    _temp: TempDir,
    pub remote: PathBuf,
    pub work: PathBuf,
}

impl TestClone {
    pub fn repo(&self) -> RepositoryHandle {
        RepositoryHandle::open(&self.work).unwrap()
    }

    /// Number of commits on the remote's main branch
    pub fn remote_commit_count(&self) -> usize {
        git(&self.remote, &["rev-list", "--count", "main"])
            .parse()
            .unwrap()
    }
}

pub fn create_test_clone() -> TestClone {
    let temp = TempDir::new().unwrap();
    let remote = temp.path().join("remote.git");
    let work = temp.path().join("work");

    git(temp.path(), &["init", "--bare", "remote.git"]);
    git(temp.path(), &["clone", "remote.git", "work"]);

    git(&work, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(&work, &["config", "user.email", "test@test.com"]);
    git(&work, &["config", "user.name", "Test"]);
    git(&work, &["config", "commit.gpgsign", "false"]);

    std::fs::write(work.join("README.md"), "# Test").unwrap();
    git(&work, &["add", "README.md"]);
    git(&work, &["commit", "-m", "Initial commit"]);
    git(&work, &["push", "-u", "origin", "main"]);

    TestClone {
        _temp: temp,
        remote,
        work,
    }
}
