//! Git service backed by the `git` command-line tool.
//!
//! Every operation runs one `git` process in the repository root and blocks
//! until it exits.

use crate::domain::RepositoryHandle;
use crate::error::{GitError, GitResult};
use crate::services::VersionControl;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Git service for publishing from a working tree
#[derive(Debug, Clone)]
pub struct GitService {
    repo_path: PathBuf,
    remote: String,
    executable: String,
}

impl GitService {
    /// Create a new GitService that pulls from and pushes to `remote`
    pub fn new(repo: &RepositoryHandle, remote: impl Into<String>) -> Self {
        Self {
            repo_path: repo.root().to_path_buf(),
            remote: remote.into(),
            executable: "git".to_string(),
        }
    }

    /// Use a different git binary
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    fn describe(&self, args: &[&str]) -> String {
        let mut command = self.executable.clone();
        for arg in args {
            command.push(' ');
            command.push_str(arg);
        }
        command
    }

    /// Run git and capture its output, whatever the exit status
    fn output(&self, args: &[&str]) -> GitResult<Output> {
        tracing::debug!("Running {}", self.describe(args));

        Command::new(&self.executable)
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(|source| GitError::Spawn {
                command: self.describe(args),
                source,
            })
    }

    /// Run git and require a zero exit status, returning trimmed stdout
    fn run(&self, args: &[&str]) -> GitResult<String> {
        let output = self.output(args)?;

        if !output.status.success() {
            return Err(self.failure(args, &output));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn failure(&self, args: &[&str], output: &Output) -> GitError {
        GitError::CommandFailed {
            command: self.describe(args),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

impl VersionControl for GitService {
    fn current_branch(&self) -> GitResult<String> {
        let args = ["symbolic-ref", "--quiet", "--short", "HEAD"];
        let output = self.output(&args)?;

        match output.status.code() {
            Some(0) => Ok(String::from_utf8_lossy(&output.stdout).trim().to_string()),
            // --quiet exits 1 without a message when HEAD is not symbolic
            Some(1) => Err(GitError::DetachedHead),
            _ => Err(self.failure(&args, &output)),
        }
    }

    fn pull_rebase(&self, branch: &str) -> GitResult<()> {
        self.run(&["pull", "--rebase", &self.remote, branch])?;
        Ok(())
    }

    fn stage(&self, paths: &[&Path]) -> GitResult<()> {
        // One `git add` per path: a pathspec that matches nothing makes git
        // refuse the whole command, which would also drop the paths that exist.
        let mut failed = Vec::new();
        for path in paths {
            let path_str = path.to_string_lossy();
            if let Err(e) = self.run(&["add", "--", &path_str]) {
                tracing::debug!("Failed to stage {}: {}", path.display(), e);
                failed.push(path.to_path_buf());
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(GitError::Stage(failed))
        }
    }

    fn has_staged_changes(&self) -> GitResult<bool> {
        let args = ["diff", "--cached", "--quiet"];
        let output = self.output(&args)?;

        match output.status.code() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(self.failure(&args, &output)),
        }
    }

    fn commit(&self, message: &str) -> GitResult<()> {
        self.run(&["commit", "-m", message])?;
        Ok(())
    }

    fn push(&self, branch: &str) -> GitResult<()> {
        self.run(&["push", &self.remote, branch])?;
        Ok(())
    }
}
