//! Repository handle representing the working tree being published.

use crate::error::{GitError, GitResult};
use std::path::{Path, PathBuf};

/// Explicit handle on a git working tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHandle {
    root: PathBuf,
}

impl RepositoryHandle {
    /// Open the repository whose working tree is rooted at `root`
    pub fn open(root: impl Into<PathBuf>) -> GitResult<Self> {
        let root = root.into();
        // `.git` is a directory in a normal clone and a file in a worktree
        if !root.join(".git").exists() {
            return Err(GitError::NotARepository(root));
        }
        Ok(Self { root })
    }

    /// Discover the repository root by walking up from `start`
    pub fn discover(start: &Path) -> Option<Self> {
        let mut current = start;
        loop {
            if current.join(".git").exists() {
                return Some(Self {
                    root: current.to_path_buf(),
                });
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => return None,
            }
        }
    }

    /// Working tree root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a repository-relative path
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// Check whether a repository-relative path is an existing file
    pub fn contains_file(&self, relative: &Path) -> bool {
        self.resolve(relative).is_file()
    }
}
