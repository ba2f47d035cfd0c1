//! Version-control capability used by the publisher.

use crate::error::GitResult;
use std::path::Path;

/// Operations the publish flow needs from a version-control tool.
///
/// Paths are relative to the repository root. Implementations run one
/// operation at a time and block until it completes.
pub trait VersionControl {
    /// Name of the checked-out branch; an error when HEAD is detached
    fn current_branch(&self) -> GitResult<String>;

    /// Pull `branch` from the remote, rebasing local commits on top
    fn pull_rebase(&self, branch: &str) -> GitResult<()>;

    /// Add `paths` to the index
    fn stage(&self, paths: &[&Path]) -> GitResult<()>;

    /// Does the index differ from HEAD?
    fn has_staged_changes(&self) -> GitResult<bool>;

    /// Commit the index
    fn commit(&self, message: &str) -> GitResult<()>;

    /// Push `branch` to the remote
    fn push(&self, branch: &str) -> GitResult<()>;
}
