//! Publisher: pushes the generated brief to the site branch.
//!
//! The flow is linear:
//! 1. refuse to run unless the artifact exists
//! 2. resolve the branch (fallback when HEAD is detached)
//! 3. pull with rebase (failure tolerated)
//! 4. stage the artifact and chart directory (failure tolerated)
//! 5. commit and push, only if the index differs from HEAD

use crate::config::PublishConfig;
use crate::domain::{Branch, PublishOutcome, RepositoryHandle};
use crate::error::{GitError, PublishError, PublishResult, Result};
use crate::services::{GitService, VersionControl};
use std::path::{Path, PathBuf};

/// What gets published and how
#[derive(Debug, Clone)]
pub struct PublishSettings {
    pub artifact: PathBuf,
    pub charts_dir: PathBuf,
    pub remote: String,
    pub fallback_branch: String,
    pub commit_message: String,
}

impl From<&PublishConfig> for PublishSettings {
    fn from(config: &PublishConfig) -> Self {
        Self {
            artifact: config.paths.artifact.clone(),
            charts_dir: config.paths.charts_dir.clone(),
            remote: config.git.remote.clone(),
            fallback_branch: config.git.fallback_branch.clone(),
            commit_message: config.git.commit_message.clone(),
        }
    }
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self::from(&PublishConfig::default())
    }
}

/// Publishes the brief through a [`VersionControl`] implementation
#[derive(Debug)]
pub struct Publisher<V> {
    repo: RepositoryHandle,
    vcs: V,
    settings: PublishSettings,
}

impl Publisher<GitService> {
    /// Publisher driving the `git` CLI as configured
    pub fn from_config(repo: RepositoryHandle, config: &PublishConfig) -> Self {
        let vcs = GitService::new(&repo, config.git.remote.clone())
            .with_executable(config.git.executable.clone());
        Self::new(repo, vcs, PublishSettings::from(config))
    }

    /// Locate the repository enclosing `start` and load its configuration
    pub fn discover(start: &Path) -> Result<Self> {
        let repo = RepositoryHandle::discover(start)
            .ok_or_else(|| GitError::NotARepository(start.to_path_buf()))?;
        tracing::debug!("Repository root: {:?}", repo.root());

        let config = PublishConfig::load(Some(repo.root()))?;
        Ok(Self::from_config(repo, &config))
    }
}

impl<V: VersionControl> Publisher<V> {
    pub fn new(repo: RepositoryHandle, vcs: V, settings: PublishSettings) -> Self {
        Self {
            repo,
            vcs,
            settings,
        }
    }

    pub fn settings(&self) -> &PublishSettings {
        &self.settings
    }

    /// Paths handed to the index, relative to the repository root
    pub fn published_paths(&self) -> [&Path; 2] {
        [self.settings.artifact.as_path(), self.settings.charts_dir.as_path()]
    }

    /// Run one publish.
    ///
    /// Returns [`PublishError::MissingArtifact`] without touching the
    /// repository when the artifact is absent. Commit and push failures are
    /// returned as-is; nothing is retried or rolled back.
    pub fn publish(&self) -> PublishResult<PublishOutcome> {
        let artifact = &self.settings.artifact;
        if !self.repo.contains_file(artifact) {
            tracing::debug!("Artifact missing: {}", self.repo.resolve(artifact).display());
            return Err(PublishError::MissingArtifact(artifact.clone()));
        }

        let branch = Branch::resolve(self.vcs.current_branch(), &self.settings.fallback_branch);
        tracing::info!("Publishing {} to {}/{}", artifact.display(), self.settings.remote, branch);

        // Sync is a convenience; publishing continues without it.
        let synced = match self.vcs.pull_rebase(&branch.name) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Pull from {}/{} failed, continuing: {}", self.settings.remote, branch, e);
                false
            }
        };

        // The chart directory is optional.
        if let Err(e) = self.vcs.stage(&self.published_paths()) {
            tracing::warn!("Staging incomplete, continuing: {}", e);
        }

        if !self.vcs.has_staged_changes()? {
            tracing::info!("Index matches HEAD, nothing to commit");
            return Ok(PublishOutcome::NothingToPublish { branch });
        }

        self.vcs.commit(&self.settings.commit_message)?;
        self.vcs.push(&branch.name)?;
        tracing::info!("Pushed {} to {}", branch, self.settings.remote);

        Ok(PublishOutcome::Published {
            branch,
            remote: self.settings.remote.clone(),
            synced,
        })
    }
}
