//! Result of a successful publish run.

use super::Branch;

/// What a publish run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// A commit was created and pushed
    Published {
        branch: Branch,
        remote: String,
        /// Whether the pre-publish pull succeeded
        synced: bool,
    },
    /// The index matched HEAD; nothing was committed or pushed
    NothingToPublish { branch: Branch },
}

impl PublishOutcome {
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published { .. })
    }

    pub fn branch(&self) -> &Branch {
        match self {
            Self::Published { branch, .. } | Self::NothingToPublish { branch } => branch,
        }
    }
}
