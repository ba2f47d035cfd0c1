//! Target branch resolution.

use crate::error::GitResult;
use std::fmt;

/// Where the target branch name came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchSource {
    /// Read from the checked-out HEAD
    Detected,
    /// Detection failed; the configured fallback was used
    Fallback,
}

/// Branch that pull and push both target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub source: BranchSource,
}

impl Branch {
    /// Pick the detected branch, or `fallback` when detection failed or came back blank.
    ///
    /// The fallback is a guess: if HEAD is really on another branch, pull and
    /// push silently target `fallback` instead.
    pub fn resolve(detected: GitResult<String>, fallback: &str) -> Self {
        match detected {
            Ok(name) if !name.trim().is_empty() => Self {
                name: name.trim().to_string(),
                source: BranchSource::Detected,
            },
            Ok(_) => {
                tracing::warn!("Current branch name is empty, using {}", fallback);
                Self::fallback(fallback)
            }
            Err(e) => {
                tracing::warn!("Could not detect current branch ({}), using {}", e, fallback);
                Self::fallback(fallback)
            }
        }
    }

    fn fallback(name: &str) -> Self {
        Self {
            name: name.to_string(),
            source: BranchSource::Fallback,
        }
    }

    /// Was the name read from HEAD?
    pub fn is_detected(&self) -> bool {
        self.source == BranchSource::Detected
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
