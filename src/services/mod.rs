//! Infrastructure services for brief-publisher.
//!
//! This module contains:
//! - VersionControl: The capability the publish flow depends on
//! - GitService: VersionControl backed by the git CLI
//! - Publisher: The publish flow itself

mod git;
mod publisher;
mod vcs;

#[cfg(test)]
pub(crate) mod testing;

pub use git::GitService;
pub use publisher::{PublishSettings, Publisher};
pub use vcs::VersionControl;
