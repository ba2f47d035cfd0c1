//! Domain entities for brief-publisher.
//!
//! This module contains:
//! - RepositoryHandle: The working tree being published
//! - Branch: The branch that pull and push target
//! - PublishOutcome: What a publish run did

mod branch;
mod outcome;
mod repository;

pub use branch::{Branch, BranchSource};
pub use outcome::PublishOutcome;
pub use repository::RepositoryHandle;
