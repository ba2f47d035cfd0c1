//! brief-publisher: publish a generated daily brief to GitHub Pages
//!
//! Commits the generated HTML page and its chart images to the current
//! branch and pushes it, skipping the commit when nothing changed.

pub mod config;
pub mod domain;
pub mod error;
pub mod report;
pub mod services;

pub use config::PublishConfig;
pub use domain::{Branch, BranchSource, PublishOutcome, RepositoryHandle};
pub use error::{AppError, ConfigError, GitError, GitResult, PublishError, PublishResult};
pub use report::{Report, Stream};
pub use services::{GitService, PublishSettings, Publisher, VersionControl};
