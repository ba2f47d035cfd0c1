//! User-facing summary of a publish run.

use crate::domain::PublishOutcome;
use crate::error::{PublishError, PublishResult};
use crate::services::PublishSettings;
use std::fmt;

/// Stream a report line is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Message to print and the status to exit with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub stream: Stream,
    pub message: String,
    pub exit_code: u8,
}

impl Report {
    /// Summarise the result of [`Publisher::publish`](crate::services::Publisher::publish)
    pub fn from_result(result: &PublishResult<PublishOutcome>, settings: &PublishSettings) -> Self {
        match result {
            Ok(PublishOutcome::Published { branch, remote, .. }) => Self {
                stream: Stream::Stdout,
                message: format!(
                    "Published {} to {}/{}",
                    settings.artifact.display(),
                    remote,
                    branch
                ),
                exit_code: 0,
            },
            Ok(PublishOutcome::NothingToPublish { .. }) => Self {
                stream: Stream::Stdout,
                message: "No changes to publish.".to_string(),
                exit_code: 0,
            },
            Err(err @ PublishError::MissingArtifact(_)) => Self {
                stream: Stream::Stderr,
                message: format!(
                    "{}\nRun the brief generator first, then run publish-brief again.",
                    err
                ),
                exit_code: err.exit_code(),
            },
            Err(err) => Self {
                stream: Stream::Stderr,
                message: format!("Publish failed: {}", err),
                exit_code: err.exit_code(),
            },
        }
    }

    /// Write the message to its stream
    pub fn print(&self) {
        match self.stream {
            Stream::Stdout => println!("{}", self.message),
            Stream::Stderr => eprintln!("{}", self.message),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
