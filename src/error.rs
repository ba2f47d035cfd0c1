//! Unified error types for brief-publisher.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl AppError {
    /// Process exit status; setup failures are always 1
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Publish(err) => err.exit_code(),
            Self::Config(_) | Self::Git(_) => 1,
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Errors from invoking the version-control tool
#[derive(Debug, Error)]
pub enum GitError {
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    #[error("HEAD is detached")]
    DetachedHead,

    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {}: {stderr}", display_code(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to stage {}", display_paths(.0))]
    Stage(Vec<PathBuf>),
}

impl GitError {
    /// Exit code reported by git, if the command ran and exited normally
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { code, .. } => *code,
            _ => None,
        }
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that stop a publish run
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Required artifact not found: {0}")]
    MissingArtifact(PathBuf),

    #[error(transparent)]
    Git(#[from] GitError),
}

impl PublishError {
    /// Process exit status for this error.
    ///
    /// A missing artifact is always 1. Git failures propagate git's own
    /// status, folded into the 1..=255 range.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingArtifact(_) => 1,
            Self::Git(err) => match err.exit_code() {
                Some(code) if code & 0xff != 0 => (code & 0xff) as u8,
                _ => 1,
            },
        }
    }
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for Git operations
pub type GitResult<T> = std::result::Result<T, GitError>;

/// Result type alias for publish runs
pub type PublishResult<T> = std::result::Result<T, PublishError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(code: Option<i32>) -> GitError {
        GitError::CommandFailed {
            command: "git push origin main".to_string(),
            code,
            stderr: "rejected".to_string(),
        }
    }

    #[test]
    fn test_missing_artifact_exits_with_one() {
        let err = PublishError::MissingArtifact(PathBuf::from("docs/index.html"));
        assert_eq!(err.exit_code(), 1);
        insta::assert_snapshot!(err.to_string(), @"Required artifact not found: docs/index.html");
    }

    #[test]
    fn test_git_exit_code_propagates() {
        assert_eq!(PublishError::Git(failed(Some(128))).exit_code(), 128);
        assert_eq!(PublishError::Git(failed(Some(1))).exit_code(), 1);
    }

    #[test]
    fn test_git_exit_code_never_zero() {
        assert_eq!(PublishError::Git(failed(None)).exit_code(), 1);
        assert_eq!(PublishError::Git(failed(Some(256))).exit_code(), 1);
        assert_eq!(PublishError::Git(GitError::DetachedHead).exit_code(), 1);
    }

    #[test]
    fn test_command_failed_message() {
        insta::assert_snapshot!(
            failed(Some(1)).to_string(),
            @"`git push origin main` exited with status 1: rejected"
        );
        insta::assert_snapshot!(
            failed(None).to_string(),
            @"`git push origin main` exited with a signal: rejected"
        );
    }

    #[test]
    fn test_app_error_exit_codes() {
        let setup = AppError::from(GitError::NotARepository(PathBuf::from("/tmp/site")));
        assert_eq!(setup.exit_code(), 1);
        insta::assert_snapshot!(setup.to_string(), @"Git error: Not a git repository: /tmp/site");

        let config = AppError::from(ConfigError::Invalid("git.remote must not be empty".into()));
        assert_eq!(config.exit_code(), 1);

        let push = AppError::from(PublishError::Git(failed(Some(128))));
        assert_eq!(push.exit_code(), 128);
    }

    #[test]
    fn test_stage_message_lists_paths() {
        let err = GitError::Stage(vec![PathBuf::from("docs/charts")]);
        assert_eq!(err.to_string(), "Failed to stage docs/charts");
    }
}
