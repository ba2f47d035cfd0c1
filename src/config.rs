//! Configuration management for brief-publisher.
//!
//! Supports layered configuration: defaults → project → user → env

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project configuration file, looked up in the repository root
pub const PROJECT_CONFIG_FILE: &str = ".publish-brief.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub git: GitConfig,
}

impl PublishConfig {
    /// Load configuration with hierarchy: defaults → project → user → env
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // 1. Start with defaults
        builder = builder.add_source(
            config::File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // 2. Project-specific config (.publish-brief.toml in repository root)
        if let Some(root) = project_root {
            let project_config = root.join(PROJECT_CONFIG_FILE);
            if project_config.exists() {
                builder = builder.add_source(File::from(project_config).required(false));
            }
        }

        // 3. User config (~/.config/publish-brief/config.toml)
        if let Some(config_dir) =
            directories::ProjectDirs::from("com", "publish-brief", "publish-brief")
        {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // 4. Environment variables (PUBLISH_BRIEF__GIT__REMOTE, ...)
        builder = builder.add_source(Environment::with_prefix("PUBLISH_BRIEF").separator("__"));

        let config: Self = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject values the publish flow cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, path) in [
            ("paths.artifact", &self.paths.artifact),
            ("paths.charts_dir", &self.paths.charts_dir),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", key)));
            }
            if path.is_absolute() {
                return Err(ConfigError::Invalid(format!(
                    "{} must be relative to the repository root: {}",
                    key,
                    path.display()
                )));
            }
        }

        for (key, value) in [
            ("git.executable", &self.git.executable),
            ("git.remote", &self.git.remote),
            ("git.fallback_branch", &self.git.fallback_branch),
            ("git.commit_message", &self.git.commit_message),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", key)));
            }
        }

        Ok(())
    }
}

/// Locations of the generated brief, relative to the repository root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Generated HTML page; publishing is refused when it is missing
    #[serde(default = "default_artifact")]
    pub artifact: PathBuf,
    /// Chart images referenced by the page
    #[serde(default = "default_charts_dir")]
    pub charts_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            artifact: default_artifact(),
            charts_dir: default_charts_dir(),
        }
    }
}

fn default_artifact() -> PathBuf {
    PathBuf::from("docs/index.html")
}

fn default_charts_dir() -> PathBuf {
    PathBuf::from("docs/charts")
}

/// Git-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitConfig {
    /// Program invoked for every git operation
    #[serde(default = "default_executable")]
    pub executable: String,
    /// Remote that is pulled from and pushed to
    #[serde(default = "default_remote")]
    pub remote: String,
    /// Branch used when the current one cannot be detected
    #[serde(default = "default_fallback_branch")]
    pub fallback_branch: String,
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            remote: default_remote(),
            fallback_branch: default_fallback_branch(),
            commit_message: default_commit_message(),
        }
    }
}

fn default_executable() -> String {
    "git".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_fallback_branch() -> String {
    "main".to_string()
}

fn default_commit_message() -> String {
    "chore: publish fresh brief to GitHub Pages".to_string()
}
