//! Configuration management for fwstamp.
//!
//! The configuration is resolved once when the tool starts and handed to the
//! generator by value; nothing reads project options lazily afterwards.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Version stamped into the header when the project does not configure one.
pub const DEFAULT_VERSION: &str = "0.1.1";

/// Main configuration structure for fwstamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Firmware version string. Blank or missing means [`DEFAULT_VERSION`].
    pub version: Option<String>,

    /// Project source directory the header is written into.
    pub src_dir: PathBuf,

    /// File name of the generated header.
    pub header_name: String,

    /// Build target whose pre-action runs the generator.
    pub hook_target: String,

    /// Commit lookup settings.
    pub git: GitConfig,
}

/// Settings for the version-control lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Executable to run.
    pub program: String,

    /// Seconds to wait before giving up on the lookup.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: None,
            src_dir: PathBuf::from("src"),
            header_name: "build_info.h".to_string(),
            hook_target: "buildprog".to_string(),
            git: GitConfig::default(),
        }
    }
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            timeout_secs: 5,
        }
    }
}

impl GitConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A relative `src_dir` is resolved against the directory holding the file.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        Ok(config.anchored_at(path))
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default().anchored_at(path))
        }
    }

    /// Parse and validate TOML configuration text.
    pub fn parse(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Serialization(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values that would otherwise fail late, in the middle of a build.
    pub fn validate(&self) -> crate::Result<()> {
        let name = self.header_name.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(crate::Error::Config(format!(
                "header_name must be a plain file name, got {name:?}"
            )));
        }

        if self.hook_target.trim().is_empty() {
            return Err(crate::Error::Config(
                "hook_target must not be empty".to_string(),
            ));
        }

        if self.git.timeout_secs == 0 {
            return Err(crate::Error::Config(
                "git.timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// The version to stamp, falling back to [`DEFAULT_VERSION`].
    pub fn resolved_version(&self) -> String {
        self.version
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(DEFAULT_VERSION)
            .to_string()
    }

    /// Override the source directory (e.g. from the command line).
    pub fn with_src_dir(mut self, src_dir: impl Into<PathBuf>) -> Self {
        self.src_dir = expand_tilde(&src_dir.into());
        self
    }

    /// Override the configured version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Full path of the header this configuration produces.
    pub fn header_path(&self) -> PathBuf {
        self.src_dir.join(&self.header_name)
    }

    fn anchored_at(mut self, config_file: &Path) -> Self {
        let src_dir = expand_tilde(&self.src_dir);
        self.src_dir = match config_file.parent() {
            Some(base) if src_dir.is_relative() && !base.as_os_str().is_empty() => {
                base.join(src_dir)
            }
            _ => src_dir,
        };
        self
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}
