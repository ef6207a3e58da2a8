//! The pre-build step: capture build info and write the header.

use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::build_info::{BuildInfo, UNKNOWN_COMMIT};
use crate::commit::CommitLookup;
use crate::config::Config;
use crate::header;

/// Produces `build_info.h` for a firmware project.
#[derive(Debug, Clone)]
pub struct BuildInfoGenerator {
    version: String,
    header_name: String,
    lookup: CommitLookup,
}

impl BuildInfoGenerator {
    pub fn new(config: &Config) -> Self {
        Self {
            version: config.resolved_version(),
            header_name: config.header_name.clone(),
            lookup: CommitLookup::from_config(&config.git),
        }
    }

    /// Replace the commit lookup, e.g. with a different tool.
    pub fn with_lookup(mut self, lookup: CommitLookup) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Collect the build info without touching the filesystem.
    pub fn capture(&self, project_src_dir: &Path) -> BuildInfo {
        let build_time = Local::now();
        let commit = match self.lookup.try_get_commit_hash(project_src_dir) {
            Ok(hash) => hash,
            Err(err) => {
                debug!("Commit lookup failed, using {UNKNOWN_COMMIT:?}: {err}");
                UNKNOWN_COMMIT.to_string()
            }
        };

        BuildInfo::new(build_time, self.version.clone(), commit)
    }

    /// Write the header into `project_src_dir` and return its path.
    ///
    /// Only the write can fail; a failed commit lookup is stamped as
    /// `"unknown"`.
    pub fn generate(&self, project_src_dir: &Path) -> crate::Result<PathBuf> {
        let build_info = self.capture(project_src_dir);
        let path = header::write(project_src_dir, &self.header_name, &build_info)?;

        info!(
            "Wrote {} (version {}, commit {})",
            path.display(),
            build_info.version,
            build_info.commit
        );
        Ok(path)
    }
}
