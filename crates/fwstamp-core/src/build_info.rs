//! The values stamped into the generated header.

use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};

/// Placeholder used when the commit hash cannot be determined.
pub const UNKNOWN_COMMIT: &str = "unknown";

/// Build metadata for one firmware build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    /// ISO-8601 local timestamp of the invocation.
    pub build_time: String,
    pub version: String,
    /// Short commit hash, or [`UNKNOWN_COMMIT`].
    pub commit: String,
}

impl BuildInfo {
    pub fn new(build_time: DateTime<Local>, version: String, commit: String) -> Self {
        Self {
            build_time: format_timestamp(&build_time),
            version,
            commit,
        }
    }
}

/// Local wall-clock time, no UTC offset.
///
/// Microseconds are appended only when non-zero.
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    let naive = time.naive_local();
    let pattern = if naive.nanosecond() / 1_000 == 0 {
        "%Y-%m-%dT%H:%M:%S"
    } else {
        "%Y-%m-%dT%H:%M:%S%.6f"
    };
    naive.format(pattern).to_string()
}
