/// Compile-time metadata describing the fwstamp binary itself.
#[derive(Debug, Clone, Copy)]
pub struct Release {
    pub version: &'static str,
    pub git_sha: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
}

const fn env_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) => v,
        None => default,
    }
}

pub const RELEASE: Release = Release {
    version: env!("CARGO_PKG_VERSION"),
    git_sha: env_or(option_env!("FWSTAMP_BUILD_GIT_SHA"), "unknown"),
    timestamp: env_or(option_env!("FWSTAMP_BUILD_TIMESTAMP"), "unknown"),
    target: env_or(option_env!("FWSTAMP_BUILD_TARGET"), "unknown"),
};

impl Release {
    pub fn version_line(self, binary_name: &str) -> String {
        format!(
            "{binary_name} {} (rev {}, built {}, target {})",
            self.version, self.git_sha, self.timestamp, self.target
        )
    }
}
