//! Short commit hash lookup through the version-control tool.

use std::ffi::OsString;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::GitConfig;
use crate::error::LookupError;

const POLL_INTERVAL: Duration = Duration::from_millis(25);
const SHORT_HEAD_ARGS: [&str; 3] = ["rev-parse", "--short", "HEAD"];

/// A bounded invocation of the version-control tool.
#[derive(Debug, Clone)]
pub struct CommitLookup {
    program: OsString,
    args: Vec<OsString>,
    timeout: Duration,
}

impl CommitLookup {
    /// `<program> rev-parse --short HEAD` with the configured timeout.
    pub fn from_config(config: &GitConfig) -> Self {
        Self::new(&config.program, SHORT_HEAD_ARGS, config.timeout())
    }

    /// Run an arbitrary command whose trimmed stdout is the hash.
    pub fn new<P, I, A>(program: P, args: I, timeout: Duration) -> Self
    where
        P: Into<OsString>,
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run the tool in `dir` and return its trimmed stdout.
    ///
    /// The child gets no stdin and is killed once the timeout elapses.
    /// Stdout is drained on a helper thread so a chatty tool cannot block
    /// on a full pipe.
    pub fn try_get_commit_hash(&self, dir: &Path) -> Result<String, LookupError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(LookupError::Spawn)?;

        let stdout = child.stdout.take();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut raw = Vec::new();
            let result = match stdout {
                Some(mut stdout) => stdout.read_to_end(&mut raw).map(|_| raw),
                None => Ok(raw),
            };
            let _ = tx.send(result);
        });

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            if let Some(status) = child.try_wait().map_err(LookupError::Wait)? {
                break status;
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(LookupError::Timeout(self.timeout));
            }
            thread::sleep(POLL_INTERVAL);
        };

        if !status.success() {
            return Err(LookupError::Failed(status));
        }

        // A grandchild may still hold the pipe open after the child exits.
        let remaining = deadline.saturating_duration_since(Instant::now());
        let raw = match rx.recv_timeout(remaining) {
            Ok(result) => result.map_err(LookupError::Wait)?,
            Err(_) => return Err(LookupError::Timeout(self.timeout)),
        };

        let text = String::from_utf8(raw).map_err(|_| LookupError::InvalidOutput)?;
        let hash = text.trim();
        if hash.is_empty() {
            return Err(LookupError::EmptyOutput);
        }

        debug!("Commit lookup in {} returned {hash}", dir.display());
        Ok(hash.to_string())
    }
}
