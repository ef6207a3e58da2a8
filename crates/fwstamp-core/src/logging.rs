//! Logging setup for fwstamp.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "fwstamp=info,fwstamp_core=info";

/// Initialize logging for fwstamp.
///
/// Uses `RUST_LOG` environment variable for filtering.
/// Default level: info. Output goes to stderr so stdout stays usable.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Initialize logging with a custom log level.
pub fn init_with_level(level: &str) {
    let filter = EnvFilter::new(format!("fwstamp={level},fwstamp_core={level}"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
