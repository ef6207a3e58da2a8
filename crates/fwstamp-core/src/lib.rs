//! fwstamp-core: build-info header generation for firmware builds.

pub mod build_info;
pub mod commit;
pub mod config;
pub mod error;
pub mod generator;
pub mod header;
pub mod logging;
pub mod paths;
pub mod release;

pub use build_info::BuildInfo;
pub use config::Config;
pub use error::{Error, LookupError, Result};
pub use generator::BuildInfoGenerator;
