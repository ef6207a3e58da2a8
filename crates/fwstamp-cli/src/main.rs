//! fwstamp-cli: pre-build hook that stamps firmware builds.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fwstamp_core::release::RELEASE;
use fwstamp_core::{BuildInfoGenerator, Config};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "fwstamp")]
#[command(about = "Generate build_info.h before a firmware build", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to $FWSTAMP_CONFIG or ./fwstamp.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct Overrides {
    /// Directory the header is written into
    #[arg(long)]
    src_dir: Option<PathBuf>,

    /// Version string to stamp instead of the configured one
    #[arg(long)]
    build_version: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the header unconditionally
    Generate {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Pre-action entry point; only runs for the configured target
    Hook {
        /// Build target the host build system is about to run
        target: String,

        #[command(flatten)]
        overrides: Overrides,
    },

    /// Write a starter configuration file
    Init {
        #[command(flatten)]
        overrides: Overrides,

        /// Replace an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Print the build info without writing anything
    Show {
        #[command(flatten)]
        overrides: Overrides,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Header)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Header,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        fwstamp_core::logging::init_with_level("debug");
    } else {
        fwstamp_core::logging::init();
    }
    debug!("{}", RELEASE.version_line("fwstamp"));

    match cli.command {
        Commands::Generate { overrides } => {
            let config = load_config(cli.config, overrides)?;
            generate(&config)?;
        }
        Commands::Hook { target, overrides } => {
            let config = load_config(cli.config, overrides)?;
            if target == config.hook_target {
                generate(&config)?;
            } else {
                info!(
                    "Skipping target {target:?}, header is generated for {:?}",
                    config.hook_target
                );
            }
        }
        Commands::Init { overrides, force } => {
            init(cli.config, overrides, force)?;
        }
        Commands::Show { overrides, format } => {
            let config = load_config(cli.config, overrides)?;
            show(&config, format)?;
        }
    }

    Ok(())
}

fn generate(config: &Config) -> Result<()> {
    let path = BuildInfoGenerator::new(config)
        .generate(&config.src_dir)
        .context("pre-build step failed")?;
    println!("{}", path.display());
    Ok(())
}

fn show(config: &Config, format: Format) -> Result<()> {
    let build_info = BuildInfoGenerator::new(config).capture(&config.src_dir);

    match format {
        Format::Header => print!("{}", fwstamp_core::header::render(&build_info)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&build_info)?),
    }

    Ok(())
}

fn init(path: Option<PathBuf>, overrides: Overrides, force: bool) -> Result<()> {
    let path = path.unwrap_or_else(fwstamp_core::paths::config_path);
    if path.exists() && !force {
        bail!("{} already exists, pass --force to replace it", path.display());
    }

    let config = apply_overrides(Config::default(), overrides);
    config.validate()?;
    config
        .save(&path)
        .with_context(|| format!("writing {}", path.display()))?;

    info!("Wrote configuration to {}", path.display());
    println!("{}", path.display());
    Ok(())
}

fn load_config(path: Option<PathBuf>, overrides: Overrides) -> Result<Config> {
    let path = path.unwrap_or_else(fwstamp_core::paths::config_path);
    let config = Config::load_or_default(&path)
        .with_context(|| format!("loading {}", path.display()))?;

    Ok(apply_overrides(config, overrides))
}

fn apply_overrides(mut config: Config, overrides: Overrides) -> Config {
    if let Some(src_dir) = overrides.src_dir {
        config = config.with_src_dir(src_dir);
    }
    if let Some(version) = overrides.build_version {
        config = config.with_version(version);
    }
    config
}
