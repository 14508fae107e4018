//! Command-line interface for envboot
//!
//! Every command goes through the same startup wiring the backend uses:
//! resolve settings, initialize the resolver once, then build what it needs.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envboot_core::{BootstrapSettings, EnvironmentResolver};

use crate::logger::TracingLogger;

mod check;
mod media;

/// Load .env overrides and wire the media storage client
#[derive(Parser)]
#[command(name = "envboot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override file to read instead of the settings' one (default .env)
    #[arg(long, global = true, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// YAML bootstrap settings file
    #[arg(long, global = true, env = "ENVBOOT_SETTINGS", value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Only print warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the resolver mode and where each media credential comes from
    Check,

    /// Print the resolved value of a key (exit code 1 if absent)
    Get(check::GetArgs),

    /// Print the delivery URL of an asset
    Url(media::UrlArgs),

    /// Upload an asset from a URL or data URI
    Upload(media::UploadArgs),

    /// Delete an asset
    Destroy(media::DestroyArgs),
}

pub async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let resolver = Arc::new(bootstrap(&cli)?);

    match cli.command {
        Commands::Check => check::run_check(&resolver),
        Commands::Get(args) => check::run_get(&resolver, args),
        Commands::Url(args) => media::run_url(&resolver, args),
        Commands::Upload(args) => media::run_upload(&resolver, args).await,
        Commands::Destroy(args) => media::run_destroy(&resolver, args).await,
    }
}

fn log_level(cli: &Cli) -> Level {
    if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    }
}

/// RUST_LOG wins when set; the flags only pick the default level
fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

fn init_tracing(cli: &Cli) {
    let filter = env_filter(log_level(cli));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

fn load_settings(cli: &Cli) -> Result<BootstrapSettings> {
    let mut settings = match &cli.settings {
        Some(path) => BootstrapSettings::load(path)
            .with_context(|| format!("reading settings from {}", path.display()))?,
        None => BootstrapSettings::default(),
    };
    if let Some(env_file) = &cli.env_file {
        settings = settings.with_override_file(env_file);
    }
    Ok(settings)
}

fn bootstrap(cli: &Cli) -> Result<EnvironmentResolver> {
    let settings = load_settings(cli)?;
    Ok(EnvironmentResolver::bootstrap(settings, Arc::new(TracingLogger)))
}
