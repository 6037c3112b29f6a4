//! Config command implementation.
//!
//! Locates, shows and initialises the TOML configuration file.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use tracing::debug;

use audcurve_curves::CurveConfig;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::CliError;
use crate::output::{print_header, print_info, print_output, print_success, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show configuration file location
    Path,

    /// Write a configuration file with default values
    Init(InitArgs),
}

/// Arguments for the init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Default configuration file location.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("audcurve").join("config.toml"))
}

/// Loads the configuration.
///
/// An explicit path must exist unless `allow_missing` is set. Without one the
/// default location is read when present; otherwise built-in defaults apply.
pub fn load_config(
    explicit: Option<PathBuf>,
    allow_missing: bool,
) -> Result<(CurveConfig, Option<PathBuf>, bool)> {
    if let Some(path) = explicit {
        if allow_missing && !path.exists() {
            return Ok((CurveConfig::default(), Some(path), false));
        }
        let config = CurveConfig::from_file(&path)
            .map_err(|e| CliError::Config(e.to_string()))
            .with_context(|| format!("Failed to load {}", path.display()))?;
        debug!(path = %path.display(), "loaded configuration");
        return Ok((config, Some(path), true));
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            let config = CurveConfig::from_file(&path)
                .map_err(|e| CliError::Config(e.to_string()))
                .with_context(|| format!("Failed to load {}", path.display()))?;
            debug!(path = %path.display(), "loaded configuration");
            Ok((config, Some(path), true))
        }
        path => Ok((CurveConfig::default(), path, false)),
    }
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(ctx),
        ConfigCommand::Path => execute_path(ctx),
        ConfigCommand::Init(init_args) => execute_init(&init_args, ctx),
    }
}

/// Show the effective configuration.
fn execute_show(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Minimal => {
            print!("{}", config.to_toml_string()?);
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let display_path =
                |p: &Option<PathBuf>| p.as_deref().map(|p| p.display().to_string()).unwrap_or_default();
            let results = vec![
                KeyValue::new("spread_bps", config.spread_bps.to_string()),
                KeyValue::new("horizon_months", config.horizon_months.to_string()),
                KeyValue::new("mode", config.mode.to_string()),
                KeyValue::new("min_rate", config.min_rate.to_string()),
                KeyValue::new("max_rate", config.max_rate.to_string()),
                KeyValue::new("f1_path", display_path(&config.f1_path)),
                KeyValue::new("f2_path", display_path(&config.f2_path)),
                KeyValue::new(
                    "schedule",
                    if config.schedule.is_some() {
                        format!("custom ({} tenors)", config.schedule().len())
                    } else {
                        "standard".to_string()
                    },
                ),
            ];
            if ctx.format == OutputFormat::Table {
                print_header("Current Configuration");
            }
            print_output(&results, ctx.format)?;
        }
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(ctx: &Context) -> Result<()> {
    let Some(path) = ctx.config_path.as_deref() else {
        print_info("Could not determine config directory (using defaults)");
        return Ok(());
    };

    if ctx.format == OutputFormat::Minimal {
        println!("{}", path.display());
        return Ok(());
    }

    print_info(&format!("Config file: {}", path.display()));
    if ctx.config_loaded {
        print_info("Status: loaded");
    } else if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

/// Write a default configuration file.
fn execute_init(args: &InitArgs, ctx: &Context) -> Result<()> {
    let path = ctx
        .config_path
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    write_default_config(path, args.force)?;

    if !ctx.quiet {
        print_success(&format!("Wrote default configuration to {}", path.display()));
    }
    Ok(())
}

fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::AlreadyExists(path.to_path_buf()).into());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let config = CurveConfig {
        schedule: Some(audcurve_curves::TenorSchedule::standard()),
        ..CurveConfig::default()
    };
    std::fs::write(path, config.to_toml_string()?)?;
    Ok(())
}
