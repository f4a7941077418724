mod cli;
mod commands;

use clap::Parser;
use cli::{BuildArgs, Cli, Commands};
use std::path::{Path, PathBuf};
use styledict_core::transform::{name, value};
use styledict_core::{Registry, Result, StyledictConfig, Transform};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Init runs before config discovery: there is nothing to discover yet.
    if let Some(Commands::Init(args)) = &cli.command {
        return commands::init(args);
    }

    info!("Starting Styledict");
    let (config, base_dir) = load_config(cli.config.as_deref())?;
    let registry = project_registry();

    match cli.command.unwrap_or(Commands::Build(BuildArgs::default())) {
        Commands::Build(args) => {
            match commands::build(&config, &registry, &base_dir, &args) {
                Ok(()) => info!("Build completed successfully"),
                Err(e) => {
                    error!("Build failed: {}", e);
                    return Err(e);
                }
            }
        }
        Commands::List(args) => commands::list(&config, &registry, &args),
        Commands::Clean(args) => commands::clean(&config, &base_dir, &args)?,
        Commands::Init(_) => unreachable!("handled above"),
    }
    Ok(())
}

/// The default registry plus this project's custom transforms and formats,
/// registered under the names the platform table uses.
fn project_registry() -> Registry {
    let mut registry = Registry::default();

    // Join the path with underscores and upper-case it.
    registry.register_transform("myTransform", Transform::Name(name::path_upper_snake));

    // Scale size-category values by 16 and suffix px.
    registry.register_transform(
        "myRegisteredTransform",
        Transform::Value {
            matcher: Some(value::is_size),
            transform: value::scale_px,
        },
    );

    // name: value lines, and bare values joined with newlines.
    registry.register_format("myFormat", styledict_core::format::name_value);
    registry.register_format("myRegisteredFormat", styledict_core::format::values);

    registry
}

/// Load the configuration, either from an explicit path or by walking
/// ancestor directories. Returns the config plus the directory it lives in,
/// which anchors source globs and build paths.
fn load_config(explicit: Option<&Path>) -> Result<(StyledictConfig, PathBuf)> {
    let (config, path) = match explicit {
        Some(path) => (StyledictConfig::from_path(path)?, path.to_path_buf()),
        None => StyledictConfig::discover()?,
    };
    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    debug!("Using configuration at {:?}", path);
    Ok((config, base_dir))
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
