//! Command-line interface definitions for Styledict.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Styledict - design token build tool
#[derive(Parser, Debug)]
#[command(name = "styledict")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to styledict.toml configuration file
    #[arg(short, long, global = true, env = "STYLEDICT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v, -vv, -vvv for increasing verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build platform outputs from token sources (default)
    Build(BuildArgs),

    /// List registered transforms, formats, or configured platforms
    List(ListArgs),

    /// Initialize a new styledict.toml configuration file
    Init(InitArgs),

    /// Remove generated build outputs
    Clean(CleanArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Platforms to build (comma-separated); all platforms when omitted
    #[arg(short, long, value_delimiter = ',')]
    pub platform: Option<Vec<String>>,

    /// Log what would be written without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// What to list
    #[arg(value_enum, default_value = "platforms")]
    pub target: ListTarget,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListTarget {
    Platforms,
    Transforms,
    Formats,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing styledict.toml if present
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CleanArgs {
    /// Platforms to clean (comma-separated); all platforms when omitted
    #[arg(short, long, value_delimiter = ',')]
    pub platform: Option<Vec<String>>,
}
