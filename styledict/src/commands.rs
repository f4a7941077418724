//! Subcommand implementations.

use crate::cli::{BuildArgs, CleanArgs, InitArgs, ListArgs, ListTarget};
use std::fs;
use std::path::Path;
use styledict_core::{Builder, Registry, Result, StyledictConfig, StyledictError};
use tracing::{info, warn};

/// Starter configuration written by `styledict init`: the standard css/scss/
/// json platforms plus the custom line-oriented platform.
const STARTER_CONFIG: &str = r#"source = ["properties/**/*.json", "components/**/*.json"]
build_path = "build/"

[platforms.custom]
transforms = ["attribute/cti", "myTransform", "myRegisteredTransform", "color/hex"]
files = [{ destination = "variables.yml", format = "myFormat" }]

[platforms.css]
transform_group = "css"
files = [{ destination = "variables.css", format = "css/variables" }]

[platforms.scss]
transform_group = "scss"
prefix = "asu"
build_path = "build/scss/"
files = [{ destination = "_variables.scss", format = "scss/variables" }]

[platforms.json]
transform_group = "js"
files = [{ destination = "properties.json", format = "json" }]
"#;

pub fn build(
    config: &StyledictConfig,
    registry: &Registry,
    base_dir: &Path,
    args: &BuildArgs,
) -> Result<()> {
    let builder = Builder::new(config, registry, base_dir).dry_run(args.dry_run);
    match &args.platform {
        Some(platforms) => builder.run_platforms(platforms),
        None => builder.run(),
    }
}

pub fn list(config: &StyledictConfig, registry: &Registry, args: &ListArgs) {
    match args.target {
        ListTarget::Platforms => {
            for (name, platform) in &config.platforms {
                let files: Vec<&str> = platform
                    .files
                    .iter()
                    .map(|file| file.destination.as_str())
                    .collect();
                println!("{name}: {}", files.join(", "));
            }
        }
        ListTarget::Transforms => {
            for name in registry.transform_names() {
                println!("{name}");
            }
        }
        ListTarget::Formats => {
            for name in registry.format_names() {
                println!("{name}");
            }
        }
    }
}

pub fn init(args: &InitArgs) -> Result<()> {
    let path = Path::new("styledict.toml");
    if path.exists() && !args.force {
        return Err(StyledictError::config(
            "styledict.toml already exists (use --force to overwrite)",
        ));
    }
    fs::write(path, STARTER_CONFIG)?;
    info!("Wrote starter configuration to styledict.toml");
    Ok(())
}

pub fn clean(config: &StyledictConfig, base_dir: &Path, args: &CleanArgs) -> Result<()> {
    let platforms: Vec<String> = match &args.platform {
        Some(names) => names.clone(),
        None => config.platforms.keys().cloned().collect(),
    };
    for name in &platforms {
        let platform = config
            .platforms
            .get(name)
            .ok_or_else(|| StyledictError::unknown_platform(name))?;
        let build_path = platform.build_path.as_deref().unwrap_or(&config.build_path);
        for file in &platform.files {
            let destination = base_dir.join(build_path).join(&file.destination);
            if destination.exists() {
                fs::remove_file(&destination)?;
                info!("Removed {:?}", destination);
            } else {
                warn!("Nothing to clean at {:?}", destination);
            }
        }
    }
    Ok(())
}
