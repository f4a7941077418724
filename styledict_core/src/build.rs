//! The platform builder: drives load, resolve, transform, format, write.

use crate::config::{PlatformConfig, StyledictConfig};
use crate::error::{Result, StyledictError};
use crate::registry::Registry;
use crate::token::Token;
use crate::{loader, resolve};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct Builder<'a> {
    config: &'a StyledictConfig,
    registry: &'a Registry,
    /// Directory the config file lives in; source globs and build paths are
    /// resolved against it.
    base_dir: PathBuf,
    dry_run: bool,
}

impl<'a> Builder<'a> {
    pub fn new(config: &'a StyledictConfig, registry: &'a Registry, base_dir: &Path) -> Self {
        Builder {
            config,
            registry,
            base_dir: base_dir.to_path_buf(),
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Build every configured platform.
    pub fn run(&self) -> Result<()> {
        let names: Vec<String> = self.config.platforms.keys().cloned().collect();
        self.run_platforms(&names)
    }

    /// Build the named platforms only.
    pub fn run_platforms(&self, names: &[String]) -> Result<()> {
        let tokens = self.load_tokens()?;
        for name in names {
            let platform = self
                .config
                .platforms
                .get(name)
                .ok_or_else(|| StyledictError::unknown_platform(name))?;
            self.build_platform(name, platform, &tokens)?;
        }
        Ok(())
    }

    /// Load all token sources and resolve cross-token references. The result
    /// is shared by every platform; transforms operate on per-platform
    /// copies.
    pub fn load_tokens(&self) -> Result<Vec<Token>> {
        let mut tokens = loader::load_sources(&self.base_dir, &self.config.source)?;
        resolve::resolve_references(&mut tokens)?;
        Ok(tokens)
    }

    fn build_platform(
        &self,
        name: &str,
        platform: &PlatformConfig,
        tokens: &[Token],
    ) -> Result<()> {
        info!("Building platform: {}", name);

        // Resolve every transform and format up front so a typo fails the
        // whole platform before any file is written.
        let transform_names = platform.transform_names()?;
        let transforms = transform_names
            .iter()
            .map(|transform_name| self.registry.transform(transform_name))
            .collect::<Result<Vec<_>>>()?;
        let formats = platform
            .files
            .iter()
            .map(|file| self.registry.format(&file.format))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Platform {} applies {} transform(s) to {} token(s)",
            name,
            transforms.len(),
            tokens.len()
        );

        let prefix = platform.prefix.as_deref();
        let mut transformed = tokens.to_vec();
        for transform in &transforms {
            for token in &mut transformed {
                transform.apply(token, prefix);
            }
        }

        let build_path = platform
            .build_path
            .as_deref()
            .unwrap_or(&self.config.build_path);
        for (file, format) in platform.files.iter().zip(formats) {
            let destination = self.base_dir.join(build_path).join(&file.destination);
            let contents = format(&transformed)?;

            if self.dry_run {
                info!(
                    "[dry-run] Would write {} byte(s) to {:?}",
                    contents.len(),
                    destination
                );
                continue;
            }

            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&destination, &contents)?;
            info!("Wrote {:?} ({} bytes)", destination, contents.len());
        }
        Ok(())
    }
}
