use crate::error::{Result, StyledictError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{env, fs, path::Path, path::PathBuf};
use tracing::{debug, error, info, trace, warn};

/// One output file of a platform.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileConfig {
    /// Path of the generated file, relative to the platform build path.
    pub destination: String,

    /// Registered format name used to render the file.
    pub format: String,
}

/// A named build target: a transform set, an output directory, and the files
/// to generate.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlatformConfig {
    /// Built-in transform group name (`css`, `scss`, `js`). Ignored when
    /// `transforms` is non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform_group: Option<String>,

    /// Explicit transform list, applied in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transforms: Vec<String>,

    /// Prefix handed to name transforms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Per-platform build path; falls back to the top-level one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_path: Option<String>,

    #[serde(default)]
    pub files: Vec<FileConfig>,
}

impl PlatformConfig {
    /// The transform names this platform applies: the explicit list when
    /// present, otherwise the named group's list.
    pub fn transform_names(&self) -> Result<Vec<String>> {
        if !self.transforms.is_empty() {
            return Ok(self.transforms.clone());
        }
        match &self.transform_group {
            Some(group_name) => crate::transform::group(group_name)
                .map(|names| names.iter().map(|s| s.to_string()).collect())
                .ok_or_else(|| StyledictError::UnknownTransformGroup(group_name.clone())),
            None => Ok(vec!["attribute/cti".to_string()]),
        }
    }
}

/// Root configuration: token source globs plus the platform table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StyledictConfig {
    /// Glob patterns for token source files, relative to the config file.
    pub source: Vec<String>,

    /// Default output directory for platforms without their own.
    #[serde(default = "default_build_path")]
    pub build_path: String,

    #[serde(default)]
    pub platforms: BTreeMap<String, PlatformConfig>,
}

fn default_build_path() -> String {
    "build/".to_string()
}

impl StyledictConfig {
    /// Load configuration by searching for styledict.toml in the current
    /// directory and its ancestors.
    pub fn discover() -> Result<(StyledictConfig, PathBuf)> {
        let config_path = Self::find_config_file()?;
        info!("Found configuration file at: {:?}", config_path);
        let config = Self::from_path(&config_path)?;
        Ok((config, config_path))
    }

    /// Load configuration from an explicit path.
    pub fn from_path(path: &Path) -> Result<StyledictConfig> {
        let contents = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read configuration file: {}", e);
            StyledictError::from(e)
        })?;
        debug!("Configuration file size: {} bytes", contents.len());

        let mut config: StyledictConfig = toml::from_str(&contents).map_err(|e| {
            error!("Failed to parse TOML configuration: {}", e);
            StyledictError::config(e.to_string())
        })?;

        // Output paths may carry ${VAR} / ${VAR:-default} references.
        config.build_path = Self::substitute_env_vars(&config.build_path)?;
        for platform in config.platforms.values_mut() {
            if let Some(build_path) = &platform.build_path {
                platform.build_path = Some(Self::substitute_env_vars(build_path)?);
            }
        }

        if config.source.is_empty() {
            return Err(StyledictError::config(
                "configuration declares no token sources",
            ));
        }

        info!(
            "Configuration loaded: {} source pattern(s), {} platform(s)",
            config.source.len(),
            config.platforms.len()
        );
        Ok(config)
    }

    /// Searches for `styledict.toml` starting from the current directory
    /// and traversing up to the root.
    fn find_config_file() -> Result<PathBuf> {
        let current_dir = env::current_dir()?;
        debug!("Starting config file search from: {:?}", current_dir);

        for path in current_dir.ancestors() {
            let config_path = path.join("styledict.toml");
            trace!("Checking for config at: {:?}", config_path);
            if config_path.exists() {
                return Ok(config_path);
            }
        }

        error!("Configuration file 'styledict.toml' not found in any parent directory.");
        Err(StyledictError::config(
            "styledict.toml not found in current or any parent directory.",
        ))
    }

    /// Substitute environment variables in config strings.
    /// Supports ${VAR_NAME:-default} syntax.
    fn substitute_env_vars(value: &str) -> Result<String> {
        trace!("Substituting environment variables in: {}", value);
        let mut result = value.to_string();

        let re = regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}")
            .expect("Invalid regex for environment variable substitution");

        for cap in re.captures_iter(value) {
            let var_name = &cap[1];
            let default_value = cap.get(2).map(|m| m.as_str());

            let replacement = match env::var(var_name) {
                Ok(val) => {
                    debug!("Resolved environment variable: {}", var_name);
                    val
                }
                Err(_) => match default_value {
                    Some(default) => {
                        warn!(
                            "Environment variable {} not set, using default: {}",
                            var_name, default
                        );
                        default.to_string()
                    }
                    None => {
                        error!(
                            "Environment variable {} not set and no default provided",
                            var_name
                        );
                        return Err(StyledictError::EnvVarNotSet(var_name.to_string()));
                    }
                },
            };

            let full_match = &cap[0];
            result = result.replace(full_match, &replacement);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
        source = ["properties/**/*.json", "components/**/*.json"]
        build_path = "build/"

        [platforms.css]
        transform_group = "css"
        files = [{ destination = "variables.css", format = "css/variables" }]

        [platforms.scss]
        transform_group = "scss"
        prefix = "asu"
        build_path = "build/scss/"
        files = [{ destination = "_variables.scss", format = "scss/variables" }]

        [platforms.custom]
        transforms = ["attribute/cti", "myTransform", "myRegisteredTransform", "color/hex"]
        files = [{ destination = "variables.yml", format = "myFormat" }]
    "#;

    #[test]
    fn test_parse_sample_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("styledict.toml");
        fs::write(&path, SAMPLE).unwrap();

        let config = StyledictConfig::from_path(&path).unwrap();
        assert_eq!(config.source.len(), 2);
        assert_eq!(config.build_path, "build/");
        assert_eq!(config.platforms.len(), 3);
        assert_eq!(config.platforms["scss"].prefix.as_deref(), Some("asu"));
        assert_eq!(
            config.platforms["custom"].files[0].destination,
            "variables.yml"
        );
    }

    #[test]
    fn test_explicit_transforms_beat_group() {
        let platform = PlatformConfig {
            transform_group: Some("css".into()),
            transforms: vec!["attribute/cti".into(), "color/hex".into()],
            ..Default::default()
        };
        assert_eq!(
            platform.transform_names().unwrap(),
            vec!["attribute/cti", "color/hex"]
        );
    }

    #[test]
    fn test_group_expands_to_builtin_list() {
        let platform = PlatformConfig {
            transform_group: Some("css".into()),
            ..Default::default()
        };
        assert_eq!(
            platform.transform_names().unwrap(),
            vec!["attribute/cti", "name/cti/kebab", "size/rem", "color/css"]
        );
    }

    #[test]
    fn test_unknown_group_is_an_error() {
        let platform = PlatformConfig {
            transform_group: Some("android".into()),
            ..Default::default()
        };
        assert!(matches!(
            platform.transform_names(),
            Err(StyledictError::UnknownTransformGroup(_))
        ));
    }

    #[test]
    fn test_missing_sources_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("styledict.toml");
        fs::write(&path, "source = []\n").unwrap();
        assert!(StyledictConfig::from_path(&path).is_err());
    }

    #[test]
    fn test_env_var_default_substitution() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("styledict.toml");
        fs::write(
            &path,
            "source = [\"properties/**/*.json\"]\nbuild_path = \"${STYLEDICT_UNSET_DIR:-out/}\"\n",
        )
        .unwrap();

        let config = StyledictConfig::from_path(&path).unwrap();
        assert_eq!(config.build_path, "out/");
    }
}
