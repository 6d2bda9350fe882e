//! Project configuration for `nobg.toml`.
//!
//! The file is optional. Without it the defaults below apply and the
//! project root is the current directory.
//!
//! # Example
//!
//! ```toml
//! [assets]
//! dir = "src/assets"        # relative to the config file, `~` expanded
//! files = ["nutcracker_idle.png", "nutcracker_cracking.png"]
//! ```

mod error;
mod util;

pub use error::ConfigError;

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::{find_config_file, normalize_path, resolve_dir};

/// Config file name searched for when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "nobg.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing nobg.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NobgConfig {
    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Targets given on the command line (internal use only)
    #[serde(skip)]
    pub cli_paths: Vec<PathBuf>,

    /// Sprite location and file names
    #[serde(default)]
    pub assets: AssetsConfig,
}

/// `[assets]` section: the sprites to process.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding the sprites.
    pub dir: PathBuf,

    /// File names inside `dir`, processed in this order.
    pub files: Vec<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("src/assets"),
            files: vec![
                "nutcracker_idle.png".to_string(),
                "nutcracker_cracking.png".to_string(),
            ],
        }
    }
}

impl NobgConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The project root is
    /// the config file's parent directory, or cwd when there is none.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = Self::resolve_config_path(cli, &cwd)?;

        let mut config = match &config_path {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                Self::from_path(path)?
            }
            None => Self::default(),
        };

        // Validate raw values before paths are resolved against the root
        config.validate()?;

        let root = config_path
            .as_deref()
            .and_then(Path::parent)
            .map_or(cwd, Path::to_path_buf);
        config.finalize(&root, cli);

        Ok(config)
    }

    /// Locate the config file.
    ///
    /// An explicit `--config` that cannot be found is an error; a missing
    /// default `nobg.toml` is not.
    fn resolve_config_path(cli: &Cli, cwd: &Path) -> Result<Option<PathBuf>> {
        match &cli.config {
            Some(name) => find_config_file(name, cwd)
                .map(|path| Some(normalize_path(&path)))
                .ok_or_else(|| {
                    ConfigError::Io(
                        name.clone(),
                        std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
                    )
                    .into()
                }),
            None => Ok(find_config_file(Path::new(DEFAULT_CONFIG_NAME), cwd)
                .map(|path| normalize_path(&path))),
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, root: &Path, cli: &Cli) {
        self.root = normalize_path(root);
        self.assets.dir = resolve_dir(&self.assets.dir, &self.root);
        if cli.has_paths() {
            self.cli_paths = cli.paths.clone();
        }
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if self.assets.dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation("`assets.dir` is empty".into()).into());
        }
        if self.assets.files.is_empty() {
            return Err(ConfigError::Validation("`assets.files` is empty".into()).into());
        }
        if let Some(file) = self.assets.files.iter().find(|f| f.trim().is_empty()) {
            return Err(
                ConfigError::Validation(format!("`assets.files` has a blank entry: {file:?}"))
                    .into(),
            );
        }
        Ok(())
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Files to process, in order.
    ///
    /// Command-line paths win over `[assets]`.
    pub fn targets(&self) -> Vec<PathBuf> {
        if !self.cli_paths.is_empty() {
            return self.cli_paths.clone();
        }
        self.assets
            .files
            .iter()
            .map(|file| self.assets.dir.join(file))
            .collect()
    }
}

// ============================================================================
// tests
// ============================================================================
