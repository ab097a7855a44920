//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shopfront_core::{Storefront, StorefrontConfig};

use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration, with environment overrides applied.
    pub config: StorefrontConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&Path>, profile: Option<&Path>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let config = StorefrontConfig::load(path)
                    .with_context(|| format!("Failed to load config file: {}", path.display()))?;
                (config, Some(path.to_path_buf()))
            }
            // Try to find config in current directory or parent directories
            None => (StorefrontConfig::discover(&cwd), StorefrontConfig::find(&cwd)),
        };
        let mut config = config.with_env_overrides();

        if let Some(profile) = profile {
            config.storage.profile = Some(profile.to_path_buf());
        } else if config.storage.profile.is_none() {
            config.storage.profile = Some(default_profile_path()?);
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Open the storefront over the configured profile.
    pub fn storefront(&self) -> Result<Storefront> {
        let storefront = Storefront::new(&self.config).context("Failed to open the storefront")?;
        if let Some(profile) = &self.config.storage.profile {
            self.output.debug(&format!("Profile: {}", profile.display()));
        }
        Ok(storefront)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

/// Where the profile lives when nothing else is configured.
fn default_profile_path() -> Result<PathBuf> {
    let dir = dirs_path().join("shopfront");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
    Ok(dir.join("profile.json"))
}

/// Get the platform-specific data directory.
fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        std::env::temp_dir()
    }
}
