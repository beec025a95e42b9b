//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use pantry_catalog::Catalog;
use pantry_commerce::cart::CartStore;

use crate::config::{find_config, StoreConfig};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Store configuration, environment overrides applied.
    pub config: StoreConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(resolve_path(&cwd, path)),
            None => find_config(&cwd),
        };

        let mut config = match &config_path {
            Some(path) => StoreConfig::load(path)?,
            None => StoreConfig::default(),
        };
        config.apply_env();

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Build the configured product source.
    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::from_config(&self.config.catalog, self.config.currency)
            .context("Failed to set up the catalog")
    }

    /// A fresh, empty cart using the configured shipping policy.
    pub fn cart_store(&self) -> Result<CartStore> {
        Ok(CartStore::new(self.config.shipping_policy()?))
    }
}

/// Resolve a path relative to the working directory.
fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
