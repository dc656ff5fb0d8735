//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use nader_cache::FileStore;
use nader_commerce::cart::CartStore;
use nader_commerce::catalog::Catalog;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names, searched in this order in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["nader.toml", ".nader.toml", "nader.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Product catalog.
    pub catalog: Catalog,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (CliConfig::load(path)?, Some(PathBuf::from(path))),
            None => match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };
        tracing::debug!(config = ?config_path, "loaded configuration");

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            catalog: Catalog::builtin(),
        })
    }

    /// Open the persisted cart and finish its startup load.
    pub fn open_cart(&self) -> Result<CartStore<FileStore>> {
        let dir = self.resolve_path(&self.config.storage.dir);
        let backend = FileStore::open(&dir)
            .with_context(|| format!("Failed to open cart storage: {}", dir.display()))?;

        let mut store = CartStore::with_key(backend, self.config.storage.cart_key.clone());
        store.load();
        Ok(store)
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

/// Find a config file in the directory tree, starting at `start`.
///
/// Files that fail to parse are skipped with a warning.
pub fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_NAMES {
            let config_path = current.join(name);
            if !config_path.is_file() {
                continue;
            }
            match CliConfig::load(config_path.to_str()?) {
                Ok(config) => return Some((config, config_path)),
                Err(e) => {
                    let error = format!("{:#}", e);
                    tracing::warn!(path = %config_path.display(), %error, "skipping config");
                }
            }
        }

        if !current.pop() {
            return None;
        }
    }
}
