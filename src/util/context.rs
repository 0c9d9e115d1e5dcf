//! Global context for inglued operations.
//!
//! Provides centralized access to the project root, configuration, and
//! output preferences. Commands build one and pass it down.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::util::config::{project_config_path, Config};

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Project root (the working tree `git subtree` operates on)
    root: PathBuf,

    /// Configuration with all paths resolved against `root`
    config: Config,

    /// Whether to use verbose output
    verbose: bool,

    /// Whether to use colors in output
    color: bool,
}

impl GlobalContext {
    /// Create a context for the current directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Self::with_root(cwd)
    }

    /// Create a context rooted at `root`, loading `.inglued/config.toml` if present.
    pub fn with_root(root: PathBuf) -> Result<Self> {
        let config = Config::load_or_default(&project_config_path(&root))?;
        Ok(Self::with_config(root, config))
    }

    /// Create a context with an explicit configuration.
    pub fn with_config(root: PathBuf, config: Config) -> Self {
        let config = config.rooted(&root);
        GlobalContext {
            root,
            config,
            verbose: false,
            color: true,
        }
    }

    /// Set verbose mode.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Set color output.
    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Path of the direct manifest.
    pub fn manifest_path(&self) -> &Path {
        &self.config.paths.manifest
    }
}
