//! File system workspace discovery

use crate::error::{DictumError, Result};
use crate::infrastructure::{Config, QuoteFile};
use std::fs;
use std::path::{Path, PathBuf};

const QUOTES_FILE: &str = "quotes.toml";

/// File system workspace holding the quote file and configuration
///
/// The `.dictum/` marker directory carries the config; the quote file lives
/// next to it at the workspace root.
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the workspace root, checking DICTUM_ROOT first and then
    /// walking up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DICTUM_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_dictum_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(DictumError::Config(format!(
                    "DICTUM_ROOT is set to '{}' but no .dictum directory found. \
                    Run 'dictum init' in that directory or unset DICTUM_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the workspace root by walking up from a starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_dictum_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(DictumError::NotDictumDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_dictum_dir(path: &Path) -> bool {
        path.join(".dictum").is_dir()
    }

    /// Check if the .dictum directory exists
    pub fn is_initialized(&self) -> bool {
        Self::has_dictum_dir(&self.root)
    }

    /// Create the .dictum directory
    pub fn initialize(&self) -> Result<()> {
        let dictum_dir = self.root.join(".dictum");

        if dictum_dir.exists() {
            return Err(DictumError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&dictum_dir)?;
        Ok(())
    }

    /// Load configuration from .dictum/config.toml
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Save configuration to .dictum/config.toml
    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// The TOML quote file backend rooted in this workspace
    pub fn quote_file(&self) -> QuoteFile {
        QuoteFile::new(self.root.join(QUOTES_FILE))
    }
}
