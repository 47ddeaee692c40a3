//! Configuration management

use crate::error::{DictumError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub editor: String,
    pub speech: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with detected defaults
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            speech: Self::detect_default_speech(),
            created: Utc::now(),
        }
    }

    /// Load config from .dictum/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".dictum").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DictumError::NotDictumDirectory(path.to_path_buf())
            } else {
                DictumError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DictumError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .dictum/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let dictum_dir = path.join(".dictum");
        let config_path = dictum_dir.join("config.toml");

        if !dictum_dir.exists() {
            fs::create_dir(&dictum_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| DictumError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Get the speech command, checking DICTUM_SPEECH first
    pub fn get_speech(&self) -> String {
        std::env::var("DICTUM_SPEECH").unwrap_or_else(|_| self.speech.clone())
    }

    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    fn detect_default_speech() -> String {
        std::env::var("DICTUM_SPEECH").unwrap_or_else(|_| {
            if cfg!(target_os = "macos") {
                "say".to_string()
            } else {
                "espeak".to_string()
            }
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
