//! Config management use case

use crate::error::{DictumError, Result};
use crate::infrastructure::{Config, FileSystemRepository};

/// Service for managing workspace configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "editor" => Ok(config.editor.clone()),
            "speech" => Ok(config.speech.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DictumError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: editor, speech, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "editor" => {
                config.editor = value.to_string();
            }
            "speech" => {
                config.speech = value.to_string();
            }
            "created" => {
                return Err(DictumError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DictumError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: editor, speech",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
