//! Initialize quote store workspace use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new quote store workspace at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Create the .dictum marker directory
    repo.initialize()?;

    // Save a config with detected defaults
    let config = Config::new();
    repo.save_config(&config)?;

    println!("Initialized dictum quote store at {}", path.display());
    println!("Editor: {}", config.editor);
    println!("Speech: {}", config.speech);

    Ok(())
}
