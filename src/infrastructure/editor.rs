//! Editor integration for the quote edit form

use crate::domain::Quote;
use crate::error::{DictumError, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Session for editing a file in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open a file in the editor and block until the editor exits
    pub fn edit(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command();

        let mut all_args = args;
        all_args.push(file_path.to_string_lossy().to_string());

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&all_args)
            .status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&all_args).status();

        let status = status.map_err(|e| {
            DictumError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(DictumError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            // Fallback to notepad if command is empty
            return ("notepad".to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}

/// Render a working copy as an editable TOML buffer
pub fn render_quote_buffer(quote: &Quote) -> Result<String> {
    Ok(toml::to_string_pretty(quote)?)
}

/// Parse an edited buffer back into a quote
pub fn parse_quote_buffer(contents: &str) -> Result<Quote> {
    toml::from_str(contents)
        .map_err(|e| DictumError::Editor(format!("Could not parse edited quote: {}", e)))
}

/// Round-trip a working copy through the user's editor
///
/// The edited buffer must keep the `author` and `text` keys; anything else
/// is rejected before it can reach the store.
pub fn edit_quote_buffer(editor: &EditorSession, quote: &Quote) -> Result<Quote> {
    let path = std::env::temp_dir().join(format!("dictum-edit-{}.toml", std::process::id()));
    fs::write(&path, render_quote_buffer(quote)?)?;

    let opened = editor.edit(&path);
    let contents = fs::read_to_string(&path);
    let _ = fs::remove_file(&path);

    opened?;
    parse_quote_buffer(&contents?)
}
