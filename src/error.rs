//! Error types for dictum

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the dictum application
#[derive(Debug, Error)]
pub enum DictumError {
    #[error("Can only open a single quote store per process")]
    StoreAlreadyOpen,

    #[error("No quote selected to announce")]
    MissingQuote,

    #[error("No quote numbered {0}")]
    QuoteNotFound(usize),

    #[error("Not a dictum directory: {0}")]
    NotDictumDirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Speech error: {0}")]
    Speech(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DictumError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DictumError::NotDictumDirectory(_) => 2,
            DictumError::QuoteNotFound(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DictumError::NotDictumDirectory(path) => {
                format!(
                    "Not a dictum directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'dictum init' in this directory to create a new quote store\n\
                    • Navigate to an existing dictum directory\n\
                    • Set DICTUM_ROOT environment variable to your quote store path",
                    path.display()
                )
            }
            DictumError::QuoteNotFound(number) => {
                format!(
                    "No quote numbered {}\n\n\
                    Suggestions:\n\
                    • Run 'dictum list' to see the numbered quotes\n\
                    • Quote numbers start at 1",
                    number
                )
            }
            DictumError::MissingQuote => {
                "No quote selected to announce\n\n\
                Suggestions:\n\
                • Run 'dictum list' to see the numbered quotes\n\
                • Pick an existing number: dictum say 1"
                    .to_string()
            }
            DictumError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: dictum config editor 'vim'\n\
                    • Pass the fields directly: dictum add --author 'A' --text 'T'",
                    msg
                )
            }
            DictumError::Speech(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your speech command is installed and in PATH\n\
                    • Set DICTUM_SPEECH environment variable (e.g., export DICTUM_SPEECH=espeak)\n\
                    • Configure it: dictum config speech 'espeak'",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DictumError
pub type Result<T> = std::result::Result<T, DictumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_dictum_directory_suggestion() {
        let err = DictumError::NotDictumDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("dictum init"));
        assert!(msg.contains("DICTUM_ROOT"));
        assert!(msg.contains("Suggestions"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_quote_not_found_suggestions() {
        let err = DictumError::QuoteNotFound(7);
        let msg = err.display_with_suggestions();
        assert!(msg.contains("No quote numbered 7"));
        assert!(msg.contains("dictum list"));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_missing_quote_suggestions() {
        let err = DictumError::MissingQuote;
        let msg = err.display_with_suggestions();
        assert!(msg.contains("announce"));
        assert!(msg.contains("dictum say 1"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_editor_error_suggestions() {
        let err = DictumError::Editor("Editor not found".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("EDITOR environment variable"));
        assert!(msg.contains("dictum config editor"));
        assert!(msg.contains("PATH"));
    }

    #[test]
    fn test_speech_error_suggestions() {
        let err = DictumError::Speech("Speech command not found".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("DICTUM_SPEECH"));
        assert!(msg.contains("dictum config speech"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = DictumError::Config("Unknown config key".to_string());
        let msg = err.display_with_suggestions();
        // Thiserror prefixes with the error type
        assert_eq!(msg, "Configuration error: Unknown config key");
        assert_eq!(err.exit_code(), 1);
    }
}
