//! Speech synthesis integration

use crate::error::{DictumError, Result};
use std::process::Command;

/// External text-to-speech capability consumed by the store
pub trait Speech {
    /// Speak the utterance, returning once playback completed
    fn speak(&self, text: &str) -> Result<()>;
}

/// Speech backed by an external command taking the utterance as its
/// final argument (e.g. `say`, `espeak`, `spd-say`)
pub struct CommandSpeech {
    command: String,
}

impl CommandSpeech {
    /// Create a speech session with the given command
    pub fn new(speech_command: String) -> Self {
        CommandSpeech {
            command: speech_command,
        }
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            // Fallback to the platform synthesizer if command is empty
            let fallback = if cfg!(target_os = "macos") {
                "say"
            } else {
                "espeak"
            };
            return (fallback.to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}

impl Speech for CommandSpeech {
    fn speak(&self, text: &str) -> Result<()> {
        let (program, mut args) = self.parse_command();
        args.push(text.to_string());

        #[cfg(windows)]
        let status = Command::new("cmd").arg("/C").arg(&program).args(&args).status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&args).status();

        let status = status.map_err(|e| {
            DictumError::Speech(format!(
                "Failed to launch speech command '{}': {}",
                program, e
            ))
        })?;

        if !status.success() {
            return Err(DictumError::Speech(format!(
                "Speech command '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_simple() {
        let speech = CommandSpeech::new("espeak".to_string());
        let (program, args) = speech.parse_command();

        assert_eq!(program, "espeak");
        assert_eq!(args.len(), 0);
    }

    #[test]
    fn test_parse_command_with_args() {
        let speech = CommandSpeech::new("espeak -s 120".to_string());
        let (program, args) = speech.parse_command();

        assert_eq!(program, "espeak");
        assert_eq!(args, vec!["-s", "120"]);
    }

    #[test]
    fn test_parse_command_empty_uses_platform_fallback() {
        let speech = CommandSpeech::new("".to_string());
        let (program, args) = speech.parse_command();

        assert!(program == "say" || program == "espeak");
        assert_eq!(args.len(), 0);
    }

    #[test]
    #[cfg(unix)]
    fn test_speak_succeeds_with_harmless_command() {
        let speech = CommandSpeech::new("true".to_string());
        speech.speak("hello").unwrap();
    }

    #[test]
    #[cfg(unix)]
    fn test_speak_reports_failing_command() {
        let speech = CommandSpeech::new("false".to_string());
        let result = speech.speak("hello");
        match result.unwrap_err() {
            DictumError::Speech(msg) => assert!(msg.contains("exited with")),
            other => panic!("Expected Speech error, got {:?}", other),
        }
    }
}
