use serde::{Deserialize, Serialize};

use super::errors::CompletionError;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Free-text input from the user that is allowed to reach the model.
///
/// Only the zero-length string is rejected. Whitespace is user content
/// and is forwarded as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt(String);

impl Prompt {
    pub fn parse(input: impl Into<String>) -> Result<Self, CompletionError> {
        let input = input.into();
        if input.is_empty() {
            return Err(CompletionError::EmptyInput);
        }
        Ok(Self(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, for logging without leaking the content.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed preamble sent alongside every prompt to steer the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInstruction(String);

impl SystemInstruction {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SystemInstruction {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SystemInstruction {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier of the hosted model, e.g. `gemini-2.0-flash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ModelId {
    fn default() -> Self {
        Self(DEFAULT_MODEL.to_string())
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_empty_prompt() {
        let result = Prompt::parse("");
        assert!(matches!(result, Err(CompletionError::EmptyInput)));
    }

    #[test]
    fn should_keep_prompt_text_as_typed() {
        let prompt = Prompt::parse("  hello ").unwrap();
        assert_eq!(prompt.as_str(), "  hello ");
    }

    #[test]
    fn should_accept_whitespace_only_prompt() {
        let prompt = Prompt::parse(" ");
        assert!(prompt.is_ok());
    }

    #[test]
    fn should_count_characters_not_bytes() {
        let prompt = Prompt::parse("こんにちは").unwrap();
        assert_eq!(prompt.char_count(), 5);
    }

    #[test]
    fn should_default_model_to_gemini_flash() {
        assert_eq!(ModelId::default().as_str(), "gemini-2.0-flash");
    }

    #[test]
    fn should_convert_instruction_from_str() {
        let instruction: SystemInstruction = "be brief".into();
        assert_eq!(instruction.as_str(), "be brief");
    }
}
