use chrono::{DateTime, Utc};

use super::value_objects::{Prompt, SystemInstruction};

/// Everything the hosted model receives for a single interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: Prompt,
    pub system_instruction: Option<SystemInstruction>,
}

/// Text returned by the hosted model, kept verbatim.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub model_version: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Completion {
    pub fn new(text: String, model_version: Option<String>) -> Self {
        Self {
            text,
            model_version,
            created_at: Utc::now(),
        }
    }
}
