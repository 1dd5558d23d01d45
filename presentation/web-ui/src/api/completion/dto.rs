use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::completion::model::Completion;

#[derive(Debug, Clone, Object)]
pub struct CompletionRequest {
    /// Text typed by the user. An empty string is rejected without calling the model.
    pub input: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CompletionResponse {
    /// Model output, unmodified
    pub text: String,
    /// Model version reported by the API
    #[oai(skip_serializing_if_is_none)]
    pub model_version: Option<String>,
    /// When the response was received
    pub created_at: DateTime<Utc>,
}

impl From<Completion> for CompletionResponse {
    fn from(c: Completion) -> Self {
        Self {
            text: c.text,
            model_version: c.model_version,
            created_at: c.created_at,
        }
    }
}
