use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::completion::errors::CompletionError;
use business::domain::completion::model::{Completion, GenerationRequest};
use business::domain::completion::services::TextGeneratorService;
use business::domain::completion::value_objects::ModelId;

use crate::client::GeminiClient;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    model_version: Option<String>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

pub struct TextGeneratorGemini {
    client: GeminiClient,
    model: ModelId,
}

impl TextGeneratorGemini {
    pub fn new(client: GeminiClient, model: ModelId) -> Self {
        Self { client, model }
    }

    fn build_body(request: &GenerationRequest) -> serde_json::Value {
        let mut body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{"text": request.prompt.as_str()}],
                },
            ],
        });

        if let Some(instruction) = &request.system_instruction {
            body["systemInstruction"] = json!({
                "parts": [{"text": instruction.as_str()}],
            });
        }

        body
    }

    fn parse_response(raw: &str) -> Result<Completion, CompletionError> {
        let data: GenerateContentResponse =
            serde_json::from_str(raw).map_err(|_| CompletionError::MalformedResponse)?;

        // Only the first candidate is shown; thought parts are not answer text.
        let texts: Vec<String> = data
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter(|part| !part.thought)
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if texts.is_empty() {
            return Err(CompletionError::EmptyResponse);
        }

        Ok(Completion::new(texts.concat(), data.model_version))
    }
}

#[async_trait]
impl TextGeneratorService for TextGeneratorGemini {
    async fn generate(&self, request: &GenerationRequest) -> Result<Completion, CompletionError> {
        let body = Self::build_body(request);

        let response = self
            .client
            .client
            .post(self.client.generate_content_url(self.model.as_str()))
            .header("Content-Type", "application/json")
            .header(self.client.auth_header_name(), &self.client.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::request_failed(e.to_string()))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| CompletionError::request_failed(e.to_string()))?;

        if !status.is_success() {
            return Err(CompletionError::request_failed(format!(
                "status {}: {}",
                status.as_u16(),
                raw
            )));
        }

        Self::parse_response(&raw)
    }
}
