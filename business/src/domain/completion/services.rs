use async_trait::async_trait;

use super::errors::CompletionError;
use super::model::{Completion, GenerationRequest};

/// Service port for a hosted text-generation model.
///
/// One call to `generate` is one outbound request.
#[async_trait]
pub trait TextGeneratorService: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Completion, CompletionError>;
}
