use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::model::Completion;

pub struct GenerateCompletionParams {
    pub input: String,
}

#[async_trait]
pub trait GenerateCompletionUseCase: Send + Sync {
    async fn execute(&self, params: GenerateCompletionParams)
    -> Result<Completion, CompletionError>;
}
