use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::model::{Completion, GenerationRequest};
use crate::domain::completion::services::TextGeneratorService;
use crate::domain::completion::use_cases::generate::{
    GenerateCompletionParams, GenerateCompletionUseCase,
};
use crate::domain::completion::value_objects::{Prompt, SystemInstruction};
use crate::domain::logger::Logger;

pub struct GenerateCompletionUseCaseImpl {
    pub generator: Arc<dyn TextGeneratorService>,
    pub system_instruction: Option<SystemInstruction>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateCompletionUseCase for GenerateCompletionUseCaseImpl {
    async fn execute(
        &self,
        params: GenerateCompletionParams,
    ) -> Result<Completion, CompletionError> {
        let prompt = match Prompt::parse(params.input) {
            Ok(prompt) => prompt,
            Err(err) => {
                self.logger.warn("Rejected empty input, nothing sent to the model");
                return Err(err);
            }
        };

        self.logger.info(&format!(
            "Requesting completion for {} chars (system instruction: {})",
            prompt.char_count(),
            if self.system_instruction.is_some() {
                "yes"
            } else {
                "no"
            }
        ));

        let request = GenerationRequest {
            prompt,
            system_instruction: self.system_instruction.clone(),
        };

        match self.generator.generate(&request).await {
            Ok(completion) => {
                self.logger.info(&format!(
                    "Completion received: {} chars",
                    completion.text.chars().count()
                ));
                Ok(completion)
            }
            Err(err) => {
                self.logger.error(&format!("Completion failed: {:?}", err));
                Err(err)
            }
        }
    }
}
