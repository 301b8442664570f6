use crate::{
    config::{GenerationConfig, OpenAiConfig},
    error::Result,
    logger,
    models::{CompletionRequest, CopyRequest, GenerationResult},
    openai::{CompletionBackend, TextClient},
    prompt,
    retry::{retry_with_backoff, RetryPolicy},
};
use std::sync::Arc;

/// Orchestrates one copy generation: render the prompt, call the backend with
/// retry, convert the terminal outcome into a `GenerationResult`. Errors never
/// escape this boundary.
pub struct CopyGenerator {
    backend: Arc<dyn CompletionBackend>,
    retry: RetryPolicy,
    generation: GenerationConfig,
}

impl CopyGenerator {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            backend,
            retry: RetryPolicy::default(),
            generation: GenerationConfig::default(),
        }
    }

    /// Convenience constructor wiring the real OpenAI-compatible client.
    pub fn openai(config: OpenAiConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(TextClient::new(config)?)))
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    pub async fn generate(&self, request: &CopyRequest) -> GenerationResult {
        let prompt = prompt::two_step_selling_prompt(request);
        log::debug!("Rendered selling prompt ({} chars)", prompt.len());

        let timer = logger::timer("selling copy generation");
        let backend = &self.backend;
        let result = retry_with_backoff(&self.retry, "selling copy generation", || {
            let completion = CompletionRequest {
                prompt: prompt.clone(),
                model: self.generation.model.clone(),
                max_tokens: Some(self.generation.max_tokens),
                top_p: Some(self.generation.top_p),
                candidates: Some(self.generation.candidates),
            };
            async move { backend.complete(completion).await }
        })
        .await;
        timer.stop();

        match result {
            Ok(text) => GenerationResult::Generated(text),
            Err(e) => GenerationResult::Failed {
                message: e.to_string(),
            },
        }
    }
}
