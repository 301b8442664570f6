use crate::{
    config::{OpenAiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL},
    error::{CopyError, Result},
    models::{
        ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
        CompletionRequest,
    },
    openai::traits::CompletionBackend,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Chat-completions client for OpenAI-compatible endpoints. The credential is
/// injected at construction and never read from the environment mid-call.
#[derive(Clone)]
pub struct TextClient {
    client: Client,
    base_url: String,
    api_key: String,
    default_model: String,
}

impl TextClient {
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| CopyError::ConfigError("OpenAI API key is required".into()))?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let default_model = config.model.unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let client = Client::builder()
            .timeout(config.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT))
            .build()
            .map_err(|e| CopyError::ConfigError(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            api_key,
            default_model,
        })
    }

    fn build_headers(&self) -> Result<reqwest::header::HeaderMap> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", self.api_key)
                .parse()
                .map_err(|_| CopyError::ConfigError("API key is not a valid header value".into()))?,
        );
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            "application/json".parse().unwrap(),
        );
        Ok(headers)
    }
}

#[async_trait]
impl CompletionBackend for TextClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.default_model)
            .to_string();

        let payload = ChatCompletionRequest {
            model: model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: request.prompt,
            }],
            max_tokens: request.max_tokens.unwrap_or(500),
            n: request.candidates.unwrap_or(1),
            top_p: request.top_p.unwrap_or(0.9),
        };

        log::info!("Invoking model: {}", model);
        log::debug!(
            "Completion request payload: {}",
            serde_json::to_string(&payload)
                .map_err(|e| CopyError::SerializationError(e.to_string()))?
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .headers(self.build_headers()?)
            .json(&payload)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);

            log::error!("Completion request rejected: {} - {}", status, detail);

            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => CopyError::RateLimitError(detail),
                _ => CopyError::ApiError(format!("{} - {}", status, detail)),
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CopyError::ResponseError(e.to_string()))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CopyError::ResponseError("response contained no choices".into()))?;

        if let Some(reason) = &choice.finish_reason {
            log::debug!("Finish reason: {}", reason);
        }

        Ok(choice.message.content)
    }
}

fn classify_transport_error(e: reqwest::Error) -> CopyError {
    if e.is_connect() || e.is_timeout() {
        CopyError::ConnectionError(e.to_string())
    } else {
        CopyError::UnknownError(e.to_string())
    }
}
