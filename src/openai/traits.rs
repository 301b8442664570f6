use crate::{error::Result, models::CompletionRequest};
use async_trait::async_trait;

/// Single-turn completion capability. The HTTP client implements this against
/// the real endpoint; tests substitute deterministic fakes.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Returns the text of the first completion candidate.
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}
