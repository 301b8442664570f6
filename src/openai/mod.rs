pub mod text_client;
pub mod traits;

use crate::{config::OpenAiConfig, error::Result};

pub use text_client::TextClient;
pub use traits::CompletionBackend;

#[derive(Clone)]
pub struct OpenAiClient {
    text_client: TextClient,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        Ok(Self {
            text_client: TextClient::new(config)?,
        })
    }

    pub fn text(&self) -> &TextClient {
        &self.text_client
    }
}
