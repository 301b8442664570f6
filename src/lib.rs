pub mod config;
pub mod error;
pub mod generator;
pub mod logger;
pub mod models;
pub mod openai;
pub mod prompt;
pub mod retry;

pub use config::{GenerationConfig, OpenAiConfig};
pub use error::{CopyError, Result};
pub use generator::CopyGenerator;
pub use models::{CompletionRequest, CopyRequest, GenerationResult};
pub use openai::{CompletionBackend, OpenAiClient, TextClient};
pub use retry::RetryPolicy;
