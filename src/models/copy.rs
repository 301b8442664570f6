use serde::{Deserialize, Serialize};

/// One copywriting request as collected from the form: who the brand is,
/// what it does, and the two stages of the selling process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyRequest {
    pub brand_name: String,
    pub description: String,
    pub inform_text: String,
    pub sell_text: String,
}

impl CopyRequest {
    pub fn new(
        brand_name: impl Into<String>,
        description: impl Into<String>,
        inform_text: impl Into<String>,
        sell_text: impl Into<String>,
    ) -> Self {
        Self {
            brand_name: brand_name.into(),
            description: description.into(),
            inform_text: inform_text.into(),
            sell_text: sell_text.into(),
        }
    }

    /// Presence check the form performs before submitting: the inform and
    /// sell stages must be non-empty after trimming. The generator itself
    /// never validates; callers decide whether to enforce this.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.inform_text.trim().is_empty() || self.sell_text.trim().is_empty() {
            return Err("All fields are required!".to_string());
        }
        Ok(())
    }
}

/// Outcome of one generation: either copy text, or a terminal failure with a
/// human-readable description. Distinct from `Result` on purpose — by the time
/// a caller sees this, every error has already been reported and retried.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    Generated(String),
    Failed { message: String },
}

impl GenerationResult {
    pub fn is_generated(&self) -> bool {
        matches!(self, GenerationResult::Generated(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            GenerationResult::Generated(text) => Some(text),
            GenerationResult::Failed { .. } => None,
        }
    }
}
