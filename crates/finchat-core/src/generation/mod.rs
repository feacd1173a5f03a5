mod gemini;

pub use gemini::GeminiClient;

use crate::error::ChatError;

/// External language-generation capability: one opaque prompt in, one
/// text out. No retry policy lives here; the caller decides how to
/// degrade on failure.
#[async_trait::async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ChatError>;
}
