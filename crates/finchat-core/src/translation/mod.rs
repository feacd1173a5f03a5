mod google;

pub use google::GoogleTranslateClient;

use crate::error::ChatError;

/// External translation capability. Best-effort by contract: callers
/// degrade to the untranslated text on failure rather than surfacing an
/// error to the user.
#[async_trait::async_trait]
pub trait TranslationClient: Send + Sync {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, ChatError>;
}
