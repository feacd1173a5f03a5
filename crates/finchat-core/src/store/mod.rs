mod file;

pub use file::FileTranscriptStore;

use crate::error::ChatError;
use crate::message::Message;

/// The identity a transcript is keyed by. Guests share a provider-defined
/// transient history under a fixed key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    User(String),
    Guest,
}

impl Identity {
    /// Key used by the persistence layer.
    pub fn key(&self) -> &str {
        match self {
            Identity::User(id) => id.as_str(),
            Identity::Guest => "guest",
        }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Durable append-only log of messages per identity.
///
/// `append` is best-effort from the session's perspective: callers log
/// failures and move on, they never block the conversation on a write.
#[async_trait::async_trait]
pub trait TranscriptStore: Send + Sync {
    async fn append(&self, identity: &Identity, message: &Message) -> Result<(), ChatError>;

    /// All persisted messages for `identity`, ordered ascending by the
    /// store's own ordering key.
    async fn load_history(&self, identity: &Identity) -> Result<Vec<Message>, ChatError>;
}
