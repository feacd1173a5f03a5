pub mod config;
pub mod connectivity;
pub mod error;
pub mod generation;
pub mod message;
pub mod prompt;
pub mod session;
pub mod snapshot;
pub mod store;
pub mod translation;

// Re-export key types
pub use config::Settings;
pub use connectivity::{ConnectivityEvent, ConnectivityMonitor, ConnectivityNotice};
pub use error::ChatError;
pub use generation::{GeminiClient, GenerationClient};
pub use message::{Message, Sender};
pub use prompt::PromptBuilder;
pub use session::{SendOutcome, SessionController};
pub use snapshot::{Account, Expense, FinancialSnapshot};
pub use store::{FileTranscriptStore, Identity, TranscriptStore};
pub use translation::{GoogleTranslateClient, TranslationClient};
