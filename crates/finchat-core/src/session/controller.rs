use crate::generation::GenerationClient;
use crate::message::Message;
use crate::prompt::PromptBuilder;
use crate::session::locale;
use crate::snapshot::FinancialSnapshot;
use crate::store::{Identity, TranscriptStore};
use crate::translation::TranslationClient;
use std::sync::Arc;
use tracing::{debug, warn};

/// What became of a `send_user_message` call. Rejections (blank input,
/// another send in flight) are silent no-ops, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Sent,
    Ignored,
}

/// Orchestrates one conversational session: owns the in-memory
/// transcript, serializes sends through the `send_in_flight` gate, and
/// drives prompt building, generation, translation, and persistence.
///
/// Every collaborator is injected, so any of them can be replaced with a
/// test double.
pub struct SessionController {
    identity: Identity,
    language: String,
    transcript: Vec<Message>,
    send_in_flight: bool,
    store: Arc<dyn TranscriptStore>,
    generator: Arc<dyn GenerationClient>,
    translator: Arc<dyn TranslationClient>,
}

impl SessionController {
    pub fn new(
        identity: Identity,
        store: Arc<dyn TranscriptStore>,
        generator: Arc<dyn GenerationClient>,
        translator: Arc<dyn TranslationClient>,
    ) -> Self {
        Self {
            identity,
            language: "en".to_string(),
            transcript: Vec::new(),
            send_in_flight: false,
            store,
            generator,
            translator,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn is_send_in_flight(&self) -> bool {
        self.send_in_flight
    }

    /// Seed the transcript from persisted history, falling back to a
    /// localized greeting when no history exists. A store failure never
    /// blocks the session: it degrades to the greeting and a warning.
    pub async fn load(&mut self) -> &[Message] {
        let history = match self.store.load_history(&self.identity).await {
            Ok(history) => history,
            Err(e) => {
                warn!(identity = %self.identity, error = %e, "failed to load history");
                Vec::new()
            }
        };

        self.transcript = if history.is_empty() {
            vec![Message::assistant(locale::greeting(&self.language))]
        } else {
            history
        };

        debug!(
            identity = %self.identity,
            messages = self.transcript.len(),
            "session loaded"
        );
        &self.transcript
    }

    /// Run one full exchange: append and persist the user message, build
    /// the prompt, generate, translate, then append and persist the
    /// assistant reply (real text or the localized failure notice).
    ///
    /// Exactly one send may be in flight per session; a successful call
    /// always grows the transcript by two messages, user first.
    pub async fn send_user_message(
        &mut self,
        text: &str,
        snapshot: &FinancialSnapshot,
    ) -> SendOutcome {
        let text = text.trim();
        if text.is_empty() || self.send_in_flight {
            return SendOutcome::Ignored;
        }
        self.send_in_flight = true;

        let user_message = Message::user(text);
        self.transcript.push(user_message.clone());
        self.persist(&user_message).await;

        // The just-sent text reaches the prompt only through `new_input`,
        // never by re-reading the transcript.
        let prior = &self.transcript[..self.transcript.len() - 1];
        let prompt = PromptBuilder::build(snapshot, prior, text, &self.language);

        let reply_text = match self.generator.generate(&prompt).await {
            Ok(raw) => match self.translator.translate(&raw, &self.language).await {
                Ok(translated) => translated,
                Err(e) => {
                    warn!(error = %e, "translation failed, delivering original text");
                    raw
                }
            },
            Err(e) => {
                warn!(error = %e, "generation failed, substituting failure notice");
                locale::failure_notice(&self.language).to_string()
            }
        };

        let assistant_message =
            Message::assistant(reply_text).with_language(self.language.clone());
        self.transcript.push(assistant_message.clone());
        self.persist(&assistant_message).await;

        self.send_in_flight = false;
        SendOutcome::Sent
    }

    /// Best-effort durable write: a persistence failure is logged and
    /// never reaches the transcript or the caller.
    async fn persist(&self, message: &Message) {
        if let Err(e) = self.store.append(&self.identity, message).await {
            warn!(identity = %self.identity, error = %e, "failed to persist message");
        }
    }
}
