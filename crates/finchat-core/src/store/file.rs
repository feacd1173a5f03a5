use crate::error::ChatError;
use crate::message::{Message, Sender};
use crate::store::{Identity, TranscriptStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Persisted message record. The store assigns `seq` and `timestamp` at
/// write time, so ordering never depends on a client clock even when
/// several sessions for the same identity write concurrently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    seq: u64,
    user_id: String,
    text: String,
    sender: Sender,
    timestamp: String,
}

/// Transcript store keeping one JSON document per identity on disk.
pub struct FileTranscriptStore {
    base_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTranscriptStore {
    /// Create a store rooted at the default directory
    /// (`~/.finchat/transcripts/`).
    pub fn new() -> Result<Self, ChatError> {
        let home = dirs::home_dir()
            .ok_or_else(|| ChatError::Config("Could not determine home directory".to_string()))?;
        Self::with_dir(home.join(".finchat").join("transcripts"))
    }

    /// Create a store rooted at a custom directory (useful for testing).
    pub fn with_dir(base_dir: impl Into<PathBuf>) -> Result<Self, ChatError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).map_err(|e| {
            ChatError::Store(format!("Failed to create transcript directory: {e}"))
        })?;

        Ok(Self {
            base_dir,
            write_lock: Mutex::new(()),
        })
    }

    fn transcript_path(&self, identity: &Identity) -> PathBuf {
        self.base_dir.join(format!("{}.json", identity.key()))
    }

    fn read_records(&self, identity: &Identity) -> Result<Vec<StoredRecord>, ChatError> {
        let path = self.transcript_path(identity);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| ChatError::Store(format!("Failed to read transcript file: {e}")))?;

        serde_json::from_str(&contents)
            .map_err(|e| ChatError::Store(format!("Failed to parse transcript file: {e}")))
    }

    fn write_records(&self, identity: &Identity, records: &[StoredRecord]) -> Result<(), ChatError> {
        let path = self.transcript_path(identity);
        let contents = serde_json::to_string_pretty(records)
            .map_err(|e| ChatError::Store(format!("Failed to serialize transcript: {e}")))?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, contents)
            .map_err(|e| ChatError::Store(format!("Failed to write temporary transcript: {e}")))?;
        fs::rename(&tmp_path, &path)
            .map_err(|e| ChatError::Store(format!("Failed to rename transcript file: {e}")))?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl TranscriptStore for FileTranscriptStore {
    async fn append(&self, identity: &Identity, message: &Message) -> Result<(), ChatError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records(identity)?;
        let seq = records.last().map(|r| r.seq + 1).unwrap_or(1);

        records.push(StoredRecord {
            seq,
            user_id: identity.key().to_string(),
            text: message.text.clone(),
            sender: message.sender,
            timestamp: Utc::now().to_rfc3339(),
        });

        self.write_records(identity, &records)
    }

    async fn load_history(&self, identity: &Identity) -> Result<Vec<Message>, ChatError> {
        let mut records = self.read_records(identity)?;
        records.sort_by_key(|r| r.seq);

        records
            .into_iter()
            .map(|record| {
                let timestamp = DateTime::parse_from_rfc3339(&record.timestamp)
                    .map_err(|e| ChatError::Store(format!("Invalid stored timestamp: {e}")))?
                    .with_timezone(&Utc);

                Ok(Message {
                    id: Uuid::new_v4(),
                    text: record.text,
                    sender: record.sender,
                    timestamp,
                    language: None,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, FileTranscriptStore) {
        let dir = TempDir::new().unwrap();
        let store = FileTranscriptStore::with_dir(dir.path()).unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_missing_history_is_empty() {
        let (_dir, store) = store();
        let history = store
            .load_history(&Identity::User("nobody".to_string()))
            .await
            .unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_append_then_load_preserves_order() {
        let (_dir, store) = store();
        let identity = Identity::User("alice".to_string());

        store.append(&identity, &Message::user("first")).await.unwrap();
        store
            .append(&identity, &Message::assistant("second"))
            .await
            .unwrap();
        store.append(&identity, &Message::user("third")).await.unwrap();

        let history = store.load_history(&identity).await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].text, "first");
        assert_eq!(history[0].sender, Sender::User);
        assert_eq!(history[1].text, "second");
        assert_eq!(history[1].sender, Sender::Assistant);
        assert_eq!(history[2].text, "third");
        assert!(history[0].timestamp <= history[1].timestamp);
        assert!(history[1].timestamp <= history[2].timestamp);
    }

    #[tokio::test]
    async fn test_store_assigns_increasing_seq() {
        let (dir, store) = store();
        let identity = Identity::User("bob".to_string());

        store.append(&identity, &Message::user("a")).await.unwrap();
        store.append(&identity, &Message::user("b")).await.unwrap();

        let raw = fs::read_to_string(dir.path().join("bob.json")).unwrap();
        let records: Vec<StoredRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(records[0].seq, 1);
        assert_eq!(records[1].seq, 2);
        assert_eq!(records[0].user_id, "bob");
    }

    #[tokio::test]
    async fn test_identities_are_isolated() {
        let (_dir, store) = store();
        let alice = Identity::User("alice".to_string());
        let guest = Identity::Guest;

        store.append(&alice, &Message::user("mine")).await.unwrap();
        store.append(&guest, &Message::user("yours")).await.unwrap();

        let alice_history = store.load_history(&alice).await.unwrap();
        let guest_history = store.load_history(&guest).await.unwrap();
        assert_eq!(alice_history.len(), 1);
        assert_eq!(guest_history.len(), 1);
        assert_eq!(guest_history[0].text, "yours");
    }
}
