use crate::transcript::{to_conversation, ConversationTurn, Message, Sender, TranscriptStore};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// One live interview session: its transcript plus export state
pub struct InterviewSession {
    /// Session identifier (e.g. "interview-<uuid>")
    id: String,

    /// When the session was created
    created_at: DateTime<Utc>,

    /// Accumulated transcript, in occurrence order
    store: RwLock<TranscriptStore>,

    /// Whether a report export is currently in flight for this session
    exporting: AtomicBool,
}

impl InterviewSession {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: Utc::now(),
            store: RwLock::new(TranscriptStore::new()),
            exporting: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Append one utterance to the transcript
    pub async fn append(&self, sender: Sender, content: impl Into<String>) -> Message {
        let mut store = self.store.write().await;
        store.append(sender, content)
    }

    /// Snapshot of the transcript in insertion order
    pub async fn transcript(&self) -> Vec<Message> {
        let store = self.store.read().await;
        store.messages().to_vec()
    }

    /// Normalized conversation for the report generator
    pub async fn conversation(&self) -> Vec<ConversationTurn> {
        let store = self.store.read().await;
        to_conversation(store.messages())
    }

    /// Claim the session's export slot.
    ///
    /// Returns `None` if an export is already in flight. The slot is released
    /// when the returned guard is dropped, on every exit path.
    pub fn begin_export(self: Arc<Self>) -> Option<ExportGuard> {
        self.exporting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| ExportGuard { session: self })
    }
}

/// Drop guard for the single-export-in-flight rule
pub struct ExportGuard {
    session: Arc<InterviewSession>,
}

impl Drop for ExportGuard {
    fn drop(&mut self) {
        self.session.exporting.store(false, Ordering::SeqCst);
    }
}
