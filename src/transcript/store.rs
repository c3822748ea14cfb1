use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a message during the live session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The candidate speaking into the session UI
    Client,

    /// The AI interviewer avatar
    Avatar,
}

impl Sender {
    /// Speaker label used when rendering the transcript as plain text
    pub fn label(&self) -> &'static str {
        match self {
            Sender::Client => "Candidate",
            Sender::Avatar => "Interviewer",
        }
    }
}

/// A single utterance in the interview transcript
///
/// Immutable once appended; insertion order defines transcript order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier
    pub id: uuid::Uuid,

    /// Who spoke
    pub sender: Sender,

    /// What was said
    pub content: String,

    /// When the message was appended
    pub timestamp: DateTime<Utc>,
}

/// Ordered, append-only log of messages for one interview session
#[derive(Debug, Default)]
pub struct TranscriptStore {
    messages: Vec<Message>,
}

impl TranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an utterance, assigning its id and timestamp
    pub fn append(&mut self, sender: Sender, content: impl Into<String>) -> Message {
        let message = Message {
            id: uuid::Uuid::new_v4(),
            sender,
            content: content.into(),
            timestamp: Utc::now(),
        };
        self.messages.push(message.clone());
        message
    }

    /// All messages in insertion order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Render the transcript as plain text, one `Speaker: utterance` line per
    /// message, the way it appears in the generated report
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for message in &self.messages {
            out.push_str(message.sender.label());
            out.push_str(": ");
            out.push_str(&message.content);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut store = TranscriptStore::new();
        store.append(Sender::Avatar, "Tell me about yourself");
        store.append(Sender::Client, "I am a software engineer");
        store.append(Sender::Avatar, "What are your strengths?");

        assert_eq!(store.len(), 3);
        assert_eq!(store.messages()[0].content, "Tell me about yourself");
        assert_eq!(store.messages()[1].sender, Sender::Client);
        assert_eq!(store.messages()[2].content, "What are your strengths?");
    }

    #[test]
    fn test_messages_get_distinct_ids() {
        let mut store = TranscriptStore::new();
        let a = store.append(Sender::Client, "first");
        let b = store.append(Sender::Client, "second");

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_render_text_labels_speakers() {
        let mut store = TranscriptStore::new();
        store.append(Sender::Avatar, "Why should we hire you?");
        store.append(Sender::Client, "Strong technical skills.");

        let text = store.render_text();
        assert_eq!(
            text,
            "Interviewer: Why should we hire you?\nCandidate: Strong technical skills.\n"
        );
    }

    #[test]
    fn test_empty_store() {
        let store = TranscriptStore::new();
        assert!(store.is_empty());
        assert_eq!(store.render_text(), "");
    }
}
