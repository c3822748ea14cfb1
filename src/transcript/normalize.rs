use super::store::{Message, Sender};
use serde::{Deserialize, Serialize};

/// Conversation role as the report generator understands it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl From<Sender> for Role {
    fn from(sender: Sender) -> Self {
        match sender {
            Sender::Client => Role::User,
            Sender::Avatar => Role::Assistant,
        }
    }
}

/// One normalized dialogue turn, the wire payload element sent to the generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

/// Project messages into conversation turns.
///
/// Every message maps to exactly one turn, in store order. No filtering,
/// truncation, or merging of adjacent same-sender messages.
pub fn to_conversation(messages: &[Message]) -> Vec<ConversationTurn> {
    messages
        .iter()
        .map(|message| ConversationTurn {
            role: message.sender.into(),
            content: message.content.clone(),
        })
        .collect()
}
