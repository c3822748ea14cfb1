//! Transcript collection and normalization
//!
//! This module provides the in-memory transcript of a live interview session:
//! - `TranscriptStore`: ordered, append-only log of speaker-tagged messages
//! - `normalize`: projection of the store into the role/content conversation
//!   consumed by the report generator

mod normalize;
mod store;

pub use normalize::{to_conversation, ConversationTurn, Role};
pub use store::{Message, Sender, TranscriptStore};
