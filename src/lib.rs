pub mod config;
pub mod http;
pub mod report;
pub mod session;
pub mod transcript;

pub use config::Config;
pub use http::{create_router, AppState};
pub use report::{GeneratorConfig, ReportBridge, ReportError, ReportRequest, REPORT_FILENAME};
pub use session::InterviewSession;
pub use transcript::{to_conversation, ConversationTurn, Message, Role, Sender, TranscriptStore};
