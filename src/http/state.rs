use crate::report::ReportBridge;
use crate::session::InterviewSession;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Live interview sessions (session_id → session)
    pub sessions: Arc<RwLock<HashMap<String, Arc<InterviewSession>>>>,

    /// Bridge to the external report generator
    pub bridge: Arc<ReportBridge>,
}

impl AppState {
    pub fn new(bridge: Arc<ReportBridge>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            bridge,
        }
    }
}
