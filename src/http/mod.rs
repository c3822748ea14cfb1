//! HTTP API server for the interview front-end
//!
//! This module provides the REST API backing the session UI:
//! - POST /api/generateReport - Generate a PDF report from a raw conversation
//! - POST /api/sessions - Create an interview session
//! - POST /api/sessions/:id/messages - Append an utterance to the transcript
//! - GET /api/sessions/:id/transcript - Get the accumulated transcript
//! - POST /api/sessions/:id/report - Export the session transcript as a PDF
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
