use super::state::AppState;
use crate::report::{ReportError, ReportRequest, REPORT_FILENAME};
use crate::session::InterviewSession;
use crate::transcript::Sender;
use axum::{
    body::Body,
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// Optional session ID (if not provided, generate UUID)
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct AppendMessageRequest {
    pub sender: Sender,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/generateReport
/// Generate a PDF report from a raw conversation payload
pub async fn generate_report(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    // A body that fails to parse at all is an internal error; a parsed body
    // with a missing/empty conversation is rejected by the bridge as invalid
    // input before any process is spawned.
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            error!("Malformed report request: {}", rejection.body_text());
            return ReportError::Internal {
                details: rejection.body_text(),
            }
            .into_response();
        }
    };

    match state.bridge.generate_report(&request).await {
        Ok(pdf) => pdf_response(pdf).unwrap_or_else(|e| {
            error!("Failed to assemble PDF response: {}", e);
            e.into_response()
        }),
        Err(e) => {
            error!("Report generation failed: {}", e);
            e.into_response()
        }
    }
}

/// POST /api/sessions
/// Create a new interview session
pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> impl IntoResponse {
    let session_id = req
        .session_id
        .unwrap_or_else(|| format!("interview-{}", uuid::Uuid::new_v4()));

    let session = {
        let mut sessions = state.sessions.write().await;
        if sessions.contains_key(&session_id) {
            return (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: format!("Session {} already exists", session_id),
                }),
            )
                .into_response();
        }
        let session = Arc::new(InterviewSession::new(session_id.clone()));
        sessions.insert(session_id.clone(), Arc::clone(&session));
        session
    };

    info!("Created interview session: {}", session_id);

    (
        StatusCode::OK,
        Json(CreateSessionResponse {
            session_id,
            created_at: session.created_at(),
            message: "Session created".to_string(),
        }),
    )
        .into_response()
}

/// POST /api/sessions/:session_id/messages
/// Append an utterance to a session's transcript
pub async fn append_message(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<AppendMessageRequest>,
) -> impl IntoResponse {
    let session = {
        let sessions = state.sessions.read().await;
        sessions.get(&session_id).cloned()
    };

    match session {
        Some(session) => {
            let message = session.append(req.sender, req.content).await;
            (StatusCode::OK, Json(message)).into_response()
        }
        None => session_not_found(&session_id),
    }
}

/// GET /api/sessions/:session_id/transcript
/// Get the accumulated transcript for a session
pub async fn get_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let session = {
        let sessions = state.sessions.read().await;
        sessions.get(&session_id).cloned()
    };

    match session {
        Some(session) => {
            let transcript = session.transcript().await;
            (StatusCode::OK, Json(transcript)).into_response()
        }
        None => session_not_found(&session_id),
    }
}

/// POST /api/sessions/:session_id/report
/// Normalize the session transcript and export it as a PDF report
pub async fn export_session_report(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session = {
        let sessions = state.sessions.read().await;
        sessions.get(&session_id).cloned()
    };

    let Some(session) = session else {
        return session_not_found(&session_id);
    };

    // One export per session at a time; the guard frees the slot on drop.
    let Some(_guard) = Arc::clone(&session).begin_export() else {
        return (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "Report generation already in flight".to_string(),
            }),
        )
            .into_response();
    };

    let conversation = session.conversation().await;
    if conversation.is_empty() {
        return ReportError::InvalidInput.into_response();
    }

    info!(
        "Exporting report for session {} ({} turns)",
        session_id,
        conversation.len()
    );

    let request = ReportRequest { conversation };
    match state.bridge.generate_report(&request).await {
        Ok(pdf) => pdf_response(pdf).unwrap_or_else(|e| {
            error!("Failed to assemble PDF response: {}", e);
            e.into_response()
        }),
        Err(e) => {
            error!("Report export failed for session {}: {}", session_id, e);
            e.into_response()
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

// ============================================================================
// Helpers
// ============================================================================

/// Wrap generated PDF bytes in the download response the session UI expects
fn pdf_response(pdf: Vec<u8>) -> Result<Response, ReportError> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", REPORT_FILENAME),
        )
        .body(Body::from(pdf))
        .map_err(|e| ReportError::ResponseConstruction {
            details: e.to_string(),
        })
}

fn session_not_found(session_id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Session {} not found", session_id),
        }),
    )
        .into_response()
}
