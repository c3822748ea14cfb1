use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Failure taxonomy for report generation
///
/// Every failure is converted to a structured JSON response at the HTTP
/// boundary; none propagate as unhandled faults.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Missing or empty conversation; no generator process is spawned
    #[error("no conversation data provided")]
    InvalidInput,

    /// The generator exited non-zero (or could not be spawned/fed)
    #[error("report generator failed: {details}")]
    ProcessFailure { details: String },

    /// Generation succeeded but the PDF response could not be assembled
    #[error("failed to assemble PDF response: {details}")]
    ResponseConstruction { details: String },

    /// The generator did not finish within the configured bound
    #[error("report generation timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Unexpected failure anywhere in request handling
    #[error("internal error: {details}")]
    Internal { details: String },
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ReportError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReportError::InvalidInput => StatusCode::BAD_REQUEST,
            ReportError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            ReportError::ProcessFailure { .. }
            | ReportError::ResponseConstruction { .. }
            | ReportError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ReportError::InvalidInput => ErrorBody {
                error: "No conversation data provided",
                details: None,
            },
            ReportError::ProcessFailure { details } => ErrorBody {
                error: "Python script failed",
                details: Some(details.clone()),
            },
            ReportError::ResponseConstruction { details } => ErrorBody {
                error: "Failed to return PDF",
                details: Some(details.clone()),
            },
            ReportError::Timeout { secs } => ErrorBody {
                error: "Report generation timed out",
                details: Some(format!("generator exceeded {}s limit", secs)),
            },
            ReportError::Internal { details } => ErrorBody {
                error: "Internal Server Error",
                details: Some(details.clone()),
            },
        }
    }
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}
